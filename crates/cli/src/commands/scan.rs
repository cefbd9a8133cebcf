//! Single-header extraction, for checking what a header yields

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use errcat_core::{Config, to_sorted_json};
use index::{Collector, NotesCache};

/// Extract the domains of one header and print them as a JSON array
pub fn cmd_scan(
  config: &Config,
  header: &Path,
  module: Option<&str>,
  notes: Option<&Path>,
  pretty: bool,
) -> Result<()> {
  let module = match module {
    Some(module) => module.to_string(),
    None => module_for_header(header)?,
  };

  let notes_text = match notes {
    Some(path) => Some(std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?),
    None => header.parent().and_then(|dir| {
      NotesCache::new(config.sdk.notes_extension.as_str())
        .get(&module, dir)
        .map(String::from)
    }),
  };

  let collector = Collector::new(config).context("Failed to set up extraction")?;
  let records = collector
    .extract_file(&module, header, notes_text.as_deref())
    .with_context(|| format!("Failed to extract {}", header.display()))?;

  println!("{}", to_sorted_json(&records, pretty)?);
  Ok(())
}

/// `Foo` for `.../Foo.framework/Headers/Bar.h`, else the header's file stem
fn module_for_header(header: &Path) -> Result<String> {
  let framework = header
    .ancestors()
    .skip(1)
    .find(|dir| dir.extension() == Some(OsStr::new("framework")))
    .and_then(Path::file_stem);

  match framework.or_else(|| header.file_stem()).and_then(OsStr::to_str) {
    Some(module) => Ok(module.to_string()),
    None => bail!("Cannot derive a module name from {}; pass --module", header.display()),
  }
}
