//! Full SDK collection

use std::path::Path;

use anyhow::{Context, Result};
use errcat_core::Config;
use index::Collector;
use tracing::info;

/// Collect the catalog of an SDK bundle and write it as JSON
pub fn cmd_collect(config: &Config, bundle: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
  let collector = Collector::new(config).context("Failed to set up extraction")?;
  let catalog = collector
    .collect(bundle)
    .with_context(|| format!("Failed to collect error domains from {}", bundle.display()))?;
  let json = catalog.to_json(pretty).context("Failed to serialize catalog")?;

  match output {
    Some(path) => {
      std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
      info!(path = %path.display(), domains = catalog.errors.len(), "Wrote catalog");
    }
    None => println!("{}", json),
  }

  Ok(())
}
