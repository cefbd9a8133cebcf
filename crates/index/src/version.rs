//! Version descriptor of an SDK bundle (`Contents/version.plist`)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use errcat_core::Version;
use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

const SHORT_VERSION_KEY: &str = "CFBundleShortVersionString";
const BUILD_VERSION_KEY: &str = "ProductBuildVersion";

#[derive(Error, Debug)]
pub enum VersionError {
  #[error("Missing version descriptor {path}: {source}")]
  Missing {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Invalid plist: {0}")]
  Xml(#[from] quick_xml::Error),
  #[error("Key {0} not found in version descriptor")]
  MissingKey(&'static str),
}

/// Read the platform version and build id from a version plist
pub fn read_version(path: &Path) -> Result<Version, VersionError> {
  let xml = std::fs::read_to_string(path).map_err(|source| VersionError::Missing {
    path: path.to_path_buf(),
    source,
  })?;
  parse_version(&xml)
}

pub fn parse_version(xml: &str) -> Result<Version, VersionError> {
  let entries = string_entries(xml)?;
  let field = |key: &'static str| entries.get(key).cloned().ok_or(VersionError::MissingKey(key));

  Ok(Version {
    platform_version: field(SHORT_VERSION_KEY)?,
    build_id: field(BUILD_VERSION_KEY)?,
  })
}

/// `<key>` / `<string>` pairs of a flat plist dictionary
fn string_entries(xml: &str) -> Result<HashMap<String, String>, VersionError> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().trim_text(true);

  let mut entries = HashMap::new();
  let mut element: Option<Vec<u8>> = None;
  let mut pending_key: Option<String> = None;

  loop {
    match reader.read_event()? {
      Event::Start(e) => element = Some(e.name().as_ref().to_vec()),
      Event::End(_) => element = None,
      // `<true/>`, `<false/>` and empty `<string/>` values
      Event::Empty(_) => pending_key = None,
      Event::Text(text) => {
        let text = text.unescape()?.into_owned();
        match element.as_deref() {
          Some(b"key") => pending_key = Some(text),
          Some(b"string") => {
            if let Some(key) = pending_key.take() {
              entries.insert(key, text);
            }
          }
          _ => {}
        }
      }
      Event::Eof => break,
      _ => {}
    }
  }

  Ok(entries)
}
