use std::path::PathBuf;

use parser::ParseError;
use thiserror::Error;

use crate::scanner::ScanError;
use crate::version::VersionError;

#[derive(Error, Debug)]
pub enum CollectError {
  #[error("IO error at {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Version descriptor: {0}")]
  Version(#[from] VersionError),
  #[error("Parse error: {0}")]
  Parse(#[from] ParseError),
  #[error("Framework directory not found: {0}")]
  MissingFrameworks(PathBuf),
  #[error("Walk error: {0}")]
  Walk(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CollectError>;
