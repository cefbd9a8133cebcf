use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use errcat_core::SdkConfig;
use ignore::{DirEntry, WalkBuilder};
use thiserror::Error;
use tracing::trace;

const FRAMEWORK_EXTENSION: &str = "framework";

#[derive(Error, Debug)]
pub enum ScanError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("Walk error: {0}")]
  Walk(#[from] ignore::Error),
}

/// A framework bundle with a headers directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framework {
  /// Directory stem: `Foundation` for `Foundation.framework`
  pub module: String,
  pub path: PathBuf,
  /// Headers directory, with its symlink resolved
  pub headers: PathBuf,
}

/// Lists frameworks and headers in name order.
///
/// Only the immediate children of a directory are considered; nothing is filtered by ignore
/// files or hidden-file rules.
pub struct Scanner {
  headers_dir: String,
  header_extension: String,
}

impl Default for Scanner {
  fn default() -> Self {
    Self::new(&SdkConfig::default())
  }
}

impl Scanner {
  pub fn new(config: &SdkConfig) -> Self {
    Self {
      headers_dir: config.headers_dir.clone(),
      header_extension: config.header_extension.clone(),
    }
  }

  /// Framework bundles directly inside `dir`; bundles without headers are skipped
  pub fn frameworks(&self, dir: &Path) -> Result<Vec<Framework>, ScanError> {
    let mut frameworks = Vec::new();

    for entry in children(dir)? {
      let path = entry.path();
      if !has_extension(path, FRAMEWORK_EXTENSION) {
        continue;
      }
      let Some(module) = path.file_stem().and_then(OsStr::to_str) else {
        continue;
      };

      let Some(headers) = self.resolve_headers(path) else {
        trace!(framework = %path.display(), "No headers directory");
        continue;
      };

      frameworks.push(Framework {
        module: module.to_string(),
        path: path.to_path_buf(),
        headers,
      });
    }

    Ok(frameworks)
  }

  /// Header files directly inside a headers directory
  pub fn headers(&self, headers: &Path) -> Result<Vec<PathBuf>, ScanError> {
    Ok(
      children(headers)?
        .into_iter()
        .filter(|entry| entry.file_type().is_some_and(|ft| !ft.is_dir()))
        .map(DirEntry::into_path)
        .filter(|path| has_extension(path, &self.header_extension))
        .collect(),
    )
  }

  /// `<framework>/Headers`, following the symlink the SDKs use for it
  fn resolve_headers(&self, framework: &Path) -> Option<PathBuf> {
    let headers = framework.join(&self.headers_dir);
    if !headers.exists() {
      return None;
    }

    let resolved = match std::fs::read_link(&headers) {
      Ok(target) => framework.join(target),
      Err(_) => headers,
    };
    resolved.is_dir().then_some(resolved)
  }
}

/// Immediate children of `dir`, sorted by file name
fn children(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
  let walker = WalkBuilder::new(dir)
    .max_depth(Some(1))
    .standard_filters(false)
    .follow_links(true)
    .sort_by_file_name(|a: &OsStr, b: &OsStr| -> Ordering { a.cmp(b) })
    .build();

  let mut entries = Vec::new();
  for entry in walker {
    let entry = entry?;
    if entry.depth() > 0 {
      entries.push(entry);
    }
  }
  Ok(entries)
}

fn has_extension(path: &Path, extension: &str) -> bool {
  path.extension().and_then(OsStr::to_str) == Some(extension)
}
