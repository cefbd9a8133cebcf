//! Paths inside an SDK bundle

use std::path::{Path, PathBuf};

use errcat_core::SdkConfig;

use crate::error::{CollectError, Result};

/// Resolved locations of everything the collector reads from one bundle
#[derive(Debug, Clone)]
pub struct SdkLayout {
  root: PathBuf,
  framework_dirs: Vec<PathBuf>,
  version_path: PathBuf,
}

impl SdkLayout {
  pub fn new(root: &Path, config: &SdkConfig) -> Self {
    Self {
      root: root.to_path_buf(),
      framework_dirs: config.platforms.iter().map(|p| root.join(p)).collect(),
      version_path: root.join(&config.version_file),
    }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Framework directories, one per platform, in configured order
  pub fn framework_dirs(&self) -> &[PathBuf] {
    &self.framework_dirs
  }

  pub fn version_path(&self) -> &Path {
    &self.version_path
  }

  /// Every configured framework directory must exist
  pub fn validate(&self) -> Result<()> {
    match self.framework_dirs.iter().find(|dir| !dir.is_dir()) {
      Some(missing) => Err(CollectError::MissingFrameworks(missing.clone())),
      None => Ok(()),
    }
  }
}
