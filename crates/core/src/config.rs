//! Configuration system for errcat with per-directory overrides.
//!
//! Config priority: working directory (.errcat.toml) > user (~/.config/errcat/config.toml) > defaults
//!
//! The extraction tables (named constants, sample domains, range sentinels, naming exceptions)
//! live here as plain data and are handed to the parser by reference.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the per-directory config
pub const PROJECT_CONFIG_FILE: &str = ".errcat.toml";

// ============================================================================
// SDK Layout Configuration
// ============================================================================

/// Where headers, notes, and the version descriptor live inside an SDK bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
  /// Framework directories to scan, relative to the bundle root
  pub platforms: Vec<String>,

  /// Version descriptor (XML plist), relative to the bundle root
  pub version_file: String,

  /// Name of the per-framework headers directory (may be a symlink)
  pub headers_dir: String,

  /// Extension of header files to read (default: "h")
  pub header_extension: String,

  /// Extension of the per-module notes document (default: "apinotes")
  pub notes_extension: String,
}

impl Default for SdkConfig {
  fn default() -> Self {
    Self {
      platforms: vec![
        "Contents/Developer/Platforms/MacOSX.platform/Developer/SDKs/MacOSX.sdk/System/Library/Frameworks".to_string(),
        "Contents/Developer/Platforms/iPhoneOS.platform/Developer/SDKs/iPhoneOS.sdk/System/Library/Frameworks"
          .to_string(),
      ],
      version_file: "Contents/version.plist".to_string(),
      headers_dir: "Headers".to_string(),
      header_extension: "h".to_string(),
      notes_extension: "apinotes".to_string(),
    }
  }
}

// ============================================================================
// Extraction Configuration
// ============================================================================

/// Tables consulted while turning a macro body into resolved codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
  /// Enum macro to look for in headers (default: "NS_ERROR_ENUM")
  pub macro_name: String,

  /// Domains containing any of these are documentation samples and are skipped
  pub sample_domain_markers: Vec<String>,

  /// Case names ending in any of these are range sentinels, not codes
  pub range_sentinel_suffixes: Vec<String>,

  /// Named integer constants accepted as explicit values
  pub named_constants: BTreeMap<String, i64>,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      macro_name: "NS_ERROR_ENUM".to_string(),
      sample_domain_markers: vec!["MyErrorDomain".to_string()],
      range_sentinel_suffixes: vec!["ErrorMinimum".to_string(), "ErrorMaximum".to_string()],
      named_constants: BTreeMap::from([("NSIntegerMax".to_string(), i64::MAX)]),
    }
  }
}

impl ExtractConfig {
  pub fn is_sample_domain(&self, raw_domain: &str) -> bool {
    self.sample_domain_markers.iter().any(|m| raw_domain.contains(m.as_str()))
  }

  pub fn is_range_sentinel(&self, name: &str) -> bool {
    self.range_sentinel_suffixes.iter().any(|s| name.ends_with(s.as_str()))
  }

  pub fn named_constant(&self, token: &str) -> Option<i64> {
    self.named_constants.get(token).copied()
  }
}

// ============================================================================
// Naming Configuration
// ============================================================================

/// A domain whose public names drop a fixed suffix carried by the raw names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixException {
  pub domain: String,
  pub suffix: String,
}

/// Public-name inference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
  /// Post-corrections applied after notes lookup or prefix inference
  pub suffix_exceptions: Vec<SuffixException>,
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      suffix_exceptions: vec![SuffixException {
        domain: "NSCocoaErrorDomain".to_string(),
        suffix: "Error".to_string(),
      }],
    }
  }
}

impl NamingConfig {
  /// Suffix to strip for codes of `domain`, if the domain is an exception
  pub fn suffix_exception(&self, domain: &str) -> Option<&str> {
    self
      .suffix_exceptions
      .iter()
      .find(|e| e.domain == domain)
      .map(|e| e.suffix.as_str())
  }
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "off", "error", "warn", "info", "debug", "trace"
  /// Default: "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

// ============================================================================
// Root Configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// SDK bundle layout
  #[serde(default)]
  pub sdk: SdkConfig,

  /// Extraction tables
  #[serde(default)]
  pub extract: ExtractConfig,

  /// Public-name inference settings
  #[serde(default)]
  pub naming: NamingConfig,

  /// Log settings for the CLI
  #[serde(default)]
  pub logging: LoggingConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("Invalid config {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("TOML serialize error: {0}")]
  Serialize(#[from] toml::ser::Error),
  #[error("Config already exists: {0}")]
  AlreadyExists(PathBuf),
}

impl Config {
  /// Load config for a directory, with fallback to user config.
  ///
  /// A missing file falls through to the next location; a file that exists but cannot be
  /// read or parsed is an error.
  pub fn load_for_dir(dir: &Path) -> Result<Self, ConfigError> {
    let local = Self::project_config_path(dir);
    if local.exists() {
      return Self::load_file(&local);
    }

    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
    {
      return Self::load_file(&user_config_path);
    }

    Ok(Self::default())
  }

  fn load_file(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("errcat").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("errcat").join("config.toml"))
  }

  /// Get the per-directory config path
  pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_FILE)
  }

  /// Render as TOML
  pub fn to_toml(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }

  /// Write the default config into `dir`, refusing to clobber unless `force`
  pub fn write_default(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let path = Self::project_config_path(dir);
    if path.exists() && !force {
      return Err(ConfigError::AlreadyExists(path));
    }
    let body = format!(
      "# errcat configuration\n# Place in ./{} or ~/.config/errcat/config.toml\n\n{}",
      PROJECT_CONFIG_FILE,
      Self::default().to_toml()?
    );
    std::fs::write(&path, body)?;
    Ok(path)
  }
}
