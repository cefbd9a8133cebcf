//! Shared data model and configuration for errcat.

pub mod code;
pub mod config;

pub use code::{Catalog, CodeValue, DomainRecord, Provenance, ResolvedCode, ValueKind, Version, to_sorted_json};
pub use config::{
  Config, ConfigError, ExtractConfig, LoggingConfig, NamingConfig, PROJECT_CONFIG_FILE, SdkConfig, SuffixException,
};
