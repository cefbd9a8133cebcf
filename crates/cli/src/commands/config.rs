//! Configuration commands

use std::path::Path;

use anyhow::{Context, Result};
use errcat_core::{Config, ConfigError};
use tracing::error;

/// Print the effective configuration as TOML
pub fn cmd_config_show(config: &Config, cwd: &Path) -> Result<()> {
  let project_config = Config::project_config_path(cwd);
  let user_config = Config::user_config_path();

  // comment lines keep the output valid TOML
  if project_config.exists() {
    println!("# Using project config: {}", project_config.display());
  } else if let Some(user_path) = user_config.filter(|p| p.exists()) {
    println!("# Using user config: {}", user_path.display());
  } else {
    println!("# Using default configuration (no config file found)");
  }
  println!();

  println!("{}", config.to_toml().context("Failed to render config")?);
  Ok(())
}

/// Write the default configuration to `./.errcat.toml`
pub fn cmd_config_init(cwd: &Path, force: bool) -> Result<()> {
  match Config::write_default(cwd, force) {
    Ok(path) => {
      println!("Created config: {}", path.display());
      println!("Edit the file to customize settings.");
      Ok(())
    }
    Err(ConfigError::AlreadyExists(path)) => {
      error!(path = %path.display(), "Config file already exists");
      println!("Pass --force to overwrite it");
      std::process::exit(1);
    }
    Err(e) => Err(e).context("Failed to write config"),
  }
}
