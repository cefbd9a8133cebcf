//! errcat - error-code catalogs from platform SDK headers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use errcat_core::Config;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{cmd_collect, cmd_config_init, cmd_config_show, cmd_scan};
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "errcat")]
#[command(about = "Extract error-code catalogs from NS_ERROR_ENUM declarations in SDK headers")]
#[command(after_help = "\
QUICK START:
  errcat collect --path /Applications/Xcode.app -o errors.json
  errcat scan Foundation.framework/Headers/NSURLError.h --pretty-print

CONFIG LOCATIONS:
  Project: ./.errcat.toml
  User:    ~/.config/errcat/config.toml")]
struct Cli {
  /// Log at debug level (RUST_LOG still wins)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Collect every error domain of an SDK bundle into one JSON catalog
  Collect {
    /// Path to the SDK bundle (e.g. Xcode.app)
    #[arg(long, value_name = "BUNDLE")]
    path: PathBuf,
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Indent the JSON output
    #[arg(long)]
    pretty_print: bool,
  },
  /// Extract the error domains of a single header
  Scan {
    /// Header file to read
    header: PathBuf,
    /// Module name (default: enclosing framework, else the file stem)
    #[arg(short, long)]
    module: Option<String>,
    /// Notes document (default: <Module>.apinotes next to the header)
    #[arg(long, value_name = "FILE")]
    notes: Option<PathBuf>,
    /// Indent the JSON output
    #[arg(long)]
    pretty_print: bool,
  },
  /// Manage configuration
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
}

#[derive(Subcommand)]
enum ConfigCommand {
  /// Show the effective configuration
  Show,
  /// Write the default configuration to ./.errcat.toml
  Init {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  let config = Config::load_for_dir(&cwd).context("Failed to load configuration")?;
  let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
  init_cli_logging(level);

  match cli.command {
    Commands::Collect {
      path,
      output,
      pretty_print,
    } => cmd_collect(&config, &path, output.as_deref(), pretty_print),
    Commands::Scan {
      header,
      module,
      notes,
      pretty_print,
    } => cmd_scan(&config, &header, module.as_deref(), notes.as_deref(), pretty_print),
    Commands::Config { command } => match command {
      ConfigCommand::Show => cmd_config_show(&config, &cwd),
      ConfigCommand::Init { force } => cmd_config_init(&cwd, force),
    },
  }
}
