//! CLI command implementations

mod collect;
mod config;
mod scan;

pub use collect::cmd_collect;
pub use config::{cmd_config_init, cmd_config_show};
pub use scan::cmd_scan;
