//! SDK bundle traversal for errcat
//!
//! Finds the framework directories of a bundle, lists each framework's headers, loads the
//! per-module notes documents, reads the bundle's version descriptor, and feeds everything
//! through the parser to produce one reconciled [`Catalog`](errcat_core::Catalog).

mod collector;
mod error;
pub mod notes;
pub mod scanner;
pub mod sdk;
pub mod version;

pub use collector::Collector;
pub use error::{CollectError, Result};
pub use notes::NotesCache;
pub use scanner::{Framework, ScanError, Scanner};
pub use sdk::SdkLayout;
pub use version::{VersionError, parse_version, read_version};
