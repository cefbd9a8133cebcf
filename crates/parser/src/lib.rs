//! Error enum extraction for errcat
//!
//! This crate turns the text of one header into domain records:
//! - Locating `NS_ERROR_ENUM(<domain>) { ... }` declarations
//! - Stripping comments and directives from the enum body
//! - Resolving each case's value (explicit, auto-incremented, alias, named constant)
//! - Inferring public names from notes documents or from the shared name prefix
//! - Reconciling records for the same domain found in several places
//!
//! # Example
//! ```ignore
//! use errcat_core::Config;
//! use parser::{Extractor, Reconciler};
//!
//! let config = Config::default();
//! let extractor = Extractor::new(&config.extract, &config.naming)?;
//! let mut reconciler = Reconciler::new();
//! reconciler.extend(extractor.extract("Foundation", header_text, notes)?);
//! let records = reconciler.finish();
//! ```

mod clause;
mod domain;
mod error;
mod header;
pub mod naming;
mod reconcile;
pub mod strip;

pub use clause::resolve;
pub use domain::{DomainBuilder, canonical_domain};
pub use error::ParseError;
pub use header::{Extractor, HeaderMatcher, MacroMatch};
pub use naming::{NameSource, infer_public_names};
pub use reconcile::{MergeOutcome, Reconciler};
pub use strip::{split_clauses, strip_comments};
