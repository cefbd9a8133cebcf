//! Cross-source reconciliation of domain records
//!
//! The same domain is often declared in several header trees (one per platform SDK). Records
//! are keyed by domain identifier; the definition with the most codes is the one kept.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use errcat_core::DomainRecord;
use tracing::{debug, warn};

/// What happened to a record handed to [`Reconciler::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
  /// First record seen for this domain
  Inserted,
  /// Replaced a smaller record for the same domain
  Replaced,
  /// An existing record with more codes was kept
  KeptExisting,
  /// Identical to the existing record
  Duplicate,
  /// Same code count, different codes; the first-seen record was kept
  Conflict,
}

/// Per-run map from domain identifier to its retained record
#[derive(Debug, Default)]
pub struct Reconciler {
  records: HashMap<String, DomainRecord>,
  conflicts: usize,
}

impl Reconciler {
  pub fn new() -> Self {
    Self::default()
  }

  /// Merge one record into the catalog
  pub fn insert(&mut self, record: DomainRecord) -> MergeOutcome {
    let mut entry = match self.records.entry(record.domain.clone()) {
      Entry::Vacant(entry) => {
        entry.insert(record);
        return MergeOutcome::Inserted;
      }
      Entry::Occupied(entry) => entry,
    };

    let existing = entry.get();
    if record.len() > existing.len() {
      debug!(
        domain = %record.domain,
        kept_module = %record.module,
        kept_codes = record.len(),
        dropped_codes = existing.len(),
        "Replacing smaller domain definition"
      );
      entry.insert(record);
      MergeOutcome::Replaced
    } else if record.len() < existing.len() {
      MergeOutcome::KeptExisting
    } else if record.codes == existing.codes {
      MergeOutcome::Duplicate
    } else {
      warn!(
        domain = %record.domain,
        kept_module = %existing.module,
        dropped_module = %record.module,
        codes = record.len(),
        "Conflicting definitions with the same code count; keeping first seen"
      );
      self.conflicts += 1;
      MergeOutcome::Conflict
    }
  }

  /// Number of same-size conflicts seen so far
  pub fn conflicts(&self) -> usize {
    self.conflicts
  }

  /// Retained records sorted by `(module, domain)`
  pub fn finish(self) -> Vec<DomainRecord> {
    let mut records: Vec<DomainRecord> = self.records.into_values().collect();
    records.sort_by(|a, b| (&a.module, &a.domain).cmp(&(&b.module, &b.domain)));
    records
  }
}

impl Extend<DomainRecord> for Reconciler {
  fn extend<I: IntoIterator<Item = DomainRecord>>(&mut self, iter: I) {
    for record in iter {
      self.insert(record);
    }
  }
}
