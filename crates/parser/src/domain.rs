//! Domain building: one macro match in, one `DomainRecord` out

use errcat_core::{DomainRecord, ExtractConfig, NamingConfig};
use tracing::{debug, trace};

use crate::clause::resolve;
use crate::error::ParseError;
use crate::naming::infer_public_names;
use crate::strip::split_clauses;

/// Canonical domain of a raw macro argument: the first comma-separated component
pub fn canonical_domain(raw_domain: &str) -> &str {
  raw_domain.split(',').next().unwrap_or(raw_domain).trim()
}

/// Drives the stripper, resolver and name inference for one macro match at a time
pub struct DomainBuilder<'a> {
  extract: &'a ExtractConfig,
  naming: &'a NamingConfig,
}

impl<'a> DomainBuilder<'a> {
  pub fn new(extract: &'a ExtractConfig, naming: &'a NamingConfig) -> Self {
    Self { extract, naming }
  }

  /// Resolve all clauses of a macro body, without public names.
  ///
  /// Returns `Ok(None)` for documentation sample domains.
  pub fn resolve_codes(&self, module: &str, raw_domain: &str, body: &str) -> Result<Option<DomainRecord>, ParseError> {
    if self.extract.is_sample_domain(raw_domain) {
      debug!(module, raw_domain, "Skipping sample domain");
      return Ok(None);
    }

    let domain = canonical_domain(raw_domain);
    let mut record = DomainRecord::new(module, domain);

    for clause in split_clauses(body) {
      match resolve(&clause, &record.codes, self.extract).map_err(|e| e.in_domain(domain))? {
        Some(code) => record.codes.push(code),
        None => trace!(domain, clause = %clause, "Skipping range sentinel"),
      }
    }

    Ok(Some(record))
  }

  /// Build a complete record: resolved codes plus public names
  pub fn build(
    &self,
    module: &str,
    raw_domain: &str,
    body: &str,
    notes: Option<&str>,
  ) -> Result<Option<DomainRecord>, ParseError> {
    let Some(mut record) = self.resolve_codes(module, raw_domain, body)? else {
      return Ok(None);
    };

    let source = infer_public_names(&record.domain, &mut record.codes, notes, self.naming);
    debug!(
      module,
      domain = %record.domain,
      codes = record.codes.len(),
      source = ?source,
      "Built domain"
    );

    Ok(Some(record))
  }
}
