//! Locating error enum macros inside header text

use errcat_core::{DomainRecord, ExtractConfig, NamingConfig};
use regex::Regex;
use tracing::error;

use crate::domain::DomainBuilder;
use crate::error::ParseError;

/// One `MACRO(<domain tokens>) { <body> }` occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroMatch<'h> {
  pub raw_domain: &'h str,
  pub body: &'h str,
}

/// Finds error enum macro declarations in header text
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
  pattern: Regex,
}

impl HeaderMatcher {
  pub fn new(macro_name: &str) -> Result<Self, ParseError> {
    let pattern = Regex::new(&format!(
      r"{}\((?<domain>[a-zA-Z,\s]+)\)\s*\{{(?<codes>[^}}]+)\}}",
      regex::escape(macro_name)
    ))?;
    Ok(Self { pattern })
  }

  /// All macro matches, in source order
  pub fn matches<'h>(&self, text: &'h str) -> impl Iterator<Item = MacroMatch<'h>> {
    self.pattern.captures_iter(text).filter_map(|caps| {
      Some(MacroMatch {
        raw_domain: caps.name("domain")?.as_str().trim(),
        body: caps.name("codes")?.as_str(),
      })
    })
  }
}

/// Header-level extraction: macro matching plus domain building
pub struct Extractor<'a> {
  matcher: HeaderMatcher,
  builder: DomainBuilder<'a>,
}

impl<'a> Extractor<'a> {
  pub fn new(extract: &'a ExtractConfig, naming: &'a NamingConfig) -> Result<Self, ParseError> {
    Ok(Self {
      matcher: HeaderMatcher::new(&extract.macro_name)?,
      builder: DomainBuilder::new(extract, naming),
    })
  }

  /// Extract every domain declared in one header.
  ///
  /// A domain with inconsistent value types is logged and skipped; a malformed clause
  /// aborts extraction with an error.
  pub fn extract(&self, module: &str, text: &str, notes: Option<&str>) -> Result<Vec<DomainRecord>, ParseError> {
    let mut records = Vec::new();

    for found in self.matcher.matches(text) {
      match self.builder.build(module, found.raw_domain, found.body, notes) {
        Ok(Some(record)) => records.push(record),
        Ok(None) => {}
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => error!(module, error = %e, "Skipping inconsistent domain"),
      }
    }

    Ok(records)
  }
}
