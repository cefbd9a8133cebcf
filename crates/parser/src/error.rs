use errcat_core::ValueKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
  /// The clause grammar no longer matches the input shape; not recoverable
  #[error("Malformed clause: {clause:?}")]
  MalformedClause { clause: String },

  /// A domain mixes integer and string values outside of aliasing
  #[error("Mixed value types in {domain}: {code} is {found} but earlier codes are {expected}")]
  MixedValueTypes {
    domain: String,
    code: String,
    expected: ValueKind,
    found: ValueKind,
  },

  #[error("Invalid pattern: {0}")]
  Pattern(#[from] regex::Error),
}

impl ParseError {
  /// Attach the domain identifier once it is known to the caller
  pub fn in_domain(self, domain: &str) -> Self {
    match self {
      Self::MixedValueTypes {
        code, expected, found, ..
      } => Self::MixedValueTypes {
        domain: domain.to_string(),
        code,
        expected,
        found,
      },
      other => other,
    }
  }

  /// Whether the whole run must stop, as opposed to just the current domain
  pub fn is_fatal(&self) -> bool {
    !matches!(self, Self::MixedValueTypes { .. })
  }
}
