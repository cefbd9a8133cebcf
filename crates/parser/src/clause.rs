//! Value resolution for a single enum clause
//!
//! Clauses are resolved strictly in declaration order: auto-increment and aliasing only ever
//! look back at codes already resolved in the same domain.

use std::sync::LazyLock;

use errcat_core::{CodeValue, ExtractConfig, Provenance, ResolvedCode};
use regex::Regex;
use tracing::warn;

use crate::error::ParseError;

/// `name [<anything but '='>] ['=' value] [',']`
static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?<name>[a-zA-Z]+)([^=]*=\s*(?<value>[0-9a-zA-Z\-"']+))?,?"#).expect("clause pattern is valid")
});

/// C integer literal suffixes (`10L`, `0x20u`, `1ULL`)
const INTEGER_SUFFIXES: &[char] = &['u', 'U', 'l', 'L'];

/// Resolve one clause against the codes already resolved before it.
///
/// Returns `Ok(None)` for range sentinels (`...ErrorMinimum` / `...ErrorMaximum`).
/// A `MixedValueTypes` error carries an empty domain; the caller attaches it.
pub fn resolve(
  raw: &str,
  previous: &[ResolvedCode],
  rules: &ExtractConfig,
) -> Result<Option<ResolvedCode>, ParseError> {
  let caps = CLAUSE_RE.captures(raw).ok_or_else(|| ParseError::MalformedClause {
    clause: raw.to_string(),
  })?;

  let name = caps.name("name").map_or("", |m| m.as_str());
  if rules.is_range_sentinel(name) {
    return Ok(None);
  }

  let Some(token) = caps.name("value").map(|m| m.as_str().trim()) else {
    let last = last_int(previous);
    if last == Some(i64::MAX) {
      warn!(code = name, "Auto-increment saturated at i64::MAX; value repeats the previous code");
    }
    let value = last.map_or(0, |v| v.saturating_add(1));
    let code = ResolvedCode::new(name, CodeValue::Int(value), Provenance::AutoIncremented);
    check_value_kind(&code, previous)?;
    return Ok(Some(code));
  };

  if let Some(target) = previous.iter().find(|c| c.name == token) {
    return Ok(Some(ResolvedCode::new(
      name,
      target.value.clone(),
      Provenance::Alias {
        target: target.name.clone(),
      },
    )));
  }

  let code = if let Some(value) = parse_int(token) {
    ResolvedCode::new(name, CodeValue::Int(value), Provenance::Explicit)
  } else if let Some(value) = rules.named_constant(token) {
    ResolvedCode::new(
      name,
      CodeValue::Int(value),
      Provenance::NamedConstant {
        constant: token.to_string(),
      },
    )
  } else {
    ResolvedCode::new(name, CodeValue::Str(token.to_string()), Provenance::Explicit)
  };

  check_value_kind(&code, previous)?;
  Ok(Some(code))
}

/// Most recent integer value; auto-increment continues from it, or starts at 0 without one.
///
/// Aliases carry their target's resolved value, so alias chains need no extra walk.
fn last_int(previous: &[ResolvedCode]) -> Option<i64> {
  previous.iter().rev().find_map(|c| c.value.as_int())
}

/// Every non-alias code in a domain must share one value type
fn check_value_kind(code: &ResolvedCode, previous: &[ResolvedCode]) -> Result<(), ParseError> {
  let found = code.value.kind();
  match previous
    .iter()
    .filter(|c| c.alias_of().is_none())
    .find(|c| c.value.kind() != found)
  {
    Some(prior) => Err(ParseError::MixedValueTypes {
      domain: String::new(),
      code: code.name.clone(),
      expected: prior.value.kind(),
      found,
    }),
    None => Ok(()),
  }
}

/// Parse a C integer literal: decimal or `0x` hex, optional sign, optional `u`/`l` suffixes
fn parse_int(token: &str) -> Option<i64> {
  let trimmed = token.trim_end_matches(INTEGER_SUFFIXES);
  if trimmed.is_empty() {
    return None;
  }
  if let Ok(value) = trimmed.parse::<i64>() {
    return Some(value);
  }

  let (negative, rest) = match trimmed.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, trimmed),
  };
  let hex = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
  if !hex.starts_with(|c: char| c.is_ascii_hexdigit()) {
    return None;
  }
  let value = i64::from_str_radix(hex, 16).ok()?;
  Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::strip::split_clauses;

  fn resolve_all(clauses: &[&str]) -> Result<Vec<ResolvedCode>, ParseError> {
    let rules = ExtractConfig::default();
    let mut codes = Vec::new();
    for clause in clauses {
      if let Some(code) = resolve(clause, &codes, &rules)? {
        codes.push(code);
      }
    }
    Ok(codes)
  }

  fn values(codes: &[ResolvedCode]) -> Vec<CodeValue> {
    codes.iter().map(|c| c.value.clone()).collect()
  }

  #[test]
  fn test_auto_increment_starts_at_zero() {
    let codes = resolve_all(&["FooA,", "FooB,", "FooC,", "FooD"]).unwrap();
    assert_eq!(
      values(&codes),
      vec![CodeValue::Int(0), CodeValue::Int(1), CodeValue::Int(2), CodeValue::Int(3)]
    );
    assert!(codes.iter().all(|c| c.is_auto_incremented()));
  }

  #[test]
  fn test_auto_increment_is_strictly_increasing() {
    let clauses: Vec<String> = (0..50).map(|i| format!("FooCase{}", "X".repeat(i))).collect();
    let refs: Vec<&str> = clauses.iter().map(String::as_str).collect();
    let codes = resolve_all(&refs).unwrap();
    let ints: Vec<i64> = codes.iter().filter_map(|c| c.value.as_int()).collect();
    assert_eq!(ints.len(), 50);
    assert_eq!(ints[0], 0);
    assert!(ints.windows(2).all(|w| w[1] > w[0]));
  }

  #[test]
  fn test_mixed_explicit_and_auto_values() {
    let codes = resolve_all(&["FooBarNone", "FooBarFailed = 1", "FooBarRetry"]).unwrap();
    assert_eq!(values(&codes), vec![CodeValue::Int(0), CodeValue::Int(1), CodeValue::Int(2)]);
    assert!(codes[0].is_auto_incremented());
    assert!(!codes[1].is_auto_incremented());
    assert!(codes[2].is_auto_incremented());
  }

  #[test]
  fn test_auto_increment_continues_from_negative() {
    let codes = resolve_all(&["NSURLErrorUnknown = -1,", "NSURLErrorCancelled = -999,", "NSURLErrorNext,"]).unwrap();
    assert_eq!(codes[2].value, CodeValue::Int(-998));
  }

  #[test]
  fn test_range_sentinels_are_dropped() {
    let codes = resolve_all(&["FooErrorMinimum = 0,", "FooA = 1,", "XErrorMaximum = 100"]).unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].name, "FooA");
  }

  #[test]
  fn test_alias_takes_target_value() {
    let codes = resolve_all(&["FooFirst = 7,", "FooSecond,", "FooOld = FooFirst,", "FooAfter"]).unwrap();
    assert_eq!(codes[2].value, CodeValue::Int(7));
    assert_eq!(codes[2].alias_of(), Some("FooFirst"));
    assert!(!codes[2].is_auto_incremented());
    // auto-increment follows the most recent integer, which is the alias' resolved value
    assert_eq!(codes[3].value, CodeValue::Int(8));
  }

  #[test]
  fn test_alias_of_alias_resolves_to_underlying_value() {
    let codes = resolve_all(&["FooA = 3,", "FooB = FooA,", "FooC = FooB,"]).unwrap();
    assert_eq!(codes[2].value, CodeValue::Int(3));
    assert_eq!(codes[2].alias_of(), Some("FooB"));
  }

  #[test]
  fn test_forward_reference_is_not_an_alias() {
    let codes = resolve_all(&["FooA = 'abcd',", "FooB = FooC,"]).unwrap();
    assert_eq!(codes[1].value, CodeValue::Str("FooC".to_string()));
    assert_eq!(codes[1].alias_of(), None);
  }

  #[test]
  fn test_named_constant() {
    let codes = resolve_all(&["FooA = 1,", "FooLast = NSIntegerMax"]).unwrap();
    assert_eq!(codes[1].value, CodeValue::Int(i64::MAX));
    assert_eq!(codes[1].same_as(), Some("NSIntegerMax"));
    assert_eq!(codes[1].alias_of(), None);
  }

  #[test]
  fn test_auto_increment_after_named_max_saturates() {
    let codes = resolve_all(&["FooLast = NSIntegerMax,", "FooAfter", "FooAfterThat"]).unwrap();
    // saturation repeats the maximum instead of wrapping; increments are no longer strict here
    assert_eq!(
      values(&codes),
      vec![CodeValue::Int(i64::MAX), CodeValue::Int(i64::MAX), CodeValue::Int(i64::MAX)]
    );
    assert!(codes[1].is_auto_incremented());
    assert!(codes[2].is_auto_incremented());
    assert_eq!(codes[0].same_as(), Some("NSIntegerMax"));
  }

  #[test]
  fn test_auto_increment_up_to_max_is_not_saturated() {
    let codes = resolve_all(&["FooA = 9223372036854775806,", "FooB"]).unwrap();
    assert_eq!(codes[1].value, CodeValue::Int(i64::MAX));
  }

  #[test]
  fn test_string_values() {
    let codes = resolve_all(&["FooA = 'abcd',", "FooB = \"efgh\","]).unwrap();
    assert_eq!(codes[0].value, CodeValue::Str("'abcd'".to_string()));
    assert_eq!(codes[1].value, CodeValue::Str("\"efgh\"".to_string()));
  }

  #[test]
  fn test_integer_literal_forms() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-1001"), Some(-1001));
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("-0x10"), Some(-16));
    assert_eq!(parse_int("10L"), Some(10));
    assert_eq!(parse_int("0x20u"), Some(32));
    assert_eq!(parse_int("1ULL"), Some(1));
    assert_eq!(parse_int("NSIntegerMax"), None);
    assert_eq!(parse_int("'abcd'"), None);
    assert_eq!(parse_int("0x"), None);
    assert_eq!(parse_int("L"), None);
  }

  #[test]
  fn test_mixed_types_are_rejected() {
    let err = resolve_all(&["FooA = 1,", "FooB = 'abcd',"]).unwrap_err();
    match err {
      ParseError::MixedValueTypes {
        code, expected, found, ..
      } => {
        assert_eq!(code, "FooB");
        assert_eq!(expected, errcat_core::ValueKind::Int);
        assert_eq!(found, errcat_core::ValueKind::Str);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_auto_increment_after_strings_is_rejected() {
    let err = resolve_all(&["FooA = 'abcd',", "FooB"]).unwrap_err();
    assert!(matches!(err, ParseError::MixedValueTypes { .. }));
  }

  #[test]
  fn test_malformed_clause_is_fatal() {
    let err = resolve_all(&["FooA = 1,", "= 2,"]);
    // "= 2," has no identifier at all
    let err = err.unwrap_err();
    assert!(matches!(err, ParseError::MalformedClause { ref clause } if clause == "= 2,"));
    assert!(err.is_fatal());
  }

  #[test]
  fn test_availability_annotations_are_skipped() {
    let body = "\n  FooA API_AVAILABLE(macos(10.15)) = 5,\n  FooB API_AVAILABLE(ios(13.0)),\n";
    let clauses = split_clauses(body);
    let refs: Vec<&str> = clauses.iter().map(String::as_str).collect();
    let codes = resolve_all(&refs).unwrap();
    assert_eq!(codes[0].name, "FooA");
    assert_eq!(codes[0].value, CodeValue::Int(5));
    assert_eq!(codes[1].name, "FooB");
    assert_eq!(codes[1].value, CodeValue::Int(6));
  }

  #[test]
  fn test_name_stops_at_first_non_letter() {
    let codes = resolve_all(&["AVErrorH264Missing = 3"]).unwrap();
    assert_eq!(codes[0].name, "AVErrorH");
    assert_eq!(codes[0].value, CodeValue::Int(3));
  }
}
