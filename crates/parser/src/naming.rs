//! Public-name inference for resolved codes
//!
//! Two strategies, tried in order for a whole domain at once:
//! - **Notes lookup**: every code must have a `- Name:` / `SwiftName:` pair in the module's
//!   notes document, otherwise the lookup is abandoned for the domain.
//! - **Prefix inference**: split each name into words, drop the longest word prefix shared by
//!   every code, and lower-camel-case what remains.
//!
//! A per-domain suffix exception from [`NamingConfig`] is applied afterwards.

use std::sync::LazyLock;

use errcat_core::{NamingConfig, ResolvedCode};
use regex::Regex;

/// Acronym run followed by a capitalized word or a digit: `URLError` -> `URL_Error`
static ACRONYM_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z]|[0-9])").expect("acronym pattern is valid"));

/// Lowercase or digit followed by a capital: `BadURL` -> `Bad_URL`
static WORD_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("word pattern is valid"));

/// Number of leading characters treated as the module prefix word (`NS`, `CL`, `SK`, ...)
const MODULE_PREFIX_CHARS: usize = 2;

/// Which strategy produced the public names of a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
  Notes,
  Inferred,
}

/// Fill `public_name` on every code of a domain.
pub fn infer_public_names(
  domain: &str,
  codes: &mut [ResolvedCode],
  notes: Option<&str>,
  rules: &NamingConfig,
) -> NameSource {
  let source = match notes.and_then(|notes| lookup_all(codes, notes)) {
    Some(names) => {
      for (code, name) in codes.iter_mut().zip(names) {
        code.public_name = Some(name);
      }
      NameSource::Notes
    }
    None => {
      infer_from_prefix(codes);
      NameSource::Inferred
    }
  };

  if let Some(suffix) = rules.suffix_exception(domain) {
    strip_public_suffix(codes, suffix);
  }

  source
}

/// Look up every code in the notes; `None` as soon as one is missing
fn lookup_all(codes: &[ResolvedCode], notes: &str) -> Option<Vec<String>> {
  codes.iter().map(|code| lookup_note(&code.name, notes)).collect()
}

/// Find the public name recorded for `name` in a notes document.
///
/// Matches the apinotes shape:
/// ```text
/// - Name: NSURLErrorBadURL
///   SwiftName: badURL
/// ```
pub fn lookup_note(name: &str, notes: &str) -> Option<String> {
  let pattern = format!(r"- Name: {}\n\s+SwiftName:\s(?<public>[a-zA-Z]+)", regex::escape(name));
  let re = Regex::new(&pattern).ok()?;
  re.captures(notes)
    .and_then(|caps| caps.name("public"))
    .map(|m| m.as_str().to_string())
}

/// Assign inferred names from the shared word prefix of all codes
pub fn infer_from_prefix(codes: &mut [ResolvedCode]) {
  let words: Vec<Vec<String>> = codes.iter().map(|c| split_words(&c.name)).collect();
  let shared = shared_prefix_len(&words);

  for (code, words) in codes.iter_mut().zip(&words) {
    let prefix_chars: usize = words[..shared].iter().map(|w| w.chars().count()).sum();
    let rest: String = code.name.chars().skip(prefix_chars).collect();
    code.public_name = (!rest.is_empty()).then(|| lower_camel_case(&rest));
  }
}

/// Split an identifier into lowercase words.
///
/// The first two characters always form their own word; the rest is split at acronym and
/// case boundaries. The words' lengths add up to the identifier's length.
pub fn split_words(name: &str) -> Vec<String> {
  let mut marked = String::with_capacity(name.len() + 8);
  match name.char_indices().nth(MODULE_PREFIX_CHARS) {
    Some((split, _)) => {
      marked.push_str(&name[..split]);
      marked.push('_');
      marked.push_str(&name[split..]);
    }
    None => marked.push_str(name),
  }

  let marked = ACRONYM_RE.replace_all(&marked, "${1}_${2}");
  let marked = WORD_RE.replace_all(&marked, "${1}_${2}");

  marked
    .to_lowercase()
    .split('_')
    .filter(|w| !w.is_empty())
    .map(String::from)
    .collect()
}

/// Largest `n` such that every name has a word at each position below `n` and they all agree
pub fn shared_prefix_len(words: &[Vec<String>]) -> usize {
  let Some((first, rest)) = words.split_first() else {
    return 0;
  };

  let mut offset = 0;
  while let Some(word) = first.get(offset) {
    if !rest.iter().all(|other| other.get(offset) == Some(word)) {
      break;
    }
    offset += 1;
  }
  offset
}

/// Lowercase the first character and any leading capital run that precedes another capital.
///
/// `None` -> `none`, `URLError` -> `urlError`, `BadURL` -> `badURL`, `URL` -> `url`
pub fn lower_camel_case(s: &str) -> String {
  let chars: Vec<char> = s.chars().collect();
  let mut out = String::with_capacity(s.len());
  let mut lowering = true;

  for (i, &c) in chars.iter().enumerate() {
    if lowering {
      let next_is_upper = chars.get(i + 1).is_none_or(|n| n.is_uppercase());
      if i == 0 || (c.is_uppercase() && next_is_upper) {
        out.extend(c.to_lowercase());
        continue;
      }
      lowering = false;
    }
    out.push(c);
  }
  out
}

/// Drop `suffix` from the public name of codes whose raw name carries it
fn strip_public_suffix(codes: &mut [ResolvedCode], suffix: &str) {
  for code in codes.iter_mut().filter(|c| c.name.ends_with(suffix)) {
    if let Some(public) = code.public_name.as_mut()
      && let Some(stripped) = public.strip_suffix(suffix)
      && !stripped.is_empty()
    {
      *public = stripped.to_string();
    }
  }
}
