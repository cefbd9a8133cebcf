use serde::{Serialize, Serializer};

/// Resolved value of an error code
///
/// Serializes untagged: a JSON number for integer codes, a JSON string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CodeValue {
  Int(i64),
  Str(String),
}

impl CodeValue {
  pub fn as_int(&self) -> Option<i64> {
    match self {
      CodeValue::Int(v) => Some(*v),
      CodeValue::Str(_) => None,
    }
  }

  pub fn kind(&self) -> ValueKind {
    match self {
      CodeValue::Int(_) => ValueKind::Int,
      CodeValue::Str(_) => ValueKind::Str,
    }
  }
}

/// Value type of a code, used for the per-domain homogeneity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
  Int,
  Str,
}

impl std::fmt::Display for ValueKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ValueKind::Int => write!(f, "integer"),
      ValueKind::Str => write!(f, "string"),
    }
  }
}

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provenance {
  /// Literal value written in the clause
  Explicit,
  /// No value written; previous integer + 1
  AutoIncremented,
  /// Value token named an earlier code in the same domain
  Alias { target: String },
  /// Value token named an entry of the named-constant table (e.g. `NSIntegerMax`)
  NamedConstant { constant: String },
}

/// One enum case after value resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedCode {
  pub name: String,
  pub value: CodeValue,
  pub provenance: Provenance,
  /// Filled by name inference once the whole domain is known
  pub public_name: Option<String>,
}

impl ResolvedCode {
  pub fn new(name: impl Into<String>, value: CodeValue, provenance: Provenance) -> Self {
    Self {
      name: name.into(),
      value,
      provenance,
      public_name: None,
    }
  }

  pub fn is_auto_incremented(&self) -> bool {
    matches!(self.provenance, Provenance::AutoIncremented)
  }

  /// Name of the earlier code this one aliases, if any
  pub fn alias_of(&self) -> Option<&str> {
    match &self.provenance {
      Provenance::Alias { target } => Some(target),
      _ => None,
    }
  }

  /// Value reported in the `sameAs` output field: the alias target or the named constant
  pub fn same_as(&self) -> Option<&str> {
    match &self.provenance {
      Provenance::Alias { target } => Some(target),
      Provenance::NamedConstant { constant } => Some(constant),
      _ => None,
    }
  }
}

/// Output shape of a code: `{name, value, unspecified?, sameAs?, publicName?}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CodeWire<'a> {
  name: &'a str,
  value: &'a CodeValue,
  #[serde(skip_serializing_if = "Option::is_none")]
  unspecified: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  same_as: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  public_name: Option<&'a str>,
}

impl Serialize for ResolvedCode {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    CodeWire {
      name: &self.name,
      value: &self.value,
      unspecified: self.is_auto_incremented().then_some(true),
      same_as: self.same_as(),
      public_name: self.public_name.as_deref(),
    }
    .serialize(serializer)
  }
}

/// All codes declared by one `NS_ERROR_ENUM` match
///
/// Identity for merging is `domain` alone; `module` is metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
  pub module: String,
  pub domain: String,
  pub codes: Vec<ResolvedCode>,
}

impl DomainRecord {
  pub fn new(module: impl Into<String>, domain: impl Into<String>) -> Self {
    Self {
      module: module.into(),
      domain: domain.into(),
      codes: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.codes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.codes.is_empty()
  }
}

/// Platform version tag read from the SDK bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
  pub platform_version: String,
  pub build_id: String,
}

/// Final output of a run
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
  pub version: Version,
  pub errors: Vec<DomainRecord>,
}

impl Catalog {
  /// Serialize with object keys sorted lexicographically
  pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
    to_sorted_json(self, pretty)
  }
}

/// Serialize any value with lexicographically sorted object keys.
///
/// Goes through `serde_json::Value`, whose map is ordered.
pub fn to_sorted_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
  let value = serde_json::to_value(value)?;
  if pretty {
    serde_json::to_string_pretty(&value)
  } else {
    serde_json::to_string(&value)
  }
}
