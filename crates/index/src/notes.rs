//! Per-module notes documents (`<Headers>/<Module>.apinotes`)

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Loads each module's notes document at most once; absent documents are cached too
#[derive(Debug)]
pub struct NotesCache {
  extension: String,
  entries: HashMap<String, Option<String>>,
}

impl NotesCache {
  pub fn new(extension: impl Into<String>) -> Self {
    Self {
      extension: extension.into(),
      entries: HashMap::new(),
    }
  }

  /// Notes for `module`, read from `headers` on first use
  pub fn get(&mut self, module: &str, headers: &Path) -> Option<&str> {
    if !self.entries.contains_key(module) {
      let notes = self.load(module, headers);
      self.entries.insert(module.to_string(), notes);
    }
    self.entries.get(module).and_then(|notes| notes.as_deref())
  }

  pub fn notes_path(&self, module: &str, headers: &Path) -> PathBuf {
    headers.join(format!("{}.{}", module, self.extension))
  }

  fn load(&self, module: &str, headers: &Path) -> Option<String> {
    let path = self.notes_path(module, headers);
    match std::fs::read_to_string(&path) {
      Ok(notes) => {
        debug!(module, path = %path.display(), "Loaded notes");
        Some(notes)
      }
      Err(e) if e.kind() == ErrorKind::NotFound => None,
      Err(e) => {
        warn!(module, path = %path.display(), error = %e, "Failed to read notes");
        None
      }
    }
  }
}
