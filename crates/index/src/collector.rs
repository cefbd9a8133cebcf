//! Full-run collection: SDK bundle in, catalog out

use std::path::Path;
use std::time::Instant;

use errcat_core::{Catalog, Config, DomainRecord};
use parser::{Extractor, Reconciler};
use tracing::{debug, info, warn};

use crate::error::{CollectError, Result};
use crate::notes::NotesCache;
use crate::scanner::{Framework, Scanner};
use crate::sdk::SdkLayout;
use crate::version::read_version;

/// Walks an SDK bundle and reconciles every error domain it declares
pub struct Collector<'a> {
  config: &'a Config,
  scanner: Scanner,
  extractor: Extractor<'a>,
}

#[derive(Debug, Default)]
struct RunStats {
  frameworks: usize,
  headers: usize,
  skipped: usize,
  domains: usize,
}

impl<'a> Collector<'a> {
  pub fn new(config: &'a Config) -> Result<Self> {
    Ok(Self {
      config,
      scanner: Scanner::new(&config.sdk),
      extractor: Extractor::new(&config.extract, &config.naming)?,
    })
  }

  /// Collect the catalog of the bundle rooted at `root`
  pub fn collect(&self, root: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let layout = SdkLayout::new(root, &self.config.sdk);
    layout.validate()?;

    let version = read_version(layout.version_path())?;
    info!(
      root = %layout.root().display(),
      platform_version = %version.platform_version,
      build_id = %version.build_id,
      "Collecting error domains"
    );

    let mut stats = RunStats::default();
    let mut reconciler = Reconciler::new();

    for dir in layout.framework_dirs() {
      let mut notes = NotesCache::new(self.config.sdk.notes_extension.as_str());
      for framework in self.scanner.frameworks(dir)? {
        stats.frameworks += 1;
        let records = self.collect_framework(&framework, &mut notes, &mut stats)?;
        stats.domains += records.len();
        reconciler.extend(records);
      }
    }

    let conflicts = reconciler.conflicts();
    let errors = reconciler.finish();
    info!(
      frameworks = stats.frameworks,
      headers = stats.headers,
      skipped = stats.skipped,
      domains_seen = stats.domains,
      domains = errors.len(),
      conflicts,
      elapsed_ms = start.elapsed().as_millis() as u64,
      "Collection complete"
    );

    Ok(Catalog { version, errors })
  }

  fn collect_framework(
    &self,
    framework: &Framework,
    notes: &mut NotesCache,
    stats: &mut RunStats,
  ) -> Result<Vec<DomainRecord>> {
    let mut records = Vec::new();
    let headers = self.scanner.headers(&framework.headers)?;
    debug!(
      module = %framework.module,
      framework = %framework.path.display(),
      headers = headers.len(),
      "Scanning framework"
    );

    for header in headers {
      let text = match read_header(&header) {
        Ok(text) => text,
        Err(e) => {
          warn!(path = %header.display(), error = %e, "Skipping unreadable header");
          stats.skipped += 1;
          continue;
        }
      };
      stats.headers += 1;

      let module_notes = notes.get(&framework.module, &framework.headers);
      let found = self.extractor.extract(&framework.module, &text, module_notes)?;
      if !found.is_empty() {
        debug!(
          module = %framework.module,
          header = %header.display(),
          domains = found.len(),
          "Extracted domains"
        );
      }
      records.extend(found);
    }

    Ok(records)
  }

  /// Extract the domains of a single header file
  pub fn extract_file(&self, module: &str, path: &Path, notes: Option<&str>) -> Result<Vec<DomainRecord>> {
    let text = read_header(path)?;
    Ok(self.extractor.extract(module, &text, notes)?)
  }
}

/// Header text; files that are not valid UTF-8 count as unreadable
fn read_header(path: &Path) -> Result<String> {
  let io_error = |source: std::io::Error| CollectError::Io {
    path: path.to_path_buf(),
    source,
  };
  let bytes = std::fs::read(path).map_err(io_error)?;
  String::from_utf8(bytes).map_err(|e| io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
