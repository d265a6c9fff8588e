//! Sample data store.
//!
//! A flat directory of JSON documents keyed by file name, with an optional
//! "once" mode backed by lock markers.
//!
//! # Layout
//!
//! ```text
//! {documents}/sampledata/
//! ├── user.json          # sample file
//! └── user.json.lock     # lock marker, content "true" when held
//! ```
//!
//! The public API never returns errors. Failures are reported to the
//! store's [`DiagnosticSink`] and collapse into `None` (imports) or a
//! non-success [`ExportOutcome`] (exports).
//!
//! Checking a marker and acting on it are two separate steps. Two callers
//! racing on the same name in lock mode may both observe "unlocked" and both
//! proceed; only the individual file writes are atomic.

pub mod error;
pub mod fsio;
pub mod lock;
pub mod outcome;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::platform::paths::{bundle_dir, sampledata_dir};

pub use error::StoreError;
pub use outcome::ExportOutcome;

static GLOBAL: OnceLock<SampleStore> = OnceLock::new();

/// Handle to a sample directory.
///
/// Cloning is cheap; clones share the same diagnostic sink.
#[derive(Clone)]
pub struct SampleStore {
  root: PathBuf,
  bundle: Option<PathBuf>,
  sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for SampleStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SampleStore")
      .field("root", &self.root)
      .field("bundle", &self.bundle)
      .finish_non_exhaustive()
  }
}

impl SampleStore {
  /// Open a store rooted at `root`, reporting to `tracing`.
  ///
  /// The directory is created if missing. A creation failure is reported
  /// and the store is returned anyway; later operations fail one by one.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self::with_sink(root, Arc::new(TracingSink))
  }

  /// Open a store rooted at `root` that reports diagnostics to `sink`.
  pub fn with_sink(root: impl Into<PathBuf>, sink: Arc<dyn DiagnosticSink>) -> Self {
    let store = Self {
      root: root.into(),
      bundle: None,
      sink,
    };

    if !store.root.exists() {
      let created = fsio::ensure_dir(&store.root);
      if created.is_ok() {
        debug!(path = %store.root.display(), "created sample directory");
      }
      store.report("", created);
    }

    store
  }

  /// Set the read-only directory used by [`SampleStore::import_bundled`].
  pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.bundle = Some(dir.into());
    self
  }

  /// The process-wide store at the default location.
  ///
  /// Initialised on first access from [`sampledata_dir`] and [`bundle_dir`].
  pub fn global() -> &'static SampleStore {
    GLOBAL.get_or_init(|| {
      let store = SampleStore::new(sampledata_dir());
      match bundle_dir() {
        Some(dir) => store.with_bundle_dir(dir),
        None => store,
      }
    })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn bundle(&self) -> Option<&Path> {
    self.bundle.as_deref()
  }

  /// Path of the sample file `name`.
  pub fn sample_path(&self, name: &str) -> PathBuf {
    self.root.join(name)
  }

  /// Path of the lock marker for `name`. Accepts `name` or `name.lock`.
  pub fn lock_path(&self, name: &str) -> PathBuf {
    self.root.join(lock::normalized_marker_name(name))
  }

  /// Whether the lock marker for `name` is held. Accepts `name` or `name.lock`.
  pub fn is_locked(&self, name: &str) -> bool {
    lock::is_locked(&self.lock_path(name))
  }

  /// Import `name` as an arbitrary JSON value.
  ///
  /// With `lock`, returns `None` if the marker is held, and holds it after a
  /// successful parse.
  pub fn import_value(&self, name: &str, lock: bool) -> Option<Value> {
    self.import::<Value>(name, lock)
  }

  /// Import `name` decoded as `T`.
  pub fn import<T: DeserializeOwned>(&self, name: &str, lock: bool) -> Option<T> {
    let source = self.sample_path(name);
    let result = self.import_from(&source, name, lock);
    self.report(name, result)
  }

  /// Import `name` from the bundle directory, decoded as `T`.
  ///
  /// The bundle is never written to. The lock marker still lives under the
  /// store root, keyed by `name`.
  pub fn import_bundled<T: DeserializeOwned>(&self, name: &str, lock: bool) -> Option<T> {
    let result = match &self.bundle {
      Some(bundle) => self.import_from(&bundle.join(name), name, lock),
      None => Err(StoreError::NoBundle),
    };
    self.report(name, result)
  }

  /// Export `data` to `name`.
  ///
  /// With `lock`, does nothing if the marker is held, and holds it after a
  /// successful write. A failure to hold the marker is reported but does not
  /// undo the export.
  pub fn export<T: Serialize + ?Sized>(&self, data: &T, name: &str, lock: bool) -> ExportOutcome {
    let path = self.sample_path(name);
    let marker = self.root.join(lock::marker_name(name));

    if lock && lock::is_locked(&marker) {
      self.report::<()>(name, Err(StoreError::Locked(marker)));
      return ExportOutcome::Skipped;
    }

    let written = fsio::write_json(&path, name, data);
    if self.report(name, written).is_none() {
      return ExportOutcome::Failed;
    }
    debug!(name = %name, path = %path.display(), "exported sample");

    if lock {
      let held = lock::acquire(&marker);
      self.report(name, held);
    }

    ExportOutcome::Exported
  }

  /// Delete the lock marker for `name`, if any. Accepts `name` or `name.lock`.
  pub fn unlock(&self, name: &str) {
    let marker = self.lock_path(name);
    match lock::release(&marker) {
      Ok(true) => debug!(name = %name, "unlocked sample"),
      Ok(false) => debug!(name = %name, "sample was not locked"),
      Err(e) => {
        self.report::<()>(name, Err(e));
      }
    }
  }

  /// Delete every sample file and lock marker, leaving an empty root.
  pub fn clean(&self) {
    let result = self.clean_root();
    if result.is_ok() {
      info!(path = %self.root.display(), "cleaned sample directory");
    }
    self.report("", result);
  }

  fn clean_root(&self) -> Result<(), StoreError> {
    if self.root.exists() {
      fs::remove_dir_all(&self.root).map_err(|source| StoreError::Remove {
        path: self.root.clone(),
        source,
      })?;
    }

    if !self.root.exists() {
      fsio::ensure_dir(&self.root)?;
    }

    Ok(())
  }

  fn import_from<T: DeserializeOwned>(&self, source: &Path, name: &str, lock: bool) -> Result<T, StoreError> {
    let marker = self.root.join(lock::marker_name(name));

    if lock && lock::is_locked(&marker) {
      return Err(StoreError::Locked(marker));
    }

    let bytes = fsio::read_bytes(source)?;
    let value = fsio::decode(source, &bytes)?;

    if lock {
      lock::acquire(&marker)?;
    }

    debug!(name = %name, path = %source.display(), lock, "imported sample");
    Ok(value)
  }

  fn report<T>(&self, name: &str, result: Result<T, StoreError>) -> Option<T> {
    match result {
      Ok(value) => Some(value),
      Err(e) => {
        self.sink.report(&Diagnostic {
          kind: e.kind(),
          name: name.to_string(),
          message: e.to_string(),
        });
        None
      }
    }
  }
}
