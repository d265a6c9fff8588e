//! The record payload and its single "first record" slot.
//!
//! The slot is a fixed file outside the sample directory. Saving overwrites it
//! atomically; loading yields `None` when the file is missing or undecodable.
//! It shares the store's file primitives and has no locking.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::platform::paths::record_path;
use crate::store::StoreError;
use crate::store::fsio;

/// A person, as exchanged with the sample store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub name: String,
  pub country: String,
  pub age: i64,
}

impl Record {
  pub fn new(name: impl Into<String>, country: impl Into<String>, age: i64) -> Self {
    Self {
      name: name.into(),
      country: country.into(),
      age,
    }
  }

  /// Save this record in the default first-record slot.
  pub fn save_as_first(&self) -> bool {
    RecordSlot::default_slot().save(self)
  }

  /// Load the record from the default first-record slot.
  pub fn first() -> Option<Self> {
    RecordSlot::default_slot().load()
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}, {})", self.name, self.country, self.age)
  }
}

/// A single file holding one [`Record`].
#[derive(Clone)]
pub struct RecordSlot {
  path: PathBuf,
  sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for RecordSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RecordSlot").field("path", &self.path).finish_non_exhaustive()
  }
}

impl RecordSlot {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      sink: Arc::new(TracingSink),
    }
  }

  /// The slot at `<documents>/user`.
  pub fn default_slot() -> Self {
    Self::new(record_path())
  }

  pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
    self.sink = sink;
    self
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Overwrite the slot with `record`.
  pub fn save(&self, record: &Record) -> bool {
    match fsio::write_json(&self.path, &self.slot_name(), record) {
      Ok(()) => {
        debug!(path = %self.path.display(), "saved first record");
        true
      }
      Err(e) => {
        self.report(&e);
        false
      }
    }
  }

  /// Read the slot.
  pub fn load(&self) -> Option<Record> {
    match fsio::read_json(&self.path) {
      Ok(record) => Some(record),
      Err(e) => {
        self.report(&e);
        None
      }
    }
  }

  fn slot_name(&self) -> String {
    self
      .path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_default()
  }

  fn report(&self, error: &StoreError) {
    self.sink.report(&Diagnostic {
      kind: error.kind(),
      name: self.slot_name(),
      message: error.to_string(),
    });
  }
}
