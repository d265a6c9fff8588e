//! Diagnostics reported by the store on every non-success path.
//!
//! The store never returns errors to its callers. Instead each failure is
//! converted into a [`Diagnostic`] and handed to a [`DiagnosticSink`], so
//! operators (and tests) can still tell a missing file from a corrupt one.

use std::fmt;
use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, warn};

/// Category of a recovered failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
  /// Target file or bundle resource absent.
  NotFound,
  /// Operation suppressed because the lock marker is held.
  Locked,
  /// Content is not valid UTF-8 JSON or does not match the requested shape.
  Malformed,
  /// Directory or file creation, read, write or delete failed.
  IoFailure,
}

impl DiagnosticKind {
  pub fn as_str(self) -> &'static str {
    match self {
      DiagnosticKind::NotFound => "not_found",
      DiagnosticKind::Locked => "locked",
      DiagnosticKind::Malformed => "malformed",
      DiagnosticKind::IoFailure => "io_failure",
    }
  }
}

impl fmt::Display for DiagnosticKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single recovered failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub kind: DiagnosticKind,
  /// File name the operation was addressing (empty for store-wide operations).
  pub name: String,
  /// Rendered underlying cause.
  pub message: String,
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[SampleStore] {} {}: {}", self.kind, self.name, self.message)
  }
}

/// Receives every diagnostic the store produces.
pub trait DiagnosticSink: Send + Sync {
  fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  fn report(&self, diagnostic: &Diagnostic) {
    self(diagnostic)
  }
}

/// Default sink: forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    match diagnostic.kind {
      DiagnosticKind::NotFound | DiagnosticKind::Locked => debug!(
        kind = %diagnostic.kind,
        name = %diagnostic.name,
        "{}",
        diagnostic.message
      ),
      DiagnosticKind::Malformed | DiagnosticKind::IoFailure => warn!(
        kind = %diagnostic.kind,
        name = %diagnostic.name,
        "{}",
        diagnostic.message
      ),
    }
  }
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
  entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of everything reported so far.
  pub fn entries(&self) -> Vec<Diagnostic> {
    self.entries.lock().map(|e| e.clone()).unwrap_or_default()
  }

  /// Kinds reported so far, in order.
  pub fn kinds(&self) -> Vec<DiagnosticKind> {
    self.entries().into_iter().map(|d| d.kind).collect()
  }

  pub fn clear(&self) {
    if let Ok(mut entries) = self.entries.lock() {
      entries.clear();
    }
  }
}

impl DiagnosticSink for RecordingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    if let Ok(mut entries) = self.entries.lock() {
      entries.push(diagnostic.clone());
    }
  }
}
