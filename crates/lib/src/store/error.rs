use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::DiagnosticKind;

/// Failures inside the store. These never leave the crate's public store API;
/// they are reported as diagnostics and collapsed into absence or failure.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("{} not found", .0.display())]
  NotFound(PathBuf),

  #[error("{} is locked", .0.display())]
  Locked(PathBuf),

  #[error("no bundle directory configured")]
  NoBundle,

  #[error("failed to create directory {}: {source}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to remove {}: {source}", .path.display())]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to serialize {name}: {source}")]
  Serialize {
    name: String,
    #[source]
    source: serde_json::Error,
  },
}

impl StoreError {
  pub fn kind(&self) -> DiagnosticKind {
    match self {
      StoreError::NotFound(_) | StoreError::NoBundle => DiagnosticKind::NotFound,
      StoreError::Locked(_) => DiagnosticKind::Locked,
      StoreError::Parse { .. } | StoreError::Serialize { .. } => DiagnosticKind::Malformed,
      StoreError::CreateDir { .. } | StoreError::Read { .. } | StoreError::Write { .. } | StoreError::Remove { .. } => {
        DiagnosticKind::IoFailure
      }
    }
  }
}
