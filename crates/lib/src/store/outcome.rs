use std::fmt;

use serde::Serialize;

/// Result of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportOutcome {
  /// The sample file was written.
  Exported,
  /// The lock marker was held; nothing was written.
  Skipped,
  /// Serialization or the write itself failed; the previous content is intact.
  Failed,
}

impl ExportOutcome {
  pub fn is_success(self) -> bool {
    matches!(self, ExportOutcome::Exported)
  }
}

impl fmt::Display for ExportOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExportOutcome::Exported => write!(f, "exported"),
      ExportOutcome::Skipped => write!(f, "skipped (locked)"),
      ExportOutcome::Failed => write!(f, "failed"),
    }
  }
}

impl From<ExportOutcome> for bool {
  fn from(outcome: ExportOutcome) -> Self {
    outcome.is_success()
  }
}
