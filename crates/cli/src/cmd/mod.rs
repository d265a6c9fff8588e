mod clean;
mod export;
mod import;
mod info;
mod unlock;
mod user;

use std::sync::Arc;

use sampledata_lib::platform::paths::{bundle_dir, sampledata_dir};
use sampledata_lib::{Diagnostic, DiagnosticSink, RecordingSink, SampleStore, TracingSink};
use tracing::debug;

use crate::output::print_warning;

pub use clean::cmd_clean;
pub use export::{ExportArgs, cmd_export};
pub use import::{ImportArgs, cmd_import};
pub use info::cmd_info;
pub use unlock::cmd_unlock;
pub use user::{UserCommand, cmd_user};

/// Store at the configured location whose diagnostics are both traced and
/// kept for display.
pub(crate) struct Session {
  pub store: SampleStore,
  recorded: Arc<RecordingSink>,
}

impl Session {
  pub fn open() -> Self {
    let recorded = Arc::new(RecordingSink::new());
    let sink = {
      let recorded = recorded.clone();
      move |diagnostic: &Diagnostic| {
        TracingSink.report(diagnostic);
        recorded.report(diagnostic);
      }
    };

    let store = SampleStore::with_sink(sampledata_dir(), Arc::new(sink));
    let store = match bundle_dir() {
      Some(dir) => store.with_bundle_dir(dir),
      None => store,
    };
    debug!(root = %store.root().display(), bundle = ?store.bundle(), "opened sample store");

    Self { store, recorded }
  }

  pub fn diagnostics(&self) -> Vec<Diagnostic> {
    self.recorded.entries()
  }

  /// Print every diagnostic recorded so far as a warning.
  pub fn print_diagnostics(&self) {
    for diagnostic in self.diagnostics() {
      print_warning(&format!("{}: {}", diagnostic.kind, diagnostic.message));
    }
  }
}
