//! sampledata-lib: a local JSON sample-data store
//!
//! - `SampleStore`: import/export JSON documents by file name, with optional
//!   "once" semantics backed by lock markers
//! - `Record`: the record payload and its fixed first-record slot
//! - `diagnostics`: the sink every recovered failure is reported to

pub mod consts;
pub mod diagnostics;
pub mod platform;
pub mod record;
pub mod store;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, RecordingSink, TracingSink};
pub use record::{Record, RecordSlot};
pub use store::{ExportOutcome, SampleStore};
