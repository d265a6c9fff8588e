use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::{Value, json};
use tracing::debug;

use sampledata_lib::{ExportOutcome, Record};

use super::Session;
use crate::output::{OutputFormat, print_error, print_json, print_success, print_warning};

#[derive(Debug, Args)]
pub struct ExportArgs {
  /// Sample file name (e.g. user.json)
  pub name: String,

  /// Export only once: skip if locked, lock after a successful export
  #[arg(long, visible_alias = "once")]
  pub lock: bool,

  /// Arbitrary JSON document to export
  #[arg(long, conflicts_with = "record")]
  pub json: Option<String>,

  /// Export a record built from --name, --country and --age
  #[arg(long, requires_all = ["record_name", "country", "age"])]
  pub record: bool,

  /// Record name
  #[arg(long = "name", id = "record_name", requires = "record")]
  pub record_name: Option<String>,

  /// Record country
  #[arg(long, requires = "record")]
  pub country: Option<String>,

  /// Record age
  #[arg(long, requires = "record")]
  pub age: Option<i64>,
}

impl ExportArgs {
  fn payload(&self) -> Result<Value> {
    if let Some(text) = &self.json {
      return serde_json::from_str(text).context("--json is not valid JSON");
    }

    match (self.record, &self.record_name, &self.country, self.age) {
      (true, Some(name), Some(country), Some(age)) => Ok(serde_json::to_value(Record::new(name, country, age))?),
      _ => bail!("nothing to export: pass --json or --record --name --country --age"),
    }
  }
}

/// Returns whether the document was exported.
pub fn cmd_export(args: &ExportArgs, output: OutputFormat) -> Result<bool> {
  let payload = args.payload()?;

  let session = Session::open();
  let outcome = session.store.export(&payload, &args.name, args.lock);
  debug!(name = %args.name, lock = args.lock, %outcome, "export finished");

  if output.is_json() {
    print_json(&json!({
      "name": args.name,
      "outcome": outcome,
      "diagnostics": session.diagnostics(),
    }))?;
    return Ok(outcome.is_success());
  }

  match outcome {
    ExportOutcome::Exported => {
      session.print_diagnostics();
      print_success(&format!("Exported {}", args.name));
    }
    ExportOutcome::Skipped => print_warning(&format!("Skipped {}: locked", args.name)),
    ExportOutcome::Failed => {
      session.print_diagnostics();
      print_error(&format!("Failed to export {}", args.name));
    }
  }

  Ok(outcome.is_success())
}
