use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};

use sampledata_lib::Record;

use super::Session;
use crate::output::{OutputFormat, print_json, print_success};

#[derive(Debug, Args)]
pub struct ImportArgs {
  /// Sample file name (e.g. user.json)
  pub name: String,

  /// Import only once: skip if locked, lock after a successful import
  #[arg(long, visible_alias = "once")]
  pub lock: bool,

  /// Decode as a record (name, country, age)
  #[arg(long)]
  pub record: bool,

  /// Read from the bundle directory instead of the sample directory
  #[arg(long)]
  pub bundled: bool,
}

/// Returns whether a value was imported.
pub fn cmd_import(args: &ImportArgs, output: OutputFormat) -> Result<bool> {
  let session = Session::open();
  let store = &session.store;

  let value: Option<Value> = match (args.record, args.bundled) {
    (true, true) => store
      .import_bundled::<Record>(&args.name, args.lock)
      .map(serde_json::to_value)
      .transpose()?,
    (true, false) => store
      .import::<Record>(&args.name, args.lock)
      .map(serde_json::to_value)
      .transpose()?,
    (false, true) => store.import_bundled::<Value>(&args.name, args.lock),
    (false, false) => store.import_value(&args.name, args.lock),
  };

  if output.is_json() {
    print_json(&json!({
      "name": args.name,
      "value": value,
      "diagnostics": session.diagnostics(),
    }))?;
    return Ok(value.is_some());
  }

  match value {
    Some(value) => {
      print_success(&format!("Imported {}", args.name));
      println!("{}", serde_json::to_string_pretty(&value)?);
      Ok(true)
    }
    None => {
      session.print_diagnostics();
      Ok(false)
    }
  }
}
