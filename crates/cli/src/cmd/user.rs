//! First-record commands.
//!
//! `adopt` mirrors the demo flow: import a record from the sample store
//! (optionally only once) and keep it as the first record.

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;
use tracing::debug;

use sampledata_lib::platform::paths::record_path;
use sampledata_lib::{Record, RecordSlot};

use super::Session;
use crate::output::{OutputFormat, print_error, print_json, print_stat, print_success, print_warning};

#[derive(Debug, Subcommand)]
pub enum UserCommand {
  /// Show the first record
  Show,

  /// Overwrite the first record
  Save {
    #[arg(long)]
    name: String,
    #[arg(long)]
    country: String,
    #[arg(long)]
    age: i64,
  },

  /// Import a record from the sample store and keep it as the first record
  Adopt {
    /// Sample file name
    #[arg(default_value = "user.json")]
    file: String,

    /// Import only once: skip if locked, lock after a successful import
    #[arg(long, visible_alias = "once")]
    lock: bool,
  },
}

pub fn cmd_user(command: &UserCommand, output: OutputFormat) -> Result<bool> {
  match command {
    UserCommand::Show => show(output),
    UserCommand::Save { name, country, age } => save(&Record::new(name, country, *age), output),
    UserCommand::Adopt { file, lock } => adopt(file, *lock, output),
  }
}

fn show(output: OutputFormat) -> Result<bool> {
  let record = Record::first();

  if output.is_json() {
    print_json(&json!({ "path": record_path(), "record": record }))?;
    return Ok(record.is_some());
  }

  match &record {
    Some(record) => print_record(record),
    None => print_warning(&format!("No first record at {}", record_path().display())),
  }

  Ok(record.is_some())
}

fn save(record: &Record, output: OutputFormat) -> Result<bool> {
  let slot = RecordSlot::default_slot();
  let saved = slot.save(record);

  if output.is_json() {
    print_json(&json!({ "path": slot.path(), "saved": saved }))?;
  } else if saved {
    print_success(&format!("Saved first record {}", record));
  } else {
    print_error(&format!("Failed to save first record to {}", slot.path().display()));
  }

  Ok(saved)
}

fn adopt(file: &str, lock: bool, output: OutputFormat) -> Result<bool> {
  let session = Session::open();

  let Some(record) = session.store.import::<Record>(file, lock) else {
    if output.is_json() {
      print_json(&json!({ "file": file, "adopted": null, "diagnostics": session.diagnostics() }))?;
    } else {
      session.print_diagnostics();
    }
    return Ok(false);
  };

  let saved = RecordSlot::default_slot().save(&record);
  debug!(file = %file, lock, saved, "adopted first record");

  if output.is_json() {
    print_json(&json!({ "file": file, "adopted": record, "saved": saved }))?;
  } else if saved {
    print_success(&format!("Adopted {} from {}", record, file));
    print_record(&record);
  } else {
    print_error("Imported the record but failed to save it");
  }

  Ok(saved)
}

fn print_record(record: &Record) {
  println!("User:");
  print_stat("name", &record.name);
  print_stat("country", &record.country);
  print_stat("age", &record.age.to_string());
}
