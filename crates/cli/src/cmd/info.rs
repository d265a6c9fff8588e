use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;

use sampledata_lib::consts::LOCK_SUFFIX;
use sampledata_lib::platform::paths::{documents_dir, record_path};
use sampledata_lib::store::fsio::is_temp_name;

use super::Session;
use crate::output::{OutputFormat, format_bytes, print_info, print_json, print_stat, symbols};

#[derive(Debug, Serialize)]
struct SampleEntry {
  name: String,
  bytes: u64,
  locked: bool,
}

pub fn cmd_info(output: OutputFormat) -> Result<bool> {
  let session = Session::open();
  let store = &session.store;

  let mut samples = Vec::new();
  if store.root().is_dir() {
    let entries = fs::read_dir(store.root())
      .with_context(|| format!("Failed to read {}", store.root().display()))?;
    for entry in entries.filter_map(|e| e.ok()) {
      let name = entry.file_name().to_string_lossy().into_owned();
      if name.ends_with(LOCK_SUFFIX) || is_temp_name(&name) || !entry.file_type().is_ok_and(|t| t.is_file()) {
        continue;
      }
      samples.push(SampleEntry {
        locked: store.is_locked(&name),
        bytes: entry.metadata().map(|m| m.len()).unwrap_or(0),
        name,
      });
    }
  }
  samples.sort_by(|a, b| a.name.cmp(&b.name));

  if output.is_json() {
    print_json(&serde_json::json!({
      "documents": documents_dir(),
      "root": store.root(),
      "bundle": store.bundle(),
      "record": record_path(),
      "samples": samples,
    }))?;
    return Ok(true);
  }

  print_info("Locations:");
  print_stat("Documents", &documents_dir().display().to_string());
  print_stat("Samples", &store.root().display().to_string());
  print_stat(
    "Bundle",
    &store
      .bundle()
      .map(|b| b.display().to_string())
      .unwrap_or_else(|| "(none)".to_string()),
  );
  print_stat("First record", &record_path().display().to_string());

  println!();
  print_info(&format!("{} sample(s)", samples.len()));
  for sample in &samples {
    let marker = if sample.locked { symbols::LOCKED } else { " " };
    println!("  {} {} ({})", marker, sample.name, format_bytes(sample.bytes));
  }

  Ok(true)
}
