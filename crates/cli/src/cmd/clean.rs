use anyhow::Result;
use serde_json::json;

use super::Session;
use crate::output::{OutputFormat, print_json, print_success};

pub fn cmd_clean(output: OutputFormat) -> Result<bool> {
  let session = Session::open();
  session.store.clean();
  let clean = session.diagnostics().is_empty();

  if output.is_json() {
    print_json(&json!({
      "root": session.store.root(),
      "cleaned": clean,
      "diagnostics": session.diagnostics(),
    }))?;
  } else if clean {
    print_success(&format!("Cleaned {}", session.store.root().display()));
  } else {
    session.print_diagnostics();
  }

  Ok(clean)
}
