use anyhow::Result;
use serde_json::json;

use super::Session;
use crate::output::{OutputFormat, print_json, print_success};

pub fn cmd_unlock(name: &str, output: OutputFormat) -> Result<bool> {
  let session = Session::open();
  session.store.unlock(name);
  let unlocked = !session.store.is_locked(name);

  if output.is_json() {
    print_json(&json!({
      "name": name,
      "locked": !unlocked,
      "diagnostics": session.diagnostics(),
    }))?;
  } else if unlocked {
    print_success(&format!("Unlocked {}", name));
  } else {
    session.print_diagnostics();
  }

  Ok(unlocked)
}
