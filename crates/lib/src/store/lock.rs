//! Lock markers.
//!
//! A sample file `<name>` is locked when a sibling `<name>.lock` exists and
//! contains exactly `true`. Anything else (missing, empty, `false`,
//! whitespace, undecodable bytes) is unlocked. Markers are only ever
//! written whole or deleted.

use std::fs;
use std::path::Path;

use crate::consts::{LOCK_CONTENT, LOCK_SUFFIX};

use super::error::StoreError;
use super::fsio;

/// Marker file name for a sample file name.
pub fn marker_name(name: &str) -> String {
  format!("{}{}", name, LOCK_SUFFIX)
}

/// Marker file name for a name that may already carry the lock suffix.
pub fn normalized_marker_name(name: &str) -> String {
  if name.ends_with(LOCK_SUFFIX) {
    name.to_string()
  } else {
    marker_name(name)
  }
}

/// Whether the marker at `path` is held.
pub fn is_locked(path: &Path) -> bool {
  match fs::read(path) {
    Ok(bytes) => std::str::from_utf8(&bytes).is_ok_and(|text| text == LOCK_CONTENT),
    Err(_) => false,
  }
}

/// Hold the marker at `path`, creating or overwriting it.
pub fn acquire(path: &Path) -> Result<(), StoreError> {
  fsio::write_atomic(path, LOCK_CONTENT.as_bytes())
}

/// Delete the marker at `path`. Returns whether a marker was removed.
pub fn release(path: &Path) -> Result<bool, StoreError> {
  fsio::remove_file_if_exists(path)
}
