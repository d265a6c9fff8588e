//! Filesystem locations used by the sample store.
//!
//! Every location can be overridden through the environment so tests and
//! packaged builds can relocate the store without touching code:
//!
//! - `SAMPLEDATA_DOCUMENTS`: documents root (holds `sampledata/` and `user`)
//! - `SAMPLEDATA_ROOT`: sample directory
//! - `SAMPLEDATA_BUNDLE`: read-only bundle directory

use std::path::PathBuf;

use crate::consts::{BUNDLE_DIR, RECORD_FILENAME, SAMPLEDATA_DIR};

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  std::env::var("USERPROFILE")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  std::env::var("HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the user's documents directory
#[cfg(windows)]
pub fn documents_dir() -> PathBuf {
  if let Ok(path) = std::env::var("SAMPLEDATA_DOCUMENTS") {
    return PathBuf::from(path);
  }
  home_dir().join("Documents")
}

/// Returns the user's documents directory
#[cfg(not(windows))]
pub fn documents_dir() -> PathBuf {
  if let Ok(path) = std::env::var("SAMPLEDATA_DOCUMENTS") {
    return PathBuf::from(path);
  }
  std::env::var("XDG_DOCUMENTS_DIR")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join("Documents"))
}

/// Returns the writable directory holding sample files and their lock markers
pub fn sampledata_dir() -> PathBuf {
  if let Ok(path) = std::env::var("SAMPLEDATA_ROOT") {
    return PathBuf::from(path);
  }
  documents_dir().join(SAMPLEDATA_DIR)
}

/// Returns the path of the first record slot, outside the sample directory
pub fn record_path() -> PathBuf {
  documents_dir().join(RECORD_FILENAME)
}

/// Returns the read-only bundle directory, if one can be located.
///
/// Falls back to a `resources` directory next to the running executable.
pub fn bundle_dir() -> Option<PathBuf> {
  if let Ok(path) = std::env::var("SAMPLEDATA_BUNDLE") {
    return Some(PathBuf::from(path));
  }

  let exe = std::env::current_exe().ok()?;
  let dir = exe.parent()?.join(BUNDLE_DIR);
  dir.is_dir().then(|| dunce::canonicalize(&dir).unwrap_or(dir))
}
