//! Low-level file primitives shared by the store and the record slot.
//!
//! Writes go to a uniquely named temp file in the destination directory,
//! are flushed to disk, then renamed over the destination. Readers see
//! either the previous complete document or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::Builder;

use crate::consts::TEMP_PREFIX;

use super::error::StoreError;

/// Whether `name` is a temp file left next to a sample by an unfinished write.
pub fn is_temp_name(name: &str) -> bool {
  name.starts_with(TEMP_PREFIX)
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
  fs::create_dir_all(path).map_err(|source| StoreError::CreateDir {
    path: path.to_path_buf(),
    source,
  })
}

/// Replace `path` with `bytes` atomically.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
  let write_err = |source: io::Error| StoreError::Write {
    path: path.to_path_buf(),
    source,
  };

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut temp = Builder::new().prefix(TEMP_PREFIX).tempfile_in(dir).map_err(write_err)?;
  temp.write_all(bytes).map_err(write_err)?;
  temp.flush().map_err(write_err)?;
  temp.as_file().sync_all().map_err(write_err)?;
  temp.persist(path).map_err(|e| write_err(e.error))?;

  Ok(())
}

/// Serialize `value` as JSON and write it atomically to `path`.
///
/// Serialization happens fully in memory first, so a value that fails to
/// serialize never touches the destination.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, name: &str, value: &T) -> Result<(), StoreError> {
  let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
    name: name.to_string(),
    source,
  })?;
  write_atomic(path, &bytes)
}

/// Read the raw bytes of `path`, distinguishing a missing file from other failures.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, StoreError> {
  match fs::read(path) {
    Ok(bytes) => Ok(bytes),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound(path.to_path_buf())),
    Err(source) => Err(StoreError::Read {
      path: path.to_path_buf(),
      source,
    }),
  }
}

/// Decode UTF-8 JSON `bytes` read from `path` into `T`.
///
/// Any JSON value is accepted at the top level, including bare scalars.
pub fn decode<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, StoreError> {
  serde_json::from_slice(bytes).map_err(|source| StoreError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

/// Read and decode `path` in one step.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
  let bytes = read_bytes(path)?;
  decode(path, &bytes)
}

/// Remove a file. Returns `Ok(false)` if it did not exist.
pub fn remove_file_if_exists(path: &Path) -> Result<bool, StoreError> {
  match fs::remove_file(path) {
    Ok(()) => Ok(true),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(source) => Err(StoreError::Remove {
      path: path.to_path_buf(),
      source,
    }),
  }
}
