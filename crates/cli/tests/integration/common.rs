//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own documents root and bundle directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Documents root (holds `sampledata/` and `user`).
  pub fn documents_path(&self) -> PathBuf {
    let p = self.temp.path().join("documents");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Sample directory inside the documents root.
  pub fn sample_path(&self) -> PathBuf {
    self.documents_path().join("sampledata")
  }

  /// Read-only bundle directory.
  pub fn bundle_path(&self) -> PathBuf {
    let p = self.temp.path().join("bundle");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Write a file into the bundle directory.
  pub fn write_bundle_file(&self, name: &str, content: &str) {
    std::fs::write(self.bundle_path().join(name), content).unwrap();
  }

  /// Get a pre-configured Command for the sampledata binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `SAMPLEDATA_DOCUMENTS`: isolated documents root
  /// - `SAMPLEDATA_BUNDLE`: isolated bundle directory
  pub fn cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("sampledata");
    cmd.env("SAMPLEDATA_DOCUMENTS", self.documents_path());
    cmd.env("SAMPLEDATA_BUNDLE", self.bundle_path());
    cmd.env_remove("SAMPLEDATA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
