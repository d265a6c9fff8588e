use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn import_missing_reports_not_found() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["import", "missing.json"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not_found"));
}

#[test]
fn import_prints_exported_value() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "user.json", "--record", "--name", "Hanako", "--country", "Japan", "--age", "25"])
    .assert()
    .success();

  env
    .cmd()
    .args(["import", "user.json", "--record"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"Hanako\""));
}

#[test]
fn import_once_then_unlock() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "user.json", "--lock", "--record", "--name", "Hanako", "--country", "Japan", "--age", "25"])
    .assert()
    .success();

  env
    .cmd()
    .args(["import", "user.json", "--record", "--once"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("locked"));

  env.cmd().args(["unlock", "user.json"]).assert().success();

  env
    .cmd()
    .args(["import", "user.json", "--record", "--once"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Japan"));

  assert!(env.sample_path().join("user.json.lock").exists());
}

#[test]
fn import_bundled_locks_in_sample_dir() {
  let env = TestEnv::new();
  env.write_bundle_file("seed.json", r#"{"name": "Taro", "country": "Japan", "age": 30}"#);

  env
    .cmd()
    .args(["import", "seed.json", "--bundled", "--record", "--lock"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Taro"));

  assert!(env.sample_path().join("seed.json.lock").exists());
  assert!(!env.bundle_path().join("seed.json.lock").exists());

  env
    .cmd()
    .args(["import", "seed.json", "--bundled", "--lock"])
    .assert()
    .code(1);
}

#[test]
fn import_json_output_has_null_value_when_absent() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["-o", "json", "import", "missing.json"])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("\"value\": null"))
    .stdout(predicate::str::contains("\"not_found\""));
}
