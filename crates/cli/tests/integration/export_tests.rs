use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn export_json_writes_sample_file() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["export", "list.json", "--json", "[1, 2, 3]"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Exported list.json"));

  let content = std::fs::read_to_string(env.sample_path().join("list.json")).unwrap();
  let value: serde_json::Value = serde_json::from_str(&content).unwrap();
  assert_eq!(value, serde_json::json!([1, 2, 3]));
}

#[test]
fn export_record_with_lock_runs_once() {
  let env = TestEnv::new();
  let args = [
    "export", "user.json", "--lock", "--record", "--name", "Hanako", "--country", "Japan", "--age", "25",
  ];

  env.cmd().args(args).assert().success();
  assert!(env.sample_path().join("user.json.lock").exists());

  env
    .cmd()
    .args(args)
    .assert()
    .code(1)
    .stderr(predicate::str::contains("locked"));
}

#[test]
fn export_reports_outcome_as_json() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["--output", "json", "export", "a.json", "--json", "true"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"outcome\": \"exported\""));
}

#[test]
fn export_rejects_invalid_json_argument() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["export", "a.json", "--json", "{ nope"])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn export_without_payload_fails() {
  let env = TestEnv::new();

  env.cmd().args(["export", "a.json"]).assert().code(2);
}

#[test]
fn export_record_requires_all_fields() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["export", "a.json", "--record", "--name", "Hanako"])
    .assert()
    .code(2);
}

#[test]
fn export_record_fields_require_record_flag() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["export", "a.json", "--name", "Hanako", "--country", "Japan", "--age", "25"])
    .assert()
    .code(2);
  assert!(!env.sample_path().join("a.json").exists());
}

#[test]
fn export_json_conflicts_with_record() {
  let env = TestEnv::new();

  env
    .cmd()
    .args([
      "export", "a.json", "--json", "1", "--record", "--name", "Hanako", "--country", "Japan", "--age", "25",
    ])
    .assert()
    .code(2);
}

#[test]
fn export_record_writes_record_fields() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["export", "user.json", "--record", "--name", "Hanako", "--country", "Japan", "--age", "25"])
    .assert()
    .success();

  let content = std::fs::read_to_string(env.sample_path().join("user.json")).unwrap();
  let value: serde_json::Value = serde_json::from_str(&content).unwrap();
  assert_eq!(value, serde_json::json!({ "name": "Hanako", "country": "Japan", "age": 25 }));
}
