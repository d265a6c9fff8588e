use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn unlock_accepts_lock_suffix() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "a.json", "--lock", "--json", "1"])
    .assert()
    .success();

  env.cmd().args(["unlock", "a.json.lock"]).assert().success();
  assert!(!env.sample_path().join("a.json.lock").exists());
}

#[test]
fn unlock_without_marker_succeeds() {
  let env = TestEnv::new();

  env.cmd().args(["unlock", "never.json"]).assert().success();
  env.cmd().args(["unlock", "never.json"]).assert().success();
}

#[test]
fn clean_empties_sample_dir() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "a.json", "--lock", "--json", "{}"])
    .assert()
    .success();

  env
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Cleaned"));

  assert!(env.sample_path().is_dir());
  assert_eq!(std::fs::read_dir(env.sample_path()).unwrap().count(), 0);

  env.cmd().args(["import", "a.json"]).assert().code(1);
}

#[test]
fn info_lists_samples_and_locks() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "a.json", "--lock", "--json", "1"])
    .assert()
    .success();
  env
    .cmd()
    .args(["export", "b.json", "--json", "2"])
    .assert()
    .success();

  let output = env.cmd().args(["-o", "json", "info"]).output().unwrap();
  assert!(output.status.success());

  let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let samples = info["samples"].as_array().unwrap();
  assert_eq!(samples.len(), 2);
  assert_eq!(samples[0]["name"], "a.json");
  assert_eq!(samples[0]["locked"], true);
  assert_eq!(samples[1]["name"], "b.json");
  assert_eq!(samples[1]["locked"], false);
}

#[test]
fn info_skips_leftover_temp_files() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["export", "a.json", "--json", "1"])
    .assert()
    .success();
  std::fs::write(env.sample_path().join(".tmpX1y2Z3"), "{\"trunc").unwrap();

  let output = env.cmd().args(["-o", "json", "info"]).output().unwrap();
  assert!(output.status.success());

  let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let samples = info["samples"].as_array().unwrap();
  assert_eq!(samples.len(), 1);
  assert_eq!(samples[0]["name"], "a.json");
}
