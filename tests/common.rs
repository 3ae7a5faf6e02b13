#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rov() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB in test mode (no config file touched)
pub fn init_db(db_path: &str) {
    rov()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run `show --json` and parse the output
pub fn show_json(db_path: &str, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["--db", db_path, "--test", "show", "--json"];
    args.extend_from_slice(extra);

    let output = rov().args(&args).output().expect("failed to run show");
    assert!(output.status.success(), "show --json failed");
    serde_json::from_slice(&output.stdout).expect("show --json did not print JSON")
}
