#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, colours disabled so output can be matched literally.
pub fn pw() -> Command {
    let mut cmd = cargo_bin_cmd!("prodwatch");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique config path inside the system temp dir; any existing file is removed
/// so the command runs on defaults unless the test writes one.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodwatch.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty output directory inside tempdir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_prodwatch_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a dataset file and return its path.
pub fn write_dataset(name: &str, json: &str) -> String {
    let p = temp_out(&format!("{name}_dataset"), "json");
    fs::write(&p, json).expect("write dataset");
    p
}

/// Small dataset with a product name containing a comma and an over-produced run.
pub const SMALL_DATASET: &str = r#"{
  "records": [
    {
      "id": 10,
      "product": "Sal, Limón",
      "weight": 120,
      "target": 100,
      "produced": 130,
      "pallets": { "total": 4, "completed": 4, "remaining": 0, "currentPallet": 49 },
      "shifts": { "F": true, "A": true },
      "nextShiftSameWeight": false,
      "nextShiftWeightChange": false
    }
  ],
  "history": [
    { "date": "2025-04-01", "shift": "C", "product": "Sal, Limón", "weight": 120, "target": 100, "produced": 40 }
  ]
}"#;
