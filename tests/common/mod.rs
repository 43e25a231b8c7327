#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write both sides of a comparison into `dir`, returning their paths
pub fn write_inputs(dir: &TempDir, left: &str, right: &str) -> (PathBuf, PathBuf) {
    let left_file = dir.child("left.txt");
    left_file.write_str(left).expect("Failed to write left input");

    let right_file = dir.child("right.txt");
    right_file
        .write_str(right)
        .expect("Failed to write right input");

    (left_file.path().to_path_buf(), right_file.path().to_path_buf())
}

pub fn run_tokendiff(left: &Path, right: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tokendiff").expect("Failed to find tokendiff binary");
    cmd.arg(left).arg(right).args(args).arg("--color").arg("never");
    cmd
}
