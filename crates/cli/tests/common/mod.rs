//! Shared test utilities for profiles-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write throwaway config files into temp directories.
//!
//! Invariants / Assumptions:
//! - `PROFILES_CONFIG_PATH` and `RUST_LOG` are cleared so host settings never leak in.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three profiles with mixed-case keys and comment lines.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = "
[profile1]
key1 = value1
key2 = value2

[profile2]
keyA = valueA
keyB = valueB

; This is a comment
# This is another comment

[profile3]
keyX = valueX
keyY = valueY
";

/// Returns a hermetic `profiles-cli` command for integration testing.
pub fn profiles_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("profiles-cli");
    cmd.env_remove("PROFILES_CONFIG_PATH").env_remove("RUST_LOG");
    cmd
}

/// Returns a hermetic command already pointed at `path`.
#[allow(dead_code)]
pub fn profiles_cmd_with_config(path: &std::path::Path) -> Command {
    let mut cmd = profiles_cmd();
    cmd.arg("--config-path").arg(path);
    cmd
}

/// Writes `content` to `config.ini` in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.ini");
    std::fs::write(&path, content).expect("Failed to write config file");
    (temp_dir, path)
}
