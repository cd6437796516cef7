//! Tests for the configuration loading pipeline.
//!
//! Responsibilities:
//! - Test comment stripping and line cleanup.
//! - Test header/entry parsing and grammar errors.
//! - Test duplicate detection, case normalization, and default-section inheritance.
//! - Test file-backed loading through `ConfigHandler`.
//!
//! Invariants:
//! - Temporary files are created with `tempfile` and cleaned up automatically.

use std::path::PathBuf;

use tempfile::TempDir;

pub mod preprocess_tests;

/// Three profiles with mixed-case keys and comment lines between them.
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

/// Writes `content` to `config.ini` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.ini");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
