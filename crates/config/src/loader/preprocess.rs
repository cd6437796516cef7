//! Comment and blank-line removal.
//!
//! Responsibilities:
//! - Strip everything from the first comment marker to the end of each line.
//! - Trim lines and drop the ones left empty.
//! - Read a config file from disk with not-found detection.
//!
//! Does NOT handle:
//! - Any INI structure (see `parser.rs`).
//!
//! Invariants:
//! - The strip is purely textual: markers inside quotes are stripped too.
//! - Surviving lines keep their original order and 1-based line numbers.
//! - `\r\n`, a bare `\r`, and `\n` each end a line.

use std::path::Path;

use crate::constants::COMMENT_MARKERS;

use super::error::ConfigError;

/// A line that survived preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanLine<'a> {
    /// 1-based line number in the original text.
    pub number: usize,
    /// Trimmed content with any comment removed. Never empty.
    pub text: &'a str,
}

/// Removes the comment suffix from one line and trims what is left.
pub(crate) fn strip_comment(line: &str) -> &str {
    let content = match line.find(COMMENT_MARKERS) {
        Some(index) => &line[..index],
        None => line,
    };
    content.trim()
}

/// Splits `text` into lines on `\r\n`, `\r`, or `\n`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// Returns every non-empty line of `text` after comment stripping.
pub fn clean_lines(text: &str) -> Vec<CleanLine<'_>> {
    split_lines(text)
        .enumerate()
        .filter_map(|(index, line)| {
            let text = strip_comment(line);
            (!text.is_empty()).then_some(CleanLine {
                number: index + 1,
                text,
            })
        })
        .collect()
}

/// Preprocesses raw text into newline-joined clean lines.
pub fn preprocess(text: &str) -> String {
    clean_lines(text)
        .iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads a whole config file as UTF-8.
///
/// # Errors
/// - `ConfigError::FileNotFound` if `path` does not exist (checked before reading).
/// - `ConfigError::FileRead` for any other I/O or encoding failure.
pub fn read_config_text(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path` and returns its preprocessed text.
pub fn preprocess_file(path: &Path) -> Result<String, ConfigError> {
    let text = read_config_text(path)?;
    Ok(preprocess(&text))
}
