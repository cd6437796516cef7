//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for every load and accessor failure.
//! - Define `ParseError`, the grammar failure carried inside `ConfigError::Parse`.
//!
//! Does NOT handle:
//! - Deciding process exit codes (see the CLI crate).
//!
//! Invariants:
//! - All variants carry enough context (path, line, profile, key) to diagnose.
//! - Construction-time variants are fatal; accessor variants never touch handler state.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{path}' does not exist.")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing config file: {0}")]
    Parse(#[from] ParseError),

    #[error("Duplicate profile name '{0}' found.")]
    DuplicateProfile(String),

    #[error("Duplicate key '{key}' found in section '{profile}'")]
    DuplicateKey { profile: String, key: String },

    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("Key '{key}' not found in profile '{profile}'")]
    KeyNotFound { profile: String, key: String },
}

impl ConfigError {
    /// True for failures that can only happen while building a handler.
    pub fn is_load_error(&self) -> bool {
        !self.is_lookup_error()
    }

    /// True for accessor misses, which leave the handler usable.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ProfileNotFound(_) | ConfigError::KeyNotFound { .. }
        )
    }
}

/// Grammar violations found by the parser.
///
/// Line numbers are 1-based and refer to the original file, before comments
/// and blank lines were removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: entry '{content}' appears before any section header")]
    MissingSectionHeader { line: usize, content: String },

    /// Blank names such as `[ ]` are rejected rather than stored as an empty profile name.
    #[error("line {line}: section header has an empty name")]
    EmptySectionName { line: usize },

    #[error("line {line}: expected 'key = value' or 'key : value', found '{content}'")]
    MissingDelimiter { line: usize, content: String },

    #[error("line {line}: entry '{content}' has an empty key")]
    EmptyKey { line: usize, content: String },
}

impl ParseError {
    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingSectionHeader { line, .. }
            | ParseError::EmptySectionName { line }
            | ParseError::MissingDelimiter { line, .. }
            | ParseError::EmptyKey { line, .. } => *line,
        }
    }
}
