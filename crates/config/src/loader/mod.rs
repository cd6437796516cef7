//! Configuration loading pipeline.
//!
//! Responsibilities:
//! - Read a config file from disk (`preprocess.rs`).
//! - Strip comments and blank lines (`preprocess.rs`).
//! - Parse INI headers and entries (`parser.rs`).
//! - Validate and normalize into a `Configuration` (`validate.rs`).
//! - Provide the `HandlerBuilder` used to construct a `ConfigHandler`.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching files for changes.
//!
//! Invariants / Assumptions:
//! - Each stage is a pure function producing a new value; nothing is mutated in place.
//! - A load either yields a fully validated `Configuration` or an error, never both.

mod builder;
mod error;
pub mod parser;
pub mod preprocess;
mod validate;

use std::path::Path;

use crate::types::{CaseMode, Configuration};

pub use builder::HandlerBuilder;
pub use error::{ConfigError, ParseError};
pub(crate) use validate::lookup_key;

/// Options fixed for the lifetime of a loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Case handling for profile names and keys.
    pub case_mode: CaseMode,
    /// Section whose entries every profile inherits. `None` disables inheritance.
    pub default_section: Option<String>,
}

/// Runs preprocess, parse, and validate over in-memory text.
pub(crate) fn load_from_str(
    text: &str,
    options: &LoadOptions,
) -> Result<Configuration, ConfigError> {
    let lines = preprocess::clean_lines(text);
    let sections = parser::parse(lines)?;
    validate::validate(sections, options)
}

/// Reads `path` and runs the full pipeline over its contents.
pub(crate) fn load_from_path(
    path: &Path,
    options: &LoadOptions,
) -> Result<Configuration, ConfigError> {
    let text = preprocess::read_config_text(path)?;
    let result = load_from_str(&text, options);

    match &result {
        Ok(config) => tracing::debug!(
            path = %path.display(),
            profiles = config.len(),
            case_mode = %options.case_mode,
            "Loaded profile configuration"
        ),
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Rejected profile configuration"
        ),
    }

    result
}

#[cfg(test)]
mod tests;
