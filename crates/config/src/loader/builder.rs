//! Builder for `ConfigHandler`.
//!
//! Responsibilities:
//! - Collect the config path and load options before the single eager load.
//!
//! Does NOT handle:
//! - The load itself (see `loader::load_from_path`).
//!
//! Invariants / Assumptions:
//! - Options cannot change after `load()`; a new builder is needed for a new load.

use std::path::PathBuf;

use super::LoadOptions;
use super::error::ConfigError;
use crate::handler::ConfigHandler;
use crate::types::CaseMode;

/// Configures and loads a `ConfigHandler`.
#[derive(Debug, Clone)]
pub struct HandlerBuilder {
    path: PathBuf,
    options: LoadOptions,
}

impl HandlerBuilder {
    /// Start a builder for the file at `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: LoadOptions::default(),
        }
    }

    /// Set how profile names and keys are normalized.
    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.options.case_mode = case_mode;
        self
    }

    /// Shorthand for `with_case_mode(CaseMode::from_preserve_case(preserve_case))`.
    pub fn with_preserve_case(self, preserve_case: bool) -> Self {
        self.with_case_mode(CaseMode::from_preserve_case(preserve_case))
    }

    /// Treat sections named exactly `name` as defaults inherited by every profile.
    ///
    /// Blank names are ignored.
    pub fn with_default_section(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.options.default_section = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// The options the handler will be loaded with.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Read, parse, and validate the file.
    ///
    /// # Errors
    /// Any construction-time `ConfigError`; no handler is produced on failure.
    pub fn load(self) -> Result<ConfigHandler, ConfigError> {
        ConfigHandler::load(self.path, self.options)
    }
}
