//! The public entry point: an eagerly loaded, immutable profile configuration.
//!
//! Responsibilities:
//! - Load the configuration once at construction.
//! - Answer profile and key lookups with not-found errors that name what is missing.
//! - Render and snapshot the configuration.
//!
//! Does NOT handle:
//! - Mutation, reload, or write-back. A new handler means a new load.
//!
//! Invariants:
//! - A `ConfigHandler` only exists if its load fully succeeded.
//! - Lookup errors never change handler state.

use std::path::{Path, PathBuf};

use crate::loader::{self, ConfigError, HandlerBuilder, LoadOptions, lookup_key};
use crate::types::{CaseMode, Configuration, Profile};

/// Reads a profile-based INI file and exposes its contents.
///
/// ```rust,ignore
/// let handler = ConfigHandler::new("config.ini")?;
/// for name in handler.list_profiles() {
///     println!("{name}: {:?}", handler.get_profile(&name)?.to_map());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigHandler {
    filepath: PathBuf,
    options: LoadOptions,
    config: Configuration,
}

impl ConfigHandler {
    /// Loads `filepath` with the default (lowercasing) case mode.
    ///
    /// # Errors
    /// `FileNotFound`, `FileRead`, `Parse`, `DuplicateProfile`, or `DuplicateKey`.
    pub fn new(filepath: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::builder(filepath).load()
    }

    /// Loads `filepath` with an explicit case mode.
    pub fn with_case_mode(
        filepath: impl Into<PathBuf>,
        case_mode: CaseMode,
    ) -> Result<Self, ConfigError> {
        Self::builder(filepath).with_case_mode(case_mode).load()
    }

    /// Starts a builder for the less common options.
    pub fn builder(filepath: impl Into<PathBuf>) -> HandlerBuilder {
        HandlerBuilder::new(filepath)
    }

    pub(crate) fn load(filepath: PathBuf, options: LoadOptions) -> Result<Self, ConfigError> {
        let config = loader::load_from_path(&filepath, &options)?;
        Ok(Self {
            filepath,
            options,
            config,
        })
    }

    /// Path this handler was loaded from.
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn case_mode(&self) -> CaseMode {
        self.options.case_mode
    }

    /// Name of the inherited default section, if one was configured.
    pub fn default_section(&self) -> Option<&str> {
        self.options.default_section.as_deref()
    }

    /// Re-reads the file and returns it with comments and blank lines removed.
    ///
    /// Diagnostic only; the loaded configuration is not affected.
    pub fn preprocess_file(&self) -> Result<String, ConfigError> {
        loader::preprocess::preprocess_file(&self.filepath)
    }

    /// Profile names in file order, as stored.
    pub fn list_profiles(&self) -> Vec<String> {
        self.config.profile_names()
    }

    /// Returns the profile called `name` (surrounding whitespace ignored).
    ///
    /// # Errors
    /// `ConfigError::ProfileNotFound` if no such profile was loaded.
    pub fn get_profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        let name = name.trim();
        self.config
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
    }

    /// Returns one value.
    ///
    /// Both arguments are trimmed. The profile name must match exactly; the
    /// key is matched after case normalization, like the stored keys.
    ///
    /// # Errors
    /// `ConfigError::ProfileNotFound` or `ConfigError::KeyNotFound`.
    pub fn get_value(&self, profile: &str, key: &str) -> Result<&str, ConfigError> {
        let found = self.get_profile(profile)?;
        let key = key.trim();

        found
            .get(&lookup_key(key, self.options.case_mode))
            .ok_or_else(|| ConfigError::KeyNotFound {
                profile: found.name().to_string(),
                key: key.to_string(),
            })
    }

    /// A snapshot copy of the whole configuration.
    pub fn get_config(&self) -> Configuration {
        self.config.clone()
    }

    /// Borrowed view of the configuration, for callers that do not need a copy.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Formatted text: `[name]` headers, `key = value` lines, blank line between profiles.
    pub fn display_config(&self) -> String {
        self.config.to_string()
    }
}
