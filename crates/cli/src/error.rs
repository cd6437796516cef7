//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Codes 2 and 3 are left unused so clap's usage error (2) stays distinct.

use profiles_config::ConfigError;

/// Structured exit codes for profiles-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable file, missing config path, or anything unclassified.
    GeneralError = 1,

    /// Not found - config file, profile, or key does not exist.
    ///
    /// Scripts should check the name they asked for.
    NotFound = 4,

    /// Validation error - the file is malformed or has duplicate profiles/keys.
    ///
    /// Scripts should fix the file; retrying will not help.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileNotFound { .. }
            | ConfigError::ProfileNotFound(_)
            | ConfigError::KeyNotFound { .. } => ExitCode::NotFound,

            ConfigError::Parse(_)
            | ConfigError::DuplicateProfile(_)
            | ConfigError::DuplicateKey { .. } => ExitCode::ValidationError,

            ConfigError::FileRead { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
