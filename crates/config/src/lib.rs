//! Profile-based configuration files.
//!
//! This crate reads INI-style files whose sections are named profiles,
//! strips `;` and `#` comments, rejects duplicate profiles and keys, and
//! exposes lookup and rendering helpers through [`ConfigHandler`].

pub mod constants;
mod handler;
pub mod loader;
pub mod types;

pub use handler::ConfigHandler;
pub use loader::{ConfigError, HandlerBuilder, LoadOptions, ParseError};
pub use types::{CaseMode, Configuration, Profile};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
