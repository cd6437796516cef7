//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the config path from `--config-path` or `PROFILES_CONFIG_PATH`.
//!
//! Non-responsibilities:
//! - Does not load the configuration (see `dispatch` module).
//! - Does not format output (see `formatters` module).

use clap::{Parser, Subcommand, ValueEnum};
use profiles_config::constants::CONFIG_PATH_ENV;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profiles-cli")]
#[command(about = "Inspect profile-based INI configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  profiles-cli --config-path config.ini list\n  profiles-cli --config-path config.ini show production\n  profiles-cli --config-path config.ini get production region\n  PROFILES_CONFIG_PATH=config.ini profiles-cli -o json dump\n"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Keep profile names and keys exactly as written instead of lowercasing them
    #[arg(long, global = true)]
    pub preserve_case: bool,

    /// Section whose entries every profile inherits (e.g. DEFAULT)
    #[arg(long, global = true, value_name = "NAME")]
    pub default_section: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all profile names in file order
    List,

    /// Show every key-value pair in a profile
    Show {
        /// Profile name
        profile: String,
    },

    /// Print a single value
    Get {
        /// Profile name
        profile: String,

        /// Key within the profile
        key: String,
    },

    /// Print the whole normalized configuration
    Dump,

    /// Print the file with comments and blank lines removed
    Preprocess,
}
