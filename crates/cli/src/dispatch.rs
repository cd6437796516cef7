//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the `ConfigHandler` from global options.
//! - Route each subcommand to the matching handler accessor and formatter.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Exit codes (see `error` module).

use anyhow::{Context, Result, bail};
use profiles_config::constants::CONFIG_PATH_ENV;
use profiles_config::loader::preprocess::preprocess_file;
use profiles_config::{ConfigHandler, HandlerBuilder};
use std::path::{Path, PathBuf};

use crate::args::{Cli, Commands};
use crate::formatters;

/// Runs the parsed command and returns what should be printed to stdout.
pub fn run_command(cli: Cli) -> Result<String> {
    let config_path = resolve_config_path(cli.config_path)?;

    let mut builder = ConfigHandler::builder(&config_path).with_preserve_case(cli.preserve_case);
    if let Some(name) = cli.default_section {
        builder = builder.with_default_section(name);
    }

    match cli.command {
        // Works on files that would fail validation, so no handler is built.
        Commands::Preprocess => {
            let text = preprocess_file(&config_path)
                .with_context(|| format!("Failed to preprocess {}", config_path.display()))?;
            formatters::format_text(&text, cli.output)
        }
        Commands::List => {
            let handler = load(builder, &config_path)?;
            formatters::format_profile_names(&handler.list_profiles(), cli.output)
        }
        Commands::Show { profile } => {
            let handler = load(builder, &config_path)?;
            formatters::format_profile(handler.get_profile(&profile)?, cli.output)
        }
        Commands::Get { profile, key } => {
            let handler = load(builder, &config_path)?;
            formatters::format_text(handler.get_value(&profile, &key)?, cli.output)
        }
        Commands::Dump => {
            let handler = load(builder, &config_path)?;
            formatters::format_config(&handler.get_config(), cli.output)
        }
    }
}

fn load(builder: HandlerBuilder, config_path: &Path) -> Result<ConfigHandler> {
    let handler = builder
        .load()
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    tracing::debug!(
        path = %handler.filepath().display(),
        case_mode = %handler.case_mode(),
        profiles = handler.list_profiles().len(),
        "Configuration loaded"
    );
    Ok(handler)
}

/// Blank or whitespace-only paths count as not given.
fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => Ok(path),
        _ => bail!("No configuration file given. Pass --config-path or set {CONFIG_PATH_ENV}."),
    }
}
