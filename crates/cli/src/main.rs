//! profiles-cli - Inspect profile-based INI configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration through `profiles-config` and print the requested view.
//!
//! Does NOT handle:
//! - Parsing or validation rules (see `crates/config`).
//! - Modifying configuration files; the tool is read-only.
//!
//! Invariants:
//! - Command output goes to stdout; logs and errors go to stderr.
//! - The process exit code reflects the error category (see `error` module).

mod args;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
