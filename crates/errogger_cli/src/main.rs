//! Errogger CLI
//!
//! Create documentation from your errors.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_create, run_init, run_scan};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Create {
            source_dir,
            output_dir,
            parallel,
        } => run_create(config, source_dir.as_deref(), output_dir.as_deref(), *parallel),
        Commands::Scan { source_dir } => run_scan(config, source_dir.as_deref()),
        Commands::Init { force } => run_init(*force),
    }
}
