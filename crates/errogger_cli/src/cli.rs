//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Errogger - Create documentation from your errors
#[derive(Parser)]
#[command(name = "errogger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create errogger documentation from a source directory
    Create {
        /// Directory to scan (defaults to `paths.scanDir` from the config)
        source_dir: Option<PathBuf>,

        /// Directory to write errogger-docs.json to (defaults to `paths.sourceOutputDir`)
        output_dir: Option<PathBuf>,

        /// Read and parse files in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Scan a directory and print every documentation block as JSON
    Scan {
        /// Directory to scan (defaults to `paths.scanDir` from the config)
        source_dir: Option<PathBuf>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
