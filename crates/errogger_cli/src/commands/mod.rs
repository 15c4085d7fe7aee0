//! Command implementations

mod create;
mod init;
mod scan;

use std::path::{Path, PathBuf};

use errogger_core::ErroggerConfig;
use miette::{IntoDiagnostic, Result};
use tracing::info;

pub use create::run_create;
pub use init::run_init;
pub use scan::run_scan;

/// Loads the config given on the command line, or the one found in the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<ErroggerConfig>> {
    if let Some(path) = explicit {
        info!("Using config: {}", path.display());
        return ErroggerConfig::from_file(path).into_diagnostic().map(Some);
    }

    if let Some(path) = ErroggerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ErroggerConfig::from_file(&path).into_diagnostic().map(Some);
    }

    info!("No config file found, using defaults");
    Ok(None)
}

/// Picks the command line value, falling back to the config.
fn resolve_dir(
    arg: Option<&Path>,
    config: Option<&ErroggerConfig>,
    from_config: fn(&ErroggerConfig) -> Option<PathBuf>,
) -> Option<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.and_then(from_config))
}
