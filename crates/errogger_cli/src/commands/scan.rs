//! Scan command implementation

use std::path::Path;

use errogger_core::{ErroggerConfig, Scanner};
use miette::{IntoDiagnostic, Result};

use super::{load_config, resolve_dir};
use crate::output::output_scan_json;

pub fn run_scan(config_path: Option<&Path>, source_dir: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let source = resolve_dir(source_dir, config.as_ref(), ErroggerConfig::scan_dir)
        .ok_or_else(|| {
            miette::miette!(
                "Source directory must be specified either via command line or configuration file."
            )
        })?;

    let options = config
        .as_ref()
        .map(|c| c.scan_options())
        .unwrap_or_default();
    let result = Scanner::new(options).scan(&source).into_diagnostic()?;

    output_scan_json(&result)
}
