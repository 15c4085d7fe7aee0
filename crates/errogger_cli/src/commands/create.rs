//! Create command implementation

use std::fs;
use std::path::Path;

use errogger_core::{ErroggerConfig, Scanner, translate};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use super::{load_config, resolve_dir};
use crate::output::{OUTPUT_FILE_NAME, write_scheme};

pub fn run_create(
    config_path: Option<&Path>,
    source_dir: Option<&Path>,
    output_dir: Option<&Path>,
    parallel: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let source = resolve_dir(source_dir, config.as_ref(), ErroggerConfig::scan_dir);
    let output = resolve_dir(output_dir, config.as_ref(), ErroggerConfig::output_dir);
    let (Some(source), Some(output)) = (source, output) else {
        return Err(miette::miette!(
            "Source and output directories must be specified either via command line or configuration file."
        ));
    };

    if !source.exists() {
        return Err(miette::miette!(
            "Source directory \"{}\" does not exist.",
            source.display()
        ));
    }

    fs::create_dir_all(&output)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!("Failed to create output directory \"{}\"", output.display())
        })?;

    let mut options = config
        .as_ref()
        .map(|c| c.scan_options())
        .unwrap_or_default();
    if parallel {
        options.parallel = true;
    }

    let result = Scanner::new(options)
        .scan(&source)
        .into_diagnostic()
        .wrap_err("Error during scanning")?;
    info!("Scanned {} documentation block(s)", result.blocks.len());

    let scheme = translate(&result, config.as_ref().map(|c| &c.meta));
    info!(
        "Translated scan result to Errogger Scheme with {} error(s).",
        scheme.errors.len()
    );

    let output_file = output.join(OUTPUT_FILE_NAME);
    write_scheme(&output_file, &scheme)?;
    info!("Errogger Source File written to \"{}\"", output_file.display());

    Ok(())
}
