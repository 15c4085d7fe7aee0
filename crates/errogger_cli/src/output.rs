//! Scheme and scan result writers

use std::fs;
use std::path::Path;

use errogger_core::{ErrorScheme, ScanResult};
use miette::{IntoDiagnostic, Result, WrapErr};

/// File name of the generated scheme inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "errogger-docs.json";

pub fn write_scheme(path: &Path, scheme: &ErrorScheme) -> Result<()> {
    let content = scheme.to_json_pretty().into_diagnostic()?;
    fs::write(path, content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write documentation to \"{}\"", path.display()))
}

pub fn output_scan_json(result: &ScanResult) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(result).into_diagnostic()?
    );
    Ok(())
}
