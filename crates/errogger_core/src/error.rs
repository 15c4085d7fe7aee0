//! Scan error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole scan or configuration load.
///
/// Per-file and per-directory problems never surface here; the scanner
/// counts them as skipped entries instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory does not exist.
    #[error("Source directory \"{}\" does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("Source path \"{}\" is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
