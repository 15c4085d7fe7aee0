//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use errogger_core::{DEFAULT_CONFIG_TEMPLATE, ErroggerConfig};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

/// Writes the default `errogger.config.jsonc` into the current directory.
///
/// Any existing config file, under either accepted name, blocks the write
/// unless `force` is set.
pub fn run_init(force: bool) -> Result<()> {
    if !force && let Some(existing) = ErroggerConfig::discover(".") {
        return Err(miette::miette!(
            "{} already exists. Use --force to overwrite.",
            existing.display()
        ));
    }

    let target = Path::new(ErroggerConfig::CONFIG_FILES[0]);
    if force {
        remove_existing(target)?;
    }

    let mut file = create_exclusive(target)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to create {}", target.display()))?;
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
        .into_diagnostic()?;

    info!("Created {}", target.display());
    Ok(())
}

/// Removes a previous config file or a symlink in its place.
fn remove_existing(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => Err(miette::miette!(
            "{} is a directory and cannot be overwritten.",
            path.display()
        )),
        Ok(_) => fs::remove_file(path).into_diagnostic(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Creates `path`, failing if anything already exists there. Symlinks are
/// never followed.
fn create_exclusive(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}
