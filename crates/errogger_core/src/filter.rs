//! Path filtering for directory traversal and file eligibility.

use std::collections::HashSet;
use std::path::Path;

/// Directory names that are never descended into.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    ".next",
    ".turbo",
    ".cache",
    "coverage",
];

/// Files larger than this many bytes are skipped.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Returns true if the file at `path` should be read.
///
/// An empty whitelist accepts every file. Otherwise the lower-cased
/// extension (with its leading dot) must appear in the lower-cased whitelist.
pub fn is_eligible_file(path: &Path, whitelist: &[String]) -> bool {
    if whitelist.is_empty() {
        return true;
    }

    let Some(ext) = path.extension().map(|e| e.to_string_lossy()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());

    whitelist
        .iter()
        .any(|allowed| normalize_extension(allowed) == ext)
}

/// Returns true if a directory named `name` must be skipped.
///
/// Comparison is exact and case-sensitive.
pub fn is_ignored_dir(name: &str, ignore_set: &HashSet<String>) -> bool {
    ignore_set.contains(name)
}

/// Lower-cases an extension and makes sure it starts with a dot.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Filter state prepared once per scan.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignore_dirs: HashSet<String>,
    whitelist: Vec<String>,
    max_file_size: u64,
}

impl PathFilter {
    /// Builds a filter from caller options merged with the built-in defaults.
    pub fn new(ignore_dirs: &[String], whitelist: &[String], max_file_size: u64) -> Self {
        let ignore_dirs = DEFAULT_IGNORE_DIRS
            .iter()
            .map(|d| d.to_string())
            .chain(ignore_dirs.iter().cloned())
            .collect();

        Self {
            ignore_dirs,
            whitelist: whitelist.iter().map(|e| normalize_extension(e)).collect(),
            max_file_size,
        }
    }

    /// Returns true if the directory name is in the merged ignore set.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        is_ignored_dir(name, &self.ignore_dirs)
    }

    /// Returns true if the file's extension passes the whitelist.
    pub fn is_eligible_file(&self, path: &Path) -> bool {
        is_eligible_file(path, &self.whitelist)
    }

    /// Returns true if a file of `len` bytes is over the size cap.
    pub fn exceeds_size_cap(&self, len: u64) -> bool {
        len > self.max_file_size
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(&[], &[], DEFAULT_MAX_FILE_SIZE)
    }
}
