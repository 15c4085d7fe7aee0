//! Lazy directory traversal using the `walkdir` crate.
//!
//! The walker yields every regular file below a root directory, pruning
//! ignored directories before they are read. Traversal is pull-based:
//! nothing below a directory is listed until the iterator reaches it, and
//! dropping the iterator early leaves the rest of the tree untouched.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::filter::PathFilter;

/// Keeps an entry unless it is an ignored directory below the root.
type Prune = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Depth-first iterator over the files beneath a root directory.
///
/// Unreadable directories are skipped silently. The extension whitelist is
/// not applied here; every non-ignored file is yielded.
pub struct TreeWalker {
    inner: FilterEntry<walkdir::IntoIter, Prune>,
    error_count: usize,
}

impl TreeWalker {
    /// Creates a walker rooted at `root`.
    pub fn new(root: impl AsRef<Path>, filter: PathFilter) -> Self {
        // Runs before walkdir opens a directory, so ignored ones are never listed.
        let prune: Prune = Box::new(move |entry: &DirEntry| {
            let ignored = entry.depth() > 0
                && entry.file_type().is_dir()
                && filter.is_ignored_dir(&entry.file_name().to_string_lossy());
            if ignored {
                debug!("Skipping ignored directory: {}", entry.path().display());
            }
            !ignored
        });

        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(prune);

        Self {
            inner,
            error_count: 0,
        }
    }

    /// Number of entries that could not be read so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }
}

impl Iterator for TreeWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_file() => return Some(entry.into_path()),
                Ok(_) => continue,
                Err(e) => {
                    self.error_count += 1;
                    debug!("Walk error: {}", e);
                }
            }
        }
    }
}
