//! Scan orchestration.
//!
//! Drives the walker over a directory tree and runs every eligible file
//! through block extraction, line mapping, normalization and tag parsing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::ScanError;
use crate::extractor::find_blocks;
use crate::filter::{DEFAULT_MAX_FILE_SIZE, PathFilter};
use crate::line_index::LineIndex;
use crate::normalize::normalize;
use crate::tag_parser::parse_lines;
use crate::types::{DocBlock, ScanResult};
use crate::walker::TreeWalker;

/// Options for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory names to skip, in addition to the built-in defaults.
    pub ignore_dirs: Vec<String>,
    /// Extensions (e.g. `.js`) of files to read. Empty means all files.
    pub whitelist_extensions: Vec<String>,
    /// Files larger than this many bytes are skipped.
    /// Default: 2 MiB
    pub max_file_size: u64,
    /// Whether to read and parse files on the rayon thread pool.
    /// Results are identical to a sequential scan.
    /// Default: false
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_dirs: Vec::new(),
            whitelist_extensions: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            parallel: false,
        }
    }
}

impl ScanOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory name to skip.
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.ignore_dirs.push(name.into());
        self
    }

    /// Adds an extension to the whitelist.
    pub fn whitelist_extension(mut self, ext: impl Into<String>) -> Self {
        self.whitelist_extensions.push(ext.into());
        self
    }

    /// Sets the file size cap in bytes.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Enables or disables parallel file processing.
    pub fn parallel(mut self, yes: bool) -> Self {
        self.parallel = yes;
        self
    }

    fn path_filter(&self) -> PathFilter {
        PathFilter::new(
            &self.ignore_dirs,
            &self.whitelist_extensions,
            self.max_file_size,
        )
    }
}

/// What happened to a single walked file.
#[derive(Debug)]
enum FileOutcome {
    Scanned(Vec<DocBlock>),
    Skipped(SkipReason),
}

#[derive(Debug)]
enum SkipReason {
    Ineligible,
    TooLarge(u64),
    Unreadable(io::Error),
}

/// Scans directory trees for documentation blocks.
pub struct Scanner {
    options: ScanOptions,
    filter: PathFilter,
}

impl Scanner {
    /// Creates a scanner with the given options.
    pub fn new(options: ScanOptions) -> Self {
        let filter = options.path_filter();
        Self { options, filter }
    }

    /// Creates a scanner with default options.
    pub fn with_defaults() -> Self {
        Self::new(ScanOptions::default())
    }

    /// Scans every file below `root`.
    ///
    /// Only a missing or unusable root fails the scan. Files that cannot be
    /// used for any reason are counted in `skipped_files`.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanResult, ScanError> {
        let root = root.as_ref();
        let metadata = match fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound(root.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        info!("Scanning directory: {}", root.display());

        let mut walker = TreeWalker::new(root, self.filter.clone());
        let mut result = ScanResult::new(root);

        if self.options.parallel {
            let paths: Vec<PathBuf> = walker.by_ref().collect();
            // par_iter().collect() keeps input order, so folding stays deterministic.
            let outcomes: Vec<FileOutcome> = paths
                .par_iter()
                .map(|path| self.process_file(path))
                .collect();
            for outcome in outcomes {
                record(&mut result, outcome);
            }
        } else {
            for path in walker.by_ref() {
                let outcome = self.process_file(&path);
                record(&mut result, outcome);
            }
        }

        info!(
            "Scanned {} file(s), skipped {} file(s), found {} block(s), {} walk error(s)",
            result.scanned_files,
            result.skipped_files,
            result.blocks.len(),
            walker.error_count()
        );

        Ok(result)
    }

    fn process_file(&self, path: &Path) -> FileOutcome {
        let outcome = match self.read_if_eligible(path) {
            Ok(text) => FileOutcome::Scanned(extract_doc_blocks(path, &text)),
            Err(reason) => FileOutcome::Skipped(reason),
        };

        match &outcome {
            FileOutcome::Scanned(blocks) => {
                debug!("Scanned {} ({} block(s))", path.display(), blocks.len());
            }
            FileOutcome::Skipped(SkipReason::Ineligible) => {
                debug!("Skipped {}: extension not whitelisted", path.display());
            }
            FileOutcome::Skipped(SkipReason::TooLarge(len)) => {
                debug!("Skipped {}: {} bytes exceeds size cap", path.display(), len);
            }
            FileOutcome::Skipped(SkipReason::Unreadable(e)) => {
                debug!("Skipped {}: {}", path.display(), e);
            }
        }

        outcome
    }

    fn read_if_eligible(&self, path: &Path) -> Result<String, SkipReason> {
        if !self.filter.is_eligible_file(path) {
            return Err(SkipReason::Ineligible);
        }

        let len = fs::metadata(path).map_err(SkipReason::Unreadable)?.len();
        if self.filter.exceeds_size_cap(len) {
            return Err(SkipReason::TooLarge(len));
        }

        let bytes = fs::read(path).map_err(SkipReason::Unreadable)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn record(result: &mut ScanResult, outcome: FileOutcome) {
    match outcome {
        FileOutcome::Scanned(blocks) => {
            result.scanned_files += 1;
            result.blocks.extend(blocks);
        }
        FileOutcome::Skipped(_) => result.skipped_files += 1,
    }
}

/// Extracts and parses every documentation block in `text`.
pub fn extract_doc_blocks(path: &Path, text: &str) -> Vec<DocBlock> {
    let found = find_blocks(text);
    if found.is_empty() {
        return Vec::new();
    }

    let lines = LineIndex::new(text);

    found
        .into_iter()
        .map(|block| {
            let parsed = parse_lines(&normalize(block.raw));
            DocBlock {
                file_path: path.to_path_buf(),
                start_line: lines.line_of(block.offset),
                raw: block.raw.to_string(),
                description: parsed.description,
                tags: parsed.tags,
            }
        })
        .collect()
}

/// Scans `root` with `options`.
pub fn scan(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult, ScanError> {
    Scanner::new(options.clone()).scan(root)
}
