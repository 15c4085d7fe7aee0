//! Scan result types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A named annotation inside a documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name without the leading `@` (e.g. `error`, `param`).
    pub name: String,
    /// Tag value, possibly spanning several lines.
    pub raw: String,
}

impl Tag {
    /// Creates a new tag.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// A parsed documentation comment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocBlock {
    /// File the block was found in.
    pub file_path: PathBuf,
    /// 1-based line number of the opening delimiter.
    pub start_line: usize,
    /// Verbatim block text including delimiters.
    pub raw: String,
    /// Free text before the first tag.
    pub description: String,
    /// Tags in order of appearance.
    pub tags: Vec<Tag>,
}

impl DocBlock {
    /// Returns the first tag named `name`.
    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}

/// Outcome of scanning a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Directory the scan started from.
    pub root_dir: PathBuf,
    /// Blocks in file visitation order, then text order.
    pub blocks: Vec<DocBlock>,
    /// Files that were read and searched.
    pub scanned_files: usize,
    /// Files that were ineligible or unreadable.
    pub skipped_files: usize,
}

impl ScanResult {
    /// Creates an empty result for `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            blocks: Vec::new(),
            scanned_files: 0,
            skipped_files: 0,
        }
    }
}
