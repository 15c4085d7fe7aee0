//! Translation of scan results into the error documentation scheme.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{DocBlock, ScanResult};

/// Name of the tag that marks a block as an error entry.
pub const ERROR_TAG: &str = "error";

const DEFAULT_SCHEME_NAME: &str = "Generated Errogger Scheme";
const DEFAULT_SCHEME_VERSION: &str = "1.0.0";

/// Project metadata supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
}

/// Final documentation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorScheme {
    pub name: String,
    pub description: String,
    pub version: String,
    pub errors: Vec<SchemeError>,
}

/// A documented error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeError {
    pub name: String,
    pub description: String,
    pub tags: Vec<SchemeTag>,
}

/// A tag of a documented error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTag {
    pub name: String,
    pub description: String,
}

impl ErrorScheme {
    /// Renders the scheme as JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the scheme from a scan result.
///
/// Blocks without an `@error` tag are dropped. Each metadata field falls
/// back to a generated value when `meta` is absent or the field is empty.
pub fn translate(scan: &ScanResult, meta: Option<&ProjectMeta>) -> ErrorScheme {
    let name = meta_field(meta, |m| m.project_name.as_str())
        .unwrap_or_else(|| DEFAULT_SCHEME_NAME.to_string());
    let description = meta_field(meta, |m| m.description.as_str()).unwrap_or_else(|| {
        format!(
            "Errogger documentation generated from scanning {} file(s) with {} error block(s).",
            scan.scanned_files,
            scan.blocks.len()
        )
    });
    let version = meta_field(meta, |m| m.version.as_str())
        .unwrap_or_else(|| DEFAULT_SCHEME_VERSION.to_string());

    let errors = scan.blocks.iter().filter_map(to_scheme_error).collect();

    ErrorScheme {
        name,
        description,
        version,
        errors,
    }
}

fn meta_field(
    meta: Option<&ProjectMeta>,
    pick: impl Fn(&ProjectMeta) -> &str,
) -> Option<String> {
    meta.map(pick)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn to_scheme_error(block: &DocBlock) -> Option<SchemeError> {
    if block.find_tag(ERROR_TAG).is_none() {
        debug!(
            "Skipping block without @{} tag in {}:{}",
            ERROR_TAG,
            block.file_path.display(),
            block.start_line
        );
        return None;
    }

    Some(SchemeError {
        name: error_name(block),
        description: block.description.clone(),
        tags: block
            .tags
            .iter()
            .map(|tag| SchemeTag {
                name: tag.name.clone(),
                description: tag.raw.trim().to_string(),
            })
            .collect(),
    })
}

/// Name of the error a block documents.
///
/// The first word of the `@error` value, or the file stem when the value
/// is empty.
pub fn error_name(block: &DocBlock) -> String {
    if let Some(first) = block
        .find_tag(ERROR_TAG)
        .and_then(|tag| tag.raw.split_whitespace().next())
    {
        return first.to_string();
    }

    file_stem(&block.file_path)
}

/// File name with its last extension removed.
///
/// A leading dot counts as an extension separator, so `.env` becomes empty.
fn file_stem(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => file_name[..dot].to_string(),
        _ => file_name,
    }
}
