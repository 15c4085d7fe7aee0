//! # errogger_core
//!
//! Extraction pipeline for Errogger.
//!
//! This crate provides:
//! - Directory traversal with ignore lists and an extension whitelist
//! - Discovery and parsing of `/** ... */` documentation blocks
//! - Translation of `@error` blocks into an [`ErrorScheme`]
//! - Project configuration loading
//!
//! ## Example
//!
//! ```rust,ignore
//! use errogger_core::{ScanOptions, Scanner, translate};
//!
//! let scanner = Scanner::new(ScanOptions::new().whitelist_extension(".js"));
//! let result = scanner.scan("src/errors")?;
//!
//! let scheme = translate(&result, None);
//! println!("{}", scheme.to_json_pretty()?);
//! ```

mod config;
mod error;
pub mod extractor;
pub mod filter;
pub mod line_index;
pub mod normalize;
mod scanner;
mod scheme;
pub mod tag_parser;
mod types;
pub mod walker;

pub use config::{DEFAULT_CONFIG_TEMPLATE, ErroggerConfig, OptionsConfig, PathsConfig};
pub use error::ScanError;
pub use scanner::{ScanOptions, Scanner, extract_doc_blocks, scan};
pub use scheme::{
    ERROR_TAG, ErrorScheme, ProjectMeta, SchemeError, SchemeTag, error_name, translate,
};
pub use types::{DocBlock, ScanResult, Tag};
