//! Project configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::ScanError;
use crate::scanner::ScanOptions;
use crate::scheme::ProjectMeta;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration file written by `errogger init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"{
  // Project information copied into the generated scheme
  "meta": {
    "projectName": "Your Application Name",
    "description": "The Application description",
    "version": "1.0.0"
  },
  "paths": {
    // Directory to scan for error definitions
    "scanDir": "./src/errors",
    // Directory errogger-docs.json is written to
    "sourceOutputDir": "./docs"
  },
  "options": {
    // Directories to ignore in addition to the defaults
    "ignoreDirs": [],
    // File extensions to scan; leave empty to scan every file
    "whitelistExtensions": [".js"]
  }
}
"#;

/// Errogger project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErroggerConfig {
    /// Metadata copied into the generated scheme.
    #[serde(default)]
    pub meta: ProjectMeta,

    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Scan options.
    #[serde(default)]
    pub options: OptionsConfig,

    /// Directory relative paths are resolved against.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfig {
    #[serde(default)]
    pub ignore_dirs: Vec<String>,
    #[serde(default)]
    pub whitelist_extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

impl ErroggerConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] =
        &["errogger.config.jsonc", "errogger.config.json"];

    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ScanError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Parses configuration from JSON (comments and trailing commas allowed).
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ScanError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ScanError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ScanError::config(format!("Invalid config: {}", e)))
    }

    /// Scan options described by this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        let mut options = ScanOptions::new().parallel(self.options.parallel);
        options.ignore_dirs = self.options.ignore_dirs.clone();
        options.whitelist_extensions = self.options.whitelist_extensions.clone();
        if let Some(max) = self.options.max_file_size {
            options.max_file_size = max;
        }
        options
    }

    /// Configured scan directory, resolved against `base_dir`.
    pub fn scan_dir(&self) -> Option<PathBuf> {
        self.paths.scan_dir.as_deref().map(|p| self.resolve(p))
    }

    /// Configured output directory, resolved against `base_dir`.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.paths.source_output_dir.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}
