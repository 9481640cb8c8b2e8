//! Serializable batch configuration.
//!
//! A [`BatchConfig`] carries every setting of one run. It can be built in
//! code, loaded from a JSON file, or assembled from command-line flags.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "input": "logo.png",
//!   "output": "icons",
//!   "sizes": "16,32,256",
//!   "format": "png",
//!   "mask": { "kind": "corner", "radius": 48.0 }
//! }
//! ```
//!
//! Only `input` and `output` are required; the rest fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mask::MaskStrategy;
use crate::size::DEFAULT_SIZES;

/// Format used when none is requested.
pub const DEFAULT_FORMAT: &str = "png";

/// Everything one batch run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Source image path.
    pub input: PathBuf,

    /// Output directory, created if absent.
    pub output: PathBuf,

    /// Comma-separated list of square edge lengths.
    #[serde(default = "default_sizes")]
    pub sizes: String,

    /// Output format name: `png`, `jpg` or `jpeg`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Masking applied to every size.
    #[serde(default)]
    pub mask: MaskStrategy,
}

fn default_sizes() -> String {
    DEFAULT_SIZES.to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl BatchConfig {
    /// Creates a config with default sizes, format and mask.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sizes: default_sizes(),
            format: default_format(),
            mask: MaskStrategy::default(),
        }
    }

    /// Sets the size list.
    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the output format name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the mask strategy.
    pub fn with_mask(mut self, mask: MaskStrategy) -> Self {
        self.mask = mask;
        self
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
