//! Error types for the icon batch.
//!
//! Every failure the batch can run into is a variant of [`Error`]. Only a few
//! of them stop a run (see [`Error::is_fatal`]); the rest are logged, recorded
//! in the [`BatchReport`](crate::BatchReport) and the batch moves on.

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single entry of the size list could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    #[error("entry is empty")]
    Empty,

    #[error("expected an integer")]
    NotANumber,

    #[error("size must be positive, got {0}")]
    NonPositive(i64),

    #[error("size is out of range")]
    OutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open input image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("failed to read config {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing required argument {0}")]
    MissingArgument(&'static str),

    #[error("invalid size {entry:?}: {source}")]
    InvalidSize { entry: String, source: SizeError },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("no {0}x{0} image was generated, skipping icon container")]
    MissingIconSize(u32),

    #[error("failed to create icon container {path}: {source}")]
    IcoCreate { path: PathBuf, source: io::Error },

    #[error("failed to encode icon container {path}: {source}")]
    IcoEncode { path: PathBuf, source: io::Error },
}

impl Error {
    /// Returns true for setup failures that abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. }
                | Self::CreateOutputDir { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
                | Self::MissingArgument(_)
        )
    }
}
