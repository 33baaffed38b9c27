use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building gallery items from a manifest or directory.
#[derive(Debug, Error)]
pub enum SourceError {
    /// I/O error while reading a manifest or walking a directory
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Manifest is not valid TOML
    #[error("Invalid TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest is not valid JSON
    #[error("Invalid JSON manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest extension is neither `.toml` nor `.json`
    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Requested gallery name does not exist in the manifest
    #[error("Gallery '{0}' not found in manifest")]
    GalleryNotFound(String),

    /// Directory walk failed
    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },
}

impl From<walkdir::Error> for SourceError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        Self::Scan {
            path,
            message: err.to_string(),
        }
    }
}
