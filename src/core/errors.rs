//! Shared error types for the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lexmetric operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (unknown module names, bad option values).
    /// Always fatal: the run cannot proceed on inputs it cannot interpret.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed bucket manifest from the upstream grouping stage.
    #[error("Manifest error in {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// A single file's token stream could not be loaded or decoded.
    /// Recoverable: the file is skipped, siblings continue.
    #[error("Token stream error for {path}: {message}")]
    TokenStream { path: PathBuf, message: String },

    /// One metric module failed on one file. Recoverable: the module's keys
    /// are absent for that file, sibling modules are unaffected.
    #[error("Extractor '{module}' failed: {message}")]
    Extractor { module: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn token_stream(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::TokenStream {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn extractor(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extractor {
            module: module.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
