//! Error types shared by the library helpers

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the file, clipboard and configuration helpers.
///
/// The prefix summarizer and the natural-sort helpers are total and never
/// produce one of these.
#[derive(Debug, Error)]
pub enum TidbitsError {
    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// No usable clipboard mechanism for the selected backend.
    #[error("Clipboard backend '{backend}' unavailable: {message}")]
    PlatformUnavailable { backend: String, message: String },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A wildcard probe could not be compiled.
    #[error("Invalid wildcard pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Moving-average window must hold at least one value.
    #[error("Moving average window must be at least 1")]
    InvalidWindow,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TidbitsError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn unavailable(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PlatformUnavailable { backend: backend.into(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, TidbitsError>;
