//! Error types for linkdigest.
//!
//! Library crates use [`LinkDigestError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all linkdigest operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkDigestError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error during feed fetch or page fetch.
    #[error("network error: {0}")]
    Network(String),

    /// Feed or HTML parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A candidate link whose URL could not be parsed or requested.
    ///
    /// This is the only per-link failure kind the pipeline recovers from:
    /// the offending URL is logged, the link is dropped from the output set,
    /// and the run continues. Every other error aborts the run.
    #[error("invalid link: {0}")]
    InvalidLink(String),

    /// CSV writing or spreadsheet publishing error.
    #[error("export error: {0}")]
    Export(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LinkDigestError>;

impl LinkDigestError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
