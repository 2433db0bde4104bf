//! Error types for the codemod.
//!
//! Resolution misses are never errors: the resolver returns `None` and the
//! rewrite driver returns `Ok(None)`. These variants cover the failures a
//! caller cannot recover from on its own.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while compiling patterns, reading projects, or
/// applying rewrites.
#[derive(Debug, Error)]
pub enum CodemodError {
    /// IO error during read/write.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error in a project manifest.
    #[error("JSON error in {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// A structural pattern that does not parse cleanly.
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Two text edits touch the same range.
    #[error("Overlapping edits at {first:?} and {second:?}")]
    OverlappingEdits {
        first: std::ops::Range<usize>,
        second: std::ops::Range<usize>,
    },

    /// A text edit outside the source or not on a character boundary.
    #[error("Invalid edit at {range:?}: {message}")]
    InvalidEdit {
        range: std::ops::Range<usize>,
        message: String,
    },

    /// A path that cannot be interpreted (no file name, not UTF-8, ...).
    #[error("Invalid path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },
}

impl CodemodError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error for the manifest at `path`.
    pub fn json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Json {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CodemodError> = std::result::Result<T, E>;
