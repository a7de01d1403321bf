//! Error taxonomy for snapmark operations.
//!
//! Errors are detected at the file I/O and decode boundaries and reported
//! once; there are no retries and no continuation past a failed input. Each
//! error maps to a stable code for programmatic handling and test assertions.

use std::path::Path;
use thiserror::Error;

/// Result type alias using SnapmarkError
pub type Result<T> = std::result::Result<T, SnapmarkError>;

/// Canonical error type for the snapmark pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapmarkError {
    /// An input path does not exist
    #[error("input file not found: {path}")]
    MissingInput { path: String },

    /// An input exists but could not be read
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    /// Input bytes are not valid UTF-8 JSON, or the snapshot shape is wrong
    #[error("failed to decode snapshot: {reason}")]
    Decode { reason: String },

    /// A field value could not be re-serialized during rendering
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// The annotated output could not be written
    #[error("failed to write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl SnapmarkError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SnapmarkError::MissingInput { .. } => "ERR_MISSING_INPUT",
            SnapmarkError::Read { .. } => "ERR_READ",
            SnapmarkError::Decode { .. } => "ERR_DECODE",
            SnapmarkError::Serialization { .. } => "ERR_SERIALIZATION",
            SnapmarkError::Write { .. } => "ERR_WRITE",
        }
    }
}

/// Create a decode error from any displayable diagnostic
pub fn decode_error(reason: impl std::fmt::Display) -> SnapmarkError {
    SnapmarkError::Decode {
        reason: reason.to_string(),
    }
}

/// Create a read error for a path
pub fn read_error(path: &Path, err: std::io::Error) -> SnapmarkError {
    SnapmarkError::Read {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Create a write error for a path
pub fn write_error(path: &Path, err: std::io::Error) -> SnapmarkError {
    SnapmarkError::Write {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
