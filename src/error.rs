//! Error types for pose decoding.
//!
//! Decoding a pose buffer can fail in exactly two ways: a read runs past the
//! end of the buffer, or the header describes a record shape the body decoder
//! cannot use. Both are terminal for the current decode call. A third variant
//! covers the file-loading conveniences, which sit outside the in-memory core.
//!
//! ```rust
//! use pose_format::PoseError;
//!
//! let error = PoseError::truncated("frame count", 12, 2, 0);
//! assert!(!error.is_retryable());
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pose operations.
pub type Result<T, E = PoseError> = std::result::Result<T, E>;

/// Main error type for pose decoding.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PoseError {
    #[error(
        "Truncated buffer reading {context} at offset {offset:#x} (need {needed} bytes, have {available})"
    )]
    TruncatedBuffer { context: &'static str, offset: usize, needed: usize, available: usize },

    #[error("Schema mismatch in component '{component}': {reason}")]
    SchemaMismatch { component: String, reason: String },

    #[error("Pose file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PoseError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// A malformed buffer stays malformed, so decode errors never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            PoseError::TruncatedBuffer { .. } => false,
            PoseError::SchemaMismatch { .. } => false,
            PoseError::File { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            PoseError::TruncatedBuffer { .. } => vec![
                "Check the buffer was fully read or downloaded",
                "Verify the file is a pose file and not another format",
                "Compare the file size against the source",
            ],
            PoseError::SchemaMismatch { .. } => vec![
                "Check the header component formats are non-empty",
                "Regenerate the file with a conforming encoder",
            ],
            PoseError::File { .. } => vec![
                "Check file exists and is readable",
                "Check file permissions",
            ],
        }
    }

    /// Helper constructor for truncated reads.
    pub fn truncated(
        context: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    ) -> Self {
        PoseError::TruncatedBuffer { context, offset, needed, available }
    }

    /// Helper constructor for header/body shape inconsistencies.
    pub fn schema_mismatch(component: impl Into<String>, reason: impl Into<String>) -> Self {
        PoseError::SchemaMismatch { component: component.into(), reason: reason.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        PoseError::File { path, source }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        PoseError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
