//! Error types for the diff crate.

/// Errors that can occur while preparing a comparison.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A textual path could not be parsed.
    #[error("invalid settings path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
