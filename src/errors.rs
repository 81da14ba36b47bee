//! Typed error definitions for nosync.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NosyncError {
    #[error("invalid path '{path}': {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("conflict at '{path}': {detail}")]
    Conflict { path: PathBuf, detail: String },

    #[error("unable to restore: expected symlink at '{link}' pointing to '{expected_target}'")]
    InvalidState {
        link: PathBuf,
        expected_target: String,
    },

    #[error("missing expected directory: {0}")]
    Inconsistent(PathBuf),

    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NosyncError {
    /// Stable machine-readable name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            NosyncError::InvalidInput { .. } => "invalid_input",
            NosyncError::NotFound(_) => "not_found",
            NosyncError::Conflict { .. } => "conflict",
            NosyncError::InvalidState { .. } => "invalid_state",
            NosyncError::Inconsistent(_) => "inconsistent",
            NosyncError::Io { .. } => "io_error",
        }
    }

    /// Numeric code for structured logging alongside `kind`.
    pub fn code(&self) -> i32 {
        match self {
            NosyncError::InvalidInput { .. } => 10,
            NosyncError::NotFound(_) => 11,
            NosyncError::Conflict { .. } => 12,
            NosyncError::InvalidState { .. } => 13,
            NosyncError::Inconsistent(_) => 14,
            NosyncError::Io { .. } => 15,
        }
    }

    pub(crate) fn invalid_input(path: &Path, reason: impl Into<String>) -> Self {
        NosyncError::InvalidInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn conflict(path: &Path, detail: impl Into<String>) -> Self {
        NosyncError::Conflict {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }

    /// Adapter for `map_err` on filesystem calls: names the syscall and path.
    pub(crate) fn io(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| NosyncError::Io { op, path, source }
    }
}
