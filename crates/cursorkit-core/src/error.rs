// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types and exit codes for the `cursorkit` binary.
//!
//! The cursor layer itself never fails: kind mismatches come back as sentinel
//! values (see the decoders). Errors only arise around it, when a syntax tree
//! is loaded, validated, or queried from the command line. Subsystem errors
//! are bridged into [`CursorError`] with `impl From`, and every variant maps to
//! a stable [`OutputErrorCode`].
//!
//! ## Exit codes
//!
//! - `2`: Invalid arguments (bad input from caller)
//! - `3`: Resolution errors (file or node not found)
//! - `4`: Invalid syntax tree (failed validation)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// File or node not found.
    ResolutionError = 3,
    /// The syntax tree failed validation.
    InvalidTree = 4,
    /// Internal errors.
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for the binary and the tree-loading paths.
#[derive(Debug, Error)]
pub enum CursorError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// File not found or unreadable.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// No node at the requested offset.
    #[error("no node found at offset {offset}")]
    NodeNotFound { offset: u32 },

    /// The syntax tree is malformed.
    #[error("invalid syntax tree: {message}")]
    InvalidTree { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<&CursorError> for OutputErrorCode {
    fn from(err: &CursorError) -> Self {
        match err {
            CursorError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            CursorError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            CursorError::NodeNotFound { .. } => OutputErrorCode::ResolutionError,
            CursorError::InvalidTree { .. } => OutputErrorCode::InvalidTree,
            CursorError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<CursorError> for OutputErrorCode {
    fn from(err: CursorError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl CursorError {
    pub fn invalid_args(message: impl Into<String>) -> Self {
        CursorError::InvalidArguments {
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        CursorError::FileNotFound { path: path.into() }
    }

    pub fn invalid_tree(message: impl Into<String>) -> Self {
        CursorError::InvalidTree {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CursorError::Internal {
            message: message.into(),
        }
    }

    /// The output code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

/// Result alias for fallible cursorkit operations.
pub type Result<T> = std::result::Result<T, CursorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CursorError::invalid_args("x").error_code().code(), 2);
        assert_eq!(CursorError::file_not_found("t.json").error_code().code(), 3);
        assert_eq!(CursorError::NodeNotFound { offset: 4 }.error_code().code(), 3);
        assert_eq!(CursorError::invalid_tree("bad").error_code().code(), 4);
        assert_eq!(CursorError::internal("bug").error_code().code(), 10);
    }

    #[test]
    fn test_error_display() {
        let err = CursorError::file_not_found("tree.json");
        assert_eq!(err.to_string(), "file not found: tree.json");

        let err = CursorError::NodeNotFound { offset: 17 };
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_code_display() {
        assert_eq!(OutputErrorCode::InternalError.to_string(), "10");
    }
}
