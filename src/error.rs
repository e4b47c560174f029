//! Error types for bangbang
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (unknown column/card/comment, bad reorder payload)
//! - 4: Operation failed (I/O, lock contention, corrupt board file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the bangbang CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for board operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Column order lists {actual} ids but the board has {expected} columns")]
    CountMismatch { expected: usize, actual: usize },

    // Operation failures (exit code 4)
    #[error("Board file not found: {0}")]
    BoardNotFound(PathBuf),

    #[error("Malformed board file: {0}")]
    MalformedDocument(String),

    #[error("Board front matter does not match the board schema: {0}")]
    SchemaMismatch(#[source] serde_yaml_ng::Error),

    #[error("Failed to serialize board: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::ColumnNotFound(_)
            | Error::CardNotFound(_)
            | Error::CommentNotFound(_)
            | Error::CountMismatch { .. } => exit_codes::USER_ERROR,

            // Operation failures
            Error::BoardNotFound(_)
            | Error::MalformedDocument(_)
            | Error::SchemaMismatch(_)
            | Error::Serialize(_)
            | Error::LockFailed(_)
            | Error::Io(_)
            | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Stable machine-readable kind for JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Error::ColumnNotFound(_) => "column_not_found",
            Error::CardNotFound(_) => "card_not_found",
            Error::CommentNotFound(_) => "comment_not_found",
            Error::CountMismatch { .. } => "count_mismatch",
            Error::BoardNotFound(_) => "board_not_found",
            Error::MalformedDocument(_) => "malformed_document",
            Error::SchemaMismatch(_) => "schema_mismatch",
            Error::Serialize(_) => "serialize_failed",
            Error::LockFailed(_) => "lock_failed",
            Error::Io(_) => "io_error",
            Error::Json(_) => "json_error",
        }
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_are_user_errors() {
        assert_eq!(
            Error::ColumnNotFound("todo".into()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            Error::CardNotFound("task-1".into()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            Error::CountMismatch {
                expected: 4,
                actual: 3
            }
            .exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn corrupt_file_is_operation_failure() {
        let err = Error::MalformedDocument("front matter start not found".into());
        assert_eq!(err.exit_code(), exit_codes::OPERATION_FAILED);
        assert_eq!(err.kind(), "malformed_document");
    }
}
