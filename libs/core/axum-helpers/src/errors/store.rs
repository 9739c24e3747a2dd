//! Translation of data-store errors into HTTP outcomes.
//!
//! Repositories report failures as [`StoreError`]: a stable symbolic code plus
//! the engine's raw message. This module is the only place that decides how
//! those codes look on the wire, so any handler that returns a store error gets
//! the same treatment without code of its own.
//!
//! | Store code                    | HTTP | Body message             |
//! |-------------------------------|------|--------------------------|
//! | `UNIQUE_CONSTRAINT_VIOLATION` | 409  | sanitized engine message |
//! | `FOREIGN_KEY_VIOLATION`       | 409  | sanitized engine message |
//! | `RECORD_NOT_FOUND`            | 404  | sanitized engine message |
//! | anything else                 | 500  | generic message          |

use axum::http::StatusCode;
use database::{StoreError, StoreErrorCode};

use super::ErrorCode;

/// HTTP outcome for a store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub status: StatusCode,
    pub error_code: ErrorCode,
    /// Single-line message safe to send to clients
    pub message: String,
}

/// Maps a store error to its HTTP outcome.
///
/// The raw message is logged before anything is returned. Unrecognized codes
/// fall through to the generic 500 handler and their text never reaches the
/// client.
pub fn translate(err: &StoreError) -> Translation {
    let store_code = err.code();
    let log_code = log_code(store_code);

    tracing::error!(
        error_code = log_code.code(),
        store_code = store_code.as_str(),
        "{}",
        err.message()
    );

    match store_code {
        StoreErrorCode::UniqueConstraintViolation | StoreErrorCode::ForeignKeyViolation => {
            handled(StatusCode::CONFLICT, ErrorCode::Conflict, err)
        }
        StoreErrorCode::RecordNotFound => handled(StatusCode::NOT_FOUND, ErrorCode::NotFound, err),
        StoreErrorCode::Unrecognized => fallback(),
    }
}

/// Strips line breaks so the message stays a single transport-safe line.
pub fn sanitize(message: &str) -> String {
    message
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect()
}

fn handled(status: StatusCode, error_code: ErrorCode, err: &StoreError) -> Translation {
    let mut message = sanitize(err.message());
    if message.trim().is_empty() {
        message = error_code.default_message().to_string();
    }

    Translation {
        status,
        error_code,
        message,
    }
}

fn fallback() -> Translation {
    Translation {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error_code: ErrorCode::InternalError,
        message: ErrorCode::InternalError.default_message().to_string(),
    }
}

fn log_code(code: StoreErrorCode) -> ErrorCode {
    match code {
        StoreErrorCode::UniqueConstraintViolation => ErrorCode::DatabaseUniqueViolation,
        StoreErrorCode::ForeignKeyViolation => ErrorCode::DatabaseForeignKeyViolation,
        StoreErrorCode::RecordNotFound => ErrorCode::DatabaseRecordNotFound,
        StoreErrorCode::Unrecognized => ErrorCode::DatabaseUnhandled,
    }
}
