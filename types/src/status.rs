//! Failure status carried by native operations.
//!
//! A native operation returns [`StatusOr<T>`]: either the produced value or a
//! [`Status`] describing why it could not be produced. Operations with no
//! payload return `StatusOr<()>`.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{NonEmptyStaticStr, NonEmptyString};

/// Result of a native operation.
pub type StatusOr<T> = Result<T, Status>;

/// Canonical failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Cancelled,
    Unknown,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    FailedPrecondition,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
}

impl StatusCode {
    pub const ALL: [StatusCode; 12] = [
        StatusCode::Cancelled,
        StatusCode::Unknown,
        StatusCode::InvalidArgument,
        StatusCode::NotFound,
        StatusCode::AlreadyExists,
        StatusCode::PermissionDenied,
        StatusCode::FailedPrecondition,
        StatusCode::OutOfRange,
        StatusCode::Unimplemented,
        StatusCode::Internal,
        StatusCode::Unavailable,
        StatusCode::DataLoss,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::OutOfRange => "OUT_OF_RANGE",
            StatusCode::Unimplemented => "UNIMPLEMENTED",
            StatusCode::Internal => "INTERNAL",
            StatusCode::Unavailable => "UNAVAILABLE",
            StatusCode::DataLoss => "DATA_LOSS",
        }
    }

    /// Message used when a status is built without one.
    #[must_use]
    pub const fn description(self) -> NonEmptyStaticStr {
        NonEmptyStaticStr::new(match self {
            StatusCode::Cancelled => "operation was cancelled",
            StatusCode::Unknown => "unknown error",
            StatusCode::InvalidArgument => "invalid argument",
            StatusCode::NotFound => "not found",
            StatusCode::AlreadyExists => "already exists",
            StatusCode::PermissionDenied => "permission denied",
            StatusCode::FailedPrecondition => "failed precondition",
            StatusCode::OutOfRange => "out of range",
            StatusCode::Unimplemented => "not implemented",
            StatusCode::Internal => "internal error",
            StatusCode::Unavailable => "unavailable",
            StatusCode::DataLoss => "data loss",
        })
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<io::ErrorKind> for StatusCode {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => StatusCode::NotFound,
            io::ErrorKind::PermissionDenied => StatusCode::PermissionDenied,
            io::ErrorKind::AlreadyExists => StatusCode::AlreadyExists,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
                StatusCode::InvalidArgument
            }
            io::ErrorKind::UnexpectedEof => StatusCode::OutOfRange,
            io::ErrorKind::Interrupted => StatusCode::Cancelled,
            _ => StatusCode::Unknown,
        }
    }
}

/// A failed outcome: a code plus a human-readable, non-empty message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct Status {
    code: StatusCode,
    message: NonEmptyString,
}

impl Status {
    /// Build a status. A blank message is replaced by the code's description.
    #[must_use]
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: NonEmptyString::or_static(message, code.description()),
        }
    }

    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InvalidArgument, message)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Internal, message)
    }

    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unknown, message)
    }

    /// Map an IO error, prefixing its text with `context` (usually a path).
    #[must_use]
    pub fn from_io(context: impl fmt::Display, err: &io::Error) -> Self {
        Self::new(StatusCode::from(err.kind()), format!("{context}: {err}"))
    }

    #[must_use]
    pub fn code(&self) -> StatusCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<io::Error> for Status {
    fn from(err: io::Error) -> Self {
        Self::new(StatusCode::from(err.kind()), err.to_string())
    }
}
