//! The status-or-value boundary.
//!
//! A native result is resolved exactly once: success moves the value to the
//! caller, failure becomes a [`BoundaryFailure`] carrying the operation name
//! and the original status. Nothing is retried or swallowed here.

use thiserror::Error;

use strand_types::{OperationName, Status, StatusCode, StatusOr};

/// The single error kind surfaced to callers of the bindings.
///
/// Its text is `"{operation}: {CODE}: {message}"`, so it always contains
/// both the failing operation's name and the native message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: {status}")]
pub struct BoundaryFailure {
    operation: OperationName,
    #[source]
    status: Status,
}

impl BoundaryFailure {
    #[must_use]
    pub fn new(operation: OperationName, status: Status) -> Self {
        Self { operation, status }
    }

    #[must_use]
    pub fn operation(&self) -> OperationName {
        self.operation
    }

    #[must_use]
    pub fn code(&self) -> StatusCode {
        self.status.code()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.status.message()
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn into_status(self) -> Status {
        self.status
    }
}

/// Yield the value of `result`, or raise a [`BoundaryFailure`] attributed to
/// `operation`.
///
/// Works for any payload: scalars, owned boxes, and vectors (element order is
/// untouched).
pub fn unwrap_or_raise<T>(
    operation: OperationName,
    result: StatusOr<T>,
) -> Result<T, BoundaryFailure> {
    result.map_err(|status| raise(operation, status))
}

/// The no-payload case: success is `()`, failure is raised as usual.
pub fn raise_if_error(
    operation: OperationName,
    result: StatusOr<()>,
) -> Result<(), BoundaryFailure> {
    unwrap_or_raise(operation, result)
}

fn raise(operation: OperationName, status: Status) -> BoundaryFailure {
    tracing::debug!(%operation, code = %status.code(), "Native operation failed");
    BoundaryFailure::new(operation, status)
}

/// Method form of [`unwrap_or_raise`].
pub trait StatusOrExt<T> {
    fn or_raise(self, operation: OperationName) -> Result<T, BoundaryFailure>;
}

impl<T> StatusOrExt<T> for StatusOr<T> {
    fn or_raise(self, operation: OperationName) -> Result<T, BoundaryFailure> {
        unwrap_or_raise(operation, self)
    }
}
