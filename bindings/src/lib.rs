//! Caller-facing bindings for the strand native layer.
//!
//! Native operations report failure as a [`Status`](strand_types::Status).
//! Every wrapper here passes the native result through the boundary in
//! [`boundary`], so callers see either the value (ownership moved to them)
//! or a [`BoundaryFailure`] naming the operation that failed.
//!
//! ```
//! use strand_bindings::statusor_examples;
//!
//! assert_eq!(statusor_examples::make_int_ok().unwrap(), 42);
//! let err = statusor_examples::make_int_fail().unwrap_err();
//! assert!(err.to_string().contains("MakeIntFail"));
//! ```

pub mod boundary;
pub mod gfile;
pub mod hts_verbose;
pub mod math;
pub mod statusor_examples;

pub use boundary::{BoundaryFailure, StatusOrExt, raise_if_error, unwrap_or_raise};
pub use strand_core::HtsLogLevel;
pub use strand_types::{OperationName, Status, StatusCode, StatusOr};
