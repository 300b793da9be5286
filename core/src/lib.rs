//! Native layer for strand.
//!
//! Every fallible operation here reports failure as a [`Status`] inside a
//! [`StatusOr`]; nothing in this crate panics on bad input. Callers that want
//! ordinary Rust errors go through `strand-bindings`.
//!
//! - **`statusor_examples`**: canonical success/failure demo operations
//! - **`math`**: Phred-scaled quality and probability conversions
//! - **`gfile`**: file handles, existence checks, and globbing
//! - **`hts_verbose`**: process-wide native log verbosity

pub mod gfile;
pub mod hts_verbose;
pub mod math;
pub mod statusor_examples;

pub use hts_verbose::HtsLogLevel;
pub use strand_types::{Status, StatusCode, StatusOr};
