//! Core domain types for strand.
//!
//! This crate contains the status model shared by the native layer
//! (`strand-core`) and the caller-facing bindings (`strand-bindings`).
//! No IO, no global state, minimal dependencies.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod operation;
mod proofs;
mod status;

pub use operation::OperationName;
pub use proofs::{EmptyStringError, NonEmptyStaticStr, NonEmptyString};
pub use status::{Status, StatusCode, StatusOr};
