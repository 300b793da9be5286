//! Bindings for native verbosity control.

use strand_core::hts_verbose as native;
use strand_types::OperationName;

pub use strand_core::HtsLogLevel;

use crate::boundary::{BoundaryFailure, raise_if_error, unwrap_or_raise};

#[must_use]
pub fn get() -> HtsLogLevel {
    native::get()
}

pub fn set(level: HtsLogLevel) {
    native::set(level);
}

/// Set the level from a name such as `"info"` or `"HTS_LOG_DEBUG"`.
pub fn set_by_name(name: &str) -> Result<HtsLogLevel, BoundaryFailure> {
    let level = unwrap_or_raise(
        OperationName::new("hts_verbose.set"),
        name.parse::<HtsLogLevel>(),
    )?;
    native::set(level);
    Ok(level)
}

/// Set the level from its numeric htslib value.
pub fn set_raw(value: i32) -> Result<(), BoundaryFailure> {
    raise_if_error(OperationName::new("hts_verbose.set"), native::set_from_raw(value))
}
