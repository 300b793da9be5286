//! Bindings for the canonical `StatusOr` producers.

use strand_core::statusor_examples as native;
use strand_types::OperationName;

use crate::boundary::{BoundaryFailure, raise_if_error, unwrap_or_raise};

pub const MAKE_INT_OK: OperationName = OperationName::new("MakeIntOK");
pub const MAKE_INT_FAIL: OperationName = OperationName::new("MakeIntFail");
pub const MAKE_STR_OK: OperationName = OperationName::new("MakeStrOK");
pub const MAKE_STR_FAIL: OperationName = OperationName::new("MakeStrFail");
pub const MAKE_INT_UNIQUE_PTR_OK: OperationName = OperationName::new("MakeIntUniquePtrOK");
pub const MAKE_INT_UNIQUE_PTR_FAIL: OperationName = OperationName::new("MakeIntUniquePtrFail");
pub const MAKE_INT_VECTOR_OK: OperationName = OperationName::new("MakeIntVectorOK");
pub const MAKE_INT_VECTOR_FAIL: OperationName = OperationName::new("MakeIntVectorFail");
pub const FUNC_RETURNING_STATUS_OK: OperationName = OperationName::new("FuncReturningStatusOK");
pub const FUNC_RETURNING_STATUS_FAIL: OperationName =
    OperationName::new("FuncReturningStatusFail");

pub fn make_int_ok() -> Result<i32, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_OK, native::make_int_ok())
}

pub fn make_int_fail() -> Result<i32, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_FAIL, native::make_int_fail())
}

pub fn make_str_ok() -> Result<String, BoundaryFailure> {
    unwrap_or_raise(MAKE_STR_OK, native::make_str_ok())
}

pub fn make_str_fail() -> Result<String, BoundaryFailure> {
    unwrap_or_raise(MAKE_STR_FAIL, native::make_str_fail())
}

pub fn make_int_unique_ptr_ok() -> Result<Box<i32>, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_UNIQUE_PTR_OK, native::make_int_unique_ptr_ok())
}

pub fn make_int_unique_ptr_fail() -> Result<Box<i32>, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_UNIQUE_PTR_FAIL, native::make_int_unique_ptr_fail())
}

pub fn make_int_vector_ok() -> Result<Vec<i32>, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_VECTOR_OK, native::make_int_vector_ok())
}

pub fn make_int_vector_fail() -> Result<Vec<i32>, BoundaryFailure> {
    unwrap_or_raise(MAKE_INT_VECTOR_FAIL, native::make_int_vector_fail())
}

pub fn func_returning_status_ok() -> Result<(), BoundaryFailure> {
    raise_if_error(FUNC_RETURNING_STATUS_OK, native::func_returning_status_ok())
}

pub fn func_returning_status_fail() -> Result<(), BoundaryFailure> {
    raise_if_error(FUNC_RETURNING_STATUS_FAIL, native::func_returning_status_fail())
}
