//! Canonical `StatusOr` producers.
//!
//! Each pair covers one payload shape (scalar, string, owned box, vector,
//! no payload). The `*Fail` variants always fail with `INVALID_ARGUMENT`
//! and a message naming themselves.

use strand_types::{Status, StatusOr};

pub fn make_int_ok() -> StatusOr<i32> {
    Ok(42)
}

pub fn make_int_fail() -> StatusOr<i32> {
    Err(Status::invalid_argument("MakeIntFail"))
}

pub fn make_str_ok() -> StatusOr<String> {
    Ok("hello".to_string())
}

pub fn make_str_fail() -> StatusOr<String> {
    Err(Status::invalid_argument("MakeStrFail"))
}

pub fn make_int_unique_ptr_ok() -> StatusOr<Box<i32>> {
    Ok(Box::new(421))
}

pub fn make_int_unique_ptr_fail() -> StatusOr<Box<i32>> {
    Err(Status::invalid_argument("MakeIntUniquePtrFail"))
}

pub fn make_int_vector_ok() -> StatusOr<Vec<i32>> {
    Ok(vec![1, 2, 42])
}

pub fn make_int_vector_fail() -> StatusOr<Vec<i32>> {
    Err(Status::invalid_argument("MakeIntVectorFail"))
}

pub fn func_returning_status_ok() -> StatusOr<()> {
    Ok(())
}

pub fn func_returning_status_fail() -> StatusOr<()> {
    Err(Status::invalid_argument("FuncReturningStatusFail"))
}
