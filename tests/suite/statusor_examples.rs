//! StatusOr example bindings

use strand_bindings::StatusCode;
use strand_bindings::statusor_examples::{
    func_returning_status_fail, func_returning_status_ok, make_int_fail, make_int_ok,
    make_int_unique_ptr_fail, make_int_unique_ptr_ok, make_int_vector_fail, make_int_vector_ok,
    make_str_fail, make_str_ok,
};

use crate::common::assert_raises_regex;

#[test]
fn make_int_ok_returns_value() {
    assert_eq!(make_int_ok().unwrap(), 42);
}

#[test]
fn make_int_fail_raises() {
    let err = assert_raises_regex(make_int_fail(), "MakeIntFail");
    assert_eq!(err.code(), StatusCode::InvalidArgument);
}

#[test]
fn make_str_ok_returns_value() {
    assert_eq!(make_str_ok().unwrap(), "hello");
}

#[test]
fn make_str_fail_raises() {
    assert_raises_regex(make_str_fail(), "MakeStrFail");
}

#[test]
fn make_int_unique_ptr_ok_moves_box() {
    let boxed: Box<i32> = make_int_unique_ptr_ok().unwrap();
    assert_eq!(*boxed, 421);
}

#[test]
fn make_int_unique_ptr_fail_raises() {
    assert_raises_regex(make_int_unique_ptr_fail(), "MakeIntUniquePtrFail");
}

#[test]
fn make_int_vector_ok_keeps_order() {
    assert_eq!(make_int_vector_ok().unwrap(), vec![1, 2, 42]);
}

#[test]
fn make_int_vector_fail_raises() {
    assert_raises_regex(make_int_vector_fail(), "MakeIntVectorFail");
}

#[test]
fn returning_status_ok_returns_unit() {
    let () = func_returning_status_ok().unwrap();
}

#[test]
fn returning_status_fail_raises() {
    let err = assert_raises_regex(
        func_returning_status_fail(),
        "^FuncReturningStatusFail: INVALID_ARGUMENT: FuncReturningStatusFail$",
    );
    assert_eq!(err.operation().as_str(), "FuncReturningStatusFail");
}
