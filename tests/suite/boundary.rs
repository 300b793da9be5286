//! Boundary conversion properties

use std::thread;

use strand_bindings::{
    OperationName, Status, StatusCode, StatusOr, StatusOrExt, raise_if_error, unwrap_or_raise,
};

const OP: OperationName = OperationName::new("PropertyCheck");

#[test]
fn success_returns_equal_value_for_scalars() {
    for value in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
        assert_eq!(unwrap_or_raise(OP, Ok(value)).unwrap(), value);
    }
    for value in ["", "hello", "多字节"] {
        assert_eq!(unwrap_or_raise(OP, Ok(value.to_string())).unwrap(), value);
    }
}

#[test]
fn success_preserves_sequence_order() {
    let produced: Vec<u32> = (0..1000).rev().collect();
    let returned = unwrap_or_raise(OP, Ok(produced.clone())).unwrap();
    assert_eq!(returned, produced);

    let empty: Vec<u32> = unwrap_or_raise(OP, Ok(Vec::new())).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn failure_text_contains_operation_and_message_for_every_code() {
    for code in StatusCode::ALL {
        let message = format!("native said no ({code})");
        let result: StatusOr<Vec<u8>> = Err(Status::new(code, message.clone()));
        let err = unwrap_or_raise(OP, result).unwrap_err();
        let text = err.to_string();

        assert!(text.contains("PropertyCheck"), "{text}");
        assert!(text.contains(&message), "{text}");
        assert_eq!(err.code(), code);
    }
}

#[test]
fn blank_native_message_still_renders_text() {
    let err = raise_if_error(OP, Err(Status::new(StatusCode::DataLoss, ""))).unwrap_err();
    assert_eq!(err.to_string(), "PropertyCheck: DATA_LOSS: data loss");
}

#[test]
fn void_success_is_distinguishable_from_failure() {
    assert!(raise_if_error(OP, Ok(())).is_ok());
    assert!(raise_if_error(OP, Err(Status::unknown("x"))).is_err());
}

#[test]
fn independent_conversions_run_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let result: StatusOr<Vec<i32>> = if i % 2 == 0 {
                    Ok((0..i).collect())
                } else {
                    Err(Status::internal(format!("worker {i}")))
                };
                result.or_raise(OP)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(outcome.unwrap().len(), i);
        } else {
            assert!(outcome.unwrap_err().message().ends_with(&format!("worker {i}")));
        }
    }
}
