//! Phred conversion bindings

use strand_bindings::math;

use crate::common::assert_raises_regex;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn conversions_return_values() {
    assert!(close(math::perror_to_phred(0.001).unwrap(), 30.0));
    assert!(close(math::phred_to_perror(10.0).unwrap(), 0.1));
    assert!(close(math::phred_to_log10_perror(25.0).unwrap(), -2.5));
    assert!(close(math::log10_perror_to_phred(-0.5).unwrap(), 5.0));
    assert!(close(math::log10_perror_to_perror(-1.0).unwrap(), 0.1));
    assert!(close(math::perror_to_log10_perror(0.1).unwrap(), -1.0));
    assert_eq!(math::perror_to_rounded_phred(0.0005).unwrap(), 33);
    assert_eq!(math::log10_perror_to_rounded_phred(-2.04).unwrap(), 20);
    assert!(close(math::log10_ptrue_to_phred(0.0, 255.0).unwrap(), 255.0));
}

#[test]
fn zero_shift_returns_ordered_sequence() {
    let shifted = math::zero_shift_log10_probs(&[-2.0, -0.25, -4.0]).unwrap();
    assert_eq!(shifted, vec![-1.75, 0.0, -3.75]);
}

#[test]
fn invalid_inputs_raise_with_operation_name() {
    assert_raises_regex(math::perror_to_phred(-0.1), "^perror_to_phred: INVALID_ARGUMENT");
    assert_raises_regex(math::phred_to_perror(f64::NAN), "^phred_to_perror: .*NaN");
    assert_raises_regex(
        math::log10_perror_to_perror(1.0),
        r"^log10_perror_to_perror: .*must be <= 0",
    );
    assert_raises_regex(
        math::zero_shift_log10_probs(&[f64::NAN]),
        r"^zero_shift_log10_probs: .*log10_probs\[0\]",
    );
    assert_raises_regex(
        math::perror_to_rounded_phred(0.0),
        "^perror_to_rounded_phred: OUT_OF_RANGE",
    );
}
