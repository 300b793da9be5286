//! Phred-scaled quality conversions.
//!
//! A Phred score `Q` relates to an error probability `p` by
//! `Q = -10 * log10(p)`. Functions here convert between `p`, `log10(p)`,
//! and `Q`. Out-of-domain inputs are reported as `INVALID_ARGUMENT`.

use strand_types::{Status, StatusCode, StatusOr};

fn ensure_not_nan(name: &str, value: f64) -> StatusOr<()> {
    if value.is_nan() {
        return Err(Status::invalid_argument(format!("{name} must not be NaN")));
    }
    Ok(())
}

fn ensure_probability(name: &str, value: f64) -> StatusOr<()> {
    ensure_not_nan(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(Status::invalid_argument(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}

fn ensure_log10_probability(name: &str, value: f64) -> StatusOr<()> {
    ensure_not_nan(name, value)?;
    if value > 0.0 {
        return Err(Status::invalid_argument(format!(
            "{name} must be <= 0, got {value}"
        )));
    }
    Ok(())
}

fn ensure_phred(value: f64) -> StatusOr<()> {
    ensure_not_nan("phred", value)?;
    if value < 0.0 {
        return Err(Status::invalid_argument(format!(
            "phred must be >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Phred score of `1 - 10^log10_ptrue`, or `value_if_not_finite` when that
/// score is infinite (i.e. `ptrue` is exactly 1).
pub fn log10_ptrue_to_phred(log10_ptrue: f64, value_if_not_finite: f64) -> StatusOr<f64> {
    ensure_log10_probability("log10_ptrue", log10_ptrue)?;
    let ptrue = 10f64.powf(log10_ptrue);
    let perror = 1.0 - ptrue;
    let phred = -10.0 * perror.log10();
    if phred.is_finite() {
        Ok(phred)
    } else {
        Ok(value_if_not_finite)
    }
}

pub fn phred_to_perror(phred: f64) -> StatusOr<f64> {
    ensure_phred(phred)?;
    Ok(10f64.powf(-phred / 10.0))
}

pub fn phred_to_log10_perror(phred: f64) -> StatusOr<f64> {
    ensure_phred(phred)?;
    Ok(-phred / 10.0)
}

pub fn perror_to_log10_perror(perror: f64) -> StatusOr<f64> {
    ensure_probability("perror", perror)?;
    Ok(perror.log10())
}

/// `perror == 0` yields positive infinity.
pub fn perror_to_phred(perror: f64) -> StatusOr<f64> {
    ensure_probability("perror", perror)?;
    Ok(-10.0 * perror.log10())
}

pub fn log10_perror_to_phred(log10_perror: f64) -> StatusOr<f64> {
    ensure_log10_probability("log10_perror", log10_perror)?;
    Ok(-10.0 * log10_perror)
}

pub fn perror_to_rounded_phred(perror: f64) -> StatusOr<i32> {
    let phred = perror_to_phred(perror)?;
    round_phred(phred)
}

pub fn log10_perror_to_rounded_phred(log10_perror: f64) -> StatusOr<i32> {
    let phred = log10_perror_to_phred(log10_perror)?;
    round_phred(phred)
}

pub fn log10_perror_to_perror(log10_perror: f64) -> StatusOr<f64> {
    ensure_log10_probability("log10_perror", log10_perror)?;
    Ok(10f64.powf(log10_perror))
}

/// Shift log10 likelihoods so the largest becomes 0. Order is preserved.
pub fn zero_shift_log10_probs(log10_probs: &[f64]) -> StatusOr<Vec<f64>> {
    if let Some(index) = log10_probs.iter().position(|p| p.is_nan()) {
        return Err(Status::invalid_argument(format!(
            "log10_probs[{index}] must not be NaN"
        )));
    }
    let Some(max) = log10_probs.iter().copied().reduce(f64::max) else {
        return Ok(Vec::new());
    };
    Ok(log10_probs.iter().map(|p| p - max).collect())
}

fn round_phred(phred: f64) -> StatusOr<i32> {
    let rounded = phred.round();
    if !rounded.is_finite() || rounded > f64::from(i32::MAX) {
        return Err(Status::new(
            StatusCode::OutOfRange,
            format!("phred {phred} cannot be rounded to a 32-bit integer"),
        ));
    }
    Ok(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn phred_and_perror_are_inverse() {
        assert!(approx(phred_to_perror(20.0).unwrap(), 0.01));
        assert!(approx(perror_to_phred(0.01).unwrap(), 20.0));
        assert!(approx(phred_to_log10_perror(30.0).unwrap(), -3.0));
        assert!(approx(log10_perror_to_phred(-3.0).unwrap(), 30.0));
        assert!(approx(log10_perror_to_perror(-2.0).unwrap(), 0.01));
        assert!(approx(perror_to_log10_perror(0.001).unwrap(), -3.0));
    }

    #[test]
    fn rounded_phred() {
        assert_eq!(perror_to_rounded_phred(0.011).unwrap(), 20);
        assert_eq!(log10_perror_to_rounded_phred(-1.26).unwrap(), 13);
    }

    #[test]
    fn rounding_infinite_phred_is_out_of_range() {
        let status = perror_to_rounded_phred(0.0).unwrap_err();
        assert_eq!(status.code(), StatusCode::OutOfRange);
    }

    #[test]
    fn log10_ptrue_uses_fallback_when_certain() {
        let phred = log10_ptrue_to_phred(-0.004_364_805_4, 99.0).unwrap();
        assert!((phred - 20.0).abs() < 1e-6);
        assert!(approx(log10_ptrue_to_phred(0.0, 99.0).unwrap(), 99.0));
    }

    #[test]
    fn out_of_domain_inputs_are_invalid_argument() {
        for status in [
            phred_to_perror(-1.0).unwrap_err(),
            perror_to_phred(1.5).unwrap_err(),
            perror_to_phred(f64::NAN).unwrap_err(),
            log10_perror_to_perror(0.5).unwrap_err(),
            log10_ptrue_to_phred(0.1, 0.0).unwrap_err(),
        ] {
            assert_eq!(status.code(), StatusCode::InvalidArgument);
        }
    }

    #[test]
    fn zero_shift_preserves_order() {
        let shifted = zero_shift_log10_probs(&[-1.0, -3.0, -0.5]).unwrap();
        assert_eq!(shifted, vec![-0.5, -2.5, 0.0]);
    }

    #[test]
    fn zero_shift_empty_and_nan() {
        assert!(zero_shift_log10_probs(&[]).unwrap().is_empty());
        let status = zero_shift_log10_probs(&[0.0, f64::NAN]).unwrap_err();
        assert!(status.message().contains("log10_probs[1]"));
    }
}
