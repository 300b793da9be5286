//! Bindings for Phred-scaled quality conversions.

use strand_core::math as native;
use strand_types::OperationName;

use crate::boundary::{BoundaryFailure, StatusOrExt};

pub fn log10_ptrue_to_phred(
    log10_ptrue: f64,
    value_if_not_finite: f64,
) -> Result<f64, BoundaryFailure> {
    native::log10_ptrue_to_phred(log10_ptrue, value_if_not_finite)
        .or_raise(OperationName::new("log10_ptrue_to_phred"))
}

pub fn phred_to_perror(phred: f64) -> Result<f64, BoundaryFailure> {
    native::phred_to_perror(phred).or_raise(OperationName::new("phred_to_perror"))
}

pub fn phred_to_log10_perror(phred: f64) -> Result<f64, BoundaryFailure> {
    native::phred_to_log10_perror(phred).or_raise(OperationName::new("phred_to_log10_perror"))
}

pub fn perror_to_log10_perror(perror: f64) -> Result<f64, BoundaryFailure> {
    native::perror_to_log10_perror(perror).or_raise(OperationName::new("perror_to_log10_perror"))
}

pub fn perror_to_phred(perror: f64) -> Result<f64, BoundaryFailure> {
    native::perror_to_phred(perror).or_raise(OperationName::new("perror_to_phred"))
}

pub fn log10_perror_to_phred(log10_perror: f64) -> Result<f64, BoundaryFailure> {
    native::log10_perror_to_phred(log10_perror)
        .or_raise(OperationName::new("log10_perror_to_phred"))
}

pub fn perror_to_rounded_phred(perror: f64) -> Result<i32, BoundaryFailure> {
    native::perror_to_rounded_phred(perror).or_raise(OperationName::new("perror_to_rounded_phred"))
}

pub fn log10_perror_to_rounded_phred(log10_perror: f64) -> Result<i32, BoundaryFailure> {
    native::log10_perror_to_rounded_phred(log10_perror)
        .or_raise(OperationName::new("log10_perror_to_rounded_phred"))
}

pub fn log10_perror_to_perror(log10_perror: f64) -> Result<f64, BoundaryFailure> {
    native::log10_perror_to_perror(log10_perror)
        .or_raise(OperationName::new("log10_perror_to_perror"))
}

pub fn zero_shift_log10_probs(log10_probs: &[f64]) -> Result<Vec<f64>, BoundaryFailure> {
    native::zero_shift_log10_probs(log10_probs)
        .or_raise(OperationName::new("zero_shift_log10_probs"))
}
