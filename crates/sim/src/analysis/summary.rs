//! Reduction of replicate outcomes to summary statistics.

use crate::errors::{DivisionByZeroError, EmptyInputError};

/// Arithmetic mean of a non-empty batch of replicate statistics.
///
/// # Errors
/// Returns an error on an empty batch; a mean of nothing is undefined rather
/// than zero.
pub fn mean(values: &[f64]) -> Result<f64, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Fraction of the carrying capacity a count represents.
///
/// # Errors
/// Returns an error when `capacity` is zero.
pub fn proportion(count: u64, capacity: u64) -> Result<f64, DivisionByZeroError> {
    if capacity == 0 {
        return Err(DivisionByZeroError);
    }
    Ok(count as f64 / capacity as f64)
}
