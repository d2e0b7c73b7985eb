//! Calculator utility functions.
//!
//! Straight ports of the dashboard's arithmetic helpers: four pure
//! operations, of which only [`divide`] can fail.

use crate::error::{CourtsideError, Result};

/// Sum of two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference of two numbers.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient of two numbers.
///
/// Dividing by zero violates the precondition and returns
/// [`CourtsideError::DivisionByZero`] for every dividend, including zero.
///
/// # Examples
///
/// ```rust
/// use courtside::calc::divide;
///
/// assert_eq!(divide(6.0, 3.0).unwrap(), 2.0);
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CourtsideError::DivisionByZero);
    }
    Ok(a / b)
}
