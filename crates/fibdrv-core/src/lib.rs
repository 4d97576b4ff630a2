//! # fibdrv-core
//!
//! Fibonacci engine for the fibdrv device.
//! Implements an O(n) iterative addition and an O(log n) fast doubling,
//! both driven purely through the `fibdrv-bignum` arithmetic engine.

pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod iterative;
pub mod oracle;
pub mod registry;

// Re-exports
pub use calculator::{Algorithm, Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64, MAX_LENGTH};
pub use registry::{CalculatorFactory, DefaultFactory};

pub use fibdrv_bignum::BigNum;

/// Compute F(n) with the chosen algorithm.
///
/// # Example
/// ```
/// use fibdrv_core::{fibonacci, Algorithm};
/// assert_eq!(fibonacci(10, Algorithm::FastDoubling).unwrap().to_string(), "55");
/// assert_eq!(fibonacci(0, Algorithm::Iterative).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(n: u64, algorithm: Algorithm) -> Result<BigNum, FibError> {
    FibCalculator::new(algorithm.core()).calculate(n)
}

/// F(n) as decimal text, O(n) iterative addition.
pub fn compute_iterative(n: u64) -> Result<String, FibError> {
    fibonacci(n, Algorithm::Iterative).map(|value| value.to_decimal_string())
}

/// F(n) as decimal text, O(log n) fast doubling.
pub fn compute_fast_doubling(n: u64) -> Result<String, FibError> {
    fibonacci(n, Algorithm::FastDoubling).map(|value| value.to_decimal_string())
}
