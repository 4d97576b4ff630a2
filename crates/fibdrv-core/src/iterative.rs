//! Iterative addition: F(n) by n - 1 bignum additions.
//!
//! The pair (F(k), F(k+1)) rotates through three owned buffers by swapping,
//! so no value is copied and no buffer is reallocated except to grow.

use fibdrv_bignum::{add, BigNum};

use crate::calculator::{CoreCalculator, FibError};

/// O(n) Fibonacci calculator.
///
/// # Example
/// ```
/// use fibdrv_core::calculator::CoreCalculator;
/// use fibdrv_core::iterative::IterativeAddition;
///
/// let calc = IterativeAddition::new();
/// let result = calc.calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct IterativeAddition;

impl IterativeAddition {
    /// Create a new `IterativeAddition` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeAddition {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for IterativeAddition {
    fn calculate_core(&self, n: u64) -> Result<BigNum, FibError> {
        if n < 2 {
            return Ok(BigNum::from(n));
        }

        let mut prev = BigNum::zero(); // F(k-1)
        let mut curr = BigNum::from(1u32); // F(k)
        let mut next = BigNum::zero();

        for _ in 1..n {
            add(&prev, &curr, &mut next)?;
            BigNum::swap(&mut prev, &mut curr);
            BigNum::swap(&mut curr, &mut next);
        }

        Ok(curr)
    }

    fn name(&self) -> &'static str {
        "IterativeAddition"
    }
}
