//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB, rotating the working
//! buffers by swap instead of copying.

use fibdrv_bignum::{add, lshift, mult, sub, BigNum};
use tracing::trace;

use crate::calculator::{CoreCalculator, FibError};

/// Working registers for one fast doubling run.
pub struct CalculationState {
    /// Current F(k).
    pub fk: BigNum,
    /// Current F(k+1).
    pub fk1: BigNum,
    /// Temporary register 1.
    pub t1: BigNum,
    /// Temporary register 2.
    pub t2: BigNum,
    /// Temporary register 3.
    pub t3: BigNum,
}

impl CalculationState {
    /// Create a new calculation state initialized for F(0)=0, F(1)=1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fk: BigNum::zero(),
            fk1: BigNum::from(1u32),
            t1: BigNum::zero(),
            t2: BigNum::zero(),
            t3: BigNum::zero(),
        }
    }

    /// Advance (F(k), F(k+1)) to (F(2k), F(2k+1)), or to (F(2k+1), F(2k+2))
    /// when `bit` is set.
    pub fn step(&mut self, bit: bool) -> Result<(), FibError> {
        // t2 = 2*F(k+1) - F(k)
        lshift(&self.fk1, 1, &mut self.t1)?;
        sub(&self.t1, &self.fk, &mut self.t2)?;
        // t1 = F(2k)
        mult(&self.fk, &self.t2, &mut self.t1)?;
        // fk1 = F(k)^2 + F(k+1)^2 = F(2k+1)
        mult(&self.fk, &self.fk, &mut self.t2)?;
        mult(&self.fk1, &self.fk1, &mut self.t3)?;
        add(&self.t2, &self.t3, &mut self.fk1)?;
        BigNum::swap(&mut self.fk, &mut self.t1);

        if bit {
            // t1 = F(2k) + F(2k+1) = F(2k+2)
            add(&self.fk, &self.fk1, &mut self.t1)?;
            BigNum::swap(&mut self.fk, &mut self.fk1);
            BigNum::swap(&mut self.fk1, &mut self.t1);
        }
        Ok(())
    }
}

impl Default for CalculationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibdrv_core::calculator::CoreCalculator;
/// use fibdrv_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// let result = calc.calculate_core(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> Result<BigNum, FibError> {
        if n < 2 {
            return Ok(BigNum::from(n));
        }

        let num_bits = u64::BITS - n.leading_zeros();
        let mut state = CalculationState::new();

        for i in (0..num_bits).rev() {
            state.step((n >> i) & 1 == 1)?;
            trace!(
                bit = i,
                fk_bits = state.fk.bit_len(),
                "fast doubling step"
            );
        }

        // Zero-copy result extraction
        Ok(state.fk.take())
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
