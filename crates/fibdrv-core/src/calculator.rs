//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the device and the CLI.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `FibCalculator` is a decorator that adds the base-case fast path (n < 2)
//! and calculation logging.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use fibdrv_bignum::{BigNum, BigNumError};
use tracing::debug;

use crate::fastdoubling::FastDoubling;
use crate::iterative::IterativeAddition;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The bignum engine failed (allocation or invalid argument).
    #[error("bignum error: {0}")]
    BigNum(#[from] BigNumError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<BigNum, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds the fast path and logging.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation.
    fn calculate_core(&self, n: u64) -> Result<BigNum, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with fast path and logging.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64) -> Result<BigNum, FibError> {
        // F(0) = 0, F(1) = 1
        if n < 2 {
            return Ok(BigNum::from(n));
        }

        let result = self.inner.calculate_core(n)?;
        debug!(
            algorithm = self.inner.name(),
            n,
            bits = result.bit_len(),
            words = result.size(),
            "calculation complete"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// The two interchangeable Fibonacci strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// O(n) bignum additions.
    Iterative,
    /// O(log n) bignum multiplications.
    FastDoubling,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::FastDoubling];

    /// Registry key for this algorithm.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Iterative => "iterative",
            Algorithm::FastDoubling => "fast",
        }
    }

    /// Build the core calculator implementing this algorithm.
    #[must_use]
    pub fn core(self) -> Arc<dyn CoreCalculator> {
        match self {
            Algorithm::Iterative => Arc::new(IterativeAddition::new()),
            Algorithm::FastDoubling => Arc::new(FastDoubling::new()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" | "iter" => Ok(Algorithm::Iterative),
            "fast" | "fastdoubling" => Ok(Algorithm::FastDoubling),
            _ => Err(FibError::Config(format!("unknown calculator: {s}"))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
