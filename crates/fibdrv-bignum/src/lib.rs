//! # fibdrv-bignum
//!
//! Hand-rolled arbitrary-precision integers for the fibdrv engine.
//!
//! A [`BigNum`] is a little-endian sequence of 32-bit words plus a sign flag.
//! Every arithmetic operation leaves its result canonical: no superfluous
//! high zero words, and zero is never negative.

pub(crate) mod arith;
pub mod decimal;
pub mod error;
pub mod ops;
pub mod storage;

pub use error::BigNumError;
pub use ops::{add, lshift, mult, sub};
pub use storage::{release, BigNum, DoubleWord, Word, WORD_BITS};
