//! BigNum storage: allocation, resizing, copying, ownership transfer and
//! the size/comparison queries the arithmetic engine sizes its results with.

use std::cmp::Ordering;

use crate::error::BigNumError;

/// One storage word.
pub type Word = u32;
/// Double-width register used for carries and products.
pub type DoubleWord = u64;

/// Bits per word.
pub const WORD_BITS: usize = 32;

/// Arbitrary-precision signed integer.
///
/// Invariants:
/// - `digits` is never empty; zero is `[0]` with `negative == false`.
/// - After any arithmetic operation the most significant word is nonzero
///   unless the value has a single word.
#[derive(Debug, Clone)]
pub struct BigNum {
    /// Little-endian words, `digits[len - 1]` is the most significant.
    pub(crate) digits: Vec<Word>,
    pub(crate) negative: bool,
}

impl BigNum {
    /// Canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            digits: vec![0],
            negative: false,
        }
    }

    /// Allocate a zero-valued, nonnegative number with `size` words.
    ///
    /// The result is not canonical when `size > 1`; arithmetic operations
    /// resize their destination themselves.
    pub fn alloc(size: usize) -> Result<Self, BigNumError> {
        if size == 0 {
            return Err(BigNumError::InvalidArgument("cannot allocate zero words"));
        }
        let mut digits = Vec::new();
        digits
            .try_reserve_exact(size)
            .map_err(|_| BigNumError::Allocation { requested: size })?;
        digits.resize(size, 0);
        Ok(Self {
            digits,
            negative: false,
        })
    }

    /// Stored word count (not necessarily the significant one).
    #[must_use]
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// Stored words, least significant first.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.digits
    }

    /// True when the value is below zero. Zero is never negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// True when every stored word is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&w| w == 0)
    }

    /// Reset to canonical zero, keeping a single word.
    pub fn set_zero(&mut self) {
        self.digits.truncate(1);
        self.digits[0] = 0;
        self.negative = false;
    }

    /// Grow with zero-filled high words, or drop high words.
    ///
    /// Shrinking discards the most significant words; callers only shrink
    /// when those words are zero. A size of zero is rejected: dropping an
    /// instance is [`release`]'s job. On allocation failure `self` is left
    /// untouched.
    pub fn resize(&mut self, size: usize) -> Result<(), BigNumError> {
        if size == 0 {
            return Err(BigNumError::InvalidArgument(
                "resize to zero words; use release to drop an instance",
            ));
        }
        let len = self.digits.len();
        match size.cmp(&len) {
            Ordering::Equal => {}
            Ordering::Greater => {
                self.digits
                    .try_reserve_exact(size - len)
                    .map_err(|_| BigNumError::Allocation { requested: size })?;
                self.digits.resize(size, 0);
            }
            Ordering::Less => self.digits.truncate(size),
        }
        Ok(())
    }

    /// Strip superfluous high zero words and clear the sign of zero.
    pub fn canonicalize(&mut self) {
        let len = self.significant_len();
        self.digits.truncate(len);
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Make `self` a duplicate of `src`, reusing `self`'s buffer.
    pub fn copy_from(&mut self, src: &BigNum) -> Result<(), BigNumError> {
        self.resize(src.size())?;
        self.digits.copy_from_slice(&src.digits);
        self.negative = src.negative;
        Ok(())
    }

    /// Exchange two instances' buffers and signs in O(1).
    pub fn swap(a: &mut BigNum, b: &mut BigNum) {
        std::mem::swap(a, b);
    }

    /// Move the value out, leaving canonical zero behind.
    #[must_use]
    pub fn take(&mut self) -> BigNum {
        std::mem::take(self)
    }

    /// Flip the sign in place. Zero stays nonnegative.
    pub fn negate(&mut self) {
        self.negative = !self.negative && !self.is_zero();
    }

    /// Negated copy of `self`.
    #[must_use]
    pub fn negated(&self) -> BigNum {
        let mut out = self.clone();
        out.negate();
        out
    }

    /// Leading zero bits across the stored words, from the top word down.
    #[must_use]
    pub fn leading_zeros(&self) -> usize {
        let mut count = 0;
        for &word in self.digits.iter().rev() {
            if word != 0 {
                return count + word.leading_zeros() as usize;
            }
            count += WORD_BITS;
        }
        count
    }

    /// Number of significant bits; zero has bit length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.size() * WORD_BITS - self.leading_zeros()
    }

    /// Bit `i` of the magnitude (bit 0 is the least significant).
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        self.digits
            .get(i / WORD_BITS)
            .is_some_and(|&w| (w >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Word count up to and including the highest nonzero word, minimum 1.
    pub(crate) fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|&w| w != 0)
            .map_or(1, |top| top + 1)
    }

    /// Compare magnitudes, ignoring signs.
    ///
    /// Sizes are compared by significant word count, so non-canonical
    /// stored sizes never change the answer.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &BigNum) -> Ordering {
        let len = self.significant_len();
        len.cmp(&other.significant_len()).then_with(|| {
            self.digits[..len]
                .iter()
                .rev()
                .cmp(other.digits[..len].iter().rev())
        })
    }

    /// Value as `u64`, if nonnegative and small enough.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() || self.significant_len() > 2 {
            return None;
        }
        let low = u64::from(self.digits[0]);
        let high = self.digits.get(1).copied().map_or(0, u64::from);
        Some((high << WORD_BITS) | low)
    }
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.cmp_magnitude(other) == Ordering::Equal
    }
}

impl Eq for BigNum {}

impl From<u32> for BigNum {
    fn from(value: Word) -> Self {
        Self {
            digits: vec![value],
            negative: false,
        }
    }
}

impl From<u64> for BigNum {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u64) -> Self {
        let mut n = Self {
            digits: vec![value as Word, (value >> WORD_BITS) as Word],
            negative: false,
        };
        n.canonicalize();
        n
    }
}

/// Drop the instance held in `slot`.
///
/// Releasing an absent instance is reported, not fatal.
pub fn release(slot: &mut Option<BigNum>) -> Result<(), BigNumError> {
    slot.take()
        .map(drop)
        .ok_or(BigNumError::InvalidArgument("release of an absent instance"))
}
