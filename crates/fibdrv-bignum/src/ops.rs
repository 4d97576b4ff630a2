//! Arithmetic engine: magnitude and signed add/subtract, schoolbook
//! multiplication and single-word left shift.
//!
//! The three-argument functions write into a destination that the borrow
//! checker guarantees is distinct from the operands. The `*_in_place`
//! methods cover the aliased cases (destination is one of the operands):
//! they compute into a temporary and swap it into place.

use std::cmp::Ordering;

use crate::arith::{add_with_carry, mul_add_at, mul_wide, sub_with_borrow};
use crate::error::BigNumError;
use crate::storage::{BigNum, Word, WORD_BITS};

/// `|c| = |a| + |b|`. Sign of `c` is left to the caller.
fn do_add(a: &BigNum, b: &BigNum, c: &mut BigNum) -> Result<(), BigNumError> {
    let bits = a.bit_len().max(b.bit_len()) + 1;
    let size = bits.div_ceil(WORD_BITS);
    c.resize(size)?;

    let mut carry: Word = 0;
    for (i, out) in c.digits.iter_mut().enumerate() {
        let x = a.digits.get(i).copied().unwrap_or(0);
        let y = b.digits.get(i).copied().unwrap_or(0);
        (*out, carry) = add_with_carry(x, y, carry);
    }

    c.canonicalize();
    Ok(())
}

/// `|c| = |a| - |b|`, requires `|a| >= |b|`.
///
/// Violating the precondition panics in debug builds and yields a wrong
/// magnitude in release builds.
fn do_sub(a: &BigNum, b: &BigNum, c: &mut BigNum) -> Result<(), BigNumError> {
    debug_assert!(
        a.cmp_magnitude(b) != Ordering::Less,
        "do_sub requires |a| >= |b|"
    );
    let size = a.significant_len().max(b.significant_len());
    c.resize(size)?;

    let mut borrow: Word = 0;
    for (i, out) in c.digits.iter_mut().enumerate() {
        let x = a.digits.get(i).copied().unwrap_or(0);
        let y = b.digits.get(i).copied().unwrap_or(0);
        (*out, borrow) = sub_with_borrow(x, y, borrow);
    }

    c.canonicalize();
    Ok(())
}

/// `c = (±a) + (±b)` with the operand signs supplied explicitly.
fn add_signed(
    a: &BigNum,
    a_neg: bool,
    b: &BigNum,
    b_neg: bool,
    c: &mut BigNum,
) -> Result<(), BigNumError> {
    if a_neg == b_neg {
        do_add(a, b, c)?;
        c.negative = a_neg;
    } else {
        let (pos, neg) = if a_neg { (b, a) } else { (a, b) };
        match pos.cmp_magnitude(neg) {
            Ordering::Greater => {
                do_sub(pos, neg, c)?;
                c.negative = false;
            }
            Ordering::Less => {
                do_sub(neg, pos, c)?;
                c.negative = true;
            }
            Ordering::Equal => c.set_zero(),
        }
    }
    c.canonicalize();
    Ok(())
}

/// `c = a + b`.
pub fn add(a: &BigNum, b: &BigNum, c: &mut BigNum) -> Result<(), BigNumError> {
    add_signed(a, a.is_negative(), b, b.is_negative(), c)
}

/// `c = a - b`, computed as `a + (-b)` without touching `b`.
pub fn sub(a: &BigNum, b: &BigNum, c: &mut BigNum) -> Result<(), BigNumError> {
    add_signed(a, a.is_negative(), b, !b.is_negative() && !b.is_zero(), c)
}

/// `c = a * b` by schoolbook convolution.
pub fn mult(a: &BigNum, b: &BigNum, c: &mut BigNum) -> Result<(), BigNumError> {
    let size = (a.bit_len() + b.bit_len()).div_ceil(WORD_BITS).max(1);
    c.resize(size)?;
    c.digits.fill(0);

    let a_words = &a.digits[..a.significant_len()];
    let b_words = &b.digits[..b.significant_len()];
    for (i, &x) in a_words.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b_words.iter().enumerate() {
            mul_add_at(&mut c.digits, i + j, mul_wide(x, y));
        }
    }

    c.negative = a.is_negative() ^ b.is_negative();
    c.canonicalize();
    Ok(())
}

/// `dest = x << shift` for `0 <= shift < WORD_BITS`.
///
/// Grows by one word only when the top word's free bits cannot absorb the
/// shift. Wider shifts are not supported.
#[allow(clippy::cast_possible_truncation)]
pub fn lshift(x: &BigNum, shift: u32, dest: &mut BigNum) -> Result<(), BigNumError> {
    if shift as usize >= WORD_BITS {
        return Err(BigNumError::ShiftOutOfRange(shift));
    }
    if shift == 0 {
        return dest.copy_from(x);
    }

    let len = x.significant_len();
    let words = &x.digits[..len];
    let top = words[len - 1];
    let size = if shift > top.leading_zeros() { len + 1 } else { len };
    dest.resize(size)?;

    let back = WORD_BITS as u32 - shift;
    if size > len {
        dest.digits[len] = top >> back;
    }
    for i in (1..len).rev() {
        dest.digits[i] = (words[i] << shift) | (words[i - 1] >> back);
    }
    dest.digits[0] = words[0] << shift;

    dest.negative = x.negative;
    dest.canonicalize();
    Ok(())
}

impl BigNum {
    /// `self = self + rhs`.
    pub fn add_in_place(&mut self, rhs: &BigNum) -> Result<(), BigNumError> {
        self.replace_with(|lhs, out| add(lhs, rhs, out))
    }

    /// `self = self - rhs`.
    pub fn sub_in_place(&mut self, rhs: &BigNum) -> Result<(), BigNumError> {
        self.replace_with(|lhs, out| sub(lhs, rhs, out))
    }

    /// `self = lhs - self`.
    pub fn sub_from(&mut self, lhs: &BigNum) -> Result<(), BigNumError> {
        self.replace_with(|rhs, out| sub(lhs, rhs, out))
    }

    /// `self = self * rhs`.
    pub fn mul_in_place(&mut self, rhs: &BigNum) -> Result<(), BigNumError> {
        self.replace_with(|lhs, out| mult(lhs, rhs, out))
    }

    /// `self = self * self`.
    pub fn square_in_place(&mut self) -> Result<(), BigNumError> {
        self.replace_with(|x, out| mult(x, x, out))
    }

    /// `self = self << shift` for `0 <= shift < WORD_BITS`.
    pub fn shl_in_place(&mut self, shift: u32) -> Result<(), BigNumError> {
        self.replace_with(|x, out| lshift(x, shift, out))
    }

    /// Run `op(self, tmp)` into a fresh temporary, then swap it into `self`.
    ///
    /// On error `self` is unchanged and the temporary is dropped.
    fn replace_with<F>(&mut self, op: F) -> Result<(), BigNumError>
    where
        F: FnOnce(&BigNum, &mut BigNum) -> Result<(), BigNumError>,
    {
        let mut tmp = BigNum::zero();
        op(self, &mut tmp)?;
        BigNum::swap(self, &mut tmp);
        Ok(())
    }
}
