//! Decimal rendering and parsing.
//!
//! Rendering doubles an ASCII digit buffer once per bit of the value, most
//! significant bit first, adding the bit in as the initial carry.

use std::fmt;
use std::str::FromStr;

use crate::arith::mul_small_add;
use crate::error::BigNumError;
use crate::storage::BigNum;

impl BigNum {
    /// Render the value in base 10, with a leading `-` when negative.
    ///
    /// The returned string owns its buffer independently of `self`. Like
    /// other std collections this aborts if the digit buffer cannot be
    /// allocated; [`try_to_decimal_string`](Self::try_to_decimal_string)
    /// reports that case instead.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        let mut buf = vec![b'0'; decimal_capacity(self.bit_len())];
        self.double_digits(&mut buf);
        let digits = strip_leading_zeros(&buf);

        let mut out = String::with_capacity(digits.len() + 1);
        self.push_rendered(digits, &mut out);
        out
    }

    /// Fallible form of [`to_decimal_string`](Self::to_decimal_string).
    ///
    /// Both the digit buffer and the output string are reserved with
    /// `try_reserve_exact`; failure leaves nothing allocated.
    pub fn try_to_decimal_string(&self) -> Result<String, BigNumError> {
        let len = decimal_capacity(self.bit_len());
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| BigNumError::Allocation { requested: len })?;
        buf.resize(len, b'0');
        self.double_digits(&mut buf);
        let digits = strip_leading_zeros(&buf);

        let needed = digits.len() + 1;
        let mut out = String::new();
        out.try_reserve_exact(needed)
            .map_err(|_| BigNumError::Allocation { requested: needed })?;
        self.push_rendered(digits, &mut out);
        Ok(out)
    }

    /// Double the ASCII digit buffer once per bit, most significant first,
    /// carrying the bit in.
    fn double_digits(&self, buf: &mut [u8]) {
        for i in (0..self.bit_len()).rev() {
            let mut carry = u8::from(self.bit(i));
            for digit in buf.iter_mut().rev() {
                let doubled = (*digit - b'0') * 2 + carry;
                carry = u8::from(doubled > 9);
                *digit = b'0' + doubled % 10;
            }
        }
    }

    fn push_rendered(&self, digits: &[u8], out: &mut String) {
        if self.is_negative() {
            out.push('-');
        }
        out.extend(digits.iter().map(|&d| char::from(d)));
    }
}

/// log2(10) > 3, so bits / 3 digits always suffice; +2 keeps zero and the
/// final carry inside the buffer.
fn decimal_capacity(bits: usize) -> usize {
    bits / 3 + 2
}

/// Digits without leading zeros, keeping one digit for zero.
fn strip_leading_zeros(buf: &[u8]) -> &[u8] {
    let start = buf
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(buf.len() - 1);
    &buf[start..]
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            !self.is_negative(),
            "",
            self.to_decimal_string().trim_start_matches('-'),
        )
    }
}

impl FromStr for BigNum {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigNumError::Parse(s.to_string()));
        }

        let mut n = BigNum::zero();
        for b in body.bytes() {
            let carry = mul_small_add(&mut n.digits, 10, u32::from(b - b'0'));
            if carry != 0 {
                n.digits.push(carry);
            }
        }
        n.negative = negative;
        n.canonicalize();
        Ok(n)
    }
}
