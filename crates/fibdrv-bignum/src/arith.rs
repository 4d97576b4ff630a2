//! Word-level carry/borrow primitives shared by the arithmetic engine.

use crate::storage::{DoubleWord, Word, WORD_BITS};

const WORD_MASK: DoubleWord = 0xFFFF_FFFF;

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let sum = DoubleWord::from(a) + DoubleWord::from(b) + DoubleWord::from(carry);
    (sum as Word, (sum >> WORD_BITS) as Word)
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sub_with_borrow(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let diff = i64::from(a) - i64::from(b) - i64::from(borrow);
    if diff < 0 {
        ((diff + (1i64 << WORD_BITS)) as Word, 1)
    } else {
        (diff as Word, 0)
    }
}

/// Multiply: a * b as a double-width product.
#[inline]
#[must_use]
pub fn mul_wide(a: Word, b: Word) -> DoubleWord {
    DoubleWord::from(a) * DoubleWord::from(b)
}

/// `c += x << (offset * WORD_BITS)`, propagating carry until both the carry
/// and the remaining addend are exhausted.
///
/// Bits carried past the end of `c` are dropped; callers size `c` so the
/// full sum fits.
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add_at(c: &mut [Word], offset: usize, mut x: DoubleWord) {
    let mut carry: DoubleWord = 0;
    for word in c.iter_mut().skip(offset) {
        carry += DoubleWord::from(*word) + (x & WORD_MASK);
        *word = carry as Word;
        carry >>= WORD_BITS;
        x >>= WORD_BITS;
        if x == 0 && carry == 0 {
            return;
        }
    }
}

/// `data = data * factor + addend`, returning the word carried out of the top.
#[allow(clippy::cast_possible_truncation)]
pub fn mul_small_add(data: &mut [Word], factor: Word, addend: Word) -> Word {
    let mut carry = DoubleWord::from(addend);
    for word in data.iter_mut() {
        let v = mul_wide(*word, factor) + carry;
        *word = v as Word;
        carry = v >> WORD_BITS;
    }
    carry as Word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carry() {
        let (sum, carry) = add_with_carry(Word::MAX, 1, 0);
        assert_eq!(sum, 0);
        assert_eq!(carry, 1);

        let (sum, carry) = add_with_carry(Word::MAX, Word::MAX, 1);
        assert_eq!(sum, Word::MAX);
        assert_eq!(carry, 1);
    }

    #[test]
    fn sub_borrow() {
        let (diff, borrow) = sub_with_borrow(0, 1, 0);
        assert_eq!(diff, Word::MAX);
        assert_eq!(borrow, 1);

        let (diff, borrow) = sub_with_borrow(5, 3, 1);
        assert_eq!(diff, 1);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn multiply_wide() {
        let prod = mul_wide(Word::MAX, 2);
        assert_eq!(prod, 0x1_FFFF_FFFE);
    }

    #[test]
    fn mul_add_at_propagates_carry() {
        let mut c = [Word::MAX, Word::MAX, 0];
        mul_add_at(&mut c, 0, 1);
        assert_eq!(c, [0, 0, 1]);
    }

    #[test]
    fn mul_add_at_with_offset() {
        let mut c = [7, 0, 0, 0];
        mul_add_at(&mut c, 1, mul_wide(Word::MAX, Word::MAX));
        // (2^32 - 1)^2 = 0xFFFFFFFE_00000001
        assert_eq!(c, [7, 1, 0xFFFF_FFFE, 0]);
    }

    #[test]
    fn mul_add_at_offset_past_end_is_noop() {
        let mut c = [1, 2];
        mul_add_at(&mut c, 5, 99);
        assert_eq!(c, [1, 2]);
    }

    #[test]
    fn mul_small_add_decimal_shift() {
        let mut data = [0x1999_9999, 0];
        let carry = mul_small_add(&mut data, 10, 6);
        assert_eq!(data, [0, 1]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn mul_small_add_overflow_reported() {
        let mut data = [Word::MAX];
        let carry = mul_small_add(&mut data, 10, 0);
        assert_eq!(data, [0xFFFF_FFF6]);
        assert_eq!(carry, 9);
    }
}
