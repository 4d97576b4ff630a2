//! Native `u64` fast doubling used as an independent cross-check for the
//! bignum calculators on small indices. No calculator is built on it.

use crate::constants::MAX_FIB_U64;

/// F(n) in native arithmetic, or `None` when F(n) does not fit in a `u64`.
///
/// The pair update is branchless: the current bit of `n` is widened into an
/// all-ones or all-zeros mask that selects between F(2k) and F(2k+1).
/// Arithmetic wraps, which is exact because F(n) itself fits; only the
/// discarded F(n+1) of the final step may overflow.
#[must_use]
pub fn fib_u64(n: u64) -> Option<u64> {
    if n > MAX_FIB_U64 {
        return None;
    }
    if n < 2 {
        return Some(n);
    }

    let mut fk: u64 = 0;
    let mut fk1: u64 = 1;
    for i in (0..u64::BITS - n.leading_zeros()).rev() {
        let f2k = fk.wrapping_mul(fk1.wrapping_mul(2).wrapping_sub(fk));
        let f2k1 = fk.wrapping_mul(fk).wrapping_add(fk1.wrapping_mul(fk1));
        let mask = ((n >> i) & 1).wrapping_neg();
        fk = (f2k & !mask) | (f2k1 & mask);
        fk1 = (f2k & mask).wrapping_add(f2k1);
    }
    Some(fk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn matches_table() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(fib_u64(n as u64), Some(expected), "F({n})");
        }
    }

    #[test]
    fn refuses_overflowing_index() {
        assert_eq!(fib_u64(94), None);
        assert_eq!(fib_u64(u64::MAX), None);
    }
}
