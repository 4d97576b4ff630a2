//! Property-based tests for the Fibonacci engine.
//!
//! These tests exercise the CoreCalculator trait directly (without
//! the FibCalculator decorator fast path).

use num_bigint::BigUint;
use proptest::prelude::*;

use fibdrv_core::calculator::CoreCalculator;
use fibdrv_core::fastdoubling::FastDoubling;
use fibdrv_core::iterative::IterativeAddition;
use fibdrv_core::oracle::fib_u64;
use fibdrv_core::{compute_fast_doubling, compute_iterative, BigNum, MAX_LENGTH};

fn compute_core(algo: &dyn CoreCalculator, n: u64) -> BigNum {
    algo.calculate_core(n).unwrap()
}

fn to_biguint(n: &BigNum) -> BigUint {
    BigUint::from_slice(n.words())
}

fn reference(n: u64) -> BigUint {
    let (mut a, mut b) = (BigUint::from(0u32), BigUint::from(1u32));
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

/// Both entry points agree over the whole device range.
#[test]
fn algorithms_agree_over_device_range() {
    for n in 0..=MAX_LENGTH {
        assert_eq!(
            compute_iterative(n).unwrap(),
            compute_fast_doubling(n).unwrap(),
            "F({n}) iterative != fast doubling"
        );
    }
}

/// F(817), the largest index the device serves.
#[test]
fn device_maximum() {
    let expected = "247409904738736056360531950204272194467455305702693665155191284116520387970821525665002988000629206259302085539829969039201607330980012683779731383105758186959255976132897";
    assert_eq!(compute_fast_doubling(MAX_LENGTH).unwrap(), expected);
    assert_eq!(compute_iterative(MAX_LENGTH).unwrap(), expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For random n, both core algorithms match an independent BigUint recurrence.
    #[test]
    fn core_algorithms_match_reference(n in 2u64..3000) {
        let expected = reference(n);
        let fd = compute_core(&FastDoubling::new(), n);
        let it = compute_core(&IterativeAddition::new(), n);
        prop_assert_eq!(to_biguint(&fd), expected.clone(), "FastDoubling F({})", n);
        prop_assert_eq!(to_biguint(&it), expected, "IterativeAddition F({})", n);
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0u64..2000) {
        let algo = FastDoubling::new();
        let mut sum = compute_core(&algo, n);
        sum.add_in_place(&compute_core(&algo, n + 1)).unwrap();
        prop_assert_eq!(sum, compute_core(&algo, n + 2), "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// The native u64 oracle agrees where it is defined.
    #[test]
    fn native_oracle_agrees(n in 0u64..=93) {
        let fd = compute_core(&FastDoubling::new(), n);
        prop_assert_eq!(fd.to_u64(), fib_u64(n));
    }
}
