//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and verifies both algorithms,
//! directly and through the device, produce the known Fibonacci numbers.

use std::sync::Arc;

use fibdrv_core::calculator::{Calculator, CoreCalculator, FibCalculator};
use fibdrv_core::fastdoubling::FastDoubling;
use fibdrv_core::iterative::IterativeAddition;
use fibdrv_core::BigNum;
use fibdrv_device::{FibDevice, Whence};
use fibdrv_tests::{load_golden_data, GoldenData};

fn golden() -> GoldenData {
    load_golden_data().expect("failed to load golden file")
}

fn compute_with_core(core: &dyn CoreCalculator, n: u64) -> BigNum {
    core.calculate_core(n).unwrap()
}

fn cores() -> Vec<Box<dyn CoreCalculator>> {
    vec![
        Box::new(IterativeAddition::new()),
        Box::new(FastDoubling::new()),
    ]
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_populated() {
    let data = golden();
    assert!(!data.description.is_empty());
    assert!(data.values.iter().any(|e| e.fib.is_some()));
    assert!(data.values.iter().any(|e| e.fib_prefix.is_some()));
}

#[test]
fn golden_exact_core_algorithms() {
    let data = golden();
    for algo in cores() {
        for entry in &data.values {
            if let Some(expected) = &entry.fib {
                let result = compute_with_core(algo.as_ref(), entry.n);
                assert_eq!(
                    result.to_string(),
                    *expected,
                    "{} mismatch at n={}",
                    algo.name(),
                    entry.n,
                );
            }
        }
    }
}

#[test]
fn golden_via_fib_calculator_decorator() {
    let data = golden();
    let iterative = FibCalculator::new(Arc::new(IterativeAddition::new()));
    let fast = FibCalculator::new(Arc::new(FastDoubling::new()));
    let calcs: &[&dyn Calculator] = &[&iterative, &fast];

    for entry in &data.values {
        if let Some(expected) = &entry.fib {
            for calc in calcs {
                let result = calc.calculate(entry.n).unwrap();
                assert_eq!(
                    result.to_decimal_string(),
                    *expected,
                    "{} (via FibCalculator) mismatch at n={}",
                    calc.name(),
                    entry.n,
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: prefix & digit count (n = 1000, 5000, 10000)
// ---------------------------------------------------------------------------

#[test]
fn golden_prefix_and_digits() {
    let data = golden();
    for entry in &data.values {
        let (Some(prefix), Some(expected_digits)) = (&entry.fib_prefix, entry.fib_digits) else {
            continue;
        };
        for algo in cores() {
            let s = compute_with_core(algo.as_ref(), entry.n).to_string();
            assert!(
                s.starts_with(prefix.as_str()),
                "{} prefix mismatch at n={}: expected starts_with '{}', got '{}'",
                algo.name(),
                entry.n,
                prefix,
                &s[..prefix.len().min(s.len())],
            );
            assert_eq!(
                s.len(),
                expected_digits,
                "{} digit count mismatch at n={}",
                algo.name(),
                entry.n,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: through the device (read = iterative, write = fast doubling)
// ---------------------------------------------------------------------------

#[test]
fn golden_via_device() {
    let data = golden();
    let device = FibDevice::new();
    let mut session = device.open().unwrap();
    let max_index = device.config().max_index;

    for entry in &data.values {
        let Some(expected) = &entry.fib else {
            continue;
        };
        if entry.n > max_index {
            continue;
        }
        let pos = session.seek(i64::try_from(entry.n).unwrap(), Whence::Set);
        assert_eq!(pos, entry.n);
        assert_eq!(session.read().unwrap().text, *expected, "read at n={}", entry.n);
        assert_eq!(session.write().unwrap().text, *expected, "write at n={}", entry.n);
    }
}

#[test]
fn device_clamps_beyond_max() {
    let data = golden();
    let max_entry = data
        .values
        .iter()
        .find(|e| e.n == 817)
        .and_then(|e| e.fib.clone())
        .unwrap();
    let device = FibDevice::new();
    let mut session = device.open().unwrap();
    assert_eq!(session.seek(10_000, Whence::Set), 817);
    assert_eq!(session.write().unwrap().text, max_entry);
}

// ---------------------------------------------------------------------------
// Edge cases: boundary values
// ---------------------------------------------------------------------------

#[test]
fn edge_cases_small_n() {
    for algo in cores() {
        assert_eq!(compute_with_core(algo.as_ref(), 0), BigNum::zero(), "{} F(0)", algo.name());
        assert_eq!(compute_with_core(algo.as_ref(), 1), BigNum::from(1u32), "{} F(1)", algo.name());
        assert_eq!(compute_with_core(algo.as_ref(), 2), BigNum::from(1u32), "{} F(2)", algo.name());
    }
}

#[test]
fn edge_case_n93_last_u64() {
    for algo in cores() {
        let result = compute_with_core(algo.as_ref(), 93);
        assert_eq!(result.to_u64(), Some(12_200_160_415_121_876_738));
    }
}

#[test]
fn edge_case_n94_first_multiword() {
    let expected: BigNum = "19740274219868223167".parse().unwrap();
    for algo in cores() {
        let result = compute_with_core(algo.as_ref(), 94);
        assert_eq!(result, expected, "{} F(94) mismatch", algo.name());
        assert_eq!(result.size(), 3);
        assert_eq!(result.to_u64(), None);
    }
}
