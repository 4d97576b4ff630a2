#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use fibdrv_core::calculator::{Calculator, FibCalculator};
use fibdrv_core::fastdoubling::FastDoubling;
use fibdrv_core::iterative::IterativeAddition;
use fibdrv_core::oracle::fib_u64;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 2000 for speed (iterative is O(n))
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as u64;
    let n = n % 2_000;

    let fast: Arc<dyn Calculator> = Arc::new(FibCalculator::new(Arc::new(FastDoubling::new())));
    let iterative: Arc<dyn Calculator> =
        Arc::new(FibCalculator::new(Arc::new(IterativeAddition::new())));

    if let (Ok(f), Ok(i)) = (fast.calculate(n), iterative.calculate(n)) {
        assert_eq!(f, i, "FastDoubling != IterativeAddition at n={n}");
        assert_eq!(f.to_u64(), fib_u64(n), "native oracle disagrees at n={n}");
    }
});
