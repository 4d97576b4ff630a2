//! Algorithm selection, execution through a device session, and result analysis.

use std::time::Duration;

use fibdrv_core::calculator::{Algorithm, FibError};
use fibdrv_core::registry::CalculatorFactory;
use fibdrv_device::{DeviceError, FibSession};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        value: &str,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm key.
    pub algorithm: String,
    /// F(n) in decimal, or the error that stopped it.
    pub outcome: Result<String, DeviceError>,
    /// Computation time as measured by the device.
    pub duration: Duration,
}

/// Resolve an `--algo` selection into the algorithms to run.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Algorithm>, FibError> {
    match algo {
        "all" => factory.available().into_iter().map(str::parse).collect(),
        name => Ok(vec![name.parse()?]),
    }
}

/// Run every algorithm at the session's current position.
pub fn execute_calculations(
    session: &FibSession<'_>,
    algorithms: &[Algorithm],
) -> Vec<CalculationResult> {
    algorithms
        .iter()
        .map(|&algorithm| match session.compute(algorithm) {
            Ok(reading) => CalculationResult {
                algorithm: algorithm.to_string(),
                outcome: Ok(reading.text),
                duration: reading.elapsed,
            },
            Err(e) => CalculationResult {
                algorithm: algorithm.to_string(),
                outcome: Err(e),
                duration: Duration::ZERO,
            },
        })
        .collect()
}

/// Check that every successful result carries the same value.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());
    let Some(first) = values.next() else {
        return Ok(());
    };
    if values.any(|value| value != first) {
        return Err(FibError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdrv_device::{FibDevice, Whence};

    fn ok(algorithm: &str, value: &str) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Ok(value.into()),
            duration: Duration::from_micros(3),
        }
    }

    #[test]
    fn select_all() {
        let device = FibDevice::new();
        let algos = get_calculators_to_run("all", device.factory()).unwrap();
        assert_eq!(algos, vec![Algorithm::Iterative, Algorithm::FastDoubling]);
    }

    #[test]
    fn select_single_and_alias() {
        let device = FibDevice::new();
        assert_eq!(
            get_calculators_to_run("fast", device.factory()).unwrap(),
            vec![Algorithm::FastDoubling]
        );
        assert_eq!(
            get_calculators_to_run("iter", device.factory()).unwrap(),
            vec![Algorithm::Iterative]
        );
    }

    #[test]
    fn select_unknown() {
        let device = FibDevice::new();
        let err = get_calculators_to_run("matrix", device.factory()).unwrap_err();
        assert!(matches!(err, FibError::Config(_)));
    }

    #[test]
    fn execute_through_session() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        session.seek(100, Whence::Set);
        let results = execute_calculations(&session, &Algorithm::ALL);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.outcome.as_deref(), Ok("354224848179261915075"));
        }
        assert_eq!(results[0].algorithm, "iterative");
        assert_eq!(results[1].algorithm, "fast");
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("iterative", "55"), ok("fast", "55")];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatch() {
        let results = vec![ok("iterative", "55"), ok("fast", "56")];
        assert_eq!(analyze_comparison_results(&results), Err(FibError::Mismatch));
    }

    #[test]
    fn analyze_skips_errors() {
        let results = vec![
            ok("iterative", "55"),
            CalculationResult {
                algorithm: "fast".into(),
                outcome: Err(DeviceError::Busy),
                duration: Duration::ZERO,
            },
        ];
        assert!(analyze_comparison_results(&results).is_ok());
        assert!(analyze_comparison_results(&[]).is_ok());
    }
}
