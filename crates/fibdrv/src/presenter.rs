//! CLI result presenter.

use std::time::Duration;

use fibdrv_core::BigNum;

use crate::orchestrator::{CalculationResult, ResultPresenter};
use crate::output::{format_duration, format_number, format_result};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        value: &str,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{value}");
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("N: {}", format_number(n));
        println!("Duration: {}", format_duration(duration));

        if details {
            if let Ok(parsed) = value.parse::<BigNum>() {
                println!("Result bits: {}", parsed.bit_len());
                println!("Result words: {}", parsed.size());
            }
            println!("Result digits: {}", value.len());
        }

        println!("F({}) = {}", format_number(n), format_result(value, self.verbose));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdrv_device::DeviceError;

    #[test]
    fn presenter_modes() {
        let quiet = CLIResultPresenter::new(false, true);
        assert!(quiet.quiet);
        let verbose = CLIResultPresenter::new(true, false);
        assert!(verbose.verbose);
        assert!(!verbose.quiet);
    }

    #[test]
    fn presenter_present_result() {
        let presenter = CLIResultPresenter::new(false, false);
        presenter.present_result("fast", 10, "55", Duration::from_micros(5), false);
        presenter.present_result("iterative", 30, "832040", Duration::from_millis(1), true);
        CLIResultPresenter::new(false, true).present_result("fast", 10, "55", Duration::ZERO, true);
    }

    #[test]
    fn presenter_present_comparison() {
        let presenter = CLIResultPresenter::new(false, false);
        let results = vec![
            CalculationResult {
                algorithm: "iterative".into(),
                outcome: Ok("55".into()),
                duration: Duration::from_micros(5),
            },
            CalculationResult {
                algorithm: "fast".into(),
                outcome: Err(DeviceError::Busy),
                duration: Duration::ZERO,
            },
        ];
        presenter.present_comparison(&results);
        presenter.present_comparison(&[]);
    }

    #[test]
    fn presenter_present_error() {
        CLIResultPresenter::new(false, false).present_error("test error message");
    }
}
