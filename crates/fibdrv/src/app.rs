//! Application entry point and dispatch.

use std::io::Write;

use anyhow::Result;
use tracing::warn;

use fibdrv_device::{FibDevice, Whence};

use crate::bench::run_bench;
use crate::config::AppConfig;
use crate::orchestrator::{
    analyze_comparison_results, execute_calculations, get_calculators_to_run, ResultPresenter,
};
use crate::output::write_to_file;
use crate::presenter::CLIResultPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let device = FibDevice::new();
    let max_index = device.config().max_index;
    if config.n > max_index {
        warn!(requested = config.n, max_index, "index clamped to device maximum");
    }

    if config.bench {
        return run_bench_mode(config, &device);
    }
    run_cli(config, &device)
}

fn run_cli(config: &AppConfig, device: &FibDevice) -> Result<()> {
    let algorithms = get_calculators_to_run(&config.algo, device.factory())?;

    let mut session = device.open()?;
    let n = session.seek(i64::try_from(config.n).unwrap_or(i64::MAX), Whence::Set);
    let results = execute_calculations(&session, &algorithms);
    drop(session);

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(value) => {
                presenter.present_result(
                    &result.algorithm,
                    n,
                    value,
                    result.duration,
                    config.details,
                );
            }
            Err(error) => presenter.present_error(&error.to_string()),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, value)?;
        }
    }

    analyze_comparison_results(&results)?;
    if let Some(error) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(error.clone().into());
    }
    Ok(())
}

fn run_bench_mode(config: &AppConfig, device: &FibDevice) -> Result<()> {
    let mut session = device.open()?;
    let rows = run_bench(&mut session, config.n)?;
    drop(session);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        writeln!(out, "{}", row.render(config.json)?)?;
    }
    Ok(())
}
