//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibdrv: exact Fibonacci numbers through the fibonacci device.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute (the bench upper bound with --bench).
    #[arg(short, long, default_value = "100", env = "FIBDRV_N")]
    pub n: u64,

    /// Algorithm to use: iterative, fast, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output: full digits and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show bit and digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Time every index from 0 to n with both algorithms.
    #[arg(long)]
    pub bench: bool,

    /// Emit bench rows as JSON lines.
    #[arg(long, requires = "bench")]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
