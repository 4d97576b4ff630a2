//! Shared fixtures for the workspace integration tests.

use serde::Deserialize;

/// Contents of `tests/testdata/fibonacci_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

/// One golden index: either the exact value or a prefix and digit count.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<String>,
    #[serde(default)]
    pub fib_prefix: Option<String>,
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

/// Load the golden file shipped with the workspace.
pub fn load_golden_data() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
