//! Timing sweep over device positions, one row per index.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use fibdrv_core::calculator::FibError;
use fibdrv_device::{DeviceError, FibSession, Whence};

/// Per-index timings for both algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchRow {
    pub n: u64,
    pub iterative_ns: u64,
    pub fast_ns: u64,
}

impl BenchRow {
    /// Render as `<n> <iterative_ns> <fast_ns>` or as a JSON object.
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            serde_json::to_string(self)
        } else {
            Ok(format!("{} {} {}", self.n, self.iterative_ns, self.fast_ns))
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Read and write every position from 0 to `upto` (clamped by the device),
/// checking that both algorithms agree.
pub fn run_bench(session: &mut FibSession<'_>, upto: u64) -> Result<Vec<BenchRow>, DeviceError> {
    let last = session.seek(i64::try_from(upto).unwrap_or(i64::MAX), Whence::Set);
    let mut rows = Vec::new();
    for i in 0..=last {
        let n = session.seek(i64::try_from(i).unwrap_or(i64::MAX), Whence::Set);
        let read = session.read()?;
        let write = session.write()?;
        if read.text != write.text {
            return Err(FibError::Mismatch.into());
        }
        debug!(n, digits = read.text.len(), "bench row");
        rows.push(BenchRow {
            n,
            iterative_ns: nanos(read.elapsed),
            fast_ns: nanos(write.elapsed),
        });
    }
    Ok(rows)
}
