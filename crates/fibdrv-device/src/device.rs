//! Device, session and seek handling.

use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use fibdrv_core::calculator::{Algorithm, FibError};
use fibdrv_core::constants::MAX_LENGTH;
use fibdrv_core::registry::DefaultFactory;

/// Name the device registers under.
pub const DEV_FIBONACCI_NAME: &str = "fibonacci";

/// Device-level errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("fibonacci is in use")]
    Busy,

    #[error(transparent)]
    Fib(#[from] FibError),
}

/// Device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Highest index a session can seek to.
    pub max_index: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            max_index: MAX_LENGTH,
        }
    }
}

/// Seek origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Absolute position.
    Set,
    /// Relative to the current position.
    Current,
    /// Counted back from `max_index`.
    End,
}

/// Result of a read or write: F(pos) in decimal and the compute time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub text: String,
    /// Time spent in the Fibonacci computation, excluding decimal rendering.
    pub elapsed: Duration,
}

/// The Fibonacci device.
pub struct FibDevice {
    config: DeviceConfig,
    lock: Mutex<()>,
    factory: DefaultFactory,
}

impl FibDevice {
    /// Create a device with the default clamp (`MAX_LENGTH`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DeviceConfig::default())
    }

    #[must_use]
    pub fn with_config(config: DeviceConfig) -> Self {
        Self {
            config,
            lock: Mutex::new(()),
            factory: DefaultFactory::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> DeviceConfig {
        self.config
    }

    /// Calculator registry backing this device's sessions.
    #[must_use]
    pub fn factory(&self) -> &DefaultFactory {
        &self.factory
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock.is_locked()
    }

    /// Open an exclusive session positioned at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Busy`] while another session is open.
    pub fn open(&self) -> Result<FibSession<'_>, DeviceError> {
        let Some(guard) = self.lock.try_lock() else {
            warn!("{DEV_FIBONACCI_NAME} is in use");
            return Err(DeviceError::Busy);
        };
        debug!(device = DEV_FIBONACCI_NAME, "session opened");
        Ok(FibSession {
            device: self,
            _guard: guard,
            pos: 0,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// An open session. Dropping it releases the device.
pub struct FibSession<'a> {
    device: &'a FibDevice,
    _guard: MutexGuard<'a, ()>,
    pos: u64,
}

impl FibSession<'_> {
    /// Current position (the index the next read or write computes).
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the position and return it, clamped to `[0, max_index]`.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let max = self.device.config.max_index;
        let target = match whence {
            Whence::Set => i128::from(offset),
            Whence::Current => i128::from(self.pos) + i128::from(offset),
            Whence::End => i128::from(max) - i128::from(offset),
        };
        let clamped = target.clamp(0, i128::from(max));
        if clamped != target {
            warn!(requested = %target, clamped = %clamped, "seek position clamped");
        }
        self.pos = u64::try_from(clamped).unwrap_or(max);
        self.pos
    }

    /// F(pos) by iterative addition.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures from the engine.
    pub fn read(&self) -> Result<Reading, DeviceError> {
        self.compute(Algorithm::Iterative)
    }

    /// F(pos) by fast doubling.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures from the engine.
    pub fn write(&self) -> Result<Reading, DeviceError> {
        self.compute(Algorithm::FastDoubling)
    }

    /// F(pos) with the given algorithm, timing only the computation.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures from the engine.
    pub fn compute(&self, algorithm: Algorithm) -> Result<Reading, DeviceError> {
        let calculator = self.device.factory.for_algorithm(algorithm);
        let start = Instant::now();
        let value = calculator.calculate(self.pos)?;
        let elapsed = start.elapsed();
        Ok(Reading {
            text: value.try_to_decimal_string().map_err(FibError::from)?,
            elapsed,
        })
    }
}

impl Drop for FibSession<'_> {
    fn drop(&mut self) {
        debug!(device = DEV_FIBONACCI_NAME, "session released");
    }
}
