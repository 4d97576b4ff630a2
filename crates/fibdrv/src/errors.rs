//! Error handling and exit codes.

use fibdrv_core::calculator::FibError;
use fibdrv_core::constants::exit_codes;
use fibdrv_device::DeviceError;

/// Map a calculation error to its exit code.
pub fn fib_error_code(err: &FibError) -> i32 {
    match err {
        FibError::BigNum(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Map an application error to the process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(device) = err.downcast_ref::<DeviceError>() {
        return match device {
            DeviceError::Busy => exit_codes::ERROR_BUSY,
            DeviceError::Fib(fib) => fib_error_code(fib),
        };
    }
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return fib_error_code(fib);
    }
    exit_codes::ERROR_GENERIC
}
