//! # fibdrv-device
//!
//! In-process model of the `fibonacci` character device. A device admits
//! one open session at a time; the session position selects the index,
//! `read` answers with the iterative algorithm and `write` with fast
//! doubling.

pub mod device;

pub use device::{
    DeviceConfig, DeviceError, FibDevice, FibSession, Reading, Whence, DEV_FIBONACCI_NAME,
};
