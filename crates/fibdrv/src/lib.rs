//! fibdrv library: application logic for the device client.

pub mod app;
pub mod bench;
pub mod completion;
pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod output;
pub mod presenter;
