//! aquactl firmware library.
//!
//! Serial frame controller for an aquarium: command frames arrive on a
//! UART, are checked against a per-frame checksum and switch the pump,
//! light, feeder and display outputs. Every module builds on the host;
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! inside each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod link;
pub mod pins;

pub use error::{Error, Result};
