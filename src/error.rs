//! Error types for the aquactl firmware.
//!
//! Protocol-level failures ([`DispatchError`]) are answered on the wire
//! and never leave the dispatcher. Everything that can stop the
//! firmware from starting funnels into [`Error`], which `main` wraps in
//! `anyhow`.

use core::fmt;

use crate::app::registry::DeviceKind;
use crate::config::ConfigError;
use crate::drivers::hw_init::HwInitError;
use crate::link::reply::Reply;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
    /// The serial transport reported a driver error code.
    Transport(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Transport(rc) => write!(f, "transport: driver error (rc={rc})"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Dispatch errors
// ---------------------------------------------------------------------------

/// Why a frame was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The frame carries no device code. Dropped without a reply.
    NoDeviceCode,
    /// The device code has no registry entry.
    UnknownDevice(u32),
    /// The calculated checksum differs from the one received.
    /// `received` is `None` when the frame ended before the checksum.
    ChecksumMismatch {
        device: DeviceKind,
        expected: u32,
        received: Option<u32>,
    },
}

impl DispatchError {
    /// Wire reply for this failure; `None` means stay silent.
    pub fn reply(&self) -> Option<Reply> {
        match self {
            Self::NoDeviceCode => None,
            Self::UnknownDevice(_) => Some(Reply::UnknownDevice),
            Self::ChecksumMismatch { .. } => Some(Reply::ChecksumFail),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeviceCode => write!(f, "no device code"),
            Self::UnknownDevice(code) => write!(f, "unknown device {code}"),
            Self::ChecksumMismatch {
                device,
                expected,
                received: Some(got),
            } => write!(f, "{device:?} checksum mismatch (expected {expected}, got {got})"),
            Self::ChecksumMismatch {
                device,
                expected,
                received: None,
            } => write!(f, "{device:?} checksum missing (expected {expected})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
