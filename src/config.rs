//! System configuration parameters
//!
//! All tunable parameters for the controller. Defaults match the
//! reference board: 9600 baud, a 500 ms feeder pulse and active-low
//! indicator outputs. A firmware image can carry a JSON override (see
//! [`SystemConfig::load`]).

use core::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Serial link ---
    /// UART baud rate
    pub uart_baud: u32,

    // --- Actuators ---
    /// How long the feeder output stays ON per command (milliseconds)
    pub feeder_hold_ms: u32,
    /// Indicator outputs are lit by driving the pin LOW
    pub outputs_active_low: bool,

    // --- Timing ---
    /// Idle-loop sleep between mailbox polls (milliseconds)
    pub idle_poll_ms: u32,
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
    /// Interval between diagnostics log lines (seconds, 0 = never)
    pub stats_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            uart_baud: 9600,

            feeder_hold_ms: 500,
            outputs_active_low: true,

            idle_poll_ms: 10,
            watchdog_timeout_ms: 10_000,
            stats_interval_secs: 60,
        }
    }
}

/// Baud rates the UART driver accepts for this link.
const SUPPORTED_BAUD: [u32; 6] = [1200, 2400, 4800, 9600, 19_200, 115_200];

impl SystemConfig {
    /// Reject values the firmware cannot run with.
    ///
    /// The feeder pulse blocks the idle loop, so it must finish well
    /// inside the watchdog window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_BAUD.contains(&self.uart_baud) {
            return Err(ConfigError::ValidationFailed("uart_baud not supported"));
        }
        if self.feeder_hold_ms == 0 || self.feeder_hold_ms > 10_000 {
            return Err(ConfigError::ValidationFailed(
                "feeder_hold_ms must be 1..=10000",
            ));
        }
        if self.idle_poll_ms == 0 || self.idle_poll_ms > 1_000 {
            return Err(ConfigError::ValidationFailed("idle_poll_ms must be 1..=1000"));
        }
        if self.watchdog_timeout_ms <= self.feeder_hold_ms.saturating_add(self.idle_poll_ms) {
            return Err(ConfigError::ValidationFailed(
                "watchdog_timeout_ms must exceed feeder_hold_ms + idle_poll_ms",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing keys take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            line: e.line(),
            column: e.column(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for this firmware image.
    ///
    /// `override_json` is the JSON baked in through `AQUACTL_CONFIG`
    /// at build time. A broken override falls back to defaults with a
    /// warning rather than bricking the device.
    pub fn load(override_json: Option<&str>) -> Self {
        match override_json.map(Self::from_json) {
            None => {
                info!("Config: built-in defaults");
                Self::default()
            }
            Some(Ok(config)) => {
                info!("Config: image override applied");
                config
            }
            Some(Err(e)) => {
                warn!("Config: override rejected ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// Errors from configuration parsing and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON text is malformed or has the wrong types.
    Parse { line: usize, column: usize },
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, column } => {
                write!(f, "parse error at line {}, column {}", line, column)
            }
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
