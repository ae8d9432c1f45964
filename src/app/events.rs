//! Outbound application events.
//!
//! The [`CommandService`](super::service::CommandService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. They mirror
//! the wire replies but carry the detail the replies leave out.

use super::commands::DisplaySchedule;
use super::registry::DeviceKind;
use crate::diagnostics::RuntimeMetrics;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The idle loop is about to start; carries the feeder hold in ms.
    Started { feeder_hold_ms: u32 },

    /// A verified command reached its actuator.
    CommandApplied(Applied),

    /// A frame failed checksum verification.
    ChecksumRejected {
        device: DeviceKind,
        expected: u32,
        received: Option<u32>,
    },

    /// A frame named a device code with no registry entry.
    UnknownDevice(u32),

    /// A frame without a device code was dropped silently.
    FrameDropped,

    /// Periodic counters snapshot.
    Metrics(RuntimeMetrics),
}

/// What an accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Pump { on: bool },
    Light { on: bool, brightness: u32 },
    Feeder { quantity: u32, hold_ms: u32 },
    Display(DisplaySchedule),
}
