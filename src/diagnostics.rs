//! Runtime diagnostics.
//!
//! The serial protocol loses data silently by design (truncated and
//! overwritten frames, dropped frames without a device code). Nothing
//! is reported on the wire, so the counters below are the only way to
//! see it happen. They are collected into a [`RuntimeMetrics`] snapshot
//! and logged periodically by the idle loop.

use crate::app::service::CommandService;
use crate::link::mailbox::{FrameMailbox, LinkStats};

/// Dispatcher outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Commands verified and applied.
    pub acked: u32,
    /// Frames rejected by checksum.
    pub checksum_failures: u32,
    /// Frames naming an unregistered device.
    pub unknown_devices: u32,
    /// Frames without a device code, dropped without a reply.
    pub dropped: u32,
}

impl DispatchStats {
    /// Frames that reached the dispatcher, whatever the outcome.
    pub fn total(&self) -> u32 {
        self.acked
            .wrapping_add(self.checksum_failures)
            .wrapping_add(self.unknown_devices)
            .wrapping_add(self.dropped)
    }
}

/// Point-in-time diagnostics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeMetrics {
    pub uptime_secs: u64,
    pub link: LinkStats,
    pub dispatch: DispatchStats,
}

impl RuntimeMetrics {
    pub fn collect(uptime_secs: u64, mailbox: &FrameMailbox, service: &CommandService) -> Self {
        Self {
            uptime_secs,
            link: mailbox.stats(),
            dispatch: service.stats(),
        }
    }

    /// Published frames the dispatcher never saw (overwritten in the slot).
    pub fn frames_lost(&self) -> u32 {
        self.link.overwritten
    }
}
