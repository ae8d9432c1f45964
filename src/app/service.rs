//! Command service: the dispatcher core.
//!
//! [`CommandService`] turns one frame body into at most one reply and
//! one actuator action. It owns no hardware: actuators, the transport,
//! and the event sink are injected at each call, so the whole pipeline
//! runs against mocks on the host.
//!
//! ```text
//!  FrameMailbox ──▶ ┌──────────────────────┐ ──▶ ActuatorPort
//!                   │    CommandService     │
//!     Transport ◀── │ parse · verify · act  │ ──▶ EventSink
//!                   └──────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::diagnostics::DispatchStats;
use crate::error::DispatchError;
use crate::link::mailbox::FrameMailbox;
use crate::link::reply::{self, Reply};
use crate::link::transport::Transport;

use super::commands::{Command, DisplaySchedule};
use super::events::{AppEvent, Applied};
use super::ports::{ActuatorPort, EventSink};
use super::registry::DeviceKind;

pub struct CommandService {
    feeder_hold_ms: u32,
    stats: DispatchStats,
    last_brightness: Option<u32>,
    last_schedule: Option<DisplaySchedule>,
}

impl CommandService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            feeder_hold_ms: config.feeder_hold_ms,
            stats: DispatchStats::default(),
            last_brightness: None,
            last_schedule: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive all outputs off and announce readiness on the link.
    pub fn start<T: Transport>(
        &mut self,
        hw: &mut impl ActuatorPort,
        tx: &mut T,
        sink: &mut impl EventSink,
    ) -> Result<(), T::Error> {
        hw.all_off();
        reply::send_banner(tx)?;
        sink.emit(&AppEvent::Started {
            feeder_hold_ms: self.feeder_hold_ms,
        });
        info!("CommandService started (feeder hold {} ms)", self.feeder_hold_ms);
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Decode, verify and apply one frame body.
    ///
    /// Returns the reply to send, or `None` when the frame is dropped
    /// without an answer (no device code).
    pub fn dispatch(
        &mut self,
        frame: &[u8],
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<Reply> {
        match Command::decode(frame) {
            Ok(cmd) => {
                let applied = self.apply(&cmd, hw);
                self.stats.acked = self.stats.acked.wrapping_add(1);
                sink.emit(&AppEvent::CommandApplied(applied));
                Some(Reply::Ack(cmd.kind()))
            }
            Err(err) => {
                self.record_failure(&err, sink);
                err.reply()
            }
        }
    }

    /// Dispatch one frame and write its reply to `tx`.
    ///
    /// Transport failures are logged; they never stop the idle loop.
    pub fn handle_frame<T: Transport>(
        &mut self,
        frame: &[u8],
        hw: &mut impl ActuatorPort,
        tx: &mut T,
        sink: &mut impl EventSink,
    ) -> Option<Reply> {
        let reply = self.dispatch(frame, hw, sink)?;
        if let Err(e) = reply.send(tx) {
            warn!("reply {:?} not sent: {:?}", reply, e);
        }
        Some(reply)
    }

    /// One idle-loop step: take a waiting frame, handle it, release the
    /// mailbox. Returns `true` if a frame was processed.
    pub fn poll<T: Transport>(
        &mut self,
        mailbox: &FrameMailbox,
        hw: &mut impl ActuatorPort,
        tx: &mut T,
        sink: &mut impl EventSink,
    ) -> bool {
        let Some(frame) = mailbox.take() else {
            return false;
        };
        debug!("frame: {:?}", core::str::from_utf8(&frame).unwrap_or("<non-utf8>"));
        self.handle_frame(&frame, hw, tx, sink);
        mailbox.release();
        true
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Brightness from the last accepted light command.
    pub fn last_brightness(&self) -> Option<u32> {
        self.last_brightness
    }

    /// Schedule from the last accepted display command.
    pub fn last_schedule(&self) -> Option<DisplaySchedule> {
        self.last_schedule
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply(&mut self, cmd: &Command, hw: &mut impl ActuatorPort) -> Applied {
        match cmd.kind() {
            DeviceKind::Pump => {
                let on = cmd.switch_on();
                hw.set_pump(on);
                Applied::Pump { on }
            }
            DeviceKind::Light => {
                let on = cmd.switch_on();
                let brightness = cmd.brightness().unwrap_or_default();
                hw.set_light(on);
                self.last_brightness = Some(brightness);
                Applied::Light { on, brightness }
            }
            DeviceKind::Feeder => {
                hw.pulse_feeder(self.feeder_hold_ms);
                Applied::Feeder {
                    quantity: cmd.quantity().unwrap_or_default(),
                    hold_ms: self.feeder_hold_ms,
                }
            }
            DeviceKind::Display => {
                hw.toggle_display();
                let schedule = cmd.schedule().unwrap_or(DisplaySchedule {
                    hour: 0,
                    minute: 0,
                    quantity: 0,
                });
                self.last_schedule = Some(schedule);
                Applied::Display(schedule)
            }
        }
    }

    fn record_failure(&mut self, err: &DispatchError, sink: &mut impl EventSink) {
        match *err {
            DispatchError::NoDeviceCode => {
                self.stats.dropped = self.stats.dropped.wrapping_add(1);
                sink.emit(&AppEvent::FrameDropped);
            }
            DispatchError::UnknownDevice(code) => {
                self.stats.unknown_devices = self.stats.unknown_devices.wrapping_add(1);
                sink.emit(&AppEvent::UnknownDevice(code));
            }
            DispatchError::ChecksumMismatch {
                device,
                expected,
                received,
            } => {
                self.stats.checksum_failures = self.stats.checksum_failures.wrapping_add(1);
                sink.emit(&AppEvent::ChecksumRejected {
                    device,
                    expected,
                    received,
                });
            }
        }
    }
}
