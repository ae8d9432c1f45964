//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one `TAG | key=value` line per
//! application event to the logger (UART0 console in production).
//! Rejections log at warn so they survive a raised log level.

use log::{debug, info, warn};

use crate::app::events::{AppEvent, Applied};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { feeder_hold_ms } => {
                info!("START | feeder_hold_ms={}", feeder_hold_ms);
            }
            AppEvent::CommandApplied(applied) => match applied {
                Applied::Pump { on } => info!("CMD | pump on={}", on),
                Applied::Light { on, brightness } => {
                    info!("CMD | light on={} brightness={}", on, brightness)
                }
                Applied::Feeder { quantity, hold_ms } => {
                    info!("CMD | feeder quantity={} hold_ms={}", quantity, hold_ms)
                }
                Applied::Display(s) => info!(
                    "CMD | display schedule={:02}:{:02} quantity={}",
                    s.hour, s.minute, s.quantity
                ),
            },
            AppEvent::ChecksumRejected {
                device,
                expected,
                received,
            } => match received {
                Some(got) => warn!(
                    "CKSUM | device={:?} expected={} received={}",
                    device, expected, got
                ),
                None => warn!("CKSUM | device={:?} expected={} received=none", device, expected),
            },
            AppEvent::UnknownDevice(code) => {
                warn!("UNKNOWN | device_code={}", code);
            }
            AppEvent::FrameDropped => {
                debug!("DROP | frame without device code");
            }
            AppEvent::Metrics(m) => {
                info!(
                    "STATS | uptime={}s | frames={} overwritten={} truncated={} | \
                     ack={} cksum_fail={} unknown={} dropped={}",
                    m.uptime_secs,
                    m.link.published,
                    m.link.overwritten,
                    m.link.truncated,
                    m.dispatch.acked,
                    m.dispatch.checksum_failures,
                    m.dispatch.unknown_devices,
                    m.dispatch.dropped,
                );
            }
        }
    }
}
