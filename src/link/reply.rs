//! Outbound reply text.
//!
//! Every reply is a human-readable status line terminated by CR LF,
//! followed immediately by a machine tag without a line terminator:
//!
//! ```text
//! ACK: Pump Updated\r\n<ACK>
//! ERR: Checksum Fail\r\n<ERR>
//! ```

use super::transport::Transport;
use crate::app::registry::DeviceKind;

/// Banner sent once before the idle loop starts.
pub const READY_BANNER: &str = "SYSTEM READY. Type frame like: <01,01,02>\r\n";

const LINE_END: &str = "\r\n";
const TAG_ACK: &str = "<ACK>";
const TAG_ERR: &str = "<ERR>";

/// A reply to one dispatched frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Command accepted and applied to the given device.
    Ack(DeviceKind),
    /// Calculated and received checksums differ.
    ChecksumFail,
    /// The device code has no registry entry.
    UnknownDevice,
}

impl Reply {
    /// Status line without the line terminator.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Ack(kind) => kind.ack_message(),
            Self::ChecksumFail => "ERR: Checksum Fail",
            Self::UnknownDevice => "ERR: Unknown Device",
        }
    }

    /// Trailing machine-readable tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ack(_) => TAG_ACK,
            Self::ChecksumFail | Self::UnknownDevice => TAG_ERR,
        }
    }

    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack(_))
    }

    /// Full wire form, e.g. `"ERR: Unknown Device\r\n<ERR>"`.
    pub fn render(&self) -> heapless::String<64> {
        let mut out = heapless::String::new();
        // Longest status is 36 bytes; the sum always fits.
        let _ = out.push_str(self.status());
        let _ = out.push_str(LINE_END);
        let _ = out.push_str(self.tag());
        out
    }

    /// Write the reply to a transport.
    pub fn send<T: Transport>(&self, tx: &mut T) -> Result<(), T::Error> {
        tx.write_all(self.render().as_bytes())?;
        tx.flush()
    }
}

/// Send the startup banner.
pub fn send_banner<T: Transport>(tx: &mut T) -> Result<(), T::Error> {
    tx.write_all(READY_BANNER.as_bytes())?;
    tx.flush()
}
