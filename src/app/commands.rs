//! Parsed command frames.
//!
//! A [`Command`] lives for exactly one dispatch cycle: it is built from
//! a frame body, checked against its checksum, applied, and dropped.

use heapless::Vec;

use crate::error::DispatchError;
use crate::link::scanner::Fields;

use super::registry::{self, DeviceKind, DeviceSpec, MAX_FIELDS};

/// State code that switches an output on; anything else means off.
pub const STATE_ON: u32 = 1;

/// Display schedule carried by a device-5 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySchedule {
    pub hour: u32,
    pub minute: u32,
    pub quantity: u32,
}

/// One decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub device: &'static DeviceSpec,
    pub state: u32,
    /// Payload fields in wire order; length equals `device.field_count`.
    pub fields: Vec<u32, MAX_FIELDS>,
    /// Checksum as received, `None` if the frame ended early.
    pub checksum: Option<u32>,
}

impl Command {
    /// Decode a frame body such as `02,01,50,53`.
    ///
    /// A missing device code is [`DispatchError::NoDeviceCode`]. A
    /// missing state code reads as 0 and missing payload fields read as
    /// 0; a missing checksum is kept as `None` and fails verification.
    /// Bytes after the checksum are ignored.
    pub fn parse(frame: &[u8]) -> Result<Self, DispatchError> {
        let mut scan = Fields::new(frame);
        let code = scan.next().ok_or(DispatchError::NoDeviceCode)?;
        let state = scan.next().unwrap_or(0);

        let device = registry::lookup(code).ok_or(DispatchError::UnknownDevice(code))?;

        let mut fields = Vec::new();
        for _ in 0..device.field_count {
            // field_count <= MAX_FIELDS for every registry entry
            let _ = fields.push(scan.next().unwrap_or(0));
        }

        let checksum = scan.next();

        Ok(Self {
            device,
            state,
            fields,
            checksum,
        })
    }

    /// Checksum the frame should have carried.
    pub fn expected_checksum(&self) -> u32 {
        registry::checksum(self.device.code, self.state, &self.fields)
    }

    /// Accept the command only if its checksum matches.
    pub fn verify(self) -> Result<Self, DispatchError> {
        let expected = self.expected_checksum();
        if self.checksum == Some(expected) {
            Ok(self)
        } else {
            Err(DispatchError::ChecksumMismatch {
                device: self.device.kind,
                expected,
                received: self.checksum,
            })
        }
    }

    /// Decode and verify in one step.
    pub fn decode(frame: &[u8]) -> Result<Self, DispatchError> {
        Self::parse(frame)?.verify()
    }

    pub fn kind(&self) -> DeviceKind {
        self.device.kind
    }

    /// `true` when the state code asks for ON.
    pub fn switch_on(&self) -> bool {
        self.state == STATE_ON
    }

    /// Light brightness field.
    pub fn brightness(&self) -> Option<u32> {
        match self.kind() {
            DeviceKind::Light => self.fields.first().copied(),
            _ => None,
        }
    }

    /// Feeder quantity field.
    pub fn quantity(&self) -> Option<u32> {
        match self.kind() {
            DeviceKind::Feeder => self.fields.first().copied(),
            DeviceKind::Display => self.fields.get(2).copied(),
            _ => None,
        }
    }

    /// Display schedule fields.
    pub fn schedule(&self) -> Option<DisplaySchedule> {
        match (self.kind(), self.fields.as_slice()) {
            (DeviceKind::Display, &[hour, minute, quantity]) => Some(DisplaySchedule {
                hour,
                minute,
                quantity,
            }),
            _ => None,
        }
    }
}
