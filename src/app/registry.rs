//! Device registry: what each device code means on the wire.
//!
//! | Code | Device  | Payload fields          |
//! |------|---------|-------------------------|
//! | 1    | Pump    | -                       |
//! | 2    | Light   | brightness              |
//! | 3    | Feeder  | quantity                |
//! | 5    | Display | hour, minute, quantity  |
//!
//! Code 4 has no entry and is answered as an unknown device. Every
//! device shares the same checksum rule (see [`checksum`]).

/// Actuator subsystems reachable over the serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Pump,
    Light,
    Feeder,
    Display,
}

impl DeviceKind {
    /// Status line sent back after a successful command.
    pub fn ack_message(self) -> &'static str {
        match self {
            Self::Pump => "ACK: Pump Updated",
            Self::Light => "ACK: Light Set. Brightness: UPDATED",
            Self::Feeder => "ACK: Feeding Done",
            Self::Display => "ACK: Display Schedule Updated",
        }
    }
}

/// Registry entry for one device code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSpec {
    pub code: u32,
    pub kind: DeviceKind,
    /// Number of payload fields between the state code and the checksum.
    pub field_count: usize,
}

/// Most payload fields any device takes.
pub const MAX_FIELDS: usize = 3;

/// The device table.
pub const DEVICES: [DeviceSpec; 4] = [
    DeviceSpec { code: 1, kind: DeviceKind::Pump, field_count: 0 },
    DeviceSpec { code: 2, kind: DeviceKind::Light, field_count: 1 },
    DeviceSpec { code: 3, kind: DeviceKind::Feeder, field_count: 1 },
    DeviceSpec { code: 5, kind: DeviceKind::Display, field_count: 3 },
];

/// Look up a device code.
pub fn lookup(code: u32) -> Option<&'static DeviceSpec> {
    DEVICES.iter().find(|entry| entry.code == code)
}

/// Frame checksum: device + state + payload, reduced modulo 256.
///
/// The sum wraps like the scanner's fields do, so arbitrarily large
/// inputs never panic.
pub fn checksum(device: u32, state: u32, fields: &[u32]) -> u32 {
    let sum = fields
        .iter()
        .fold(device.wrapping_add(state), |acc, &v| acc.wrapping_add(v));
    sum % 256
}
