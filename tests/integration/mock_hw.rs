//! Mock adapters for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO registers.

use aquactl::app::events::AppEvent;
use aquactl::app::ports::{ActuatorPort, EventSink};
use aquactl::link::transport::Transport;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Pump(bool),
    Light(bool),
    Feeder(bool),
    ToggleDisplay,
    Hold(u32),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    pub fn pump_on(&self) -> bool {
        self.latest(|c| match c {
            ActuatorCall::Pump(on) => Some(*on),
            _ => None,
        })
    }

    pub fn light_on(&self) -> bool {
        self.latest(|c| match c {
            ActuatorCall::Light(on) => Some(*on),
            _ => None,
        })
    }

    pub fn display_toggles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ActuatorCall::ToggleDisplay)
            .count()
    }

    fn latest(&self, pick: impl Fn(&ActuatorCall) -> Option<bool>) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::AllOff => Some(false),
                other => pick(other),
            })
            .unwrap_or(false)
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Pump(on));
    }

    fn set_light(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Light(on));
    }

    fn set_feeder(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Feeder(on));
    }

    fn toggle_display(&mut self) {
        self.calls.push(ActuatorCall::ToggleDisplay);
    }

    fn hold(&mut self, ms: u32) {
        self.calls.push(ActuatorCall::Hold(ms));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Transport that refuses every write ────────────────────────

#[derive(Debug, Default)]
pub struct BrokenTransport {
    pub write_attempts: usize,
}

impl Transport for BrokenTransport {
    type Error = &'static str;

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn write(&mut self, _data: &[u8]) -> Result<usize, Self::Error> {
        self.write_attempts += 1;
        Err("line down")
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn available(&self) -> bool {
        false
    }
}
