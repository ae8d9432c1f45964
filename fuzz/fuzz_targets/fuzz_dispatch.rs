//! Fuzz target: `CommandService::dispatch`
//!
//! Feeds arbitrary frame bodies to the dispatcher. An actuator may only
//! move when the reply is an ACK.
//!
//! cargo fuzz run fuzz_dispatch

#![no_main]

use aquactl::app::events::AppEvent;
use aquactl::app::ports::{ActuatorPort, EventSink};
use aquactl::app::service::CommandService;
use aquactl::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Touched(bool);

impl ActuatorPort for Touched {
    fn set_pump(&mut self, _on: bool) {
        self.0 = true;
    }
    fn set_light(&mut self, _on: bool) {
        self.0 = true;
    }
    fn set_feeder(&mut self, _on: bool) {
        self.0 = true;
    }
    fn toggle_display(&mut self) {
        self.0 = true;
    }
    fn hold(&mut self, _ms: u32) {}
    fn all_off(&mut self) {
        self.0 = true;
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut service = CommandService::new(&SystemConfig::default());
    let mut hw = Touched::default();

    let reply = service.dispatch(data, &mut hw, &mut Discard);
    let acked = reply.is_some_and(|r| r.is_ack());
    assert_eq!(hw.0, acked, "actuators moved without an ACK");
});
