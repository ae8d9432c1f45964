//! Frame → dispatcher → actuator/reply pipeline.
//!
//! Every wire scenario checks the exact reply bytes and the exact
//! actuator history, including the cases that must produce neither.

use aquactl::app::events::{AppEvent, Applied};
use aquactl::app::registry::DeviceKind;
use aquactl::app::service::CommandService;
use aquactl::adapters::uart::UartTransport;
use aquactl::config::SystemConfig;
use aquactl::link::reply::Reply;

use crate::mock_hw::{ActuatorCall, BrokenTransport, MockHardware, RecordingSink};

struct Rig {
    service: CommandService,
    hw: MockHardware,
    uart: UartTransport,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    fn with_config(config: SystemConfig) -> Self {
        Self {
            service: CommandService::new(&config),
            hw: MockHardware::new(),
            uart: UartTransport::new(),
            sink: RecordingSink::new(),
        }
    }

    /// Dispatch one frame body and return the bytes written in reply.
    fn send(&mut self, body: &[u8]) -> Vec<u8> {
        self.service
            .handle_frame(body, &mut self.hw, &mut self.uart, &mut self.sink);
        self.uart.take_tx()
    }
}

// ── Startup ──────────────────────────────────────────────────

#[test]
fn start_clears_outputs_and_sends_banner() {
    let mut rig = Rig::new();
    rig.service
        .start(&mut rig.hw, &mut rig.uart, &mut rig.sink)
        .unwrap();

    assert_eq!(rig.hw.calls, vec![ActuatorCall::AllOff]);
    assert_eq!(
        rig.uart.take_tx(),
        b"SYSTEM READY. Type frame like: <01,01,02>\r\n".to_vec()
    );
    assert!(matches!(
        rig.sink.events.as_slice(),
        [AppEvent::Started { feeder_hold_ms: 500 }]
    ));
}

// ── Accepted commands ────────────────────────────────────────

#[test]
fn pump_on_frame() {
    let mut rig = Rig::new();
    assert_eq!(rig.send(b"01,01,02"), b"ACK: Pump Updated\r\n<ACK>".to_vec());
    assert_eq!(rig.hw.calls, vec![ActuatorCall::Pump(true)]);
    assert!(rig.hw.pump_on());
}

#[test]
fn light_frame_with_brightness() {
    let mut rig = Rig::new();
    assert_eq!(
        rig.send(b"02,01,50,53"),
        b"ACK: Light Set. Brightness: UPDATED\r\n<ACK>".to_vec()
    );
    assert_eq!(rig.hw.calls, vec![ActuatorCall::Light(true)]);
    assert!(matches!(
        rig.sink.events.as_slice(),
        [AppEvent::CommandApplied(Applied::Light { on: true, brightness: 50 })]
    ));
}

#[test]
fn feeder_frame_pulses_for_500ms() {
    let mut rig = Rig::new();
    assert_eq!(rig.send(b"03,01,10,14"), b"ACK: Feeding Done\r\n<ACK>".to_vec());
    assert_eq!(
        rig.hw.calls,
        vec![
            ActuatorCall::Feeder(true),
            ActuatorCall::Hold(500),
            ActuatorCall::Feeder(false),
        ]
    );
}

#[test]
fn display_frame_toggles_indicator() {
    let mut rig = Rig::new();
    assert_eq!(
        rig.send(b"05,01,8,30,5,49"),
        b"ACK: Display Schedule Updated\r\n<ACK>".to_vec()
    );
    assert_eq!(rig.hw.display_toggles(), 1);

    let schedule = rig.service.last_schedule().unwrap();
    assert_eq!((schedule.hour, schedule.minute, schedule.quantity), (8, 30, 5));
}

#[test]
fn pump_off_frame() {
    let mut rig = Rig::new();
    rig.send(b"01,01,02");
    assert_eq!(rig.send(b"01,00,01"), b"ACK: Pump Updated\r\n<ACK>".to_vec());
    assert!(!rig.hw.pump_on());
}

// ── Rejected commands ────────────────────────────────────────

#[test]
fn unknown_device_four() {
    let mut rig = Rig::new();
    assert_eq!(rig.send(b"04,01,00"), b"ERR: Unknown Device\r\n<ERR>".to_vec());
    assert!(rig.hw.calls.is_empty());
    assert!(matches!(rig.sink.events.as_slice(), [AppEvent::UnknownDevice(4)]));
}

#[test]
fn unknown_device_skips_checksum() {
    let mut rig = Rig::new();
    // No checksum field at all, still answered as unknown device.
    assert_eq!(rig.send(b"9"), b"ERR: Unknown Device\r\n<ERR>".to_vec());
    assert_eq!(rig.service.stats().checksum_failures, 0);
}

#[test]
fn checksum_mismatch() {
    let mut rig = Rig::new();
    assert_eq!(rig.send(b"01,01,99"), b"ERR: Checksum Fail\r\n<ERR>".to_vec());
    assert!(rig.hw.calls.is_empty());
    assert!(matches!(
        rig.sink.events.as_slice(),
        [AppEvent::ChecksumRejected {
            device: DeviceKind::Pump,
            expected: 2,
            received: Some(99),
        }]
    ));
}

#[test]
fn missing_checksum_is_a_mismatch() {
    let mut rig = Rig::new();
    assert_eq!(rig.send(b"02,01,50"), b"ERR: Checksum Fail\r\n<ERR>".to_vec());
    assert!(rig.hw.calls.is_empty());
}

#[test]
fn checksum_is_compared_after_mod_256() {
    let mut rig = Rig::new();
    // 5 + 1 + 200 + 59 + 0 = 265 → 9
    assert_eq!(
        rig.send(b"05,01,200,59,0,9"),
        b"ACK: Display Schedule Updated\r\n<ACK>".to_vec()
    );
    // The received side is not reduced.
    assert_eq!(
        rig.send(b"05,01,200,59,0,265"),
        b"ERR: Checksum Fail\r\n<ERR>".to_vec()
    );
}

#[test]
fn frames_without_device_code_are_silent() {
    let mut rig = Rig::new();
    for body in [&b""[..], b",,,", b"ab"] {
        assert!(rig.send(body).is_empty(), "{:?} must not reply", body);
    }
    assert!(rig.hw.calls.is_empty());
    assert_eq!(rig.service.stats().dropped, 3);
}

#[test]
fn transport_failure_does_not_undo_action() {
    let mut service = CommandService::new(&SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut tx = BrokenTransport::default();
    let mut sink = RecordingSink::new();

    let reply = service.handle_frame(b"01,01,02", &mut hw, &mut tx, &mut sink);
    assert_eq!(reply, Some(Reply::Ack(DeviceKind::Pump)));
    assert!(hw.pump_on());
    assert_eq!(tx.write_attempts, 1);
}

#[test]
fn configured_feeder_hold_is_used() {
    let config = SystemConfig {
        feeder_hold_ms: 120,
        ..SystemConfig::default()
    };
    let mut rig = Rig::with_config(config);
    rig.send(b"03,01,02,06");
    assert!(rig.hw.calls.contains(&ActuatorCall::Hold(120)));
}
