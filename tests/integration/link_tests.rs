//! UART bytes → accumulator → mailbox → idle-loop poll, end to end.

use aquactl::adapters::uart::UartTransport;
use aquactl::app::service::CommandService;
use aquactl::config::SystemConfig;
use aquactl::diagnostics::RuntimeMetrics;
use aquactl::link::FRAME_CAPACITY;
use aquactl::link::accumulator::FrameAccumulator;
use aquactl::link::mailbox::FrameMailbox;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

fn service() -> CommandService {
    CommandService::new(&SystemConfig::default())
}

#[test]
fn frame_travels_from_rx_to_reply() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    uart.inject_rx(b"<01,01,02>");
    acc.drain(&mut uart).unwrap();

    assert!(svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
    assert_eq!(uart.take_tx(), b"ACK: Pump Updated\r\n<ACK>".to_vec());
    assert!(hw.pump_on());

    // Nothing left: the next poll is a no-op.
    assert!(!svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
}

#[test]
fn consecutive_frames_after_release() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    for frame in [&b"<01,01,02>"[..], b"<02,01,50,53>", b"<01,00,01>"] {
        acc.push_bytes(frame);
        assert!(svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
    }
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Pump(true),
            ActuatorCall::Light(true),
            ActuatorCall::Pump(false),
        ]
    );
    assert_eq!(svc.stats().acked, 3);
}

#[test]
fn second_frame_before_poll_overwrites_first() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    acc.push_bytes(b"<01,01,02><02,01,50,53>");
    assert!(svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
    assert_eq!(hw.calls, vec![ActuatorCall::Light(true)]);

    let metrics = RuntimeMetrics::collect(1, &mailbox, &svc);
    assert_eq!(metrics.link.published, 2);
    assert_eq!(metrics.frames_lost(), 1);
}

#[test]
fn oversized_frame_is_truncated_then_rejected() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    // Valid pump frame padded with leading zeros past the capacity.
    let mut frame = b"<".to_vec();
    frame.extend(std::iter::repeat_n(b'0', FRAME_CAPACITY));
    frame.extend_from_slice(b"1,01,02>");
    acc.push_bytes(&frame);

    // Body is all zeros: device code 0 is not registered.
    svc.poll(&mailbox, &mut hw, &mut uart, &mut sink);
    assert_eq!(uart.take_tx(), b"ERR: Unknown Device\r\n<ERR>".to_vec());
    assert!(hw.calls.is_empty());
    assert_eq!(mailbox.stats().truncated, 1);
}

#[test]
fn empty_and_separator_only_frames_are_silent() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    for frame in [&b"<>"[..], b"<,,,>"] {
        acc.push_bytes(frame);
        assert!(svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
    }
    assert!(uart.take_tx().is_empty());
    assert!(hw.calls.is_empty());
}

#[test]
fn restart_mid_frame_keeps_only_the_last() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    acc.push_bytes(b"<03,01,1<05,01,8,30,5,49>");
    svc.poll(&mailbox, &mut hw, &mut uart, &mut sink);
    assert_eq!(hw.display_toggles(), 1);
    assert!(!hw.calls.contains(&ActuatorCall::Feeder(true)));
}

#[test]
fn stray_end_delimiter_does_not_replay_last_command() {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut uart = UartTransport::new();
    let mut sink = RecordingSink::new();

    acc.push_bytes(b"<03,01,10,14>");
    assert!(svc.poll(&mailbox, &mut hw, &mut uart, &mut sink));
    assert_eq!(uart.take_tx(), b"ACK: Feeding Done\r\n<ACK>".to_vec());

    acc.push_byte(b'>');
    svc.poll(&mailbox, &mut hw, &mut uart, &mut sink);
    assert!(uart.take_tx().is_empty());
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Feeder(true),
            ActuatorCall::Hold(500),
            ActuatorCall::Feeder(false),
        ]
    );
    assert_eq!(svc.stats().acked, 1);
}
