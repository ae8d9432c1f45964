//! Fuzz target: `FrameAccumulator::push_bytes`
//!
//! Streams arbitrary bytes through the accumulator, releasing the
//! mailbox whenever a frame lands, and checks that no published frame
//! is oversized or still carries a delimiter.
//!
//! cargo fuzz run fuzz_accumulator

#![no_main]

use aquactl::link::accumulator::FrameAccumulator;
use aquactl::link::mailbox::FrameMailbox;
use aquactl::link::{FRAME_CAPACITY, FRAME_END, FRAME_START};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mailbox = FrameMailbox::new();
    let mut acc = FrameAccumulator::new(&mailbox);

    for chunk in data.chunks(7) {
        acc.push_bytes(chunk);
        if let Some(frame) = mailbox.take() {
            assert!(frame.len() <= FRAME_CAPACITY);
            assert!(!frame.contains(&FRAME_START) && !frame.contains(&FRAME_END));
            mailbox.release();
        }
    }
});
