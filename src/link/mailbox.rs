//! Single-slot frame mailbox between the receive context and the idle loop.
//!
//! ```text
//! ┌──────────────────┐  publish   ┌──────────────┐  take    ┌──────────────┐
//! │ FrameAccumulator │──────────▶│  one slot    │────────▶│  Idle loop   │
//! │ (RX context)     │◀──────────│  + counters  │◀────────│ (dispatcher) │
//! └──────────────────┘  rewind    └──────────────┘ release └──────────────┘
//! ```
//!
//! The slot is an `embassy-sync` [`Signal`]: publishing while a frame is
//! still waiting replaces it. That loss is part of the protocol (there
//! is no backpressure on the serial link), so it is only counted.
//!
//! The cursor rewind stays with the consumer: [`FrameMailbox::release`]
//! raises a flag that the accumulator honours on its next byte.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use super::RawFrame;

/// Counters describing silent data loss on the link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Frames handed to the slot.
    pub published: u32,
    /// Frames replaced before the idle loop took them.
    pub overwritten: u32,
    /// Frames that lost bytes to the capacity limit.
    pub truncated: u32,
}

/// One-deep overwrite mailbox for completed frames.
pub struct FrameMailbox {
    slot: Signal<CriticalSectionRawMutex, RawFrame>,
    rewind: AtomicBool,
    published: AtomicU32,
    overwritten: AtomicU32,
    truncated: AtomicU32,
}

impl FrameMailbox {
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
            rewind: AtomicBool::new(false),
            published: AtomicU32::new(0),
            overwritten: AtomicU32::new(0),
            truncated: AtomicU32::new(0),
        }
    }

    // ── Producer side (RX context) ────────────────────────────

    /// Hand a finished frame to the idle loop, replacing any frame
    /// still waiting.
    pub fn publish(&self, frame: RawFrame) {
        if self.slot.signaled() {
            self.overwritten.fetch_add(1, Ordering::Relaxed);
        }
        self.slot.signal(frame);
        self.published.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that the frame being built lost bytes.
    pub fn note_truncated(&self) {
        self.truncated.fetch_add(1, Ordering::Relaxed);
    }

    /// Consume a pending rewind request. Returns `true` at most once per
    /// [`release`](Self::release).
    pub fn take_rewind(&self) -> bool {
        self.rewind.swap(false, Ordering::AcqRel)
    }

    // ── Consumer side (idle loop) ─────────────────────────────

    /// Take the waiting frame, if any. Clears the ready state.
    pub fn take(&self) -> Option<RawFrame> {
        self.slot.try_take()
    }

    /// Whether a frame is waiting.
    pub fn is_ready(&self) -> bool {
        self.slot.signaled()
    }

    /// Finish a dispatch cycle: ask the accumulator to restart its
    /// buffer at cursor 0.
    pub fn release(&self) {
        self.rewind.store(true, Ordering::Release);
    }

    /// Snapshot of the loss counters.
    pub fn stats(&self) -> LinkStats {
        LinkStats {
            published: self.published.load(Ordering::Relaxed),
            overwritten: self.overwritten.load(Ordering::Relaxed),
            truncated: self.truncated.load(Ordering::Relaxed),
        }
    }
}

impl Default for FrameMailbox {
    fn default() -> Self {
        Self::new()
    }
}
