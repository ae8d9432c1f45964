//! Serial command link: framing, field scanning, replies.
//!
//! ```text
//!  UART RX ──▶ FrameAccumulator ──▶ FrameMailbox ──▶ CommandService
//!                (RX context)        (one slot)       (idle loop)
//!                                                          │
//!  UART TX ◀───────────────────── Reply ◀──────────────────┘
//! ```

pub mod accumulator;
pub mod mailbox;
pub mod reply;
pub mod scanner;
pub mod transport;

/// Start-of-frame delimiter.
pub const FRAME_START: u8 = b'<';

/// End-of-frame delimiter.
pub const FRAME_END: u8 = b'>';

/// Payload bytes a frame can hold; anything beyond is dropped.
pub const FRAME_CAPACITY: usize = 39;

/// Body of one frame, delimiters excluded.
pub type RawFrame = heapless::Vec<u8, FRAME_CAPACITY>;
