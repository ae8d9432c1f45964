//! Byte-at-a-time frame accumulator.
//!
//! Runs in the receive context (UART RX interrupt / RX task) and must
//! never block. It recognises `<` and `>` and nothing else: whatever
//! lies between the delimiters is the frame body.
//!
//! | Byte     | Effect                                                  |
//! |----------|---------------------------------------------------------|
//! | `<`      | restart the buffer, nothing published                   |
//! | `>`      | publish the buffer; the cursor stays where it is        |
//! |          | unless a release is pending, which empties it first     |
//! | other    | append if room is left, otherwise drop silently         |
//!
//! The cursor only returns to 0 on `<` or after the idle loop releases
//! the previous frame (see [`FrameMailbox::release`]).

use super::mailbox::FrameMailbox;
use super::transport::Transport;
use super::{FRAME_END, FRAME_START, RawFrame};

/// Bytes pulled from the transport per [`FrameAccumulator::drain`] call.
const RX_CHUNK: usize = 32;

/// Streaming frame accumulator bound to a mailbox.
pub struct FrameAccumulator<'a> {
    mailbox: &'a FrameMailbox,
    buf: RawFrame,
    /// A `<` was seen and the matching `>` has not arrived yet.
    open: bool,
    /// The current buffer already lost at least one byte.
    truncated: bool,
}

impl<'a> FrameAccumulator<'a> {
    pub fn new(mailbox: &'a FrameMailbox) -> Self {
        Self {
            mailbox,
            buf: RawFrame::new(),
            open: false,
            truncated: false,
        }
    }

    /// Feed one received byte.
    pub fn push_byte(&mut self, byte: u8) {
        match byte {
            FRAME_START => {
                // A fresh start supersedes any pending rewind.
                self.mailbox.take_rewind();
                self.restart();
                self.open = true;
            }
            FRAME_END => {
                // A released buffer must not be published a second time.
                if !self.open && self.mailbox.take_rewind() {
                    self.restart();
                }
                self.mailbox.publish(self.buf.clone());
                self.open = false;
            }
            _ => {
                if !self.open && self.mailbox.take_rewind() {
                    self.restart();
                }
                if self.buf.push(byte).is_err() && !self.truncated {
                    self.truncated = true;
                    self.mailbox.note_truncated();
                }
            }
        }
    }

    /// Feed a run of bytes in order.
    pub fn push_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.push_byte(byte);
        }
    }

    /// Read whatever the transport has pending and feed it through.
    ///
    /// Returns the number of bytes consumed; 0 means the line was idle.
    pub fn drain<T: Transport>(&mut self, rx: &mut T) -> Result<usize, T::Error> {
        let mut chunk = [0u8; RX_CHUNK];
        let mut total = 0;
        loop {
            let n = rx.read(&mut chunk)?;
            if n == 0 {
                return Ok(total);
            }
            self.push_bytes(&chunk[..n.min(RX_CHUNK)]);
            total += n;
            if !rx.available() {
                return Ok(total);
            }
        }
    }

    /// Bytes collected since the last restart.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    fn restart(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }
}
