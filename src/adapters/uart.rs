//! UART transport adapter.
//!
//! Implements [`Transport`] over the command UART installed by
//! `hw_init`. The port handle is `Copy`: the RX thread and the idle
//! loop each hold one, and the ESP-IDF driver serialises access to the
//! RX ring and the TX FIFO internally.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `uart_read_bytes` / `uart_write_bytes` on the driver.
//! On host/test: an in-memory loopback with scriptable RX bytes and a
//! captured TX stream.

use crate::error::Error;
use crate::link::transport::Transport;

// ── ESP-IDF implementation ───────────────────────────────────

#[cfg(target_os = "espidf")]
mod imp {
    use esp_idf_svc::sys::*;

    use super::{Error, Transport};
    use crate::pins;

    /// RX wait per read call, in FreeRTOS ticks.
    const READ_TIMEOUT_TICKS: TickType_t = 1;
    /// Upper bound for `flush` to wait on the TX FIFO.
    const FLUSH_TIMEOUT_TICKS: TickType_t = 100;

    #[derive(Debug, Clone, Copy)]
    pub struct UartTransport {
        port: uart_port_t,
    }

    impl UartTransport {
        /// Handle to the command UART. `hw_init::init_peripherals` must
        /// have installed the driver first.
        pub fn new() -> Self {
            Self {
                port: pins::COMMAND_UART,
            }
        }
    }

    impl Default for UartTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn check(rc: esp_err_t) -> Result<(), Error> {
        if rc == ESP_OK as esp_err_t { Ok(()) } else { Err(Error::Transport(rc)) }
    }

    impl Transport for UartTransport {
        type Error = Error;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
            // SAFETY: buf is valid for buf.len() bytes; the driver copies
            // at most that many out of its RX ring.
            let n = unsafe {
                uart_read_bytes(
                    self.port,
                    buf.as_mut_ptr().cast(),
                    buf.len() as u32,
                    READ_TIMEOUT_TICKS,
                )
            };
            if n < 0 { Err(Error::Transport(n)) } else { Ok(n as usize) }
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
            // SAFETY: data is valid for data.len() bytes for the call.
            let n = unsafe { uart_write_bytes(self.port, data.as_ptr().cast(), data.len()) };
            if n < 0 { Err(Error::Transport(n)) } else { Ok(n as usize) }
        }

        fn flush(&mut self) -> Result<(), Error> {
            // SAFETY: waits on the installed driver's TX queue.
            check(unsafe { uart_wait_tx_done(self.port, FLUSH_TIMEOUT_TICKS) })
        }

        fn available(&self) -> bool {
            let mut len: usize = 0;
            // SAFETY: len is a valid out-pointer for the call.
            let rc = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
            rc == ESP_OK as esp_err_t && len > 0
        }
    }
}

// ── Host loopback ────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod imp {
    use std::collections::VecDeque;

    use super::{Error, Transport};

    /// In-memory UART: bytes injected with [`inject_rx`](Self::inject_rx)
    /// are served by `read`; everything written is kept for inspection.
    #[derive(Debug, Default)]
    pub struct UartTransport {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
    }

    impl UartTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue bytes as if they arrived on the RX pin.
        pub fn inject_rx(&mut self, data: &[u8]) {
            self.rx.extend(data.iter().copied());
        }

        /// Everything written since the last call.
        pub fn take_tx(&mut self) -> Vec<u8> {
            core::mem::take(&mut self.tx)
        }
    }

    impl Transport for UartTransport {
        type Error = Error;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
            let n = buf.len().min(self.rx.len());
            for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
                *slot = byte;
            }
            Ok(n)
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
            self.tx.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> Result<(), Error> {
            Ok(())
        }

        fn available(&self) -> bool {
            !self.rx.is_empty()
        }
    }
}

pub use imp::UartTransport;
