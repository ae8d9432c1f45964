//! Byte transport seam for the serial link.
//!
//! The UART is the only production implementation
//! ([`UartTransport`](crate::adapters::uart::UartTransport)); tests plug
//! in recording mocks. Replies and the startup banner go through this
//! trait, so the dispatcher never touches the peripheral.

/// Byte-oriented, non-blocking serial channel.
pub trait Transport {
    type Error: core::fmt::Debug;

    /// Copy pending received bytes into `buf`; 0 means nothing pending.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Queue `data` for transmission. May accept fewer bytes than given.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Block until queued output has left the device.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Whether `read` would return at least one byte.
    fn available(&self) -> bool;

    /// Keep writing until every byte was accepted.
    ///
    /// A write that accepts nothing ends the loop: the link has no way
    /// to report the lost tail upstream, so it is logged and dropped.
    fn write_all(&mut self, mut data: &[u8]) -> Result<(), Self::Error> {
        while !data.is_empty() {
            let n = self.write(data)?;
            if n == 0 {
                log::warn!("transport: write stalled, {} bytes dropped", data.len());
                break;
            }
            data = &data[n.min(data.len())..];
        }
        Ok(())
    }
}
