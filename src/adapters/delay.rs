//! Blocking delay for targets without FreeRTOS.
//!
//! On ESP-IDF the firmware hands `esp_idf_hal::delay::FreeRtos` to the
//! hardware adapter instead, which yields to the scheduler while the
//! feeder pulse is held.

use embedded_hal::delay::DelayNs;

/// [`DelayNs`] backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
