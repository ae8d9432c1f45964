//! Single-pin indicator output (pump, light, feeder, display).
//!
//! Each device code drives one GPIO. The board's LEDs are wired
//! active-low, so the driver keeps the *logical* state and translates
//! it to a pin level on every write.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    pub fn from_active_low(active_low: bool) -> Self {
        if active_low { Self::ActiveLow } else { Self::ActiveHigh }
    }

    /// Pin level for a logical state.
    pub fn level(self, on: bool) -> bool {
        match self {
            Self::ActiveHigh => on,
            Self::ActiveLow => !on,
        }
    }
}

pub struct Indicator {
    pin: i32,
    polarity: Polarity,
    on: bool,
}

impl Indicator {
    /// Create the driver and force the output OFF.
    pub fn new(pin: i32, polarity: Polarity) -> Self {
        let mut ind = Self {
            pin,
            polarity,
            on: false,
        };
        ind.write_hw();
        ind
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
        self.write_hw();
    }

    pub fn toggle(&mut self) {
        self.set(!self.on);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Level currently driven on the pin.
    pub fn pin_level(&self) -> bool {
        self.polarity.level(self.on)
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }

    fn write_hw(&self) {
        hw_init::gpio_write(self.pin, self.pin_level());
    }
}
