//! Hardware adapter: bridges the indicator drivers to [`ActuatorPort`].
//!
//! Owns one [`Indicator`] per device plus the delay source used for the
//! feeder hold. This is the only module that touches actuator pins; on
//! non-espidf targets the drivers keep state in memory.

use embedded_hal::delay::DelayNs;

use crate::app::ports::ActuatorPort;
use crate::config::SystemConfig;
use crate::drivers::indicator::{Indicator, Polarity};
use crate::pins;

/// Concrete adapter that combines all actuator outputs behind the port.
pub struct HardwareAdapter<D> {
    pump: Indicator,
    light: Indicator,
    feeder: Indicator,
    display: Indicator,
    delay: D,
}

impl<D: DelayNs> HardwareAdapter<D> {
    pub fn new(config: &SystemConfig, delay: D) -> Self {
        let polarity = Polarity::from_active_low(config.outputs_active_low);
        Self {
            pump: Indicator::new(pins::PUMP_GPIO, polarity),
            light: Indicator::new(pins::LIGHT_GPIO, polarity),
            feeder: Indicator::new(pins::FEEDER_GPIO, polarity),
            display: Indicator::new(pins::DISPLAY_GPIO, polarity),
            delay,
        }
    }

    pub fn pump(&self) -> &Indicator {
        &self.pump
    }

    pub fn light(&self) -> &Indicator {
        &self.light
    }

    pub fn feeder(&self) -> &Indicator {
        &self.feeder
    }

    pub fn display(&self) -> &Indicator {
        &self.display
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<D: DelayNs> ActuatorPort for HardwareAdapter<D> {
    fn set_pump(&mut self, on: bool) {
        self.pump.set(on);
    }

    fn set_light(&mut self, on: bool) {
        self.light.set(on);
    }

    fn set_feeder(&mut self, on: bool) {
        self.feeder.set(on);
    }

    fn toggle_display(&mut self) {
        self.display.toggle();
    }

    fn hold(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn all_off(&mut self) {
        self.pump.set(false);
        self.light.set(false);
        self.feeder.set(false);
        self.display.set(false);
    }
}
