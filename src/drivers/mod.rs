//! Indicator drivers, hardware initialisation, and the task watchdog.

pub mod hw_init;
pub mod indicator;
pub mod watchdog;
