//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements    | Connects to                   |
//! |------------|---------------|-------------------------------|
//! | `hardware` | ActuatorPort  | Indicator GPIOs + delay       |
//! | `log_sink` | EventSink     | Serial log output             |
//! | `uart`     | Transport     | ESP-IDF UART / host loopback  |
//! | `delay`    | DelayNs       | `std::thread::sleep` (host)   |

pub mod delay;
pub mod hardware;
pub mod log_sink;
pub mod uart;
