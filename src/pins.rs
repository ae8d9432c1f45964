//! GPIO / peripheral assignments for the controller board.
//!
//! Single source of truth; every driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Indicator outputs (one per device code)
// ---------------------------------------------------------------------------

/// Pump indicator (device 1).
pub const PUMP_GPIO: i32 = 4;
/// Light indicator (device 2).
pub const LIGHT_GPIO: i32 = 5;
/// Feeder indicator (device 3).
pub const FEEDER_GPIO: i32 = 6;
/// Display-updated indicator (device 5).
pub const DISPLAY_GPIO: i32 = 7;

/// All indicator outputs, in device-code order.
pub const INDICATOR_GPIOS: [i32; 4] = [PUMP_GPIO, LIGHT_GPIO, FEEDER_GPIO, DISPLAY_GPIO];

// ---------------------------------------------------------------------------
// Command UART
// ---------------------------------------------------------------------------

/// UART peripheral carrying command frames.
pub const COMMAND_UART: i32 = 1;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

/// Driver-side RX ring size (bytes). Must exceed the hardware FIFO (128).
pub const UART_RX_RING: i32 = 256;
