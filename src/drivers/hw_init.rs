//! One-shot hardware peripheral initialization.
//!
//! Configures the indicator GPIOs and the command UART using raw
//! ESP-IDF sys calls. Called once from `main()` before the RX thread
//! and the idle loop start. On the host every call is a logged no-op.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::config::SystemConfig;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    UartConfigFailed(i32),
    UartPinsFailed(i32),
    UartInstallFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartConfigFailed(rc) => write!(f, "UART param config failed (rc={})", rc),
            Self::UartPinsFailed(rc) => write!(f, "UART pin routing failed (rc={})", rc),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &SystemConfig) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before any other task touches
    // these peripherals.
    unsafe {
        init_gpio_outputs(config.outputs_active_low)?;
        init_uart(config.uart_baud)?;
    }
    info!("hw_init: indicators + UART{} configured", pins::COMMAND_UART);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(config: &SystemConfig) -> Result<(), HwInitError> {
    log::info!(
        "hw_init(sim): peripheral init skipped (baud={})",
        config.uart_baud
    );
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

/// Pin level that leaves an indicator dark.
pub const fn off_level(active_low: bool) -> bool {
    active_low
}

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs(active_low: bool) -> Result<(), HwInitError> {
    for &pin in &pins::INDICATOR_GPIOS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        // Start dark before the first command arrives.
        unsafe { gpio_set_level(pin, u32::from(off_level(active_low))) };
    }

    info!("hw_init: indicator outputs configured (active_low={})", active_low);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Idle loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── UART ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
const UART_PIN_UNUSED: i32 = -1;

#[cfg(target_os = "espidf")]
unsafe fn init_uart(baud: u32) -> Result<(), HwInitError> {
    // 8N1 without flow control; the frame protocol has no handshake.
    let cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { uart_param_config(pins::COMMAND_UART, &cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartConfigFailed(ret)); }

    let ret = unsafe {
        uart_set_pin(
            pins::COMMAND_UART,
            pins::UART_TX_GPIO,
            pins::UART_RX_GPIO,
            UART_PIN_UNUSED,
            UART_PIN_UNUSED,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartPinsFailed(ret)); }

    // RX ring only; TX writes block until the bytes are in the FIFO.
    let ret = unsafe {
        uart_driver_install(
            pins::COMMAND_UART,
            pins::UART_RX_RING,
            0,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInstallFailed(ret)); }

    info!("hw_init: UART{} @ {} baud 8N1", pins::COMMAND_UART, baud);
    Ok(())
}
