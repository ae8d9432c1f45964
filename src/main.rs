//! aquactl firmware: main entry point.
//!
//! ```text
//!  UART RX ──▶ RX thread ──▶ FrameAccumulator ──▶ FrameMailbox
//!                                                     │
//!                                                     ▼
//!  UART TX ◀── Reply ◀── CommandService::poll ◀── idle loop ──▶ HardwareAdapter
//!                               │
//!                               └──▶ LogEventSink
//! ```
//!
//! The RX thread owns the accumulator and never blocks on the idle
//! loop; the two only meet at the one-deep mailbox.
#![deny(unused_must_use)]

use std::time::{Duration, Instant};

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info};

use aquactl::adapters::hardware::HardwareAdapter;
use aquactl::adapters::log_sink::LogEventSink;
use aquactl::adapters::uart::UartTransport;
use aquactl::app::events::AppEvent;
use aquactl::app::ports::EventSink;
use aquactl::app::service::CommandService;
use aquactl::config::SystemConfig;
use aquactl::diagnostics::RuntimeMetrics;
use aquactl::drivers::{hw_init, watchdog::Watchdog};
use aquactl::link::accumulator::FrameAccumulator;
use aquactl::link::mailbox::FrameMailbox;

/// Hand-off slot between the RX thread and the idle loop.
static MAILBOX: FrameMailbox = FrameMailbox::new();

const RX_TASK_STACK: usize = 4096;
/// Sleep between RX drains when the line is idle.
const RX_IDLE_MS: u32 = 2;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  aquactl v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::load(option_env!("AQUACTL_CONFIG"));

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals(&config).map_err(aquactl::Error::from)?;
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    // ── 4. RX thread ──────────────────────────────────────────
    let mut rx = UartTransport::new();
    std::thread::Builder::new()
        .name("uart-rx".into())
        .stack_size(RX_TASK_STACK)
        .spawn(move || {
            let mut acc = FrameAccumulator::new(&MAILBOX);
            loop {
                match acc.drain(&mut rx) {
                    Ok(0) => FreeRtos::delay_ms(RX_IDLE_MS),
                    Ok(_) => {}
                    Err(e) => {
                        error!("uart rx: {}", e);
                        FreeRtos::delay_ms(RX_IDLE_MS);
                    }
                }
            }
        })?;

    // ── 5. Adapters + service ─────────────────────────────────
    let mut hw = HardwareAdapter::new(&config, FreeRtos);
    let mut tx = UartTransport::new();
    let mut sink = LogEventSink::new();
    let mut service = CommandService::new(&config);

    service.start(&mut hw, &mut tx, &mut sink)?;
    info!("System ready. Entering idle loop.");

    // ── 6. Idle loop ──────────────────────────────────────────
    let boot = Instant::now();
    let stats_every = Duration::from_secs(u64::from(config.stats_interval_secs));
    let mut last_stats = boot;

    loop {
        if !service.poll(&MAILBOX, &mut hw, &mut tx, &mut sink) {
            FreeRtos::delay_ms(config.idle_poll_ms);
        }
        watchdog.feed();

        if !stats_every.is_zero() && last_stats.elapsed() >= stats_every {
            last_stats = Instant::now();
            let metrics = RuntimeMetrics::collect(boot.elapsed().as_secs(), &MAILBOX, &service);
            sink.emit(&AppEvent::Metrics(metrics));
        }
    }
}
