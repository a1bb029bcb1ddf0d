//! HeatGrid Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                     │
//! │                                                            │
//! │  HardwareAdapter          LogEventSink        FreeRtos     │
//! │  (Matrix+Sampler)         (EventSink)         (DelayNs)    │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ───────────────        │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │           ScanService (pure logic)               │      │
//! │  │  Addressing · Reader · Threshold · Actuator      │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info};

use heatgrid::adapters::hardware::HardwareAdapter;
use heatgrid::adapters::log_sink::LogEventSink;
use heatgrid::app::service::ScanService;
use heatgrid::config::GridConfig;
use heatgrid::drivers::hw_init;
use heatgrid::drivers::mux::MuxDriver;
use heatgrid::sensors::adc::AdcSampler;

/// Validate the compiled-in configuration and bring up the peripherals.
fn boot() -> heatgrid::error::Result<GridConfig> {
    let config = GridConfig::default();
    config.validate()?;
    hw_init::init_peripherals()?;
    Ok(config)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  HeatGrid v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config + peripherals ───────────────────────────────
    let config = match boot() {
        Ok(config) => config,
        Err(e) => {
            // Scanning is undefined without validated config and configured
            // lines. Halt without touching GPIO; the task watchdog resets
            // the chip after its timeout.
            error!("Boot failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(MuxDriver::new(), AdcSampler::new());
    hw.all_off();
    let mut log_sink = LogEventSink::new();
    let mut delay = FreeRtos;

    // ── 4. Construct app service ──────────────────────────────
    let mut app = ScanService::new(config);
    app.start(&mut log_sink);

    info!("System ready. Entering scan loop.");

    // ── 5. Scan loop (never returns) ──────────────────────────
    loop {
        app.scan_cycle(&mut hw, &mut delay, &mut log_sink);
    }
}
