//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`MuxDriver`] and the [`AdcSampler`], exposing them through
//! [`MatrixPort`] and [`SamplerPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{MatrixPort, SamplerPort};
use crate::drivers::mux::MuxDriver;
use crate::matrix::{Column, Reading, RowLine, SensorChannel};
use crate::sensors::adc::AdcSampler;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    mux: MuxDriver,
    adc: AdcSampler,
}

impl HardwareAdapter {
    pub fn new(mux: MuxDriver, adc: AdcSampler) -> Self {
        Self { mux, adc }
    }

    /// De-energise every column and row line — safe shutdown.
    pub fn all_off(&mut self) {
        self.mux.all_off();
    }

    pub fn mux(&self) -> &MuxDriver {
        &self.mux
    }

    pub fn adc(&self) -> &AdcSampler {
        &self.adc
    }
}

// ── MatrixPort implementation ─────────────────────────────────

impl MatrixPort for HardwareAdapter {
    fn drive_column(&mut self, column: Column) {
        self.mux.select_column(column);
    }

    fn drive_row_line(&mut self, line: RowLine) {
        self.mux.select_row_line(line);
    }

    fn release_rows(&mut self) {
        self.mux.release_rows();
    }
}

// ── SamplerPort implementation ────────────────────────────────

impl SamplerPort for HardwareAdapter {
    fn convert(&mut self, channel: SensorChannel) -> Reading {
        self.adc.convert(channel)
    }
}
