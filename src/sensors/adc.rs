//! Blocking single-shot ADC sampler for the row sensors.
//!
//! Converts one channel per call and returns the sample shifted down to
//! [`READING_BITS`](crate::matrix::READING_BITS) bits, the scale the target table is written in.
//! Range clamping is left to the sensor reader.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: blocks on one ADC1 oneshot conversion (initialised by hw_init).
//! On host/test: reads from a per-row static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::matrix::{Reading, SensorChannel};
#[cfg(not(target_os = "espidf"))]
use crate::matrix::{N_ROWS, Row};
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicU16; N_ROWS] = [const { AtomicU16::new(0) }; N_ROWS];

/// Inject the value the next conversion on `row`'s channel returns.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_reading(row: Row, raw: Reading) {
    SIM_ADC[row.index()].store(raw, Ordering::Relaxed);
}

pub struct AdcSampler {
    conversions: u32,
}

impl AdcSampler {
    pub fn new() -> Self {
        Self { conversions: 0 }
    }

    /// Convert `channel` and return the sample at reading scale.
    ///
    /// Blocks until the conversion completes.  A conversion that never
    /// completes hangs the scan loop; there is no timeout.
    pub fn convert(&mut self, channel: SensorChannel) -> Reading {
        self.conversions = self.conversions.wrapping_add(1);
        self.read_adc(channel)
    }

    /// Conversions performed since construction (wraps).
    pub fn conversions(&self) -> u32 {
        self.conversions
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self, channel: SensorChannel) -> Reading {
        let raw = hw_init::adc1_convert_blocking(channel.adc_channel());
        raw >> (pins::ADC_NATIVE_BITS - crate::matrix::READING_BITS)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self, channel: SensorChannel) -> Reading {
        SIM_ADC[channel.row().index()].load(Ordering::Relaxed)
    }
}

impl Default for AdcSampler {
    fn default() -> Self {
        Self::new()
    }
}
