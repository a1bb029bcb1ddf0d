//! GPIO / peripheral pin assignments for the HeatGrid matrix board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

use crate::matrix::{N_COLS, N_ROWS};

// ---------------------------------------------------------------------------
// Column power switches (PNP high-side, one per column)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = column 0 power path energised.
pub const COL_0_GPIO: i32 = 11;
/// Digital output: HIGH = column 1 power path energised.
pub const COL_1_GPIO: i32 = 12;

/// Column switch outputs, indexed by column.
pub const COLUMN_GPIOS: [i32; N_COLS] = [COL_0_GPIO, COL_1_GPIO];

// ---------------------------------------------------------------------------
// Row selector — sensor circuits (NPN low-side, one per row)
// ---------------------------------------------------------------------------

pub const SENSOR_ROW_0_GPIO: i32 = 13;
pub const SENSOR_ROW_1_GPIO: i32 = 14;

/// Sensor-enable outputs, indexed by row.
pub const SENSOR_ROW_GPIOS: [i32; N_ROWS] = [SENSOR_ROW_0_GPIO, SENSOR_ROW_1_GPIO];

// ---------------------------------------------------------------------------
// Row selector — heater circuits (NPN low-side, one per row)
// ---------------------------------------------------------------------------

pub const HEATER_ROW_0_GPIO: i32 = 15;
pub const HEATER_ROW_1_GPIO: i32 = 16;

/// Heater-enable outputs, indexed by row.
pub const HEATER_ROW_GPIOS: [i32; N_ROWS] = [HEATER_ROW_0_GPIO, HEATER_ROW_1_GPIO];

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Row 0 thermistor divider — ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const SENSOR_ROW_0_ADC_CH: u32 = 0;
/// Row 1 thermistor divider — ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const SENSOR_ROW_1_ADC_CH: u32 = 1;

/// ADC1 channel sampled for each row's sensor, indexed by row.
pub const SENSOR_ADC_CHANNELS: [u32; N_ROWS] = [SENSOR_ROW_0_ADC_CH, SENSOR_ROW_1_ADC_CH];

/// Native ADC1 resolution on the ESP32-S3 (bits).
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
pub const ADC_NATIVE_BITS: u32 = 12;
