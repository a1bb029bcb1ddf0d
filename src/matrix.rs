//! Matrix coordinates and line identities.
//!
//! Rows and columns are closed enums, so an out-of-range coordinate cannot
//! be constructed.  Everything else here is a small `Copy` value derived
//! from them: the [`MatrixPoint`] being scanned, the [`RowLine`] that the
//! one-of-N row selector drives, and the ADC [`SensorChannel`] behind each
//! row's sensor.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pins;

/// Number of rows in the heating grid.
pub const N_ROWS: usize = 2;
/// Number of columns in the heating grid.
pub const N_COLS: usize = 2;
/// Number of points visited per scan cycle.
pub const N_POINTS: usize = N_ROWS * N_COLS;

/// Raw sensor sample, normalised to [`READING_BITS`] bits.
pub type Reading = u16;

/// Resolution of a [`Reading`] (bits).  Target tables are expressed in
/// this scale regardless of the ADC's native width.
pub const READING_BITS: u32 = 10;
/// Largest representable reading (1023).
pub const MAX_READING: Reading = (1 << READING_BITS) - 1;

/// Returned when converting an index that lies outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange(pub usize);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix index {} out of range", self.0)
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Column {
    Col0 = 0,
    Col1 = 1,
}

impl Column {
    /// Every column in scan order.
    pub const ALL: [Column; N_COLS] = [Column::Col0, Column::Col1];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// GPIO driving this column's power switch.
    pub const fn gpio(self) -> i32 {
        pins::COLUMN_GPIOS[self.index()]
    }
}

impl TryFrom<usize> for Column {
    type Error = OutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(OutOfRange(index))
    }
}

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Row {
    Row0 = 0,
    Row1 = 1,
}

impl Row {
    /// Every row in scan order.
    pub const ALL: [Row; N_ROWS] = [Row::Row0, Row::Row1];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The ADC channel wired to this row's sensor.
    pub const fn sensor_channel(self) -> SensorChannel {
        SensorChannel {
            row: self,
            adc: pins::SENSOR_ADC_CHANNELS[self.index()],
        }
    }
}

impl TryFrom<usize> for Row {
    type Error = OutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(OutOfRange(index))
    }
}

// ---------------------------------------------------------------------------
// Points, lines, channels
// ---------------------------------------------------------------------------

/// One (row, column) location in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixPoint {
    pub row: Row,
    pub column: Column,
}

impl MatrixPoint {
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Every point in scan order: column-major, rows ascending within a column.
    pub fn scan_order() -> impl Iterator<Item = MatrixPoint> {
        Column::ALL
            .into_iter()
            .flat_map(|column| Row::ALL.into_iter().map(move |row| MatrixPoint::new(row, column)))
    }
}

impl fmt::Display for MatrixPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row.index(), self.column.index())
    }
}

/// A single output of the row selector.  The sensor and heater lines of
/// every row share one one-of-N selector, so exactly one `RowLine` can be
/// driven at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowLine {
    Sensor(Row),
    Heater(Row),
}

impl RowLine {
    pub const fn row(self) -> Row {
        match self {
            Self::Sensor(row) | Self::Heater(row) => row,
        }
    }

    pub const fn is_heater(self) -> bool {
        matches!(self, Self::Heater(_))
    }

    pub const fn gpio(self) -> i32 {
        match self {
            Self::Sensor(row) => pins::SENSOR_ROW_GPIOS[row.index()],
            Self::Heater(row) => pins::HEATER_ROW_GPIOS[row.index()],
        }
    }
}

/// Measurement channel recorded when a row's sensor is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorChannel {
    row: Row,
    adc: u32,
}

impl SensorChannel {
    pub const fn row(self) -> Row {
        self.row
    }

    /// ADC1 channel number to convert on.
    pub const fn adc_channel(self) -> u32 {
        self.adc
    }
}
