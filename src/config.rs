//! Grid configuration parameters
//!
//! Everything here is fixed at compile time: the per-point target table,
//! the deadband margin and the dwell per point.  [`GridConfig::DEFAULT`] is
//! checked by a `const` assertion, so a bad table fails the build.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::matrix::{MAX_READING, MatrixPoint, N_COLS, N_ROWS, Reading};

/// Margin added to a reading before comparing it against its target.
pub const ERROR_MARGIN: Reading = 3;

/// Time spent on each point (ms): sensor settling and heater-on time share it.
pub const DWELL_MS: u32 = 100;

/// Ideal readings per point, `[row][column]` (10-bit scale).
pub const TARGETS: [[Reading; N_COLS]; N_ROWS] = [
    [245, 378], // row 0
    [24, 863],  // row 1
];

/// Ideal sensor reading for every point of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTable([[Reading; N_COLS]; N_ROWS]);

impl TargetTable {
    pub const fn new(entries: [[Reading; N_COLS]; N_ROWS]) -> Self {
        Self(entries)
    }

    /// Target reading for `point`.
    pub const fn get(&self, point: MatrixPoint) -> Reading {
        self.0[point.row.index()][point.column.index()]
    }

    /// First entry above [`MAX_READING`], if any.
    pub const fn first_out_of_range(&self) -> Option<(usize, usize)> {
        let mut row = 0;
        while row < N_ROWS {
            let mut col = 0;
            while col < N_COLS {
                if self.0[row][col] > MAX_READING {
                    return Some((row, col));
                }
                col += 1;
            }
            row += 1;
        }
        None
    }
}

/// Core grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Ideal reading per point.
    pub targets: TargetTable,
    /// Deadband added to every reading before the target comparison.
    pub error_margin: Reading,
    /// Settle / heat dwell per point (milliseconds).
    pub dwell_ms: u32,
}

impl GridConfig {
    pub const DEFAULT: Self = Self {
        targets: TargetTable::new(TARGETS),
        error_margin: ERROR_MARGIN,
        dwell_ms: DWELL_MS,
    };

    /// Range-check every field.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Some((row, col)) = self.targets.first_out_of_range() {
            return Err(ConfigError::TargetOutOfRange { row, col });
        }
        if self.error_margin > MAX_READING {
            return Err(ConfigError::MarginOutOfRange);
        }
        if self.dwell_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = assert!(GridConfig::DEFAULT.validate().is_ok(), "default grid config is invalid");
