//! Column power switches and the one-of-N row selector.
//!
//! The column switches and the row selector are two independent groups of
//! GPIO outputs.  Within each group the driver is exclusive: selecting a
//! line first drives every other line of the group low, then drives the
//! target high (break-before-make), so no instant has two lines of a group
//! energised.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: GPIO writes update hw_init's simulated pin levels.

use log::trace;

use crate::drivers::hw_init;
use crate::matrix::{Column, Row, RowLine};

pub struct MuxDriver {
    column: Option<Column>,
    row_line: Option<RowLine>,
}

impl MuxDriver {
    pub fn new() -> Self {
        Self {
            column: None,
            row_line: None,
        }
    }

    /// Energise `column`'s power path and no other.
    pub fn select_column(&mut self, column: Column) {
        for other in Column::ALL.into_iter().filter(|&c| c != column) {
            hw_init::gpio_write(other.gpio(), false);
        }
        hw_init::gpio_write(column.gpio(), true);
        self.column = Some(column);
        trace!("mux: column {} on", column.index());
    }

    /// Energise exactly `line` on the row selector.
    pub fn select_row_line(&mut self, line: RowLine) {
        for other in Self::row_lines().filter(|&l| l != line) {
            hw_init::gpio_write(other.gpio(), false);
        }
        hw_init::gpio_write(line.gpio(), true);
        self.row_line = Some(line);
        trace!("mux: row line {:?} on", line);
    }

    /// De-energise every row selector output.
    pub fn release_rows(&mut self) {
        for line in Self::row_lines() {
            hw_init::gpio_write(line.gpio(), false);
        }
        self.row_line = None;
    }

    /// De-energise every output of both groups.
    pub fn all_off(&mut self) {
        self.release_rows();
        for column in Column::ALL {
            hw_init::gpio_write(column.gpio(), false);
        }
        self.column = None;
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn row_line(&self) -> Option<RowLine> {
        self.row_line
    }

    /// Whether any heater line is currently driven.
    pub fn is_heating(&self) -> bool {
        self.row_line.is_some_and(RowLine::is_heater)
    }

    fn row_lines() -> impl Iterator<Item = RowLine> {
        Row::ALL
            .into_iter()
            .flat_map(|row| [RowLine::Sensor(row), RowLine::Heater(row)])
    }
}

impl Default for MuxDriver {
    fn default() -> Self {
        Self::new()
    }
}
