//! Matrix addressing.
//!
//! [`Selection`] is the record of what the grid currently has energised:
//! one column, one row line, and the measurement channel recorded by the
//! last sensor selection.  The scan service owns it and passes it to every
//! operation that touches the lines, so the ordering rule (column, then row
//! function, then read or heat) is visible at each call site instead of
//! living in ambient state.

use crate::matrix::{Column, Row, RowLine, SensorChannel};

use super::ports::MatrixPort;

/// Currently energised column, row line, and recorded channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    column: Option<Column>,
    row_line: Option<RowLine>,
    channel: Option<SensorChannel>,
}

impl Selection {
    /// Nothing energised.
    pub const fn idle() -> Self {
        Self {
            column: None,
            row_line: None,
            channel: None,
        }
    }

    /// Exclusively energise `column`.
    ///
    /// Any row line left on by the previous column is released first, so a
    /// heater latched at the end of one column is never carried onto the
    /// same row of the next.
    pub fn select_column(&mut self, hw: &mut impl MatrixPort, column: Column) {
        if self.row_line.is_some() {
            hw.release_rows();
            self.row_line = None;
            self.channel = None;
        }
        hw.drive_column(column);
        self.column = Some(column);
    }

    /// Exclusively energise `row`'s sensor and record its channel.
    pub fn select_sensor(&mut self, hw: &mut impl MatrixPort, row: Row) -> SensorChannel {
        debug_assert!(self.column.is_some(), "sensor selected with no column powered");
        let line = RowLine::Sensor(row);
        hw.drive_row_line(line);
        let channel = row.sensor_channel();
        self.row_line = Some(line);
        self.channel = Some(channel);
        channel
    }

    /// Exclusively energise `row`'s heater.  Replaces any sensor selection,
    /// including the one on the same row.
    pub fn select_heater(&mut self, hw: &mut impl MatrixPort, row: Row) {
        debug_assert!(self.column.is_some(), "heater selected with no column powered");
        let line = RowLine::Heater(row);
        hw.drive_row_line(line);
        self.row_line = Some(line);
        self.channel = None;
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn row_line(&self) -> Option<RowLine> {
        self.row_line
    }

    /// Channel recorded by the most recent sensor selection, if the sensor
    /// is still the selected row function.
    pub fn channel(&self) -> Option<SensorChannel> {
        self.channel
    }
}
