//! Heating actuator.
//!
//! Switches the selected row from "read sensor" to "drive heater" inside
//! the column that is already powered.  The heater stays on through the
//! dwell and is released by the next row or column selection.

use log::debug;

use crate::matrix::Row;

use super::addressing::Selection;
use super::ports::MatrixPort;

/// Energise `row`'s heater in the currently selected column.
pub fn heat(hw: &mut impl MatrixPort, selection: &mut Selection, row: Row) {
    selection.select_heater(hw, row);
    debug!(
        "heater: row {} on (column {:?})",
        row.index(),
        selection.column().map(|c| c.index())
    );
}
