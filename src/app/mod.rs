//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the scan loop for the heating grid: matrix
//! addressing, the blocking sensor read, the heating actuator and the scan
//! scheduler that sequences them.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod actuator;
pub mod addressing;
pub mod events;
pub mod ports;
pub mod reader;
pub mod service;
