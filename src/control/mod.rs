//! Heating decisions.

pub mod threshold;
