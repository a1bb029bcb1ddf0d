//! On/off threshold controller for the heating grid
//!
//! One-sided deadband: a point is heated when its reading, even after
//! adding the error margin, is still strictly below the point's target.
//! There is no cooling action and no memory between samples.

use crate::config::{GridConfig, TargetTable};
use crate::matrix::{MatrixPoint, Reading};

/// Threshold controller
#[derive(Debug, Clone, Copy)]
pub struct ThresholdController {
    targets: TargetTable,
    margin: Reading,
}

impl ThresholdController {
    pub const fn new(targets: TargetTable, margin: Reading) -> Self {
        Self { targets, margin }
    }

    pub const fn from_config(config: &GridConfig) -> Self {
        Self::new(config.targets, config.error_margin)
    }

    /// `true` when `point` needs heat: `reading + margin < target`.
    pub fn decide(&self, point: MatrixPoint, reading: Reading) -> bool {
        u32::from(reading) + u32::from(self.margin) < u32::from(self.targets.get(point))
    }

    /// Target for `point`.
    pub fn target(&self, point: MatrixPoint) -> Reading {
        self.targets.get(point)
    }

    pub fn margin(&self) -> Reading {
        self.margin
    }
}
