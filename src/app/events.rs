//! Outbound application events.
//!
//! The [`ScanService`](super::service::ScanService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::matrix::{MatrixPoint, N_POINTS, Reading};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// The scan service has started.
    Started { points: usize, dwell_ms: u32, margin: Reading },

    /// One point was measured and decided.
    PointScanned(PointOutcome),

    /// A full pass over the grid finished.
    CycleCompleted(CycleSummary),
}

/// Result of visiting one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOutcome {
    pub point: MatrixPoint,
    pub reading: Reading,
    pub target: Reading,
    pub heat: bool,
}

/// Per-cycle roll-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// 1-based cycle number.
    pub cycle: u64,
    pub visited: usize,
    pub heated: usize,
}

/// Every point outcome of one cycle, in scan order.
pub type CycleReport = heapless::Vec<PointOutcome, N_POINTS>;
