//! Application service — the scan scheduler.
//!
//! [`ScanService`] owns the threshold controller and the hardware
//! [`Selection`].  One call to [`ScanService::scan_cycle`] visits every
//! point once; the binary calls it forever.  All I/O flows through port
//! traits injected at call sites, making the whole cycle testable with
//! mock adapters.
//!
//! ```text
//!   MatrixPort ◀──┐                        ┌──▶ EventSink
//!                 │   ┌────────────────┐   │
//!                 ├───│  ScanService   │───┘
//!  SamplerPort ──▶┘   │ Addr·Read·Ctrl │◀── DelayNs (dwell)
//!                     └────────────────┘
//! ```
//!
//! Per point: select sensor → read → decide → heat if needed → dwell.
//! Nothing learned in one cycle feeds into the next.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::GridConfig;
use crate::control::threshold::ThresholdController;
use crate::matrix::{Column, MatrixPoint, N_POINTS, Row};

use super::actuator;
use super::addressing::Selection;
use super::events::{CycleReport, CycleSummary, PointOutcome, ScanEvent};
use super::ports::{EventSink, MatrixPort, SamplerPort};
use super::reader;

// ───────────────────────────────────────────────────────────────
// ScanService
// ───────────────────────────────────────────────────────────────

pub struct ScanService {
    controller: ThresholdController,
    selection: Selection,
    dwell_ms: u32,
    cycles: u64,
}

impl ScanService {
    pub fn new(config: GridConfig) -> Self {
        Self {
            controller: ThresholdController::from_config(&config),
            selection: Selection::idle(),
            dwell_ms: config.dwell_ms,
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&ScanEvent::Started {
            points: N_POINTS,
            dwell_ms: self.dwell_ms,
            margin: self.controller.margin(),
        });
        info!("ScanService started ({} points, {} ms dwell)", N_POINTS, self.dwell_ms);
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Visit every point once, column-major, rows ascending.
    ///
    /// The `hw` parameter satisfies **both** [`MatrixPort`] and
    /// [`SamplerPort`]; the lines and the ADC belong to one board.
    pub fn scan_cycle(
        &mut self,
        hw: &mut (impl MatrixPort + SamplerPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        let mut report = CycleReport::new();

        for column in Column::ALL {
            self.selection.select_column(hw, column);

            for row in Row::ALL {
                let outcome = self.visit(hw, MatrixPoint::new(row, column));
                sink.emit(&ScanEvent::PointScanned(outcome));
                delay.delay_ms(self.dwell_ms);
                // Capacity is N_POINTS and each point is visited once.
                let pushed = report.push(outcome);
                debug_assert!(pushed.is_ok(), "cycle report over capacity");
            }
        }

        self.cycles += 1;
        sink.emit(&ScanEvent::CycleCompleted(CycleSummary {
            cycle: self.cycles,
            visited: report.len(),
            heated: report.iter().filter(|o| o.heat).count(),
        }));
        report
    }

    /// Sensor → read → decide → (heat) for one point of the powered column.
    fn visit(&mut self, hw: &mut (impl MatrixPort + SamplerPort), point: MatrixPoint) -> PointOutcome {
        let channel = self.selection.select_sensor(hw, point.row);
        let reading = reader::read(hw, channel);
        let heat = self.controller.decide(point, reading);
        if heat {
            actuator::heat(hw, &mut self.selection, point.row);
        }
        PointOutcome {
            point,
            reading,
            target: self.controller.target(point),
            heat,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Full cycles completed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// What the grid currently has energised.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
