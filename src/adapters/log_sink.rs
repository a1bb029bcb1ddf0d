//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured scan events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).  Point
//! lines log at `debug` so a release build only shows cycle summaries.

use log::{debug, info};

use crate::app::events::ScanEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ScanEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ScanEvent) {
        match event {
            ScanEvent::Started { points, dwell_ms, margin } => {
                info!("START | points={} dwell={}ms margin={}", points, dwell_ms, margin);
            }
            ScanEvent::PointScanned(o) => {
                debug!(
                    "POINT | {} | reading={} target={} | {}",
                    o.point,
                    o.reading,
                    o.target,
                    if o.heat { "HEAT" } else { "idle" },
                );
            }
            ScanEvent::CycleCompleted(s) => {
                info!("CYCLE | #{} | visited={} heated={}", s.cycle, s.visited, s.heated);
            }
        }
    }
}
