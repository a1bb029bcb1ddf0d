//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ScanService (domain)
//! ```
//!
//! Driven adapters (matrix lines, ADC, event sinks) implement these traits.
//! The [`ScanService`](super::service::ScanService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! ## Contract
//!
//! Every [`MatrixPort`] call is *exclusive within its group*: driving a
//! column de-energises every other column, driving a row line
//! de-energises every other row line (sensor or heater).  Nothing is ever
//! additive.
//!
//! The dwell between points is not a port of its own: the service takes any
//! [`embedded_hal::delay::DelayNs`] (`FreeRtos` on the device).

use crate::matrix::{Column, Reading, RowLine, SensorChannel};

// ───────────────────────────────────────────────────────────────
// Matrix port (driven adapter: domain → column/row lines)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to route power through the grid.
pub trait MatrixPort {
    /// Energise `column`'s power path and de-energise all others.
    fn drive_column(&mut self, column: Column);

    /// Energise `line` on the one-of-N row selector and de-energise all others.
    fn drive_row_line(&mut self, line: RowLine);

    /// De-energise every row selector output.
    fn release_rows(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Sampler port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one blocking single-shot conversion.
pub trait SamplerPort {
    /// Convert `channel` and return the sample.  Blocks until complete;
    /// there is no timeout.
    fn convert(&mut self, channel: SensorChannel) -> Reading;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`ScanEvent`](super::events::ScanEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ScanEvent);
}
