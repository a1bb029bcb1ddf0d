//! The real hardware adapter on the host: GPIO writes land in per-thread
//! simulated pin levels and the ADC returns injected values.
//!
//! Only one test in this binary injects ADC values; the simulated channels
//! are process-wide statics.

use std::cell::RefCell;
use std::rc::Rc;

use heatgrid::adapters::hardware::HardwareAdapter;
use heatgrid::app::ports::MatrixPort;
use heatgrid::app::service::ScanService;
use heatgrid::config::GridConfig;
use heatgrid::drivers::hw_init::sim_pin_level;
use heatgrid::drivers::mux::MuxDriver;
use heatgrid::matrix::{Column, MAX_READING, Row, RowLine};
use heatgrid::sensors::adc::{AdcSampler, sim_set_reading};

use crate::mock_hw::{MockDelay, RecordingSink};

#[test]
fn simulated_board_runs_a_full_cycle() {
    sim_set_reading(Row::Row0, 100);
    // Above the 10-bit full scale: the reader clamps it.
    sim_set_reading(Row::Row1, 4000);

    let mut hw = HardwareAdapter::new(MuxDriver::new(), AdcSampler::new());
    let mut delay = MockDelay::new(Rc::new(RefCell::new(Vec::new())));
    let mut sink = RecordingSink::new();
    let mut app = ScanService::new(GridConfig::default());

    let report = app.scan_cycle(&mut hw, &mut delay, &mut sink);

    // Row 0 reads 100 in both columns, row 1 reads full scale in both.
    // Targets: (0,0)=245 (1,0)=24 (0,1)=378 (1,1)=863.
    let heat: Vec<bool> = report.iter().map(|o| o.heat).collect();
    assert_eq!(heat, [true, false, true, false]);
    let readings: Vec<u16> = report.iter().map(|o| o.reading).collect();
    assert_eq!(readings, [100, MAX_READING, 100, MAX_READING]);
    assert_eq!(hw.adc().conversions(), 4);

    // Last point did not heat: its sensor is still the selected line.
    assert_eq!(hw.mux().column(), Some(Column::Col1));
    assert_eq!(hw.mux().row_line(), Some(RowLine::Sensor(Row::Row1)));
    assert!(!hw.mux().is_heating());

    let high: Vec<i32> = Column::ALL
        .iter()
        .map(|c| c.gpio())
        .chain(
            Row::ALL
                .iter()
                .flat_map(|&r| [RowLine::Sensor(r).gpio(), RowLine::Heater(r).gpio()]),
        )
        .filter(|&pin| sim_pin_level(pin))
        .collect();
    assert_eq!(high, [Column::Col1.gpio(), RowLine::Sensor(Row::Row1).gpio()]);
}

#[test]
fn all_off_releases_every_line() {
    let mut hw = HardwareAdapter::new(MuxDriver::new(), AdcSampler::new());
    hw.drive_column(Column::Col0);
    hw.drive_row_line(RowLine::Heater(Row::Row1));
    assert!(hw.mux().is_heating());

    hw.all_off();

    assert_eq!(hw.mux().column(), None);
    assert_eq!(hw.mux().row_line(), None);
    assert!(!sim_pin_level(Column::Col0.gpio()));
    assert!(!sim_pin_level(RowLine::Heater(Row::Row1).gpio()));
}
