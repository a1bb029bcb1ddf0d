//! Integration tests for the ScanService → addressing → reader → actuator
//! pipeline, checked against the full ordered call log of a mock board.

use heatgrid::app::events::{CycleSummary, ScanEvent};
use heatgrid::app::service::ScanService;
use heatgrid::config::{GridConfig, TargetTable};
use heatgrid::matrix::{Column, MatrixPoint, N_POINTS, Row, RowLine};

use crate::mock_hw::{BoardCall, rig};

fn decisions(report: &[heatgrid::app::events::PointOutcome]) -> Vec<bool> {
    report.iter().map(|o| o.heat).collect()
}

// ── End-to-end scenarios ──────────────────────────────────────

#[test]
fn listed_targets_in_scan_order_give_expected_decisions() {
    // Targets 245, 378, 24, 863 on the scan-order points (0,0), (1,0), (0,1), (1,1).
    let config = GridConfig {
        targets: TargetTable::new([[245, 24], [378, 863]]),
        error_margin: 3,
        ..GridConfig::default()
    };
    let mut app = ScanService::new(config);
    let (mut hw, mut delay, mut sink) = rig(&[240, 380, 30, 800]);

    let report = app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(decisions(&report), [true, false, false, true]);
}

#[test]
fn factory_table_scenario() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[240, 30, 380, 800]);

    let report = app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(decisions(&report), [true, false, false, true]);
    let targets: Vec<u16> = report.iter().map(|o| o.target).collect();
    assert_eq!(targets, [245, 24, 378, 863]);
}

#[test]
fn reading_at_target_minus_margin_does_not_heat() {
    let mut app = ScanService::new(GridConfig::default());
    // (0,0) has target 245; 242 + 3 == 245 is not strictly below.
    let (mut hw, mut delay, mut sink) = rig(&[242, 1023, 1023, 1023]);

    let report = app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(report[0].point, MatrixPoint::new(Row::Row0, Column::Col0));
    assert!(!report[0].heat);
    assert!(hw.heated_rows().is_empty());
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn idle_cycle_call_sequence_is_exact() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[1023; N_POINTS]);

    app.scan_cycle(&mut hw, &mut delay, &mut sink);

    use BoardCall::*;
    assert_eq!(
        hw.calls(),
        [
            DriveColumn(Column::Col0),
            DriveRowLine(RowLine::Sensor(Row::Row0)),
            Convert(Row::Row0),
            Dwell(100),
            DriveRowLine(RowLine::Sensor(Row::Row1)),
            Convert(Row::Row1),
            Dwell(100),
            ReleaseRows,
            DriveColumn(Column::Col1),
            DriveRowLine(RowLine::Sensor(Row::Row0)),
            Convert(Row::Row0),
            Dwell(100),
            DriveRowLine(RowLine::Sensor(Row::Row1)),
            Convert(Row::Row1),
            Dwell(100),
        ]
    );
}

#[test]
fn heat_is_driven_after_read_and_before_dwell() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[0, 1023, 1023, 1023]);

    app.scan_cycle(&mut hw, &mut delay, &mut sink);

    use BoardCall::*;
    assert_eq!(
        &hw.calls()[..5],
        [
            DriveColumn(Column::Col0),
            DriveRowLine(RowLine::Sensor(Row::Row0)),
            Convert(Row::Row0),
            DriveRowLine(RowLine::Heater(Row::Row0)),
            Dwell(100),
        ]
    );
    assert_eq!(hw.heated_rows(), [(Some(Column::Col0), Row::Row0)]);
}

#[test]
fn every_heater_follows_a_read_of_the_same_row() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[0; N_POINTS]);

    app.scan_cycle(&mut hw, &mut delay, &mut sink);

    let calls = hw.calls();
    let mut heaters = 0;
    for (i, call) in calls.iter().enumerate() {
        if let BoardCall::DriveRowLine(RowLine::Heater(row)) = call {
            heaters += 1;
            assert_eq!(calls[i - 1], BoardCall::Convert(*row));
            assert_eq!(calls[i - 2], BoardCall::DriveRowLine(RowLine::Sensor(*row)));
        }
    }
    // Zero reads heat every point of the factory table.
    assert_eq!(heaters, N_POINTS);
}

#[test]
fn column_switch_never_carries_an_energised_row() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[]);
    hw.set_fallback(0);

    for _ in 0..3 {
        app.scan_cycle(&mut hw, &mut delay, &mut sink);
    }

    let calls = hw.calls();
    let column_switches: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, BoardCall::DriveColumn(_)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(column_switches.len(), 6);
    assert_eq!(column_switches[0], 0, "first column select needs no release");
    for &i in &column_switches[1..] {
        assert_eq!(calls[i - 1], BoardCall::ReleaseRows, "row lines live at call {i}");
    }
}

// ── Counting ──────────────────────────────────────────────────

#[test]
fn four_visits_and_four_dwells_regardless_of_decisions() {
    for reading in [0u16, 1023] {
        let mut app = ScanService::new(GridConfig::default());
        let (mut hw, mut delay, mut sink) = rig(&[reading; N_POINTS]);

        let report = app.scan_cycle(&mut hw, &mut delay, &mut sink);

        let calls = hw.calls();
        let dwells = calls.iter().filter(|c| matches!(c, BoardCall::Dwell(100))).count();
        let converts = calls.iter().filter(|c| matches!(c, BoardCall::Convert(_))).count();
        assert_eq!(report.len(), 4);
        assert_eq!(converts, 4);
        assert_eq!(dwells, 4);
    }
}

#[test]
fn dwell_uses_configured_interval() {
    let config = GridConfig {
        dwell_ms: 250,
        ..GridConfig::default()
    };
    let mut app = ScanService::new(config);
    let (mut hw, mut delay, mut sink) = rig(&[1023; N_POINTS]);

    app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert!(hw.calls().iter().all(|c| !matches!(c, BoardCall::Dwell(ms) if *ms != 250)));
}

// ── Cycle independence ────────────────────────────────────────

#[test]
fn readings_are_fresh_every_cycle() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[0, 0, 0, 0, 1023, 1023, 1023, 1023]);

    let first = app.scan_cycle(&mut hw, &mut delay, &mut sink);
    let second = app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(decisions(&first), [true; 4]);
    assert_eq!(decisions(&second), [false; 4]);
    assert_eq!(app.cycles(), 2);
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn events_bracket_each_cycle() {
    let mut app = ScanService::new(GridConfig::default());
    let (mut hw, mut delay, mut sink) = rig(&[240, 30, 380, 800]);

    app.start(&mut sink);
    app.scan_cycle(&mut hw, &mut delay, &mut sink);

    assert!(matches!(
        sink.events[0],
        ScanEvent::Started { points: 4, dwell_ms: 100, margin: 3 }
    ));
    let scanned = sink
        .events
        .iter()
        .filter(|e| matches!(e, ScanEvent::PointScanned(_)))
        .count();
    assert_eq!(scanned, 4);
    match sink.events.last() {
        Some(ScanEvent::CycleCompleted(summary)) => assert_eq!(
            *summary,
            CycleSummary {
                cycle: 1,
                visited: 4,
                heated: 2,
            }
        ),
        other => panic!("expected CycleCompleted, got {other:?}"),
    }
}
