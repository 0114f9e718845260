//! Integration tests for the poll loop: the [`Monitor`] driven through
//! every port at once with mock adapters.

use heatmon::app::events::MonitorEvent;
use heatmon::app::ports::{Field, NetworkStatus, NoReporter};
use heatmon::app::service::Monitor;
use heatmon::config::MonitorConfig;
use heatmon::domain::Reading;
use heatmon::error::{ReportError, SensorError};
use heatmon::palette::{COLOUR_GREEN, COLOUR_ORANGE, COLOUR_RED, COLOUR_YELLOW};

use crate::mock_hw::{MockReporter, MockSensor, RecordingDisplay, RecordingSink};

const WARM: Reading = Reading::new(90.0, 70.0);
const MILD: Reading = Reading::new(70.0, 40.0);

struct Rig {
    monitor: Monitor,
    sensor: MockSensor,
    reporter: MockReporter,
    display: RecordingDisplay,
    sink: RecordingSink,
}

impl Rig {
    fn new(config: MonitorConfig, sensor: MockSensor) -> Self {
        let mut rig = Self {
            monitor: Monitor::new(config),
            sensor,
            reporter: MockReporter::new(),
            display: RecordingDisplay::new(),
            sink: RecordingSink::new(),
        };
        rig.monitor.start(&mut rig.display, &mut rig.sink);
        rig
    }

    fn run(&mut self, ticks: u64) {
        self.monitor.run_ticks(
            ticks,
            &mut self.sensor,
            &mut self.reporter,
            &mut self.display,
            &mut self.sink,
            |_| {},
        );
    }
}

fn config(sensor_ticks: u32, report_ticks: u32) -> MonitorConfig {
    MonitorConfig {
        sensor_interval_ticks: sensor_ticks,
        report_interval_ticks: report_ticks,
        ..MonitorConfig::default()
    }
}

// ── Cadences ──────────────────────────────────────────────────

#[test]
fn default_cadences_over_one_hundred_ticks() {
    let mut rig = Rig::new(MonitorConfig::default(), MockSensor::steady(WARM));
    rig.run(100);

    assert_eq!(rig.sensor.reads, 10);
    // Reports on ticks 33, 66 and 99.
    assert_eq!(rig.reporter.sent.len(), 3);
    assert_eq!(rig.monitor.tick_count(), 100);
}

#[test]
fn first_read_waits_a_full_interval() {
    let mut rig = Rig::new(MonitorConfig::default(), MockSensor::steady(WARM));
    rig.run(9);
    assert_eq!(rig.sensor.reads, 0);
    assert!(rig.monitor.last_sample().is_none());

    rig.run(1);
    assert_eq!(rig.sensor.reads, 1);
    assert!(rig.monitor.last_sample().is_some());
}

#[test]
fn read_and_report_on_the_same_tick_reports_the_fresh_value() {
    let mut rig = Rig::new(
        config(5, 5),
        MockSensor::scripted([Ok(MILD)], Ok(WARM)),
    );
    rig.run(10);

    assert_eq!(rig.reporter.sent.len(), 2);
    assert_eq!(rig.reporter.sent[0].reading, MILD);
    assert_eq!(rig.reporter.sent[1].reading, WARM);
}

// ── Sensor faults ─────────────────────────────────────────────

#[test]
fn failed_read_keeps_the_previous_sample() {
    let mut rig = Rig::new(
        config(1, 2),
        MockSensor::scripted([Ok(WARM)], Err(SensorError::Checksum)),
    );
    rig.run(2);

    assert_eq!(rig.reporter.sent.len(), 1);
    assert_eq!(rig.reporter.sent[0].reading, WARM);
    assert_eq!(rig.monitor.last_sample().map(|s| s.reading), Some(WARM));

    assert_eq!(rig.display.text(Field::Temperature), Some("Temperature: --"));
    assert_eq!(rig.display.text(Field::Humidity), Some("Humidity: --"));
    assert_eq!(
        rig.display.text(Field::Status),
        Some("Sensor fault: checksum mismatch")
    );
    assert_eq!(rig.display.colour(Field::Status), Some(COLOUR_RED));
    // The heat index line still shows the last good value.
    assert_eq!(
        rig.display.text(Field::HeatIndex),
        Some("Heat Index: 105.9 F (Danger)")
    );
}

#[test]
fn nothing_is_sent_before_the_first_good_read() {
    let mut rig = Rig::new(config(1, 1), MockSensor::failing(SensorError::Checksum));
    rig.run(20);

    assert!(rig.reporter.sent.is_empty());
    assert_eq!(
        rig.sink.count(|e| matches!(e, MonitorEvent::ReportSkipped)),
        20
    );
    assert_eq!(
        rig.sink.count(|e| matches!(e, MonitorEvent::SensorFault(_))),
        20
    );
}

#[test]
fn uninitialized_sensor_only_touches_the_status_line() {
    let mut rig = Rig::new(config(1, 100), MockSensor::failing(SensorError::NotInitialized));
    rig.run(3);

    assert_eq!(
        rig.display.text(Field::Status),
        Some("Status: Sensor not initialized.")
    );
    assert_eq!(rig.display.text(Field::Temperature), Some("Temperature: -- F"));
}

#[test]
fn non_finite_reading_is_a_fault() {
    let mut rig = Rig::new(
        config(1, 100),
        MockSensor::scripted([Ok(WARM)], Ok(Reading::new(f64::NAN, 50.0))),
    );
    rig.run(2);

    assert_eq!(rig.monitor.last_sample().map(|s| s.reading), Some(WARM));
    assert!(rig
        .sink
        .events
        .contains(&MonitorEvent::SensorFault(SensorError::OutOfRange)));
}

// ── Calibration + payload ─────────────────────────────────────

#[test]
fn offsets_are_applied_before_evaluation_and_reported() {
    let cfg = MonitorConfig {
        temperature_offset_f: 2.0,
        humidity_offset_pct: -5.0,
        ..config(1, 1)
    };
    let mut rig = Rig::new(cfg, MockSensor::steady(Reading::new(88.0, 75.0)));
    rig.run(1);

    let sent = &rig.reporter.sent[0];
    assert_eq!(sent.name, "SENSOR_001");
    assert_eq!(sent.reading, WARM);
    assert_eq!(
        sent.body,
        r#"{"name":"SENSOR_001","temperature_f":90.0,"temperature_f_offset":2.0,"humidity_percentage":70.0,"humidity_percentage_offset":-5.0,"heat_index_f":105.9}"#
    );
    assert_eq!(
        rig.display.text(Field::TemperatureAdjustment),
        Some("Temperature Adjustment: 2.0 F")
    );
}

#[test]
fn disabled_adjustments_ignore_offsets() {
    let cfg = MonitorConfig {
        temperature_offset_f: 2.0,
        adjustments_enabled: false,
        ..config(1, 1)
    };
    let mut rig = Rig::new(cfg, MockSensor::steady(WARM));
    rig.run(1);

    assert_eq!(rig.reporter.sent[0].reading, WARM);
    assert_eq!(rig.reporter.sent[0].adjustment.temperature_offset_f, 0.0);
    assert_eq!(rig.display.text(Field::TemperatureAdjustment), None);
}

// ── Report outcomes on the network line ───────────────────────

#[test]
fn report_outcomes_reach_the_network_line() {
    let mut rig = Rig::new(config(1, 1), MockSensor::steady(WARM));
    rig.reporter = MockReporter::answering([
        Ok(200),
        Err(ReportError::HttpStatus(503)),
        Err(ReportError::NotConnected),
    ]);

    rig.run(1);
    assert_eq!(rig.display.text(Field::Network), Some("Network: POST OK (200)"));
    assert_eq!(rig.display.colour(Field::Network), Some(COLOUR_GREEN));

    rig.run(1);
    assert_eq!(rig.display.text(Field::Network), Some("Network: POST Error 503"));
    assert_eq!(rig.display.colour(Field::Network), Some(COLOUR_ORANGE));

    rig.run(1);
    assert_eq!(
        rig.display.text(Field::Network),
        Some("Network: POST Fail - network not connecte")
    );
    assert_eq!(rig.display.colour(Field::Network), Some(COLOUR_RED));

    // Each attempt announced itself first.
    assert_eq!(
        rig.display
            .texts_of(Field::Network)
            .iter()
            .filter(|t| **t == "Network: Posting data...")
            .count(),
        3
    );
}

#[test]
fn failed_report_is_not_retried_early() {
    let mut rig = Rig::new(config(1, 4), MockSensor::steady(WARM));
    rig.reporter = MockReporter::answering([Err(ReportError::Transport)]);
    rig.run(7);
    assert_eq!(rig.reporter.sent.len(), 1);
    rig.run(1);
    assert_eq!(rig.reporter.sent.len(), 2);
}

#[test]
fn disabled_reporting_sends_nothing_and_hides_the_countdown() {
    let cfg = MonitorConfig {
        report_enabled: false,
        ..config(1, 1)
    };
    let mut monitor = Monitor::new(cfg);
    let mut sensor = MockSensor::steady(WARM);
    let mut display = RecordingDisplay::new();
    let mut sink = RecordingSink::new();
    monitor.start(&mut display, &mut sink);
    monitor.run_ticks(50, &mut sensor, &mut NoReporter, &mut display, &mut sink, |_| {});

    assert_eq!(sensor.reads, 50);
    assert!(display.texts_of(Field::Countdown).is_empty());
    assert!(display.texts_of(Field::Network).is_empty());
    assert_eq!(
        sink.count(|e| matches!(e, MonitorEvent::ReportSent { .. } | MonitorEvent::ReportFailed(_))),
        0
    );
}

// ── Countdown ─────────────────────────────────────────────────

#[test]
fn countdown_tracks_the_report_cadence() {
    let mut rig = Rig::new(MonitorConfig::default(), MockSensor::steady(WARM));
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: --s"));

    rig.run(1);
    // 33 ticks of 300 ms left at the start of tick 1.
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: 9s"));
    assert_eq!(rig.display.colour(Field::Countdown), Some(COLOUR_YELLOW));

    rig.run(31);
    // Two ticks left: 600 ms.
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: Now!"));
    assert_eq!(rig.display.colour(Field::Countdown), Some(COLOUR_GREEN));

    rig.run(1);
    assert_eq!(rig.reporter.sent.len(), 1);
    rig.run(1);
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: 9s"));
}

// ── Boot screen ───────────────────────────────────────────────

#[test]
fn boot_screen_and_network_status() {
    let mut rig = Rig::new(MonitorConfig::default(), MockSensor::steady(WARM));
    assert_eq!(rig.display.text(Field::Title), Some("Environmental Sensor"));
    assert_eq!(rig.display.text(Field::Network), Some("Network: Connecting..."));
    assert_eq!(rig.display.text(Field::Status), Some("Status: Starting..."));
    assert_eq!(
        rig.sink.events.first(),
        Some(&MonitorEvent::Started {
            sensor_interval_ticks: 10,
            report_interval_ticks: 33
        })
    );

    rig.monitor.show_network(
        &mut rig.display,
        &NetworkStatus::Connected(core::net::Ipv4Addr::new(192, 168, 1, 40)),
    );
    assert_eq!(
        rig.display.text(Field::Network),
        Some("Network: Connected - 192.168.1.40")
    );

    rig.monitor
        .show_network(&mut rig.display, &NetworkStatus::NotConnected);
    assert_eq!(rig.display.text(Field::Network), Some("Network: Not connected"));
    assert_eq!(rig.display.colour(Field::Network), Some(COLOUR_RED));

    rig.monitor.show_sensor_init(&mut rig.display, Ok(()));
    assert_eq!(
        rig.display.text(Field::Status),
        Some("Status: Sensor initialized.")
    );
}

#[test]
fn countdown_scales_with_the_tick_length() {
    let cfg = MonitorConfig {
        tick_ms: 1000,
        ..config(100, 5)
    };
    let mut rig = Rig::new(cfg, MockSensor::steady(WARM));
    rig.run(1);
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: 5s"));
    rig.run(3);
    assert_eq!(rig.display.text(Field::Countdown), Some("Next POST: 2s"));
}
