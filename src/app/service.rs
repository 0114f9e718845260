//! Monitor service — the hexagonal core.
//!
//! [`Monitor`] owns the poll-loop state and the configuration. It exposes a
//! hardware-agnostic API; all I/O flows through port traits injected at the
//! call sites, so the whole loop is testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────────┐ ──▶ DisplayPort
//!                  │         Monitor          │
//!   ReportPort ◀── │ cadences · last sample   │ ──▶ EventSink
//!                  └──────────────────────────┘
//! ```
//!
//! One tick runs, in order: the sensor cadence (read, adjust, evaluate),
//! the report countdown, then the report cadence (send the last sample).
//! No fault escapes a tick. A failed read keeps the previous sample, and a
//! failed report is not retried until the report cadence fires again.

use core::time::Duration;

use log::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::domain::{Adjustment, Sample};
use crate::error::{ReportError, SensorError};
use crate::palette::{
    COLOUR_CYAN, COLOUR_GREEN, COLOUR_HEADER, COLOUR_ORANGE, COLOUR_RED,
    COLOUR_WHITE, COLOUR_YELLOW,
};
use crate::report::Report;
use crate::scheduler::{Cadence, ticks_to_secs};

use super::events::MonitorEvent;
use super::ports::{DisplayPort, EventSink, Field, NetworkStatus, ReportPort, SensorPort};
use super::status;

// ───────────────────────────────────────────────────────────────
// Loop state
// ───────────────────────────────────────────────────────────────

/// Everything the poll loop mutates. Owned by the [`Monitor`] alone.
#[derive(Debug, Clone)]
pub struct LoopState {
    sensor: Cadence,
    report: Cadence,
    last: Option<Sample>,
    tick_count: u64,
}

impl LoopState {
    fn new(config: &MonitorConfig) -> Self {
        Self {
            sensor: Cadence::new(config.sensor_interval_ticks),
            report: Cadence::new(config.report_interval_ticks),
            last: None,
            tick_count: 0,
        }
    }

    /// Ticks since the last sensor read attempt.
    pub fn sensor_ticks(&self) -> u32 {
        self.sensor.elapsed()
    }

    /// Ticks since the last report attempt.
    pub fn report_ticks(&self) -> u32 {
        self.report.elapsed()
    }

    /// Most recent good sample, if any read has ever succeeded.
    pub fn last_sample(&self) -> Option<&Sample> {
        self.last.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

// ───────────────────────────────────────────────────────────────
// Monitor
// ───────────────────────────────────────────────────────────────

/// The cooperative poll loop.
pub struct Monitor {
    config: MonitorConfig,
    adjustment: Adjustment,
    state: LoopState,
}

impl Monitor {
    /// Build the monitor. Does not touch any port; call [`start`](Self::start) next.
    pub fn new(config: MonitorConfig) -> Self {
        let adjustment = config.adjustment();
        let state = LoopState::new(&config);
        Self {
            config,
            adjustment,
            state,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Paint the initial screen and announce the start.
    pub fn start(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        display.set_text(Field::Title, status::TITLE);
        display.set_colour(Field::Title, COLOUR_HEADER);

        display.set_text(Field::Temperature, status::TEMPERATURE_PENDING);
        display.set_colour(Field::Temperature, COLOUR_WHITE);
        display.set_text(Field::Humidity, status::HUMIDITY_PENDING);
        display.set_colour(Field::Humidity, COLOUR_WHITE);
        display.set_text(Field::HeatIndex, status::HEAT_INDEX_PENDING);
        display.set_colour(Field::HeatIndex, COLOUR_ORANGE);

        if self.config.adjustments_enabled {
            self.show_adjustments(display);
        }

        if self.config.report_enabled {
            display.set_text(Field::Network, status::NETWORK_CONNECTING);
            display.set_colour(Field::Network, COLOUR_CYAN);
            display.set_text(Field::Countdown, status::COUNTDOWN_PENDING);
            display.set_colour(Field::Countdown, COLOUR_YELLOW);
        }

        display.set_text(Field::Status, status::STATUS_STARTING);
        display.set_colour(Field::Status, COLOUR_YELLOW);

        sink.emit(&MonitorEvent::Started {
            sensor_interval_ticks: self.state.sensor.interval(),
            report_interval_ticks: self.state.report.interval(),
        });
        info!(
            "Monitor: started (sensor every {} ticks, report every {} ticks, tick {} ms)",
            self.state.sensor.interval(),
            self.state.report.interval(),
            self.config.tick_ms
        );
    }

    /// Show the outcome of the boot-time network check.
    pub fn show_network(&self, display: &mut impl DisplayPort, net: &NetworkStatus) {
        match net {
            NetworkStatus::Connected(ip) => {
                display.set_text(Field::Network, &status::network_connected(ip));
                display.set_colour(Field::Network, COLOUR_GREEN);
            }
            NetworkStatus::NotConnected => {
                display.set_text(Field::Network, status::NETWORK_NOT_CONNECTED);
                display.set_colour(Field::Network, COLOUR_RED);
            }
            NetworkStatus::Error(msg) => {
                display.set_text(Field::Network, &status::network_error(msg));
                display.set_colour(Field::Network, COLOUR_RED);
            }
        }
    }

    /// Show the outcome of sensor bring-up. A failure does not stop the
    /// loop; later reads report [`SensorError::NotInitialized`].
    pub fn show_sensor_init(
        &self,
        display: &mut impl DisplayPort,
        result: Result<(), &dyn core::fmt::Display>,
    ) {
        match result {
            Ok(()) => display.set_text(Field::Status, status::STATUS_SENSOR_READY),
            Err(e) => {
                warn!("Monitor: sensor init failed: {}", e);
                display.set_text(Field::Status, &status::init_error(e));
                display.set_colour(Field::Status, COLOUR_RED);
            }
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one iteration of the poll loop. Never fails; every fault ends up
    /// on the display and in the event sink.
    pub fn tick(
        &mut self,
        sensor: &mut impl SensorPort,
        reporter: &mut impl ReportPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        self.state.tick_count += 1;

        // 1. Sensor cadence
        if self.state.sensor.advance() {
            self.sample(sensor, display, sink);
        }

        // 2. Countdown, measured before the report cadence advances
        if self.config.report_enabled {
            self.show_countdown(display);
        }

        // 3. Report cadence
        if self.state.report.advance() && self.config.report_enabled {
            self.report(reporter, display, sink);
        }
    }

    /// Run `ticks` iterations, calling `pause` with the tick quantum after
    /// each one.
    pub fn run_ticks(
        &mut self,
        ticks: u64,
        sensor: &mut impl SensorPort,
        reporter: &mut impl ReportPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
        mut pause: impl FnMut(Duration),
    ) {
        let quantum = self.config.tick_quantum();
        for _ in 0..ticks {
            self.tick(sensor, reporter, display, sink);
            pause(quantum);
        }
    }

    /// Run until the process ends. The pause is fixed, not corrected for
    /// time spent inside the tick.
    pub fn run(
        &mut self,
        sensor: &mut impl SensorPort,
        reporter: &mut impl ReportPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
        mut pause: impl FnMut(Duration),
    ) -> ! {
        let quantum = self.config.tick_quantum();
        loop {
            self.tick(sensor, reporter, display, sink);
            pause(quantum);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn last_sample(&self) -> Option<&Sample> {
        self.state.last_sample()
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick_count
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Effective calibration applied to every reading.
    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Whole seconds until the next report attempt, from the start of the
    /// coming tick.
    pub fn secs_until_report(&self) -> u64 {
        ticks_to_secs(self.state.report.remaining(), self.config.tick_quantum())
    }

    // ── Internal ──────────────────────────────────────────────

    fn sample(
        &mut self,
        sensor: &mut impl SensorPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        display.set_text(Field::Status, status::STATUS_READING);

        let adjustment = self.adjustment;
        let outcome = sensor.read().and_then(|raw| {
            let reading = raw.adjusted(adjustment);
            if reading.is_finite() {
                Ok(reading)
            } else {
                Err(SensorError::OutOfRange)
            }
        });

        match outcome {
            Ok(reading) => {
                let sample = Sample::from_reading(reading);
                self.state.last = Some(sample);
                self.show_sample(&sample, display);
                debug!(
                    "Monitor: T={:.1}F RH={:.1}% HI={:.1}F ({})",
                    reading.temperature_f,
                    reading.humidity_pct,
                    sample.result.heat_index_f,
                    sample.result.category
                );
                sink.emit(&MonitorEvent::SampleUpdated(sample));
            }
            Err(SensorError::NotInitialized) => {
                warn!("Monitor: sensor not initialized");
                display.set_text(Field::Status, status::STATUS_NOT_INITIALIZED);
                sink.emit(&MonitorEvent::SensorFault(SensorError::NotInitialized));
            }
            Err(e) => {
                warn!("Monitor: sensor read failed: {}", e);
                display.set_text(Field::Temperature, status::TEMPERATURE_UNAVAILABLE);
                display.set_text(Field::Humidity, status::HUMIDITY_UNAVAILABLE);
                display.set_text(Field::Status, &status::sensor_fault(&e));
                display.set_colour(Field::Status, COLOUR_RED);
                sink.emit(&MonitorEvent::SensorFault(e));
            }
        }
    }

    fn show_sample(&self, sample: &Sample, display: &mut impl DisplayPort) {
        display.set_text(
            Field::Temperature,
            &status::temperature(sample.reading.temperature_f),
        );
        display.set_text(Field::Humidity, &status::humidity(sample.reading.humidity_pct));
        if self.config.adjustments_enabled {
            self.show_adjustments(display);
        }
        display.set_text(Field::HeatIndex, &status::heat_index(&sample.result));
        display.set_colour(Field::HeatIndex, sample.result.colour());

        display.set_text(Field::Status, status::STATUS_READ_OK);
        display.set_colour(Field::Status, COLOUR_GREEN);
    }

    fn show_adjustments(&self, display: &mut impl DisplayPort) {
        display.set_text(
            Field::TemperatureAdjustment,
            &status::temperature_adjustment(self.adjustment.temperature_offset_f),
        );
        display.set_colour(Field::TemperatureAdjustment, COLOUR_WHITE);
        display.set_text(
            Field::HumidityAdjustment,
            &status::humidity_adjustment(self.adjustment.humidity_offset_pct),
        );
        display.set_colour(Field::HumidityAdjustment, COLOUR_WHITE);
    }

    fn show_countdown(&self, display: &mut impl DisplayPort) {
        let secs = self.secs_until_report();
        display.set_text(Field::Countdown, &status::countdown(secs));
        display.set_colour(
            Field::Countdown,
            if secs > 0 { COLOUR_YELLOW } else { COLOUR_GREEN },
        );
    }

    fn report(
        &mut self,
        reporter: &mut impl ReportPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        let Some(sample) = self.state.last else {
            debug!("Monitor: report due but no sample yet");
            sink.emit(&MonitorEvent::ReportSkipped);
            return;
        };

        let report = Report {
            name: self.config.sensor_name.as_str(),
            reading: sample.reading,
            adjustment: self.adjustment,
            result: sample.result,
        };

        display.set_text(Field::Network, status::NETWORK_POSTING);
        display.set_colour(Field::Network, COLOUR_CYAN);

        match reporter.send(&report) {
            Ok(code) => {
                info!("Monitor: report accepted ({})", code);
                display.set_text(Field::Network, &status::post_ok(code));
                display.set_colour(Field::Network, COLOUR_GREEN);
                sink.emit(&MonitorEvent::ReportSent { status: code });
            }
            Err(ReportError::HttpStatus(code)) => {
                warn!("Monitor: report rejected with HTTP {}", code);
                display.set_text(Field::Network, &status::post_error(code));
                display.set_colour(Field::Network, COLOUR_ORANGE);
                sink.emit(&MonitorEvent::ReportFailed(ReportError::HttpStatus(code)));
            }
            Err(e) => {
                warn!("Monitor: report failed: {}", e);
                display.set_text(Field::Network, &status::post_fail(&e));
                display.set_colour(Field::Network, COLOUR_RED);
                sink.emit(&MonitorEvent::ReportFailed(e));
            }
        }
    }
}
