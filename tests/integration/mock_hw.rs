//! Mock adapters for integration tests.
//!
//! Scripted sensor and reporter, plus a display and event sink that record
//! everything so tests can assert on the full history.

use std::collections::{HashMap, VecDeque};

use heatmon::app::events::MonitorEvent;
use heatmon::app::ports::{DisplayPort, EventSink, Field, ReportPort, SensorPort};
use heatmon::domain::{Adjustment, Reading};
use heatmon::error::{ReportError, SensorError};
use heatmon::palette::Colour;
use heatmon::report::{self, Report};

// ── Sensor ────────────────────────────────────────────────────

/// Replays scripted results, then repeats `fallback` forever.
pub struct MockSensor {
    script: VecDeque<Result<Reading, SensorError>>,
    fallback: Result<Reading, SensorError>,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn steady(reading: Reading) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Ok(reading),
            reads: 0,
        }
    }

    pub fn failing(err: SensorError) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Err(err),
            reads: 0,
        }
    }

    pub fn scripted(
        script: impl IntoIterator<Item = Result<Reading, SensorError>>,
        fallback: Result<Reading, SensorError>,
    ) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            reads: 0,
        }
    }
}

impl SensorPort for MockSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

// ── Reporter ──────────────────────────────────────────────────

/// One report as the reporter saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct SentReport {
    pub name: String,
    pub reading: Reading,
    pub adjustment: Adjustment,
    pub heat_index_f: f64,
    pub body: String,
}

/// Records every report; answers from a script, then with 200.
#[derive(Default)]
pub struct MockReporter {
    responses: VecDeque<Result<u16, ReportError>>,
    pub sent: Vec<SentReport>,
}

#[allow(dead_code)]
impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(responses: impl IntoIterator<Item = Result<u16, ReportError>>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            sent: Vec::new(),
        }
    }
}

impl ReportPort for MockReporter {
    fn send(&mut self, r: &Report<'_>) -> Result<u16, ReportError> {
        let body = report::encode(r)?;
        self.sent.push(SentReport {
            name: r.name.to_owned(),
            reading: r.reading,
            adjustment: r.adjustment,
            heat_index_f: r.result.heat_index_f,
            body: String::from_utf8(body).map_err(|_| ReportError::Encode)?,
        });
        self.responses.pop_front().unwrap_or(Ok(report::HTTP_OK))
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDisplay {
    text: HashMap<Field, String>,
    colour: HashMap<Field, Colour>,
    pub history: Vec<(Field, String)>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.text.get(&field).map(String::as_str)
    }

    pub fn colour(&self, field: Field) -> Option<Colour> {
        self.colour.get(&field).copied()
    }

    /// Every text ever written to `field`, oldest first.
    pub fn texts_of(&self, field: Field) -> Vec<&str> {
        self.history
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, t)| t.as_str())
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn set_text(&mut self, field: Field, text: &str) {
        self.text.insert(field, text.to_owned());
        self.history.push((field, text.to_owned()));
    }

    fn set_colour(&mut self, field: Field, colour: Colour) {
        self.colour.insert(field, colour);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<MonitorEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&MonitorEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(event.clone());
    }
}
