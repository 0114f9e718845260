//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! Driven adapters (sensor, reporter, display, event sink) implement these
//! traits. The [`Monitor`](super::service::Monitor) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Every call is synchronous. A port that blocks (a slow DHT22 handshake,
//! an HTTP POST to an unreachable host) stalls the whole poll loop for as
//! long as it blocks.

use crate::domain::Reading;
use crate::error::{ReportError, SensorError};
use crate::palette::Colour;
use crate::report::Report;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain a raw measurement.
pub trait SensorPort {
    /// Trigger a measurement and return it in °F / %RH, before calibration.
    fn read(&mut self) -> Result<Reading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Report port (driven adapter: domain → network)
// ───────────────────────────────────────────────────────────────

/// Delivers a [`Report`] to the remote collector.
pub trait ReportPort {
    /// Send one report. `Ok` carries the HTTP status (always 200); any
    /// other status comes back as [`ReportError::HttpStatus`].
    fn send(&mut self, report: &Report<'_>) -> Result<u16, ReportError>;
}

/// Reporter for builds with reporting switched off. Never called by the
/// monitor in that mode; answers [`ReportError::Disabled`] if it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReporter;

impl ReportPort for NoReporter {
    fn send(&mut self, _report: &Report<'_>) -> Result<u16, ReportError> {
        Err(ReportError::Disabled)
    }
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// The labelled lines of the status screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Temperature,
    TemperatureAdjustment,
    Humidity,
    HumidityAdjustment,
    HeatIndex,
    Network,
    Countdown,
    Status,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Temperature,
        Field::TemperatureAdjustment,
        Field::Humidity,
        Field::HumidityAdjustment,
        Field::HeatIndex,
        Field::Network,
        Field::Countdown,
        Field::Status,
    ];
}

/// One-way text/colour sink. Nothing flows back into the domain.
pub trait DisplayPort {
    fn set_text(&mut self, field: Field, text: &str);
    fn set_colour(&mut self, field: Field, colour: Colour);
}

/// Result of the boot-time network check, as shown on the network line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Connected(core::net::Ipv4Addr),
    NotConnected,
    Error(&'static str),
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}
