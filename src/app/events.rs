//! Outbound application events.
//!
//! The [`Monitor`](super::service::Monitor) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them (log to serial, forward, count in tests).

use crate::domain::Sample;
use crate::error::{ReportError, SensorError};

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// The monitor has started.
    Started {
        sensor_interval_ticks: u32,
        report_interval_ticks: u32,
    },

    /// A new sample replaced the previous one.
    SampleUpdated(Sample),

    /// A sensor read failed; the previous sample is kept.
    SensorFault(SensorError),

    /// A report was accepted by the server.
    ReportSent { status: u16 },

    /// A report could not be delivered.
    ReportFailed(ReportError),

    /// A report was due but no sample exists yet.
    ReportSkipped,
}
