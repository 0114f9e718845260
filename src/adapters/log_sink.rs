//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured monitor events to the
//! ESP-IDF logger (UART / USB-CDC in production, stderr on host).

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started {
                sensor_interval_ticks,
                report_interval_ticks,
            } => {
                info!(
                    "START | sensor every {} ticks | report every {} ticks",
                    sensor_interval_ticks, report_interval_ticks
                );
            }
            MonitorEvent::SampleUpdated(s) => {
                info!(
                    "SAMPLE | T={:.1}\u{00b0}F | RH={:.1}% | HI={:.1}\u{00b0}F ({})",
                    s.reading.temperature_f,
                    s.reading.humidity_pct,
                    s.result.heat_index_f,
                    s.result.category,
                );
            }
            MonitorEvent::SensorFault(e) => {
                warn!("SENSOR | fault: {}", e);
            }
            MonitorEvent::ReportSent { status } => {
                info!("REPORT | delivered ({})", status);
            }
            MonitorEvent::ReportFailed(e) => {
                warn!("REPORT | failed: {}", e);
            }
            MonitorEvent::ReportSkipped => {
                info!("REPORT | skipped, no reading yet");
            }
        }
    }
}
