//! Report payload and its JSON wire format.
//!
//! ```json
//! {
//!   "name": "SENSOR_001",
//!   "temperature_f": 91.4,
//!   "temperature_f_offset": 0.0,
//!   "humidity_percentage": 48.2,
//!   "humidity_percentage_offset": 0.0,
//!   "heat_index_f": 97.1
//! }
//! ```
//!
//! Every numeric field is rounded to one decimal place before encoding.
//! The request is sent with `Content-Type: application/json` and only a
//! 200 response counts as delivered.

use serde::Serialize;

use crate::domain::{Adjustment, Reading};
use crate::error::ReportError;
use crate::heat_index::HeatIndexResult;

pub const CONTENT_TYPE: &str = "application/json";

/// The only status accepted as a successful delivery.
pub const HTTP_OK: u16 = 200;

/// Everything one report carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<'a> {
    pub name: &'a str,
    /// Adjusted reading.
    pub reading: Reading,
    pub adjustment: Adjustment,
    pub result: HeatIndexResult,
}

/// Wire shape of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportPayload<'a> {
    pub name: &'a str,
    pub temperature_f: f64,
    pub temperature_f_offset: f64,
    pub humidity_percentage: f64,
    pub humidity_percentage_offset: f64,
    pub heat_index_f: f64,
}

impl<'a> From<&Report<'a>> for ReportPayload<'a> {
    fn from(r: &Report<'a>) -> Self {
        Self {
            name: r.name,
            temperature_f: round_tenth(r.reading.temperature_f),
            temperature_f_offset: round_tenth(r.adjustment.temperature_offset_f),
            humidity_percentage: round_tenth(r.reading.humidity_pct),
            humidity_percentage_offset: round_tenth(r.adjustment.humidity_offset_pct),
            heat_index_f: round_tenth(r.result.heat_index_f),
        }
    }
}

/// Serialise a report to its JSON body.
pub fn encode(report: &Report<'_>) -> Result<Vec<u8>, ReportError> {
    serde_json::to_vec(&ReportPayload::from(report)).map_err(|_| ReportError::Encode)
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
