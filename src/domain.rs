//! Value types shared by the sensor adapters, the monitor core and the
//! report encoder.

use crate::heat_index::{self, HeatIndexResult};

/// One temperature/humidity measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    /// Air temperature (°F).
    pub temperature_f: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
}

impl Reading {
    pub const fn new(temperature_f: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_f,
            humidity_pct,
        }
    }

    /// Build a reading from a Celsius temperature.
    pub fn from_celsius(temperature_c: f64, humidity_pct: f64) -> Self {
        Self::new(celsius_to_fahrenheit(temperature_c), humidity_pct)
    }

    /// Apply calibration offsets additively.
    pub fn adjusted(self, adj: Adjustment) -> Self {
        Self {
            temperature_f: self.temperature_f + adj.temperature_offset_f,
            humidity_pct: self.humidity_pct + adj.humidity_offset_pct,
        }
    }

    /// Both values are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.temperature_f.is_finite() && self.humidity_pct.is_finite()
    }
}

/// Calibration offsets, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Adjustment {
    pub temperature_offset_f: f64,
    pub humidity_offset_pct: f64,
}

/// An adjusted reading and the heat index derived from it. Stored as one
/// value so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub reading: Reading,
    pub result: HeatIndexResult,
}

impl Sample {
    /// Evaluate the heat index for an (already adjusted) reading.
    pub fn from_reading(reading: Reading) -> Self {
        Self {
            reading,
            result: heat_index::evaluate(reading.temperature_f, reading.humidity_pct),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0) + 32.0
}
