//! GPIO assignments for the Heatmon handheld.
//!
//! Single source of truth: drivers reference this module rather than
//! hard-coding pin numbers.

/// DHT22 single-wire data line (open-drain, external 10 kOhm pull-up).
pub const DHT22_GPIO: i32 = 33;
