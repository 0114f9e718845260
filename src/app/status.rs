//! Text for each line of the status screen.
//!
//! Pure formatting, no I/O: the monitor decides *when* a line changes and
//! these helpers decide *what* it says. Lines are fixed-capacity strings;
//! anything past [`LINE_CAP`] bytes is dropped.

use core::fmt::{self, Write};

use crate::heat_index::HeatIndexResult;

/// Maximum bytes per display line.
pub const LINE_CAP: usize = 64;

/// Longest error text shown on the network line.
const NETWORK_ERROR_CHARS: usize = 20;

pub type Line = heapless::String<LINE_CAP>;

/// `fmt::Write` over a [`Line`] that keeps whatever fits and drops the rest.
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn line(args: fmt::Arguments<'_>) -> Line {
    let mut s = Line::new();
    let _ = Truncating(&mut s).write_fmt(args);
    s
}

pub const TITLE: &str = "Environmental Sensor";

pub fn temperature(temp_f: f64) -> Line {
    line(format_args!("Temperature: {temp_f:.1} F"))
}

pub fn temperature_adjustment(offset_f: f64) -> Line {
    line(format_args!("Temperature Adjustment: {offset_f:.1} F"))
}

pub fn humidity(humidity_pct: f64) -> Line {
    line(format_args!("Humidity: {humidity_pct:.1} %"))
}

pub fn humidity_adjustment(offset_pct: f64) -> Line {
    line(format_args!("Humidity Adjustment: {offset_pct:.1} %"))
}

pub fn heat_index(result: &HeatIndexResult) -> Line {
    line(format_args!(
        "Heat Index: {:.1} F ({})",
        result.heat_index_f,
        result.category.label()
    ))
}

// Placeholders before the first reading, and after a failed one.
pub const TEMPERATURE_PENDING: &str = "Temperature: -- F";
pub const HUMIDITY_PENDING: &str = "Humidity: -- %";
pub const HEAT_INDEX_PENDING: &str = "Heat Index: -- F";
pub const TEMPERATURE_UNAVAILABLE: &str = "Temperature: --";
pub const HUMIDITY_UNAVAILABLE: &str = "Humidity: --";

/// Countdown to the next report. Zero whole seconds reads "Now!".
pub fn countdown(secs: u64) -> Line {
    if secs > 0 {
        line(format_args!("Next POST: {secs}s"))
    } else {
        line(format_args!("Next POST: Now!"))
    }
}

pub const COUNTDOWN_PENDING: &str = "Next POST: --s";

// ── Status line ───────────────────────────────────────────────

pub const STATUS_STARTING: &str = "Status: Starting...";
pub const STATUS_SENSOR_READY: &str = "Status: Sensor initialized.";
pub const STATUS_READING: &str = "Status: Attempting to read sensor...";
pub const STATUS_READ_OK: &str = "Status: Read successful";
pub const STATUS_NOT_INITIALIZED: &str = "Status: Sensor not initialized.";

pub fn sensor_fault(err: &dyn fmt::Display) -> Line {
    line(format_args!("Sensor fault: {err}"))
}

pub fn init_error(err: &dyn fmt::Display) -> Line {
    line(format_args!("Init error - {err}"))
}

// ── Network line ──────────────────────────────────────────────

pub const NETWORK_CONNECTING: &str = "Network: Connecting...";
pub const NETWORK_NOT_CONNECTED: &str = "Network: Not connected";
pub const NETWORK_POSTING: &str = "Network: Posting data...";

pub fn network_connected(ip: &dyn fmt::Display) -> Line {
    line(format_args!("Network: Connected - {ip}"))
}

pub fn network_error(err: &dyn fmt::Display) -> Line {
    let msg = truncated(err);
    line(format_args!("Network: Error - {msg}"))
}

pub fn post_ok(status: u16) -> Line {
    line(format_args!("Network: POST OK ({status})"))
}

pub fn post_error(status: u16) -> Line {
    line(format_args!("Network: POST Error {status}"))
}

pub fn post_fail(err: &dyn fmt::Display) -> Line {
    let msg = truncated(err);
    line(format_args!("Network: POST Fail - {msg}"))
}

/// First [`NETWORK_ERROR_CHARS`] characters of an error's text.
fn truncated(err: &dyn fmt::Display) -> Line {
    let full = line(format_args!("{err}"));
    let mut out = Line::new();
    for c in full.chars().take(NETWORK_ERROR_CHARS) {
        let _ = out.push(c);
    }
    out
}
