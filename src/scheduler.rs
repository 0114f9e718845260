//! Tick-counting cadences for the cooperative poll loop.
//!
//! The monitor never looks at a wall clock. Each loop iteration is one tick,
//! followed by a fixed pause, and every periodic job owns a [`Cadence`] that
//! counts ticks until it is due.
//!
//! ```text
//!  tick ──▶ sensor cadence ──(due)──▶ SensorPort::read()
//!       ──▶ countdown display
//!       ──▶ report cadence ──(due)──▶ ReportPort::send()
//!       ──▶ pause(tick_ms)
//! ```
//!
//! Drift against wall-clock time is expected: a slow sensor read or HTTP
//! POST lengthens the tick it happens in, and nothing compensates for it.

use core::time::Duration;

/// Counts ticks and fires every `interval` ticks.
///
/// `advance()` increments first, then compares, so with `interval = S` the
/// cadence fires on ticks `S, 2S, 3S, ...` and resets to zero each time,
/// whatever the fired job goes on to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: u32,
    elapsed: u32,
}

impl Cadence {
    /// A cadence firing every `interval` ticks. An interval of zero is
    /// treated as one (fire every tick).
    pub const fn new(interval: u32) -> Self {
        Self {
            interval: if interval == 0 { 1 } else { interval },
            elapsed: 0,
        }
    }

    /// Advance by one tick. Returns `true` when the job is due.
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    /// Ticks counted since the last fire.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Ticks left before the cadence next fires, counted from the start of
    /// the current tick (before `advance()` is called).
    pub fn remaining(&self) -> u32 {
        self.interval - self.elapsed
    }

    /// Put the counter back to zero without firing.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Whole seconds covered by `ticks` loop iterations of length `quantum`,
/// rounded down.
pub fn ticks_to_secs(ticks: u32, quantum: Duration) -> u64 {
    (u128::from(ticks) * quantum.as_millis() / 1000) as u64
}
