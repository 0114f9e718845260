//! Unified error types for the Heatmon firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! run loop's error handling uniform. All variants are `Copy` so they can be
//! passed through the scheduler and event sink without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sensor could not be read or returned out-of-range data.
    Sensor(SensorError),
    /// A report could not be delivered.
    Report(ReportError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Report(e) => write!(f, "report: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor driver was never brought up (GPIO claim failed at boot).
    NotInitialized,
    /// A protocol edge did not arrive in time. Carries the stage name.
    Timeout(&'static str),
    /// Frame checksum did not match.
    Checksum,
    /// Reading is outside the physically plausible range.
    OutOfRange,
    /// GPIO read or write returned an error.
    Gpio,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "sensor not initialized"),
            Self::Timeout(stage) => write!(f, "timeout waiting for {stage}"),
            Self::Checksum => write!(f, "checksum mismatch"),
            Self::OutOfRange => write!(f, "reading out of range"),
            Self::Gpio => write!(f, "GPIO error"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Reporting is switched off in this build.
    Disabled,
    /// No network link to send over.
    NotConnected,
    /// The request could not be written or the response not read.
    Transport,
    /// The server answered with a status other than 200.
    HttpStatus(u16),
    /// The payload could not be serialised.
    Encode,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "reporting disabled"),
            Self::NotConnected => write!(f, "network not connected"),
            Self::Transport => write!(f, "transport failure"),
            Self::HttpStatus(code) => write!(f, "HTTP status {code}"),
            Self::Encode => write!(f, "payload encode failed"),
        }
    }
}

impl From<ReportError> for Error {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
