//! System configuration parameters
//!
//! All tunable parameters for the Heatmon system. Values are fixed at
//! startup: defaults below, optionally overridden at build time through
//! `HEATMON_*` / `WIFI_*` environment variables (see [`MonitorConfig::from_build_env`]).

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Adjustment;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Identity ---
    /// Name sent with every report.
    pub sensor_name: heapless::String<32>,

    // --- Calibration ---
    /// Added to every temperature reading (°F).
    pub temperature_offset_f: f64,
    /// Added to every humidity reading (%RH).
    pub humidity_offset_pct: f64,
    /// When false, offsets are ignored and not shown.
    pub adjustments_enabled: bool,

    // --- Reporting ---
    /// HTTP endpoint receiving the JSON report.
    pub api_endpoint: heapless::String<128>,
    /// When false, no reports are sent and no countdown is shown.
    pub report_enabled: bool,
    /// HTTP client timeout (milliseconds).
    pub http_timeout_ms: u32,

    // --- Network ---
    pub wifi_ssid: heapless::String<32>,
    pub wifi_password: heapless::String<64>,

    // --- Timing ---
    /// Sensor read interval (ticks)
    pub sensor_interval_ticks: u32,
    /// Report interval (ticks)
    pub report_interval_ticks: u32,
    /// Pause at the end of every tick (milliseconds)
    pub tick_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sensor_name: fixed("SENSOR_001"),

            temperature_offset_f: 0.0,
            humidity_offset_pct: 0.0,
            adjustments_enabled: true,

            api_endpoint: fixed("http://www.forbes-server.com:8000/heat_index_data"),
            report_enabled: true,
            http_timeout_ms: 5000,

            wifi_ssid: heapless::String::new(),
            wifi_password: heapless::String::new(),

            sensor_interval_ticks: 10, // ~3 s
            report_interval_ticks: 33, // ~10 s
            tick_ms: 300,
        }
    }
}

/// Build a fixed-capacity string, truncating at the capacity.
fn fixed<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Errors from loading or validating a [`MonitorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// An override could not be parsed. Carries the variable name.
    Parse(&'static str),
    /// An override does not fit its fixed-capacity field.
    TooLong(&'static str),
    /// A field failed range validation.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(key) => write!(f, "{key}: not a valid value"),
            Self::TooLong(key) => write!(f, "{key}: value too long"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Parse(key) | ConfigError::TooLong(key) => Self::Config(key),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
        }
    }
}

/// Keys recognised by [`MonitorConfig::with_overrides`].
pub const KEY_SENSOR_NAME: &str = "HEATMON_SENSOR_NAME";
pub const KEY_T_OFFSET: &str = "HEATMON_T_OFFSET";
pub const KEY_H_OFFSET: &str = "HEATMON_H_OFFSET";
pub const KEY_ADJUST: &str = "HEATMON_ADJUST";
pub const KEY_API_ENDPOINT: &str = "HEATMON_API_ENDPOINT";
pub const KEY_REPORT: &str = "HEATMON_REPORT";
pub const KEY_WIFI_SSID: &str = "WIFI_SSID";
pub const KEY_WIFI_PASS: &str = "WIFI_PASS";

impl MonitorConfig {
    /// Defaults overridden by whatever `lookup` returns for each known key,
    /// then validated.
    pub fn with_overrides<'a>(
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(v) = lookup(KEY_SENSOR_NAME) {
            cfg.sensor_name = parse_string(KEY_SENSOR_NAME, v)?;
        }
        if let Some(v) = lookup(KEY_T_OFFSET) {
            cfg.temperature_offset_f = parse_f64(KEY_T_OFFSET, v)?;
        }
        if let Some(v) = lookup(KEY_H_OFFSET) {
            cfg.humidity_offset_pct = parse_f64(KEY_H_OFFSET, v)?;
        }
        if let Some(v) = lookup(KEY_ADJUST) {
            cfg.adjustments_enabled = parse_bool(KEY_ADJUST, v)?;
        }
        if let Some(v) = lookup(KEY_API_ENDPOINT) {
            cfg.api_endpoint = parse_string(KEY_API_ENDPOINT, v)?;
        }
        if let Some(v) = lookup(KEY_REPORT) {
            cfg.report_enabled = parse_bool(KEY_REPORT, v)?;
        }
        if let Some(v) = lookup(KEY_WIFI_SSID) {
            cfg.wifi_ssid = parse_string(KEY_WIFI_SSID, v)?;
        }
        if let Some(v) = lookup(KEY_WIFI_PASS) {
            cfg.wifi_password = parse_string(KEY_WIFI_PASS, v)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::with_overrides(|key| match key {
            KEY_SENSOR_NAME => option_env!("HEATMON_SENSOR_NAME"),
            KEY_T_OFFSET => option_env!("HEATMON_T_OFFSET"),
            KEY_H_OFFSET => option_env!("HEATMON_H_OFFSET"),
            KEY_ADJUST => option_env!("HEATMON_ADJUST"),
            KEY_API_ENDPOINT => option_env!("HEATMON_API_ENDPOINT"),
            KEY_REPORT => option_env!("HEATMON_REPORT"),
            KEY_WIFI_SSID => option_env!("WIFI_SSID"),
            KEY_WIFI_PASS => option_env!("WIFI_PASS"),
            _ => None,
        })
    }

    /// Parse a JSON document (for example a config blob embedded with
    /// `include_str!`) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| ConfigError::Parse("config JSON"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensor_name.is_empty() {
            return Err(ConfigError::ValidationFailed("sensor_name must not be empty"));
        }
        if !self.temperature_offset_f.is_finite() || self.temperature_offset_f.abs() > 50.0 {
            return Err(ConfigError::ValidationFailed(
                "temperature_offset_f must be within ±50",
            ));
        }
        if !self.humidity_offset_pct.is_finite() || self.humidity_offset_pct.abs() > 50.0 {
            return Err(ConfigError::ValidationFailed(
                "humidity_offset_pct must be within ±50",
            ));
        }
        if self.report_enabled
            && !(self.api_endpoint.starts_with("http://")
                || self.api_endpoint.starts_with("https://"))
        {
            return Err(ConfigError::ValidationFailed(
                "api_endpoint must start with http:// or https://",
            ));
        }
        if self.sensor_interval_ticks == 0 {
            return Err(ConfigError::ValidationFailed("sensor_interval_ticks must be > 0"));
        }
        if self.report_interval_ticks == 0 {
            return Err(ConfigError::ValidationFailed("report_interval_ticks must be > 0"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_ms must be > 0"));
        }
        Ok(())
    }

    /// Effective calibration: the configured offsets, or zero when
    /// adjustments are switched off.
    pub fn adjustment(&self) -> Adjustment {
        if self.adjustments_enabled {
            Adjustment {
                temperature_offset_f: self.temperature_offset_f,
                humidity_offset_pct: self.humidity_offset_pct,
            }
        } else {
            Adjustment::default()
        }
    }

    /// Length of one loop iteration.
    pub fn tick_quantum(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.http_timeout_ms))
    }
}

fn parse_string<const N: usize>(
    key: &'static str,
    v: &str,
) -> Result<heapless::String<N>, ConfigError> {
    heapless::String::try_from(v).map_err(|_| ConfigError::TooLong(key))
}

fn parse_f64(key: &'static str, v: &str) -> Result<f64, ConfigError> {
    v.trim().parse().map_err(|_| ConfigError::Parse(key))
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Parse(key)),
    }
}
