//! Heatmon Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single fixed-cadence poll loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Dht22Adapter   HttpReporter   LogDisplay   LogEventSink       │
//! │  (SensorPort)   (ReportPort)   (Display)    (EventSink)        │
//! │  WifiAdapter (boot-time link only)                             │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Monitor (pure logic)                      │    │
//! │  │  Cadences · Calibration · Heat index · Status text     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use heatmon::adapters::display::LogDisplay;
use heatmon::adapters::hardware::{self, Dht22Adapter};
use heatmon::adapters::http::HttpReporter;
use heatmon::adapters::log_sink::LogEventSink;
use heatmon::adapters::wifi::WifiAdapter;
use heatmon::app::ports::{NetworkStatus, NoReporter};
use heatmon::app::service::Monitor;
use heatmon::config::MonitorConfig;
use heatmon::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Heatmon v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (compiled in) ────────────────────────
    let config = match MonitorConfig::from_build_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Build-time config rejected ({}), using defaults", e);
            MonitorConfig::default()
        }
    };
    info!(
        "Config: sensor '{}', report {}, adjustments {}",
        config.sensor_name,
        if config.report_enabled { "on" } else { "off" },
        if config.adjustments_enabled { "on" } else { "off" },
    );

    let peripherals = Peripherals::take()?;
    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = match EspDefaultNvsPartition::take() {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("NVS partition unavailable ({}), WiFi runs without persisted RF data", e);
            None
        }
    };

    // ── 3. Screen + monitor core ──────────────────────────────
    let mut display = LogDisplay::new();
    let mut sink = LogEventSink::new();
    let mut monitor = Monitor::new(config.clone());
    monitor.start(&mut display, &mut sink);

    // ── 4. Network (only when reporting) ──────────────────────
    let mut reporter = HttpReporter::new(&config);
    let _wifi = if config.report_enabled {
        match WifiAdapter::new(&config, peripherals.modem, sys_loop, nvs) {
            Ok(mut wifi) => {
                let net = wifi.connect();
                monitor.show_network(&mut display, &net);
                reporter.set_online(wifi.is_connected());
                Some(wifi)
            }
            Err(e) => {
                monitor.show_network(&mut display, &NetworkStatus::Error(e.as_str()));
                None
            }
        }
    } else {
        None
    };

    // ── 5. Sensor ─────────────────────────────────────────────
    // SAFETY: the DHT22 line is not claimed through `peripherals.pins`.
    let dht_pin = unsafe { AnyIOPin::new(pins::DHT22_GPIO) };
    let mut sensor = match hardware::init_board_sensor(dht_pin) {
        Ok(dht) => {
            monitor.show_sensor_init(&mut display, Ok(()));
            Dht22Adapter::new(dht)
        }
        Err(e) => {
            monitor.show_sensor_init(&mut display, Err(&e));
            Dht22Adapter::uninitialized()
        }
    };

    // ── 6. Poll loop ──────────────────────────────────────────
    info!("System ready. Entering poll loop.");
    let pause = |d: core::time::Duration| FreeRtos::delay_ms(d.as_millis() as u32);
    if config.report_enabled {
        monitor.run(&mut sensor, &mut reporter, &mut display, &mut sink, pause)
    } else {
        monitor.run(&mut sensor, &mut NoReporter, &mut display, &mut sink, pause)
    }
}
