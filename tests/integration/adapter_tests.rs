//! The monitor wired to the real adapters, running on their host
//! simulation stubs.

use heatmon::adapters::display::LogDisplay;
use heatmon::adapters::hardware::{self, Dht22Adapter};
use heatmon::adapters::http::HttpReporter;
use heatmon::adapters::log_sink::LogEventSink;
use heatmon::adapters::wifi::WifiAdapter;
use heatmon::app::ports::{Field, NetworkStatus, SensorPort};
use heatmon::app::service::Monitor;
use heatmon::config::MonitorConfig;
use heatmon::error::SensorError;
use heatmon::palette::COLOUR_RED;
use heatmon::sensors::{self, SimulatedDht22};

#[test]
fn host_board_runs_end_to_end() {
    let config = MonitorConfig {
        sensor_interval_ticks: 1,
        report_interval_ticks: 2,
        wifi_ssid: heapless::String::try_from("HomeNetwork").unwrap(),
        ..MonitorConfig::default()
    };

    let mut display = LogDisplay::new();
    let mut sink = LogEventSink::new();
    let mut monitor = Monitor::new(config.clone());
    monitor.start(&mut display, &mut sink);

    let mut wifi = WifiAdapter::new(&config).unwrap();
    let net = wifi.connect();
    monitor.show_network(&mut display, &net);
    assert_eq!(display.text(Field::Network), "Network: Connected - 127.0.0.1");

    let mut reporter = HttpReporter::new(&config);
    reporter.set_online(wifi.is_connected());

    // 32.0 °C / 60.0 %RH
    sensors::sim_set_measurement(320, 600);
    let mut sensor = Dht22Adapter::new(hardware::init_board_sensor().unwrap());
    monitor.show_sensor_init(&mut display, Ok(()));

    monitor.run_ticks(2, &mut sensor, &mut reporter, &mut display, &mut sink, |_| {});

    let sample = monitor.last_sample().copied().unwrap();
    assert!((sample.reading.temperature_f - 89.6).abs() < 1e-9);
    assert_eq!(sample.reading.humidity_pct, 60.0);
    assert_eq!(display.text(Field::Temperature), "Temperature: 89.6 F");
    assert_eq!(display.text(Field::Network), "Network: POST OK (200)");
}

#[test]
fn offline_reporter_shows_post_fail() {
    let config = MonitorConfig {
        sensor_interval_ticks: 1,
        report_interval_ticks: 1,
        ..MonitorConfig::default()
    };
    let mut display = LogDisplay::new();
    let mut sink = LogEventSink::new();
    let mut monitor = Monitor::new(config.clone());
    monitor.start(&mut display, &mut sink);

    let mut wifi = WifiAdapter::new(&config).unwrap();
    assert_eq!(wifi.connect(), NetworkStatus::NotConnected);
    let mut reporter = HttpReporter::new(&config);
    reporter.set_online(wifi.is_connected());

    let mut sensor = Dht22Adapter::new(SimulatedDht22);
    monitor.tick(&mut sensor, &mut reporter, &mut display, &mut sink);

    assert_eq!(
        display.text(Field::Network),
        "Network: POST Fail - network not connecte"
    );
    assert_eq!(display.colour(Field::Network), COLOUR_RED);
}

#[test]
fn missing_sensor_reads_not_initialized() {
    let mut sensor = Dht22Adapter::<SimulatedDht22>::uninitialized();
    assert_eq!(sensor.read(), Err(SensorError::NotInitialized));
}
