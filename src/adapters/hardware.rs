//! Hardware adapter — bridges the DHT22 to the [`SensorPort`].
//!
//! The sensor arrives already constructed (or not: a failed init leaves
//! the adapter empty and every read answers `NotInitialized`). Readings
//! are converted from °C to °F here, so the domain only sees Fahrenheit.

use log::{debug, warn};

use crate::app::ports::SensorPort;
use crate::domain::Reading;
use crate::error::SensorError;
use crate::sensors::Hygrometer;

#[cfg(target_os = "espidf")]
use crate::sensors::dht22::Dht22;
#[cfg(target_os = "espidf")]
use esp_idf_hal::{
    delay::Ets,
    gpio::{AnyIOPin, InputOutput, PinDriver},
};

/// The wired sensor on ESP-IDF targets.
#[cfg(target_os = "espidf")]
pub type BoardSensor = Dht22<PinDriver<'static, AnyIOPin, InputOutput>, Ets>;
/// The simulated sensor on host targets.
#[cfg(not(target_os = "espidf"))]
pub type BoardSensor = crate::sensors::SimulatedDht22;

/// Bring up the board's DHT22 on [`crate::pins::DHT22_GPIO`].
#[cfg(target_os = "espidf")]
pub fn init_board_sensor(pin: AnyIOPin) -> Result<BoardSensor, SensorError> {
    let driver = PinDriver::input_output_od(pin).map_err(|_| SensorError::Gpio)?;
    Dht22::new(driver, Ets)
}

#[cfg(not(target_os = "espidf"))]
pub fn init_board_sensor() -> Result<BoardSensor, SensorError> {
    Ok(crate::sensors::SimulatedDht22)
}

/// [`SensorPort`] over any [`Hygrometer`].
pub struct Dht22Adapter<H> {
    sensor: Option<H>,
}

impl<H: Hygrometer> Dht22Adapter<H> {
    pub fn new(sensor: H) -> Self {
        Self {
            sensor: Some(sensor),
        }
    }

    /// Adapter for a sensor that failed to initialize.
    pub fn uninitialized() -> Self {
        Self { sensor: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.sensor.is_some()
    }
}

impl<H: Hygrometer> SensorPort for Dht22Adapter<H> {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let sensor = self.sensor.as_mut().ok_or(SensorError::NotInitialized)?;
        match sensor.measure() {
            Ok(m) => {
                debug!(
                    "DHT22: {:.1}\u{00b0}C {:.1}%RH",
                    m.temperature_c, m.humidity_pct
                );
                Ok(Reading::from_celsius(m.temperature_c, m.humidity_pct))
            }
            Err(e) => {
                warn!("DHT22: read failed: {}", e);
                Err(e)
            }
        }
    }
}
