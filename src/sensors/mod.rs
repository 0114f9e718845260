//! Sensor subsystem: the DHT22 driver and a host-side stand-in.
//!
//! ## Dual-target design
//!
//! On ESP-IDF the DHT22 is bit-banged on [`crate::pins::DHT22_GPIO`].
//! On host/test, [`SimulatedDht22`] returns whatever was last injected
//! with [`sim_set_measurement`] (raw frame values, tenths of a unit).

pub mod dht22;

use core::sync::atomic::{AtomicBool, AtomicI16, AtomicU16, Ordering};

use crate::error::SensorError;
use dht22::Measurement;

static SIM_TEMP_TENTHS_C: AtomicI16 = AtomicI16::new(250);
static SIM_HUMIDITY_TENTHS: AtomicU16 = AtomicU16::new(500);
static SIM_FAULT: AtomicBool = AtomicBool::new(false);

/// Inject the next simulated measurement (tenths of °C and %RH).
pub fn sim_set_measurement(temp_tenths_c: i16, humidity_tenths: u16) {
    SIM_TEMP_TENTHS_C.store(temp_tenths_c, Ordering::Relaxed);
    SIM_HUMIDITY_TENTHS.store(humidity_tenths, Ordering::Relaxed);
}

/// Make the simulated sensor fail (checksum) until cleared.
pub fn sim_set_fault(fault: bool) {
    SIM_FAULT.store(fault, Ordering::Relaxed);
}

/// Anything that can produce a DHT22-style measurement.
pub trait Hygrometer {
    fn measure(&mut self) -> Result<Measurement, SensorError>;
}

impl<P, D> Hygrometer for dht22::Dht22<P, D>
where
    P: embedded_hal::digital::InputPin + embedded_hal::digital::OutputPin,
    D: embedded_hal::delay::DelayNs,
{
    fn measure(&mut self) -> Result<Measurement, SensorError> {
        self.read()
    }
}

/// Host stand-in for a wired DHT22. Values go through the same frame
/// decode (range checks included) as the real sensor's.
#[derive(Debug, Default)]
pub struct SimulatedDht22;

impl Hygrometer for SimulatedDht22 {
    fn measure(&mut self) -> Result<Measurement, SensorError> {
        if SIM_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::Checksum);
        }
        let t = SIM_TEMP_TENTHS_C.load(Ordering::Relaxed);
        let h = SIM_HUMIDITY_TENTHS.load(Ordering::Relaxed);
        dht22::decode_frame(&encode_frame(h, t))
    }
}

/// Build a wire frame (checksum included) from tenths values.
pub fn encode_frame(humidity_tenths: u16, temp_tenths_c: i16) -> [u8; 5] {
    let raw_t = if temp_tenths_c < 0 {
        temp_tenths_c.unsigned_abs() | 0x8000
    } else {
        temp_tenths_c.unsigned_abs()
    };
    let [h0, h1] = humidity_tenths.to_be_bytes();
    let [t0, t1] = raw_t.to_be_bytes();
    let sum = h0.wrapping_add(h1).wrapping_add(t0).wrapping_add(t1);
    [h0, h1, t0, t1, sum]
}
