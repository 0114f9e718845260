//! DHT22 (AM2302) temperature/humidity sensor, single-wire protocol.
//!
//! The data line is open-drain with a pull-up. One transaction:
//!
//! ```text
//!  host  ‾‾‾\_____ ≥1 ms _____/‾‾ release
//!  dht                          \__80us__/‾‾80us‾‾\  then 40 bits:
//!  bit                          \__50us__/‾‾ 26us (0) | 70us (1) ‾‾\
//! ```
//!
//! Each bit is sampled [`BIT_SAMPLE_US`] after its rising edge: still high
//! means 1. The 5-byte frame is humidity (u16, tenths of %RH), temperature
//! (u16, tenths of °C, bit 15 = negative) and a checksum byte.
//!
//! Generic over `embedded-hal` 1.0 pin and delay traits. The ESP-IDF build
//! passes an open-drain `PinDriver` and `Ets`; host tests pass a simulated
//! line.
//!
//! The sensor needs about two seconds between measurements; the default
//! sensor cadence (10 ticks of 300 ms) respects that.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::SensorError;

/// Host start pulse length.
const START_LOW_US: u32 = 1_100;
/// Wait after releasing the line before looking for the response.
const RELEASE_WAIT_US: u32 = 40;
/// Maximum time to wait for any single edge.
const EDGE_TIMEOUT_US: u32 = 100;
/// Sample point after a bit's rising edge.
const BIT_SAMPLE_US: u32 = 35;

const MIN_TEMPERATURE_C: f64 = -40.0;
const MAX_TEMPERATURE_C: f64 = 80.0;
const MAX_HUMIDITY_PCT: f64 = 100.0;

/// One decoded measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

/// Decode and range-check a 5-byte frame.
pub fn decode_frame(frame: &[u8; 5]) -> Result<Measurement, SensorError> {
    let sum = frame[..4]
        .iter()
        .fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let raw_humidity = u16::from_be_bytes([frame[0], frame[1]]);
    let raw_temp = u16::from_be_bytes([frame[2], frame[3]]);

    let humidity_pct = f64::from(raw_humidity) / 10.0;
    let mut temperature_c = f64::from(raw_temp & 0x7fff) / 10.0;
    if raw_temp & 0x8000 != 0 {
        temperature_c = -temperature_c;
    }

    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temperature_c)
        || humidity_pct > MAX_HUMIDITY_PCT
    {
        return Err(SensorError::OutOfRange);
    }

    Ok(Measurement {
        temperature_c,
        humidity_pct,
    })
}

/// DHT22 driver over a bidirectional (open-drain) pin and a delay source.
pub struct Dht22<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Take the pin and leave the line released (idle high).
    pub fn new(mut pin: P, delay: D) -> Result<Self, SensorError> {
        pin.set_high().map_err(|_| SensorError::Gpio)?;
        Ok(Self { pin, delay })
    }

    /// Run one full transaction.
    pub fn read(&mut self) -> Result<Measurement, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(&frame)
    }

    /// Give the pin and delay back.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Gpio)?;
        self.delay.delay_us(START_LOW_US);
        self.pin.set_high().map_err(|_| SensorError::Gpio)?;
        self.delay.delay_us(RELEASE_WAIT_US);

        self.wait_for(false, "response low")?;
        self.wait_for(true, "response high")?;
        self.wait_for(false, "data preamble")?;

        let mut frame = [0u8; 5];
        for byte in &mut frame {
            for _ in 0..8 {
                self.wait_for(true, "bit start")?;
                self.delay.delay_us(BIT_SAMPLE_US);
                let bit = self.pin.is_high().map_err(|_| SensorError::Gpio)?;
                *byte = (*byte << 1) | u8::from(bit);
                if bit {
                    self.wait_for(false, "bit end")?;
                }
            }
        }
        Ok(frame)
    }

    /// Poll in 1 µs steps until the line reads `high`.
    fn wait_for(&mut self, high: bool, stage: &'static str) -> Result<(), SensorError> {
        for _ in 0..EDGE_TIMEOUT_US {
            if self.pin.is_high().map_err(|_| SensorError::Gpio)? == high {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        Err(SensorError::Timeout(stage))
    }
}
