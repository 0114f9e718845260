//! Fuzz target: `dht22::decode_frame`
//!
//! Any 5-byte frame either fails cleanly or decodes to a measurement
//! inside the sensor's rated range.
//!
//! cargo fuzz run fuzz_dht_frame

#![no_main]

use heatmon::sensors::dht22::decode_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|frame: [u8; 5]| {
    if let Ok(m) = decode_frame(&frame) {
        assert!((-40.0..=80.0).contains(&m.temperature_c));
        assert!((0.0..=100.0).contains(&m.humidity_pct));
        let sum = frame[..4].iter().fold(0u8, |a, b| a.wrapping_add(*b));
        assert_eq!(sum, frame[4], "accepted a frame with a bad checksum");
    }
});
