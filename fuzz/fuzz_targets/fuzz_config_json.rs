//! Fuzz target: `MonitorConfig::from_json`
//!
//! Arbitrary bytes must never panic the loader, and anything it accepts
//! must already pass validation.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use heatmon::config::MonitorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = MonitorConfig::from_json(text) {
        assert!(cfg.validate().is_ok());
    }
});
