//! Fuzz target: `heat_index::evaluate`
//!
//! Arbitrary (including non-finite) inputs must never panic, and the band
//! must always match the value it was derived from.
//!
//! cargo fuzz run fuzz_heat_index

#![no_main]

use heatmon::heat_index;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f64, f64)| {
    let (t, rh) = input;
    let r = heat_index::evaluate(t, rh);
    assert_eq!(r.category, heat_index::categorize(r.heat_index_f));
    if t.is_finite() && rh.is_finite() && t.abs() < 1e6 && rh.abs() < 1e6 {
        assert!(r.heat_index_f.is_finite());
    }
});
