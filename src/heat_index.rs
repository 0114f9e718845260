//! Heat-index calculation and NWS-style risk categories.
//!
//! Two regimes:
//!
//! 1. A simple linear estimate averaged with the air temperature. When that
//!    average is below 80 °F it is the answer.
//! 2. Otherwise the Rothfusz regression, with the two NWS corrections for
//!    very dry air (RH < 13 %, 80–112 °F) and very humid air (RH > 85 %,
//!    80–87 °F).
//!
//! All arithmetic is `f64` so results match the double-precision reference
//! values bit for bit. Inputs are not validated; callers supply sane ranges.

use crate::palette::{
    COLOUR_GREEN, COLOUR_ORANGE, COLOUR_PURPLE, COLOUR_RED, COLOUR_YELLOW, Colour,
};

/// Threshold (°F) below which the simple estimate is used.
const SIMPLE_REGIME_LIMIT_F: f64 = 80.0;

/// Heat index (°F) for air temperature `temp_f` (°F) and relative humidity
/// `humidity_pct` (%).
pub fn compute(temp_f: f64, humidity_pct: f64) -> f64 {
    let t = temp_f;
    let rh = humidity_pct;

    let simple = 0.5 * (t + 61.0 + ((t - 68.0) * 1.2) + (rh * 0.094));
    let simple_avg = (simple + t) / 2.0;
    if simple_avg < SIMPLE_REGIME_LIMIT_F {
        return simple_avg;
    }

    let mut hi = -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        hi -= dry_air_correction(t, rh);
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        hi += ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    hi
}

/// Low-humidity correction term. The square-root argument is clamped at
/// zero, so temperatures far from 95 °F contribute no correction.
fn dry_air_correction(t: f64, rh: f64) -> f64 {
    let arg = ((17.0 - (t - 95.0).abs()) / 17.0).max(0.0);
    ((13.0 - rh) / 4.0) * arg.sqrt()
}

// ═══════════════════════════════════════════════════════════════
//  Categories
// ═══════════════════════════════════════════════════════════════

/// Risk band for a heat-index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Normal,
    Caution,
    ExtremeCaution,
    Danger,
    ExtremeDanger,
}

impl Category {
    /// Human-readable label shown next to the heat index.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Caution => "Caution",
            Self::ExtremeCaution => "Extreme Caution",
            Self::Danger => "Danger",
            Self::ExtremeDanger => "Extreme Danger",
        }
    }

    /// Display colour for this band.
    pub const fn colour(self) -> Colour {
        match self {
            Self::Normal => COLOUR_GREEN,
            Self::Caution => COLOUR_YELLOW,
            Self::ExtremeCaution => COLOUR_ORANGE,
            Self::Danger => COLOUR_RED,
            Self::ExtremeDanger => COLOUR_PURPLE,
        }
    }

    /// Severity rank, 0 (Normal) through 4 (ExtremeDanger).
    pub const fn severity(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a heat index (°F) to its band. Bounds are half-open: `[80, 90)` is
/// Caution, and so on. NaN falls through every bound to `ExtremeDanger`.
pub fn categorize(heat_index_f: f64) -> Category {
    if heat_index_f < 80.0 {
        Category::Normal
    } else if heat_index_f < 90.0 {
        Category::Caution
    } else if heat_index_f < 105.0 {
        Category::ExtremeCaution
    } else if heat_index_f < 130.0 {
        Category::Danger
    } else {
        Category::ExtremeDanger
    }
}

/// A heat-index value together with its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatIndexResult {
    pub heat_index_f: f64,
    pub category: Category,
}

impl HeatIndexResult {
    pub fn colour(&self) -> Colour {
        self.category.colour()
    }
}

/// [`compute`] followed by [`categorize`].
pub fn evaluate(temp_f: f64, humidity_pct: f64) -> HeatIndexResult {
    let heat_index_f = compute(temp_f, humidity_pct);
    HeatIndexResult {
        heat_index_f,
        category: categorize(heat_index_f),
    }
}
