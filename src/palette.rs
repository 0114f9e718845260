//! Display colour palette.
//!
//! The status display takes 24-bit RGB colour tokens (`0xRRGGBB`). Every
//! colour the firmware paints is named here so the heat-index bands and
//! the status/network fields stay consistent.
//!
//! | Name              | Value      | Used for                          |
//! |-------------------|------------|-----------------------------------|
//! | `COLOUR_GREEN`    | `0x00ff00` | Normal band, success status       |
//! | `COLOUR_YELLOW`   | `0xffff00` | Caution band, countdown, progress |
//! | `COLOUR_ORANGE`   | `0xff8800` | Extreme-caution band, HTTP error  |
//! | `COLOUR_RED`      | `0xff0000` | Danger band, faults               |
//! | `COLOUR_PURPLE`   | `0x800080` | Extreme-danger band               |
//! | `COLOUR_CYAN`     | `0x00ffff` | Network activity                  |

/// A 24-bit RGB colour token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(pub u32);

impl Colour {
    /// Build a colour from its components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Split into (R, G, B).
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Raw `0xRRGGBB` value.
    pub const fn raw(self) -> u32 {
        self.0 & 0x00ff_ffff
    }
}

pub const COLOUR_GREEN: Colour = Colour(0x00ff00);
pub const COLOUR_YELLOW: Colour = Colour(0xffff00);
pub const COLOUR_ORANGE: Colour = Colour(0xff8800);
pub const COLOUR_RED: Colour = Colour(0xff0000);
pub const COLOUR_PURPLE: Colour = Colour(0x800080);
pub const COLOUR_CYAN: Colour = Colour(0x00ffff);
pub const COLOUR_WHITE: Colour = Colour(0xffffff);

/// Screen fill behind every label.
pub const COLOUR_BACKGROUND: Colour = Colour(0x222222);
/// Title bar.
pub const COLOUR_HEADER: Colour = Colour(0xce4343);
