//! Log-backed status screen.
//!
//! Implements [`DisplayPort`] by keeping the latest text and colour for
//! every [`Field`] and mirroring changes to the serial log. A panel
//! driver would render [`LogDisplay::lines`] instead.

use log::{debug, info};

use crate::app::ports::{DisplayPort, Field};
use crate::app::status::Line;
use crate::palette::{COLOUR_WHITE, Colour};

const FIELDS: usize = Field::ALL.len();

pub struct LogDisplay {
    text: [Line; FIELDS],
    colour: [Colour; FIELDS],
}

impl Default for LogDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDisplay {
    pub fn new() -> Self {
        Self {
            text: core::array::from_fn(|_| Line::new()),
            colour: [COLOUR_WHITE; FIELDS],
        }
    }

    pub fn text(&self, field: Field) -> &str {
        &self.text[field as usize]
    }

    pub fn colour(&self, field: Field) -> Colour {
        self.colour[field as usize]
    }

    /// Every line, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = (Field, &str, Colour)> {
        Field::ALL
            .iter()
            .map(|&f| (f, self.text(f), self.colour(f)))
    }
}

impl DisplayPort for LogDisplay {
    fn set_text(&mut self, field: Field, text: &str) {
        let slot = &mut self.text[field as usize];
        if slot.as_str() == text {
            return;
        }
        slot.clear();
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        // The countdown changes every tick; keep it out of the info log.
        if field == Field::Countdown {
            debug!("Display: {}", slot);
        } else {
            info!("Display: {}", slot);
        }
    }

    fn set_colour(&mut self, field: Field, colour: Colour) {
        self.colour[field as usize] = colour;
    }
}
