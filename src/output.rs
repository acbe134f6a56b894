//! Output driver over `smart-leds` writers
//!
//! Most LED drivers implement [`SmartLedsWrite`]. This adapter streams the
//! rendered colors through `smart_leds::brightness` (and optionally
//! `smart_leds::gamma`) so the global brightness never touches the frame
//! buffer.

use smart_leds::{SmartLedsWrite, brightness, gamma};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, Rgb};

/// [`OutputDriver`] for any `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
    gamma: bool,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            gamma: false,
        }
    }

    /// Apply gamma correction before brightness
    #[must_use]
    pub const fn with_gamma(mut self) -> Self {
        self.gamma = true;
        self
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb], level: u8) {
        let pixels = colors.iter().copied();
        let result = if self.gamma {
            self.writer.write(brightness(gamma(pixels), level))
        } else {
            self.writer.write(brightness(pixels, level))
        };

        // A dropped frame is replaced by the next one
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SmartLedsOutput.write] failed to write {} leds", colors.len());
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
