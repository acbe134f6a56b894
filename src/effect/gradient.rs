//! Gradient effect
//!
//! Bands are laid out repeatedly along the strip: pixel `i` shows band
//! `i % 8` in that band's hue, lit according to its amplified level.

use super::Effect;
use crate::{
    bands::{BAND_COUNT, BandTable, Bands},
    color::{Hsv, Rgb, hsv2rgb},
};

/// Added to every pixel so quiet bands stay faintly visible
pub const GRADIENT_FLOOR: u8 = 5;

#[derive(Debug, Clone)]
pub struct GradientEffect {
    hues: BandTable,
    gains: BandTable,
}

impl GradientEffect {
    pub const fn new(hues: BandTable, gains: BandTable) -> Self {
        Self { hues, gains }
    }

    /// Color of the pixel at `index` for the given bands
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel(&self, index: usize, bands: &Bands) -> Hsv {
        let band = index % BAND_COUNT;
        let amplified = u16::from(bands.get(band)) * u16::from(self.gains[band]);
        let level = amplified.min(255) as u8;

        Hsv {
            hue: self.hues[band],
            sat: 255,
            val: level.saturating_add(GRADIENT_FLOOR),
        }
    }
}

impl Effect for GradientEffect {
    fn render(&mut self, bands: &Bands, _brightness: u8, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = hsv2rgb(self.pixel(i, bands));
        }
    }
}
