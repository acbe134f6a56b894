//! Spectrum effect
//!
//! Fills the strip with one color whose hue tracks the spectral centroid.
//! The displayed color eases toward the target every frame, so the strip
//! drifts between hues instead of flickering with each frame. Easing runs on
//! 8.8 fixed-point channels so small gaps still close at high smoothing.

use super::Effect;
use crate::{
    bands::{BAND_COUNT, BandTable, Bands},
    color::{BLACK, Rgb, fill, rgb_from_hsv},
    math8::{ease16, lerp8},
};

/// Spectrum effect - solid color following the centroid of the bands
#[derive(Debug, Clone)]
pub struct SpectrumEffect {
    hues: BandTable,
    gains: BandTable,
    /// 0 jumps to the target at once, 255 never moves
    smoothing: u8,
    /// Displayed color in 8.8 fixed point, `[r, g, b]`
    level: [u16; 3],
    current: Rgb,
    target: Rgb,
}

impl SpectrumEffect {
    pub const fn new(hues: BandTable, gains: BandTable, smoothing: u8) -> Self {
        Self {
            hues,
            gains,
            smoothing,
            level: [0; 3],
            current: BLACK,
            target: BLACK,
        }
    }

    /// Color shown on the last rendered frame
    pub const fn current(&self) -> Rgb {
        self.current
    }

    /// Color the effect is easing toward
    pub const fn target(&self) -> Rgb {
        self.target
    }

    /// Hue for the centroid of the given bands
    ///
    /// The centroid falls between two band indices; the hue is interpolated
    /// between their table entries.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn target_hue(&self, bands: &Bands) -> u8 {
        let centroid = bands.centroid(&self.gains);
        let lower = (libm::floorf(centroid).max(0.0) as usize).min(BAND_COUNT - 1);
        let upper = (lower + 1).min(BAND_COUNT - 1);
        let frac = centroid - lower as f32;

        lerp8(self.hues[lower], self.hues[upper], frac)
    }
}

impl Effect for SpectrumEffect {
    fn render(&mut self, bands: &Bands, brightness: u8, leds: &mut [Rgb]) {
        self.target = if brightness == 0 {
            BLACK
        } else {
            rgb_from_hsv(self.target_hue(bands), 255, 255)
        };

        let amount = 255 - self.smoothing;
        let target = [self.target.r, self.target.g, self.target.b];
        for (level, channel) in self.level.iter_mut().zip(target) {
            *level = ease16(*level, u16::from(channel) << 8, amount);
        }
        self.current = Rgb {
            r: channel_from_level(self.level[0]),
            g: channel_from_level(self.level[1]),
            b: channel_from_level(self.level[2]),
        };
        fill(leds, self.current);
    }

    fn reset(&mut self) {
        self.level = [0; 3];
        self.current = BLACK;
        self.target = BLACK;
    }
}

/// Round an 8.8 fixed-point channel to its 8-bit value
#[allow(clippy::cast_possible_truncation)]
fn channel_from_level(level: u16) -> u8 {
    ((u32::from(level) + 0x80) >> 8).min(255) as u8
}
