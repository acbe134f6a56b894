//! Ambient color cycle
//!
//! Ignores audio and walks the whole hue wheel, one step per frame.

use super::Effect;
use crate::{
    bands::Bands,
    color::{Rgb, fill, rgb_from_hsv},
};

/// Configuration for the ambient effect
#[derive(Debug, Clone, Copy)]
pub struct AmbientConfig {
    /// Saturation (0-255)
    pub saturation: u8,
    /// Brightness value (0-255)
    pub value: u8,
}

impl AmbientConfig {
    pub const DEFAULT: Self = Self {
        saturation: 255,
        value: 255,
    };
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
pub struct AmbientEffect {
    config: AmbientConfig,
    hue: u8,
}

impl AmbientEffect {
    pub const fn new(config: AmbientConfig) -> Self {
        Self { config, hue: 0 }
    }

    /// Hue used by the next render
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Effect for AmbientEffect {
    fn render(&mut self, _bands: &Bands, _brightness: u8, leds: &mut [Rgb]) {
        let color = rgb_from_hsv(self.hue, self.config.saturation, self.config.value);
        fill(leds, color);
        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
