//! Purple breathing effect
//!
//! Ignores audio. The whole strip pulses slowly in a single purple hue,
//! never dropping below a fixed floor.

use super::Effect;
use crate::{
    bands::Bands,
    color::{Rgb, fill, rgb_from_hsv},
    math8::{scale8, sin8},
};

const DEFAULT_PURPLE_HUE: u8 = 192;
const DEFAULT_PURPLE_SATURATION: u8 = 255;
/// Lowest value reached at the bottom of the pulse
const DEFAULT_PURPLE_FLOOR: u8 = 40;

/// Configuration for the purple effect
#[derive(Debug, Clone, Copy)]
pub struct PurpleConfig {
    pub hue: u8,
    pub saturation: u8,
    pub floor: u8,
}

impl PurpleConfig {
    pub const DEFAULT: Self = Self {
        hue: DEFAULT_PURPLE_HUE,
        saturation: DEFAULT_PURPLE_SATURATION,
        floor: DEFAULT_PURPLE_FLOOR,
    };
}

impl Default for PurpleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
pub struct PurpleEffect {
    config: PurpleConfig,
    phase: u8,
}

impl PurpleEffect {
    pub const fn new(config: PurpleConfig) -> Self {
        Self { config, phase: 0 }
    }

    /// Phase used by the next render
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// Value at a given phase of the pulse
    pub fn value_at(&self, phase: u8) -> u8 {
        let floor = self.config.floor;
        floor.saturating_add(scale8(sin8(phase), 255 - floor))
    }
}

impl Effect for PurpleEffect {
    fn render(&mut self, _bands: &Bands, _brightness: u8, leds: &mut [Rgb]) {
        let color = rgb_from_hsv(
            self.config.hue,
            self.config.saturation,
            self.value_at(self.phase),
        );
        fill(leds, color);
        self.phase = self.phase.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
