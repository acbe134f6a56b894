//! Effect system with one effect per mode
//!
//! Every effect keeps its own animation state. All four live side by side in
//! [`EffectSet`] so switching modes never loses or resets that state.

mod ambient;
mod gradient;
mod purple;
mod spectrum;

pub use ambient::{AmbientConfig, AmbientEffect};
pub use gradient::{GRADIENT_FLOOR, GradientEffect};
pub use purple::{PurpleConfig, PurpleEffect};
pub use spectrum::SpectrumEffect;

use crate::{bands::Bands, color::Rgb, mode::Mode, renderer::RenderConfig};

pub trait Effect {
    /// Render a single frame
    ///
    /// `brightness` is the global brightness computed for these bands; it is
    /// applied by the sink, effects only read it.
    fn render(&mut self, bands: &Bands, brightness: u8, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// State of every mode's effect
#[derive(Debug, Clone)]
pub struct EffectSet {
    pub spectrum: SpectrumEffect,
    pub gradient: GradientEffect,
    pub purple: PurpleEffect,
    pub ambient: AmbientEffect,
}

impl EffectSet {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            spectrum: SpectrumEffect::new(config.hues, config.gains, config.smoothing),
            gradient: GradientEffect::new(config.hues, config.gains),
            purple: PurpleEffect::new(config.purple),
            ambient: AmbientEffect::new(config.ambient),
        }
    }

    /// Render the effect of the given mode
    pub fn render(&mut self, mode: Mode, bands: &Bands, brightness: u8, leds: &mut [Rgb]) {
        match mode {
            Mode::Spectrum => self.spectrum.render(bands, brightness, leds),
            Mode::Gradient => self.gradient.render(bands, brightness, leds),
            Mode::Purple => self.purple.render(bands, brightness, leds),
            Mode::Ambient => self.ambient.render(bands, brightness, leds),
        }
    }

    /// Reset the state of every effect
    pub fn reset(&mut self) {
        Effect::reset(&mut self.spectrum);
        Effect::reset(&mut self.gradient);
        Effect::reset(&mut self.purple);
        Effect::reset(&mut self.ambient);
    }
}
