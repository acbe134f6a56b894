use crate::bands::{BandTable, Bands, Levels};
use crate::bounds::{RenderingBounds, bounded};
use crate::color::{BLACK, Rgb};
use crate::effect::{AmbientConfig, EffectSet, PurpleConfig};
use crate::mode::Mode;

/// Hue of each band, bass in red through highs in violet
pub const DEFAULT_HUE_TABLE: BandTable = [0, 16, 32, 64, 96, 140, 170, 200];

/// Amplification of each band; upper bands carry less energy
pub const DEFAULT_GAIN_TABLE: BandTable = [1, 1, 1, 2, 2, 3, 3, 4];

/// Total band energy below which the strip stays dark
pub const DEFAULT_NOISE_GATE: u16 = 20;

/// Lowest brightness once the noise gate is open
pub const DEFAULT_MIN_BRIGHTNESS: u8 = 10;

pub const DEFAULT_MAX_BRIGHTNESS: u8 = 200;

/// Spectrum color smoothing (0 = instant, 255 = frozen)
pub const DEFAULT_SMOOTHING: u8 = 180;

/// Default number of LEDs on the ring
pub const DEFAULT_LED_COUNT: u8 = 60;

/// Configuration for the render engine
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub bounds: RenderingBounds,
    pub noise_gate: u16,
    pub min_brightness: u8,
    pub max_brightness: u8,
    pub smoothing: u8,
    pub hues: BandTable,
    pub gains: BandTable,
    pub purple: PurpleConfig,
    pub ambient: AmbientConfig,
}

impl RenderConfig {
    pub const DEFAULT: Self = Self {
        bounds: RenderingBounds::first(DEFAULT_LED_COUNT),
        noise_gate: DEFAULT_NOISE_GATE,
        min_brightness: DEFAULT_MIN_BRIGHTNESS,
        max_brightness: DEFAULT_MAX_BRIGHTNESS,
        smoothing: DEFAULT_SMOOTHING,
        hues: DEFAULT_HUE_TABLE,
        gains: DEFAULT_GAIN_TABLE,
        purple: PurpleConfig::DEFAULT,
        ambient: AmbientConfig::DEFAULT,
    };

    /// Render onto the first `count` LEDs
    #[must_use]
    pub const fn with_led_count(mut self, count: u8) -> Self {
        self.bounds = RenderingBounds::first(count);
        self
    }

    #[must_use]
    pub const fn with_tables(mut self, hues: BandTable, gains: BandTable) -> Self {
        self.hues = hues;
        self.gains = gains;
        self
    }

    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: u8) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Global brightness for a given total band energy
    ///
    /// Zero below the noise gate, otherwise a quarter of the total held
    /// between the brightness floor and ceiling.
    #[allow(clippy::cast_possible_truncation)]
    pub fn brightness_for(&self, total: u16) -> u8 {
        if total < self.noise_gate {
            return 0;
        }
        let level = total / 4;
        level
            .max(u16::from(self.min_brightness))
            .min(u16::from(self.max_brightness)) as u8
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors and brightness produced by one render call
#[derive(Debug, Clone, Copy)]
pub struct RenderedFrame<'a> {
    /// Every LED up to the end of the rendering bounds
    pub leds: &'a [Rgb],
    /// Global brightness for the sink to apply
    pub brightness: u8,
}

/// Render engine - turns band frames into LED colors
pub struct RenderEngine<const MAX_LEDS: usize> {
    config: RenderConfig,
    effects: EffectSet,
    frame_buffer: [Rgb; MAX_LEDS],
    brightness: u8,
}

impl<const MAX_LEDS: usize> RenderEngine<MAX_LEDS> {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            config: config.clone(),
            effects: EffectSet::new(config),
            frame_buffer: [BLACK; MAX_LEDS],
            brightness: 0,
        }
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub const fn effects(&self) -> &EffectSet {
        &self.effects
    }

    /// Brightness of the last rendered frame
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Render one frame for the given mode
    ///
    /// Only the effect of `mode` advances its animation state.
    pub fn render(&mut self, bands: &Bands, mode: Mode) -> RenderedFrame<'_> {
        let levels = bands.levels();
        self.brightness = self.config.brightness_for(levels.total);

        let leds = bounded(&mut self.frame_buffer, self.config.bounds);
        self.effects.render(mode, bands, self.brightness, leds);

        self.frame()
    }

    /// Last rendered frame
    pub fn frame(&self) -> RenderedFrame<'_> {
        let end = usize::from(self.config.bounds.end).min(MAX_LEDS);
        RenderedFrame {
            leds: &self.frame_buffer[..end],
            brightness: self.brightness,
        }
    }

    /// Grouped energies of a frame
    pub fn levels(bands: &Bands) -> Levels {
        bands.levels()
    }

    /// Clear the buffer and every effect's animation state
    pub fn reset(&mut self) {
        self.frame_buffer = [BLACK; MAX_LEDS];
        self.brightness = 0;
        self.effects.reset();
    }
}
