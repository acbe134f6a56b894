#![no_std]

pub mod bands;
pub mod bounds;
pub mod channel;
pub mod color;
pub mod decoder;
pub mod effect;
pub mod math8;
pub mod mode;
pub mod output;
pub mod renderer;
pub mod visualizer;

pub use bands::{BAND_COUNT, BandTable, Bands, Levels};
pub use channel::{Channel, RxQueue};
pub use decoder::{DecoderEvent, DecoderState, FRAME_START, FrameDecoder, SERIAL_BAUD_RATE};
pub use effect::{AmbientConfig, EffectSet, PurpleConfig};
pub use mode::{Mode, ModeController, ModeRequest};
pub use output::SmartLedsOutput;
pub use renderer::{
    DEFAULT_GAIN_TABLE, DEFAULT_HUE_TABLE, RenderConfig, RenderEngine, RenderedFrame,
};
pub use visualizer::{TickResult, Visualizer};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The visualizer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    ///
    /// `brightness` (0-255) is the global level to apply on top of the colors.
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}
