//! Main loop step
//!
//! Ties the decoder, the mode switcher and the render engine together.
//! The caller supplies the received bytes and the current time, and is
//! responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bands::Bands;
use crate::decoder::{DecoderEvent, FrameDecoder};
use crate::mode::{Mode, ModeController, ModeRequest};
use crate::renderer::{RenderConfig, RenderEngine};
use crate::OutputDriver;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Whether a new frame was rendered and written to the output
    pub rendered: bool,
    /// Active mode after the tick
    pub mode: Mode,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Audio-reactive visualizer loop
///
/// Each tick:
/// 1. Decodes every received byte, keeping the newest complete frame
/// 2. Applies mode switches from the stream and from the button flag
/// 3. Renders and writes the output, only if a new frame arrived
/// 4. Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// static RX: RxQueue<64> = RxQueue::new();
/// static BUTTON: ModeRequest = ModeRequest::new();
///
/// let mut visualizer: Visualizer<'_, _, 60> =
///     Visualizer::new(&RenderConfig::DEFAULT, &BUTTON, driver);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = visualizer.tick(now, RX.receiver().drain());
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct Visualizer<'a, O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    decoder: FrameDecoder,
    modes: ModeController,
    mode_request: &'a ModeRequest,
    engine: RenderEngine<MAX_LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize> Visualizer<'a, O, MAX_LEDS> {
    /// Create a new visualizer.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (90 FPS) for frame timing.
    pub fn new(config: &RenderConfig, mode_request: &'a ModeRequest, driver: O) -> Self {
        Self::with_frame_duration(config, mode_request, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new visualizer with custom frame duration.
    pub fn with_frame_duration(
        config: &RenderConfig,
        mode_request: &'a ModeRequest,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            decoder: FrameDecoder::new(),
            modes: ModeController::default(),
            mode_request,
            engine: RenderEngine::new(config),
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Replace the mode controller, e.g. to start in another mode.
    #[must_use]
    pub fn with_modes(mut self, modes: ModeController) -> Self {
        self.modes = modes;
        self
    }

    /// Process one iteration of the main loop.
    pub fn tick<I>(&mut self, now: Instant, bytes: I) -> TickResult
    where
        I: IntoIterator<Item = u8>,
    {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.receive(now, bytes);

        if self.mode_request.take() {
            #[cfg(feature = "esp32-log")]
            println!("[Visualizer.tick] mode button pressed");
            self.modes.advance(now);
        }

        let rendered = if let Some(bands) = frame {
            let frame = self.engine.render(&bands, self.modes.mode());
            self.output.write(frame.leds, frame.brightness);
            true
        } else {
            false
        };

        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        TickResult {
            rendered,
            mode: self.modes.mode(),
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Decode received bytes, returning the newest complete frame
    fn receive<I>(&mut self, now: Instant, bytes: I) -> Option<Bands>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut latest = None;
        for event in self.decoder.decode(bytes) {
            match event {
                DecoderEvent::Frame(bands) => latest = Some(bands),
                DecoderEvent::AdvanceMode => {
                    self.modes.advance(now);
                }
            }
        }
        latest
    }

    pub const fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub const fn decoder(&self) -> &FrameDecoder {
        &self.decoder
    }

    /// Get a reference to the render engine.
    pub const fn engine(&self) -> &RenderEngine<MAX_LEDS> {
        &self.engine
    }

    /// Get a mutable reference to the render engine.
    pub fn engine_mut(&mut self) -> &mut RenderEngine<MAX_LEDS> {
        &mut self.engine
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }
}
