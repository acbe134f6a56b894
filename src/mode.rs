//! Visual modes and the debounced mode switcher

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

const MODE_NAME_SPECTRUM: &str = "spectrum";
const MODE_NAME_GRADIENT: &str = "gradient";
const MODE_NAME_PURPLE: &str = "purple";
const MODE_NAME_AMBIENT: &str = "ambient";

const MODE_ID_SPECTRUM: u8 = 0;
const MODE_ID_GRADIENT: u8 = 1;
const MODE_ID_PURPLE: u8 = 2;
const MODE_ID_AMBIENT: u8 = 3;

/// Minimum time between two accepted mode switches
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Known visual modes, in switching order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Solid color following the spectral centroid
    #[default]
    Spectrum = MODE_ID_SPECTRUM,
    /// Every pixel shows the level of one band
    Gradient = MODE_ID_GRADIENT,
    /// Slow purple breathing, ignores audio
    Purple = MODE_ID_PURPLE,
    /// Slow hue cycle, ignores audio
    Ambient = MODE_ID_AMBIENT,
}

impl Mode {
    /// Mode that follows this one in the cycle
    pub const fn next(self) -> Self {
        match self {
            Self::Spectrum => Self::Gradient,
            Self::Gradient => Self::Purple,
            Self::Purple => Self::Ambient,
            Self::Ambient => Self::Spectrum,
        }
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_SPECTRUM => Self::Spectrum,
            MODE_ID_GRADIENT => Self::Gradient,
            MODE_ID_PURPLE => Self::Purple,
            MODE_ID_AMBIENT => Self::Ambient,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spectrum => MODE_NAME_SPECTRUM,
            Self::Gradient => MODE_NAME_GRADIENT,
            Self::Purple => MODE_NAME_PURPLE,
            Self::Ambient => MODE_NAME_AMBIENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_SPECTRUM => Some(Self::Spectrum),
            MODE_NAME_GRADIENT => Some(Self::Gradient),
            MODE_NAME_PURPLE => Some(Self::Purple),
            MODE_NAME_AMBIENT => Some(Self::Ambient),
            _ => None,
        }
    }
}

/// Holds the active mode and debounces switch requests
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    debounce: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ModeController {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            debounce: DEFAULT_DEBOUNCE,
            last_accepted: None,
        }
    }

    /// Set the debounce window
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch to a mode directly, bypassing the debounce
    pub fn set(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Move to the next mode
    ///
    /// Ignored if the previous accepted switch happened less than the
    /// debounce window ago. Returns whether the switch was accepted.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = now
                .checked_duration_since(last)
                .unwrap_or(Duration::from_ticks(0));
            if elapsed < self.debounce {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[ModeController.advance] ignored, {}ms since last switch",
                    elapsed.as_millis()
                );
                return false;
            }
        }

        self.mode = self.mode.next();
        self.last_accepted = Some(now);
        #[cfg(feature = "esp32-log")]
        println!("[ModeController.advance] switched to {}", self.mode.as_str());
        true
    }
}

/// Pending mode switch raised from interrupt context
///
/// The interrupt handler only calls [`ModeRequest::request`]; the main loop
/// consumes it with [`ModeRequest::take`]. Several requests before a `take`
/// collapse into one.
#[derive(Debug, Default)]
pub struct ModeRequest {
    pending: AtomicBool,
}

impl ModeRequest {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Raise the flag. Safe to call from an interrupt handler.
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Check whether a request is pending without clearing it
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}
