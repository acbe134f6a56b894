use crate::Rgb;

/// Bounds of the rendering area
///
/// LEDs before `start` are left dark, which lets a strip hide a few pixels
/// behind the enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    pub start: u8,
    pub end: u8,
}

impl RenderingBounds {
    /// Bounds covering the first `count` LEDs
    pub const fn first(count: u8) -> Self {
        Self {
            start: 0,
            end: count,
        }
    }

    /// Get the number of LEDs in the rendering area
    pub const fn count(self) -> u8 {
        self.end.saturating_sub(self.start)
    }
}

/// Get a slice of the LEDs within the bounds
///
/// Bounds past the end of the buffer are cut to fit.
pub(crate) fn bounded(leds: &mut [Rgb], bounds: RenderingBounds) -> &mut [Rgb] {
    let end = usize::from(bounds.end).min(leds.len());
    let start = usize::from(bounds.start).min(end);
    &mut leds[start..end]
}
