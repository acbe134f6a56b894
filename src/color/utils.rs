pub use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert hue/saturation/value channels to RGB
#[inline]
pub fn rgb_from_hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill every LED with the same color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}
