//! 8-bit fixed-point helpers
//!
//! Small integer primitives shared by the effects. Everything works on the
//! 0-255 range so it stays cheap on microcontrollers without an FPU.

use core::f32::consts::PI;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Sine wave over one 8-bit turn
///
/// `theta` walks the full circle in 256 steps. The result is centered on 128
/// and swings between 1 and 255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let radians = f32::from(theta) * (2.0 * PI / 256.0);
    libm::roundf(128.0 + libm::sinf(radians) * 127.0) as u8
}

/// Linear interpolation between two 8-bit values by a float fraction
///
/// `frac` is clamped to 0.0-1.0. No hue wrap-around is applied.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp8(a: u8, b: u8, frac: f32) -> u8 {
    let frac = frac.clamp(0.0, 1.0);
    let a = f32::from(a);
    let b = f32::from(b);
    libm::roundf(a + (b - a) * frac).clamp(0.0, 255.0) as u8
}

/// Move an 8.8 fixed-point value toward `target` by `amount / 255` of the gap
///
/// Moves at least one fractional step while `amount` is non-zero, so repeated
/// calls land on `target` exactly. `amount` 0 never moves, 255 jumps.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn ease16(current: u16, target: u16, amount: u8) -> u16 {
    if amount == 0 {
        return current;
    }
    let gap = current.abs_diff(target);
    let step = ((gap as u32 * amount as u32) / 255) as u16;
    let step = if step == 0 { 1 } else { step };
    if target > current {
        current + step
    } else if target < current {
        current - step
    } else {
        current
    }
}
