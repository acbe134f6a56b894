//! Band energy frames
//!
//! A frame carries eight pre-computed energy levels, lowest frequency first.

use crate::decoder::FRAME_START;

/// Number of frequency bands in a frame
pub const BAND_COUNT: usize = 8;

/// Size of a frame on the wire: start marker plus payload
pub const WIRE_FRAME_LEN: usize = BAND_COUNT + 1;

/// Per-band lookup table (hue or gain)
pub type BandTable = [u8; BAND_COUNT];

/// Energy levels of all bands, index 0 is the lowest frequency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bands(pub [u8; BAND_COUNT]);

/// Grouped band energies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levels {
    /// Bands 0-2
    pub low: u16,
    /// Bands 3-4
    pub mid: u16,
    /// Bands 5-7
    pub high: u16,
    /// All eight bands
    pub total: u16,
}

impl Bands {
    /// Silent frame
    pub const SILENT: Self = Self([0; BAND_COUNT]);

    pub const fn new(levels: [u8; BAND_COUNT]) -> Self {
        Self(levels)
    }

    /// Energy of a single band
    pub const fn get(&self, band: usize) -> u8 {
        self.0[band]
    }

    pub const fn as_array(&self) -> &[u8; BAND_COUNT] {
        &self.0
    }

    /// Sum the bands into low, mid and high groups
    pub fn levels(&self) -> Levels {
        let sum = |range: core::ops::Range<usize>| -> u16 {
            self.0[range].iter().map(|&v| u16::from(v)).sum()
        };
        let low = sum(0..3);
        let mid = sum(3..5);
        let high = sum(5..8);
        Levels {
            low,
            mid,
            high,
            total: low + mid + high,
        }
    }

    /// Gain-weighted center of mass over the band index
    ///
    /// Returns 0.0 when every weighted band is silent.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn centroid(&self, gains: &BandTable) -> f32 {
        let mut weighted_sum: u32 = 0;
        let mut weight_sum: u32 = 0;
        for (i, (&level, &gain)) in self.0.iter().zip(gains).enumerate() {
            let weight = u32::from(level) * u32::from(gain);
            weighted_sum += i as u32 * weight;
            weight_sum += weight;
        }

        if weight_sum == 0 {
            return 0.0;
        }
        weighted_sum as f32 / weight_sum as f32
    }

    /// Encode as a wire frame: start marker followed by the levels
    pub fn to_wire(&self) -> [u8; WIRE_FRAME_LEN] {
        let mut frame = [0; WIRE_FRAME_LEN];
        frame[0] = FRAME_START;
        frame[1..].copy_from_slice(&self.0);
        frame
    }
}

impl From<[u8; BAND_COUNT]> for Bands {
    fn from(levels: [u8; BAND_COUNT]) -> Self {
        Self(levels)
    }
}
