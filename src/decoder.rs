//! Streaming frame decoder
//!
//! Parses the serial byte stream into band frames. The wire format is a
//! single start marker followed by eight payload bytes:
//!
//! ```text
//! [0xFF][b0][b1][b2][b3][b4][b5][b6][b7]
//! ```
//!
//! The stream may be cut at any point between reads; the decoder keeps its
//! position and resumes on the next call. Bytes outside a frame are dropped,
//! except for `m`/`M` which requests the next mode.
//!
//! A start marker seen in the middle of a frame is stored as payload. The
//! decoder only re-aligns once the current frame has been filled.

use crate::bands::{BAND_COUNT, Bands};

/// Byte that opens every frame
pub const FRAME_START: u8 = 0xFF;

/// Baud rate the host streams frames at
pub const SERIAL_BAUD_RATE: u32 = 500_000;

const ADVANCE_MODE_LOWER: u8 = b'm';
const ADVANCE_MODE_UPPER: u8 = b'M';

/// Decoder position in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Waiting for a start marker
    Idle,
    /// Inside a frame, holding the number of payload bytes collected so far
    Collecting(u8),
}

/// Something the decoder recognized in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderEvent {
    /// A complete frame was received
    Frame(Bands),
    /// The host asked to switch to the next mode
    AdvanceMode,
}

/// Incremental frame decoder
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecoderState,
    buffer: [u8; BAND_COUNT],
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Idle,
            buffer: [0; BAND_COUNT],
        }
    }

    pub const fn state(&self) -> DecoderState {
        self.state
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self.state, DecoderState::Idle)
    }

    /// Drop a partially received frame
    pub fn reset(&mut self) {
        self.state = DecoderState::Idle;
    }

    /// Feed a single byte
    ///
    /// Returns an event when the byte completes a frame or is a mode command.
    pub fn feed(&mut self, byte: u8) -> Option<DecoderEvent> {
        match self.state {
            DecoderState::Idle => match byte {
                FRAME_START => {
                    self.state = DecoderState::Collecting(0);
                    None
                }
                ADVANCE_MODE_LOWER | ADVANCE_MODE_UPPER => Some(DecoderEvent::AdvanceMode),
                _ => None,
            },
            DecoderState::Collecting(count) => {
                self.buffer[usize::from(count)] = byte;
                let count = count + 1;
                if usize::from(count) == BAND_COUNT {
                    self.state = DecoderState::Idle;
                    Some(DecoderEvent::Frame(Bands(self.buffer)))
                } else {
                    self.state = DecoderState::Collecting(count);
                    None
                }
            }
        }
    }

    /// Decode a chunk of bytes lazily
    ///
    /// The returned iterator yields events in stream order. Bytes are only
    /// consumed as the iterator advances, so drain it to process the whole
    /// chunk.
    pub fn decode<I>(&mut self, bytes: I) -> Decode<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        Decode {
            decoder: self,
            bytes: bytes.into_iter(),
        }
    }
}

/// Iterator over the events found in a chunk of bytes
pub struct Decode<'a, I> {
    decoder: &'a mut FrameDecoder,
    bytes: I,
}

impl<I: Iterator<Item = u8>> Iterator for Decode<'_, I> {
    type Item = DecoderEvent;

    fn next(&mut self) -> Option<Self::Item> {
        for byte in self.bytes.by_ref() {
            if let Some(event) = self.decoder.feed(byte) {
                return Some(event);
            }
        }
        None
    }
}
