//! Sample buffer for raw PCM input.
//!
//! One window of interleaved stereo bytes, allocated once and refilled in
//! place every cycle.

use crate::config::BYTES_PER_FRAME;
use crate::decode::{self, Frames};
use crate::error::ConfigError;

/// Fixed-capacity byte window plus the length of its filled prefix.
pub struct SampleBuffer {
    /// Backing storage. Never reallocated after construction.
    bytes: Box<[u8]>,
    /// Number of valid bytes at the front of `bytes`.
    filled: usize,
}

impl SampleBuffer {
    /// Allocate a buffer of `capacity` bytes. The capacity must hold a whole
    /// number of stereo frames.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 || capacity % BYTES_PER_FRAME != 0 {
            return Err(ConfigError::BufferSize(capacity));
        }
        Ok(SampleBuffer {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            filled: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of bytes filled by the last read cycle.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// The filled prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.filled]
    }

    /// The unfilled tail, where the next read lands.
    pub(crate) fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[self.filled..]
    }

    /// Mark `n` more bytes as filled.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.filled + n <= self.bytes.len());
        self.filled += n;
    }

    /// Forget the previous contents so the buffer can be refilled.
    pub fn clear(&mut self) {
        self.filled = 0;
    }

    /// Decoded stereo frames of the filled prefix.
    pub fn frames(&self) -> Frames<'_> {
        decode::frames(self.as_bytes())
    }

    /// Bytes at the end of the filled prefix that do not make a whole frame.
    pub fn remainder(&self) -> usize {
        self.filled % BYTES_PER_FRAME
    }
}
