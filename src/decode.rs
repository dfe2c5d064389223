//! Stereo frame decoding.
//!
//! The stream carries interleaved signed 16-bit samples `[L0, R0, L1, R1, ...]`
//! with the low-order byte first. The convention is fixed: no attempt is made
//! to detect the byte order of the producer.

use std::slice::ChunksExact;

use crate::config::BYTES_PER_FRAME;

/// One left/right pair decoded from 4 consecutive bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StereoSample {
    pub left: i16,
    pub right: i16,
}

impl StereoSample {
    pub fn new(left: i16, right: i16) -> Self {
        StereoSample { left, right }
    }

    /// Decode a frame. Byte 1 is the high-order byte of the left sample,
    /// byte 3 the high-order byte of the right one.
    pub fn from_bytes(frame: [u8; 4]) -> Self {
        StereoSample {
            left: i16::from_le_bytes([frame[0], frame[1]]),
            right: i16::from_le_bytes([frame[2], frame[3]]),
        }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        let [l0, l1] = self.left.to_le_bytes();
        let [r0, r1] = self.right.to_le_bytes();
        [l0, l1, r0, r1]
    }
}

/// Iterator over the complete frames of a byte slice.
pub struct Frames<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Frames<'a> {
    /// Trailing bytes that do not form a complete frame.
    pub fn remainder(&self) -> &'a [u8] {
        self.chunks.remainder()
    }
}

impl Iterator for Frames<'_> {
    type Item = StereoSample;

    fn next(&mut self) -> Option<StereoSample> {
        self.chunks
            .next()
            .map(|c| StereoSample::from_bytes([c[0], c[1], c[2], c[3]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}

/// Decode every complete frame of `bytes`; a trailing partial frame is skipped.
pub fn frames(bytes: &[u8]) -> Frames<'_> {
    Frames {
        chunks: bytes.chunks_exact(BYTES_PER_FRAME),
    }
}
