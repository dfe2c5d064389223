//! Stream reader: fills one window from an unbounded byte stream.

use std::io::{ErrorKind, Read};

use crate::buffer::SampleBuffer;
use crate::error::Result;

/// Pulls whole windows out of a blocking byte source.
pub struct StreamReader<R: Read> {
    inner: R,
    /// Set once the source has reported end-of-input.
    ended: bool,
    /// Total bytes pulled from the source.
    bytes_read: u64,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        StreamReader {
            inner,
            ended: false,
            bytes_read: 0,
        }
    }

    /// Refill `buffer` from the start, blocking until it is full or the
    /// source ends. Returns the number of bytes filled.
    ///
    /// Short reads are looped over. A count below capacity means the stream
    /// ended, and may leave a partial frame at the end. Any I/O error other
    /// than `Interrupted` aborts the fill and is returned as a stream fault.
    pub fn fill(&mut self, buffer: &mut SampleBuffer) -> Result<usize> {
        buffer.clear();
        if self.ended {
            return Ok(0);
        }

        while !buffer.is_full() {
            match self.inner.read(buffer.unfilled_mut()) {
                Ok(0) => {
                    tracing::debug!(filled = buffer.filled(), "input stream ended");
                    self.ended = true;
                    break;
                }
                Ok(n) => {
                    buffer.advance(n);
                    self.bytes_read += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(buffer.filled())
    }

    /// Whether the source has reported end-of-input.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }
}
