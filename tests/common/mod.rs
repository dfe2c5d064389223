#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// Interleave `(left, right)` pairs as little-endian PCM bytes.
pub fn pcm(frames: &[(i16, i16)]) -> Vec<u8> {
    frames
        .iter()
        .flat_map(|&(l, r)| {
            let [l0, l1] = l.to_le_bytes();
            let [r0, r1] = r.to_le_bytes();
            [l0, l1, r0, r1]
        })
        .collect()
}

/// Hands out at most `chunk` bytes per read, like a pipe.
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    pub reads: usize,
}

impl ChunkedReader {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        ChunkedReader { data, pos: 0, chunk, reads: 0 }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let n = buf.len().min(self.chunk).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Serves `data`, then fails every read with a broken pipe.
pub struct FaultyReader {
    data: Vec<u8>,
    pos: usize,
}

impl FaultyReader {
    pub fn new(data: Vec<u8>) -> Self {
        FaultyReader { data, pos: 0 }
    }
}

impl Read for FaultyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Alternates between `Interrupted` and one byte of `data`.
pub struct InterruptingReader {
    data: Vec<u8>,
    pos: usize,
    interrupt: bool,
}

impl InterruptingReader {
    pub fn new(data: Vec<u8>) -> Self {
        InterruptingReader { data, pos: 0, interrupt: true }
    }
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if !self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        if self.pos == self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Writer whose contents stay reachable after it has been boxed away.
#[derive(Clone, Default)]
pub struct SharedWriter(pub Rc<RefCell<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every write fails with a broken pipe.
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }
}
