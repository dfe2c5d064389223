//! Metering loop: fill, measure, display.
//!
//! Per cycle:
//! 1. Refill the window from the input (blocking)
//! 2. Optionally copy the raw bytes to the pass-through output
//! 3. Measure instant and decayed peaks
//! 4. Hand the reading to the display sink
//!
//! Windows are handled strictly in arrival order on the calling thread.

use std::io::{Read, Write};

use crate::buffer::SampleBuffer;
use crate::config::MeterConfig;
use crate::display::DisplaySink;
use crate::error::{MeterError, Result};
use crate::meter::{PeakMeter, Reading};
use crate::reader::StreamReader;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Readings handed to the display.
    pub windows: u64,
    /// Bytes pulled from the input.
    pub bytes_read: u64,
    /// Trailing bytes discarded because they did not make a whole frame.
    pub dropped_bytes: u64,
    /// Whether the last window was cut short by end of input.
    pub ended_partial: bool,
}

pub struct Pipeline<R: Read, D: DisplaySink> {
    config: MeterConfig,
    reader: StreamReader<R>,
    buffer: SampleBuffer,
    meter: PeakMeter,
    sink: D,
    passthrough: Option<Box<dyn Write>>,
    summary: RunSummary,
}

impl<R: Read, D: DisplaySink> Pipeline<R, D> {
    /// Validate `config` and allocate the window. Nothing is read yet.
    pub fn new(config: MeterConfig, input: R, sink: D) -> Result<Self> {
        config.validate()?;
        let buffer = SampleBuffer::new(config.buffer_size)?;
        let meter = PeakMeter::from_config(&config)?;

        Ok(Pipeline {
            config,
            reader: StreamReader::new(input),
            buffer,
            meter,
            sink,
            passthrough: None,
            summary: RunSummary::default(),
        })
    }

    /// Copy every filled window, unchanged, to `out` before metering it.
    pub fn with_passthrough<W: Write + 'static>(mut self, out: W) -> Self {
        self.passthrough = Some(Box::new(out));
        self
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn meter(&self) -> &PeakMeter {
        &self.meter
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run one cycle. Returns `None` once the input has ended and no bytes
    /// are left to meter.
    pub fn step(&mut self) -> Result<Option<Reading>> {
        if self.reader.is_ended() {
            return Ok(None);
        }

        let filled = self.reader.fill(&mut self.buffer)?;
        self.summary.bytes_read = self.reader.bytes_read();
        if filled == 0 {
            return Ok(None);
        }

        if let Some(out) = self.passthrough.as_mut() {
            out.write_all(self.buffer.as_bytes())?;
            out.flush()?;
        }

        let dropped = self.buffer.remainder();
        if dropped > 0 {
            tracing::debug!(dropped, "discarding trailing partial frame");
            self.summary.dropped_bytes += dropped as u64;
        }

        let reading = self.meter.measure_buffer(&self.buffer);
        tracing::trace!(
            window = self.summary.windows,
            left = reading.instant.left,
            right = reading.instant.right,
            decayed_left = reading.decayed.left,
            decayed_right = reading.decayed.right,
            "window measured"
        );
        self.sink.show(&reading).map_err(MeterError::Display)?;
        self.summary.windows += 1;

        if !self.buffer.is_full() {
            tracing::info!(filled, "input ended with a partial window");
            self.summary.ended_partial = true;
        }

        Ok(Some(reading))
    }

    /// Loop until the input ends. A stream fault or display failure stops
    /// the loop and is returned.
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.step()?.is_some() {}
        tracing::info!(
            windows = self.summary.windows,
            bytes = self.summary.bytes_read,
            "metering finished"
        );
        Ok(self.summary)
    }
}
