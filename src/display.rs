//! Display sinks for meter readings.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::error::ConfigError;
use crate::meter::{FULL_SCALE, Reading};

/// Instant peaks at or above this are flagged as clipping.
pub const CLIP_THRESHOLD: u16 = 32000;

/// Default bar width of [`TextDisplay`], in columns.
pub const DEFAULT_WIDTH: usize = 50;

/// Consumer of one reading per completed window.
pub trait DisplaySink {
    fn show(&mut self, reading: &Reading) -> io::Result<()>;
}

/// Collects every reading in order.
impl DisplaySink for Vec<Reading> {
    fn show(&mut self, reading: &Reading) -> io::Result<()> {
        self.push(*reading);
        Ok(())
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn show(&mut self, reading: &Reading) -> io::Result<()> {
        (**self).show(reading)
    }
}

/// Text bars, one line per window:
///
/// ```text
/// L [##########|         ]  16384  R [###  |               ]   4800
/// ```
///
/// `#` fills up to the instant peak, `|` marks the decayed peak, and a
/// trailing `CLIP` appears when either channel reaches [`CLIP_THRESHOLD`].
pub struct TextDisplay<W: Write> {
    out: W,
    width: usize,
    line: String,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W, width: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::DisplayWidth(width));
        }
        Ok(TextDisplay {
            out,
            width,
            line: String::with_capacity(2 * width + 32),
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Format a reading without writing it.
    pub fn render(&mut self, reading: &Reading) -> &str {
        self.line.clear();
        self.push_channel('L', reading.instant.left, reading.decayed.left);
        self.line.push_str("  ");
        self.push_channel('R', reading.instant.right, reading.decayed.right);
        if reading.instant.left >= CLIP_THRESHOLD || reading.instant.right >= CLIP_THRESHOLD {
            self.line.push_str("  CLIP");
        }
        &self.line
    }

    fn push_channel(&mut self, label: char, instant: u16, decayed: f64) {
        let filled = column(f64::from(instant), self.width);
        let hold = (decayed > 0.0).then(|| column(decayed, self.width).min(self.width - 1));

        self.line.push(label);
        self.line.push_str(" [");
        for col in 0..self.width {
            let c = if Some(col) == hold {
                '|'
            } else if col < filled {
                '#'
            } else {
                ' '
            };
            self.line.push(c);
        }
        // Writing into a String cannot fail.
        let _ = write!(self.line, "] {instant:>6}");
    }
}

/// Scale a peak in `[0, 32768]` to a column count, truncating.
fn column(value: f64, width: usize) -> usize {
    let scaled = value / f64::from(FULL_SCALE) * width as f64;
    (scaled as usize).min(width)
}

impl<W: Write> DisplaySink for TextDisplay<W> {
    fn show(&mut self, reading: &Reading) -> io::Result<()> {
        self.render(reading);
        writeln!(self.out, "{}", self.line)?;
        self.out.flush()
    }
}
