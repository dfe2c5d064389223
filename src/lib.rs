//! Streaming peak meter for raw 16-bit stereo PCM.
//!
//! Reads interleaved little-endian `[L, R]` sample pairs from any byte
//! stream, one fixed-size window at a time, and reports per window:
//!
//! - the instant peak of each channel (largest `|sample|` in the window)
//! - the decayed peak of each channel, a slow-release memory of recent peaks
//!
//! # Example
//!
//! ```no_run
//! use pcm_peak_meter::{MeterConfig, Pipeline, Reading};
//!
//! let config = MeterConfig::default();
//! let mut readings: Vec<Reading> = Vec::new();
//! let mut pipeline = Pipeline::new(config, std::io::stdin().lock(), &mut readings).unwrap();
//! let summary = pipeline.run().unwrap();
//! println!("{} windows", summary.windows);
//! ```

pub mod buffer;
pub mod config;
pub mod decode;
pub mod display;
pub mod error;
pub mod meter;
pub mod pipeline;
pub mod reader;

pub use buffer::SampleBuffer;
pub use config::MeterConfig;
pub use decode::StereoSample;
pub use display::{DisplaySink, TextDisplay};
pub use error::{ConfigError, MeterError, Result};
pub use meter::{DecayedPeak, PeakMeter, Reading, WindowMetrics};
pub use pipeline::{Pipeline, RunSummary};
pub use reader::StreamReader;
