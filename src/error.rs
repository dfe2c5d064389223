use std::io;

use thiserror::Error;

/// A configuration value that cannot drive the meter.
///
/// Raised before the metering loop starts, never mid-stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Buffer size is zero or does not hold a whole number of stereo frames.
    #[error("buffer size must be a positive multiple of 4 bytes, got {0}")]
    BufferSize(usize),
    /// Sample rate is zero, negative, or not finite.
    #[error("sample rate must be a positive number of Hz, got {0}")]
    SampleRate(f64),
    /// Elasticity outside `(0, 1]`.
    #[error("elasticity must be within (0, 1], got {0}")]
    Elasticity(f64),
    /// Display bar width of zero columns.
    #[error("display width must be at least one column, got {0}")]
    DisplayWidth(usize),
}

/// Errors surfaced by the metering pipeline.
#[derive(Debug, Error)]
pub enum MeterError {
    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The input stream (or the pass-through output) failed with something
    /// other than end-of-input. Fatal for the loop.
    #[error("input stream fault: {0}")]
    StreamFault(#[from] io::Error),
    /// The display sink could not accept a reading.
    #[error("display sink failed: {0}")]
    Display(#[source] io::Error),
}

impl MeterError {
    /// Whether this error was raised by configuration validation.
    pub fn is_config(&self) -> bool {
        matches!(self, MeterError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, MeterError>;
