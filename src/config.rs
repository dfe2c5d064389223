//! Meter configuration.
//!
//! All values are fixed for the lifetime of a pipeline and checked once,
//! before the first read.

use std::time::Duration;

use crate::error::ConfigError;

/// Bytes in one stereo frame: 2 channels × 2 bytes per sample.
pub const BYTES_PER_FRAME: usize = 4;

/// Default window size in bytes (5512 stereo frames).
///
/// 22050 bytes would be 1/8 s at 44.1 kHz but leaves a half frame over, so
/// the default is rounded down to the nearest whole frame.
pub const DEFAULT_BUFFER_SIZE: usize = 22048;

/// Default nominal sample rate per channel, in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Default smoothing coefficient of the decayed peak.
pub const DEFAULT_ELASTICITY: f64 = 0.1;

/// Configuration for one metering pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterConfig {
    /// Window size in bytes. Must be a positive multiple of [`BYTES_PER_FRAME`].
    pub buffer_size: usize,
    /// Nominal sample rate in Hz. Only used to report the refresh cadence.
    pub sample_rate: f64,
    /// How fast the decayed peak tracks the instant peak, in `(0, 1]`.
    pub elasticity: f64,
}

impl Default for MeterConfig {
    fn default() -> Self {
        MeterConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
            sample_rate: DEFAULT_SAMPLE_RATE,
            elasticity: DEFAULT_ELASTICITY,
        }
    }
}

impl MeterConfig {
    /// Build a validated config with the default elasticity.
    pub fn new(buffer_size: usize, sample_rate: f64) -> Result<Self, ConfigError> {
        let config = MeterConfig {
            buffer_size,
            sample_rate,
            ..MeterConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the elasticity, re-validating the result.
    pub fn with_elasticity(self, elasticity: f64) -> Result<Self, ConfigError> {
        let config = MeterConfig { elasticity, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 || self.buffer_size % BYTES_PER_FRAME != 0 {
            return Err(ConfigError::BufferSize(self.buffer_size));
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ConfigError::SampleRate(self.sample_rate));
        }
        if !self.elasticity.is_finite() || self.elasticity <= 0.0 || self.elasticity > 1.0 {
            return Err(ConfigError::Elasticity(self.elasticity));
        }
        Ok(())
    }

    /// Stereo frames held by one full window.
    pub fn frames_per_window(&self) -> usize {
        self.buffer_size / BYTES_PER_FRAME
    }

    /// Seconds of audio in one full window at the nominal sample rate.
    pub fn refresh_seconds(&self) -> f64 {
        self.buffer_size as f64 / BYTES_PER_FRAME as f64 / self.sample_rate
    }

    pub fn windows_per_second(&self) -> f64 {
        1.0 / self.refresh_seconds()
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs_f64(self.refresh_seconds())
    }

    /// Emit the startup diagnostics.
    pub fn log_summary(&self) {
        tracing::info!("Buffer size: {} bytes", self.buffer_size);
        tracing::info!("Sampling rate: {} Hz", self.sample_rate);
        tracing::info!(
            "Refresh time: {} seconds ({} windows per second)",
            self.refresh_seconds(),
            self.windows_per_second()
        );
    }
}
