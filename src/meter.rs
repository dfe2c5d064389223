//! Peak meter with per-window instant peaks and a decayed peak memory.
//!
//! Per window:
//! 1. Decode every complete stereo frame of the filled bytes
//! 2. Take the largest magnitude per channel (the instant peak)
//! 3. Pull the decayed peak toward it with a one-pole low-pass filter:
//!    `decayed = (1 - α) * decayed + α * instant`

use crate::buffer::SampleBuffer;
use crate::config::MeterConfig;
use crate::decode;
use crate::error::ConfigError;

/// Largest possible instant peak (`|i16::MIN|`).
pub const FULL_SCALE: u16 = 32768;

/// Instant peaks of one window. Each value is in `[0, 32768]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowMetrics {
    pub left: u16,
    pub right: u16,
}

/// Decayed peak per channel, carried from window to window.
///
/// Kept as real numbers; rounding for display is left to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecayedPeak {
    pub left: f64,
    pub right: f64,
}

impl DecayedPeak {
    /// Apply one step of the filter toward `instant` with coefficient `alpha`.
    pub fn decay(self, instant: WindowMetrics, alpha: f64) -> Self {
        DecayedPeak {
            left: (1.0 - alpha) * self.left + alpha * f64::from(instant.left),
            right: (1.0 - alpha) * self.right + alpha * f64::from(instant.right),
        }
    }
}

/// Everything the display needs for one window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub instant: WindowMetrics,
    pub decayed: DecayedPeak,
}

impl Reading {
    /// `(instant L, instant R, decayed L, decayed R)`.
    pub fn as_tuple(&self) -> (u16, u16, f64, f64) {
        (
            self.instant.left,
            self.instant.right,
            self.decayed.left,
            self.decayed.right,
        )
    }
}

/// Stateful meter. The only state is the decayed peak pair, which starts at
/// zero and is never reset.
#[derive(Debug, Clone)]
pub struct PeakMeter {
    elasticity: f64,
    decayed: DecayedPeak,
}

impl PeakMeter {
    pub fn new(elasticity: f64) -> Result<Self, ConfigError> {
        if !elasticity.is_finite() || elasticity <= 0.0 || elasticity > 1.0 {
            return Err(ConfigError::Elasticity(elasticity));
        }
        Ok(PeakMeter {
            elasticity,
            decayed: DecayedPeak::default(),
        })
    }

    pub fn from_config(config: &MeterConfig) -> Result<Self, ConfigError> {
        PeakMeter::new(config.elasticity)
    }

    /// Instant peaks of a window. Only whole 4-byte frames are looked at; an
    /// empty slice gives zero for both channels.
    pub fn process(bytes: &[u8]) -> WindowMetrics {
        decode::frames(bytes).fold(WindowMetrics::default(), |peak, s| WindowMetrics {
            left: peak.left.max(s.left.unsigned_abs()),
            right: peak.right.max(s.right.unsigned_abs()),
        })
    }

    /// Fold a window's instant peaks into the decayed state.
    pub fn update_decay(&mut self, instant: WindowMetrics) -> DecayedPeak {
        self.decayed = self.decayed.decay(instant, self.elasticity);
        self.decayed
    }

    /// Process the filled bytes of a window and update the decayed state.
    pub fn measure(&mut self, bytes: &[u8]) -> Reading {
        let instant = PeakMeter::process(bytes);
        let decayed = self.update_decay(instant);
        Reading { instant, decayed }
    }

    pub fn measure_buffer(&mut self, buffer: &SampleBuffer) -> Reading {
        self.measure(buffer.as_bytes())
    }

    pub fn decayed(&self) -> DecayedPeak {
        self.decayed
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }
}
