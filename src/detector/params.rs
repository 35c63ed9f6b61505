//! Tunable pipeline parameters.
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one pipeline run.
///
/// A single value can be shared across threads and images; the pipeline
/// never mutates it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Gaussian kernel side length in pixels, odd.
    pub kernel_size: usize,
    /// Gaussian standard deviation, strictly positive.
    pub sigma: f32,
    /// High threshold as a fraction of the suppressed-magnitude maximum.
    pub high_ratio: f32,
    /// Low threshold as a fraction of the high threshold (not of the raw
    /// maximum).
    pub low_ratio: f32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 1.4,
            high_ratio: 0.09,
            low_ratio: 0.05,
        }
    }
}

impl DetectorParams {
    pub fn validate(&self) -> Result<(), Error> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(Error::InvalidInput(format!(
                "kernel_size must be odd and positive, got {}",
                self.kernel_size
            )));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(Error::InvalidInput(format!(
                "sigma must be strictly positive, got {}",
                self.sigma
            )));
        }
        for (name, v) in [("high_ratio", self.high_ratio), ("low_ratio", self.low_ratio)] {
            if !(v.is_finite() && v > 0.0 && v < 1.0) {
                return Err(Error::InvalidInput(format!(
                    "{name} must lie in (0, 1), got {v}"
                )));
            }
        }
        Ok(())
    }
}
