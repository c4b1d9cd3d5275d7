use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::dataset::Dataset;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Value axis mapped to an inverted Y pixel axis (domain max at the top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "value scale domain must be finite with min < max".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    /// Zero-anchored domain shared by both views: `[0, global series max]`.
    pub fn from_dataset(dataset: &Dataset) -> ChartResult<Self> {
        let max = dataset.value_max();
        if max <= 0.0 {
            warn!(value_max = max, "no positive samples, using unit value domain");
            return Self::new(0.0, 1.0);
        }
        Self::new(0.0, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Maps a value onto `[viewport.height, 0]` (larger values higher up).
    pub fn to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        Ok((1.0 - normalized) * f64::from(viewport.height))
    }

    /// Inverse of [`ValueScale::to_pixel`].
    pub fn to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = 1.0 - pixel / f64::from(viewport.height);
        Ok(self.domain_min + normalized * (self.domain_max - self.domain_min))
    }

    /// Evenly spaced tick values across the domain.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 {
            return vec![self.domain_min];
        }

        let span = self.domain_max - self.domain_min;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| self.domain_min + span * (index as f64) / denominator)
            .collect()
    }
}
