use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Time axis model with separate full and visible ranges.
///
/// `full_*` is the fitted dataset extent and never moves after construction.
/// `visible_*` is the currently selected sub-range (the detail view domain).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    /// Creates a scale with matching full and visible ranges.
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            full_start: start,
            full_end: end,
            visible_start: start,
            visible_end: end,
        })
    }

    /// Fits both ranges to the dataset's time extent.
    pub fn from_dataset(dataset: &Dataset) -> ChartResult<Self> {
        let (min, max) = dataset.time_extent();
        Self::new(min, max)
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn visible_span(self) -> f64 {
        self.visible_end - self.visible_start
    }

    /// Overrides the visible range without moving the full extent.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        let (start, end) = normalize_range(start, end, 1e-9)?;
        self.visible_start = start;
        self.visible_end = end;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    /// Maps a time value through the visible domain onto plot pixels.
    pub fn time_to_pixel(self, time: f64, viewport: Viewport) -> ChartResult<f64> {
        self.visible_linear()?.to_pixel(time, viewport)
    }

    /// Inverse of [`TimeScale::time_to_pixel`].
    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        self.visible_linear()?.to_domain(pixel, viewport)
    }

    fn visible_linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.visible_start, self.visible_end)
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
