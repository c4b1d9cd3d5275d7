use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inclusive pixel interval on the navigation plot's horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelInterval {
    pub start: f64,
    pub end: f64,
}

impl PixelInterval {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel interval bounds must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    /// A selection with zero or negative width carries no usable range.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() <= 0.0
    }

    /// Clamps both bounds into `[min, max]`, preserving orientation.
    #[must_use]
    pub fn clamped(self, min: f64, max: f64) -> Self {
        Self {
            start: self.start.clamp(min, max),
            end: self.end.clamp(min, max),
        }
    }
}

/// Brush selection state over the navigation plot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BrushState {
    selection: Option<PixelInterval>,
}

impl BrushState {
    #[must_use]
    pub fn selection(self) -> Option<PixelInterval> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<PixelInterval>) {
        self.selection = selection;
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Resolves the effective selection: a missing or degenerate interval
    /// falls back to the full `[0, plot_width]` range.
    #[must_use]
    pub fn resolve(self, plot_width: f64) -> PixelInterval {
        match self.selection {
            Some(selection) if !selection.is_degenerate() => {
                selection.clamped(0.0, plot_width)
            }
            _ => PixelInterval::new(0.0, plot_width),
        }
    }
}
