use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::brush::PixelInterval;

/// Pointer-zoom transform over the detail plot: `view_px = scale * reference_px
/// + translate_x`, where reference pixels are the full-extent projection of
/// the data onto the detail plot.
///
/// The identity transform therefore shows the full time extent; larger scale
/// factors magnify a sub-window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    scale: f64,
    translate_x: f64,
}

impl ZoomTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
        }
    }

    pub fn new(scale: f64, translate_x: f64) -> ChartResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom scale must be finite and > 0".to_owned(),
            ));
        }
        if !translate_x.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }
        Ok(Self { scale, translate_x })
    }

    /// Transform magnifying a reference-pixel selection to fill the plot:
    /// `scale = plot_width / selection_width`, `translate_x = -scale * start`.
    pub fn from_selection(selection: PixelInterval, plot_width: f64) -> ChartResult<Self> {
        selection.validate()?;
        if selection.is_degenerate() {
            return Err(ChartError::InvalidData(
                "zoom selection must have positive width".to_owned(),
            ));
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot width must be finite and > 0".to_owned(),
            ));
        }

        let scale = plot_width / selection.width();
        Self::new(scale, -scale * selection.start)
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate_x(self) -> f64 {
        self.translate_x
    }

    #[must_use]
    pub fn apply_x(self, reference_px: f64) -> f64 {
        self.scale * reference_px + self.translate_x
    }

    #[must_use]
    pub fn invert_x(self, view_px: f64) -> f64 {
        (view_px - self.translate_x) / self.scale
    }

    /// Clamps to the gesture extents: scale factor lower bound 1 (cannot zoom
    /// out past the full extent) and a translate extent equal to the plot
    /// rectangle (the visible window never leaves `[0, plot_width]`).
    pub fn clamped_to_extent(self, plot_width: f64) -> ChartResult<Self> {
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot width must be finite and > 0".to_owned(),
            ));
        }

        let scale = self.scale.max(1.0);
        let translate_min = plot_width * (1.0 - scale);
        let translate_x = self.translate_x.clamp(translate_min, 0.0);
        Self::new(scale, translate_x)
    }

    /// Reference-pixel window currently visible through the transform.
    #[must_use]
    pub fn visible_window(self, plot_width: f64) -> PixelInterval {
        PixelInterval::new(self.invert_x(0.0), self.invert_x(plot_width))
    }

    /// Rescales a reference scale: maps the visible window back into domain
    /// values, yielding the zoomed domain.
    pub fn rescale(self, reference: LinearScale, viewport: Viewport) -> ChartResult<(f64, f64)> {
        let window = self.visible_window(f64::from(viewport.width));
        let start = reference.to_domain(window.start, viewport)?;
        let end = reference.to_domain(window.end, viewport)?;
        Ok((start, end))
    }

    /// Multiplies the scale factor while holding `anchor_px` fixed on screen.
    pub fn zoomed_around(self, factor: f64, anchor_px: f64) -> ChartResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_px.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }

        let reference_at_anchor = self.invert_x(anchor_px);
        let scale = self.scale * factor;
        Self::new(scale, anchor_px - scale * reference_at_anchor)
    }

    /// Shifts the view by a pixel delta (positive pans toward earlier data).
    pub fn translated_by(self, delta_px: f64) -> ChartResult<Self> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        Self::new(self.scale, self.translate_x + delta_px)
    }
}

/// Wheel delta to zoom factor under the 120-px-per-notch convention:
/// a negative delta (wheel up) zooms in by `1 + step_ratio` per notch.
#[must_use]
pub fn wheel_zoom_factor(wheel_delta_px: f64, step_ratio: f64) -> f64 {
    (1.0 + step_ratio).powf(-wheel_delta_px / 120.0)
}

#[cfg(test)]
mod tests {
    use super::{ZoomTransform, wheel_zoom_factor};
    use crate::interaction::brush::PixelInterval;

    #[test]
    fn identity_window_spans_the_plot() {
        let window = ZoomTransform::identity().visible_window(800.0);
        assert_eq!(window.start, 0.0);
        assert_eq!(window.end, 800.0);
    }

    #[test]
    fn from_selection_inverts_back_to_the_selection() {
        let selection = PixelInterval::new(200.0, 400.0);
        let transform = ZoomTransform::from_selection(selection, 800.0).expect("valid transform");
        let window = transform.visible_window(800.0);
        assert!((window.start - 200.0).abs() <= 1e-9);
        assert!((window.end - 400.0).abs() <= 1e-9);
    }

    #[test]
    fn clamp_restores_identity_when_zoomed_out_too_far() {
        let transform = ZoomTransform::new(0.5, 30.0).expect("valid transform");
        let clamped = transform.clamped_to_extent(800.0).expect("clamp");
        assert_eq!(clamped.scale(), 1.0);
        assert_eq!(clamped.translate_x(), 0.0);
    }

    #[test]
    fn clamp_keeps_visible_window_inside_the_plot() {
        let transform = ZoomTransform::new(2.0, 300.0).expect("valid transform");
        let clamped = transform.clamped_to_extent(800.0).expect("clamp");
        let window = clamped.visible_window(800.0);
        assert!(window.start >= 0.0);
        assert!(window.end <= 800.0);
    }

    #[test]
    fn wheel_factor_matches_notch_convention() {
        assert!((wheel_zoom_factor(-120.0, 0.2) - 1.2).abs() <= 1e-12);
        assert!((wheel_zoom_factor(120.0, 0.2) - 1.0 / 1.2).abs() <= 1e-12);
        assert!((wheel_zoom_factor(0.0, 0.2) - 1.0).abs() <= 1e-12);
    }
}
