use crate::error::{ChartError, ChartResult};
use crate::interaction::{PixelInterval, UpdateSource, zoom::wheel_zoom_factor};
use crate::render::Renderer;

use super::FocusChart;

impl<R: Renderer> FocusChart<R> {
    /// Applies a wheel zoom on the detail plot around a pixel anchor.
    ///
    /// Conventions:
    /// - `wheel_delta_px < 0` zooms in, `> 0` zooms out
    /// - one wheel notch is normalized as `120` pixels
    ///
    /// Returns the zoom factor derived from the delta (clamping at the full
    /// extent may reduce its effect).
    pub fn wheel_zoom_detail(&mut self, wheel_delta_px: f64, anchor_x_px: f64) -> ChartResult<f64> {
        if !wheel_delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        if !anchor_x_px.is_finite() {
            return Err(ChartError::InvalidData(
                "wheel anchor must be finite".to_owned(),
            ));
        }
        if wheel_delta_px == 0.0 {
            return Ok(1.0);
        }

        let anchor = anchor_x_px.clamp(0.0, f64::from(self.detail_plot.width));
        let factor = wheel_zoom_factor(wheel_delta_px, self.config.zoom_step_ratio);
        let next = self.zoom.zoomed_around(factor, anchor)?;
        self.zoom_changed(UpdateSource::Gesture, next)?;
        Ok(factor)
    }

    /// Pans the detail view by a pixel delta (positive drags toward earlier
    /// data). The translate extent clamps at both ends of the full range.
    pub fn pan_detail(&mut self, delta_x_px: f64) -> ChartResult<()> {
        let next = self.zoom.translated_by(delta_x_px)?;
        self.zoom_changed(UpdateSource::Gesture, next)
    }

    /// Applies a brush drag step with the current selection geometry.
    pub fn brush_drag_move(&mut self, selection: PixelInterval) -> ChartResult<()> {
        self.brush_moved(UpdateSource::Gesture, Some(selection))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
    }

    pub fn brush_drag_start(&mut self) {
        self.interaction.on_brush_start();
    }

    pub fn pan_start(&mut self) {
        self.interaction.on_pan_start();
    }

    pub fn gesture_end(&mut self) {
        self.interaction.on_gesture_end();
    }
}
