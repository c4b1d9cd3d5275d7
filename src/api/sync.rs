//! Scale synchronizer: brush changes rescale the detail view, zoom transforms
//! reposition the brush, each replaying derived state onto the opposite
//! control through the same tagged entry point. The `UpdateSource` tag turns
//! the replayed call into a store-only update, so one gesture settles in a
//! single cycle with both views agreeing on the time domain.

use tracing::{trace, warn};

use crate::core::LinearScale;
use crate::error::ChartResult;
use crate::interaction::{PixelInterval, UpdateSource, ZoomTransform};
use crate::render::Renderer;

use super::FocusChart;

impl<R: Renderer> FocusChart<R> {
    /// Brush change handler.
    ///
    /// `None` and degenerate (zero or negative width) selections fall back to
    /// the full navigation range. When the call is a zoom replay
    /// (`UpdateSource::ZoomSync`) only the stored selection is updated.
    pub fn brush_moved(
        &mut self,
        source: UpdateSource,
        selection: Option<PixelInterval>,
    ) -> ChartResult<()> {
        trace!(?source, ?selection, "brush moved");
        let nav_width = f64::from(self.nav_plot.width);

        if source == UpdateSource::ZoomSync {
            if let Some(selection) = selection {
                selection.validate()?;
            }
            self.brush
                .set_selection(selection.map(|s| s.clamped(0.0, nav_width)));
            return Ok(());
        }

        let resolved = match selection {
            Some(selection) => {
                selection.validate()?;
                let clamped = selection.clamped(0.0, nav_width);
                if clamped.is_degenerate() {
                    warn!(
                        start = selection.start,
                        end = selection.end,
                        "degenerate brush selection, falling back to full range"
                    );
                    PixelInterval::new(0.0, nav_width)
                } else {
                    clamped
                }
            }
            None => PixelInterval::new(0.0, nav_width),
        };

        let start = self.nav_time.pixel_to_time(resolved.start, self.nav_plot)?;
        let end = self.nav_time.pixel_to_time(resolved.end, self.nav_plot)?;
        self.detail_time.set_visible_range(start, end)?;
        self.brush.set_selection(Some(resolved));
        self.render_detail_partial()?;

        // Replay the derived transform onto the zoom control so subsequent
        // pointer gestures compose from the new state. The source tag keeps
        // the zoom handler from re-entering its domain logic. The normalized
        // visible range is read back so the reference interval can never be
        // degenerate.
        let (start, end) = self.detail_time.visible_range();
        let reference = self.detail_reference_interval(start, end)?;
        let transform = ZoomTransform::from_selection(reference, f64::from(self.detail_plot.width))?;
        self.zoom_changed(UpdateSource::BrushSync, transform)
    }

    /// Zoom transform handler.
    ///
    /// The transform is clamped to the gesture extents before use. When the
    /// call is a brush replay (`UpdateSource::BrushSync`) only the stored
    /// transform is updated.
    pub fn zoom_changed(
        &mut self,
        source: UpdateSource,
        transform: ZoomTransform,
    ) -> ChartResult<()> {
        trace!(?source, scale = transform.scale(), "zoom changed");
        let detail_width = f64::from(self.detail_plot.width);
        let clamped = transform.clamped_to_extent(detail_width)?;

        if source == UpdateSource::BrushSync {
            self.zoom = clamped;
            return Ok(());
        }

        self.zoom = clamped;
        let reference = self.full_extent_scale()?;
        let (start, end) = clamped.rescale(reference, self.detail_plot)?;
        self.detail_time.set_visible_range(start, end)?;
        self.render_detail_partial()?;

        // Reposition the brush to the new visible range in navigation pixels;
        // the source tag makes this a store-only update on the brush side.
        let p0 = self.nav_time.time_to_pixel(start, self.nav_plot)?;
        let p1 = self.nav_time.time_to_pixel(end, self.nav_plot)?;
        self.brush_moved(UpdateSource::ZoomSync, Some(PixelInterval::new(p0, p1)))
    }

    /// Full-extent time scale, the reference every zoom transform rescales.
    pub(super) fn full_extent_scale(&self) -> ChartResult<LinearScale> {
        let (start, end) = self.nav_time.full_range();
        LinearScale::new(start, end)
    }

    /// Projects a time range onto the detail plot under the full extent,
    /// yielding the reference-pixel interval a zoom transform magnifies.
    pub(super) fn detail_reference_interval(
        &self,
        start: f64,
        end: f64,
    ) -> ChartResult<PixelInterval> {
        let reference = self.full_extent_scale()?;
        Ok(PixelInterval::new(
            reference.to_pixel(start, self.detail_plot)?,
            reference.to_pixel(end, self.detail_plot)?,
        ))
    }
}
