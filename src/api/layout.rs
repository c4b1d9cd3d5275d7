use tracing::debug;

use crate::core::{ValueScale, Viewport};
use crate::error::ChartResult;
use crate::interaction::{PixelInterval, ZoomTransform};
use crate::render::Renderer;

use super::FocusChart;

impl<R: Renderer> FocusChart<R> {
    /// Full redraw against new canvas sizes.
    ///
    /// Rebinds every scale range, recomputes the shared value domain from the
    /// data, reprojects the logical time selection into new brush pixels and a
    /// new zoom transform, then re-renders both views and the legend. The
    /// detail time domain is preserved exactly.
    pub fn resize(
        &mut self,
        nav_viewport: Viewport,
        detail_viewport: Viewport,
    ) -> ChartResult<()> {
        let nav_plot = self.config.nav_margins.inner_viewport(nav_viewport)?;
        let detail_plot = self.config.detail_margins.inner_viewport(detail_viewport)?;

        self.config.nav_viewport = nav_viewport;
        self.config.detail_viewport = detail_viewport;
        self.nav_plot = nav_plot;
        self.detail_plot = detail_plot;
        self.value_scale = ValueScale::from_dataset(&self.dataset)?;

        let (start, end) = self.detail_time.visible_range();
        let p0 = self.nav_time.time_to_pixel(start, nav_plot)?;
        let p1 = self.nav_time.time_to_pixel(end, nav_plot)?;
        self.brush
            .set_selection(Some(PixelInterval::new(p0, p1).clamped(
                0.0,
                f64::from(nav_plot.width),
            )));

        let reference = self.detail_reference_interval(start, end)?;
        self.zoom = ZoomTransform::from_selection(reference, f64::from(detail_plot.width))?
            .clamped_to_extent(f64::from(detail_plot.width))?;

        debug!(
            nav_width = nav_viewport.width,
            nav_height = nav_viewport.height,
            detail_width = detail_viewport.width,
            detail_height = detail_viewport.height,
            "resized"
        );
        self.render_full()
    }

    /// Renders both views and the legend (construction and resize path).
    pub fn render_full(&mut self) -> ChartResult<()> {
        let nav = self.nav_frame()?;
        let detail = self.detail_frame_full()?;
        let legend = self.legend_frame()?;
        self.renderer.render(&nav)?;
        self.renderer.render(&detail)?;
        self.renderer.render(&legend)
    }

    /// Partial redraw after brush/zoom: detail paths and x-axis only.
    pub(super) fn render_detail_partial(&mut self) -> ChartResult<()> {
        let frame = self.detail_frame_partial()?;
        self.renderer.render(&frame)
    }
}
