use tracing::debug;

use crate::core::{Dataset, Margins, TimeScale, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    BrushState, InteractionMode, InteractionState, PixelInterval, UpdateSource, ZoomTransform,
};
use crate::render::Renderer;

use super::legend::Legend;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusChartConfig {
    pub nav_viewport: Viewport,
    pub detail_viewport: Viewport,
    pub nav_margins: Margins,
    pub detail_margins: Margins,
    pub zoom_step_ratio: f64,
    pub time_tick_target_spacing_px: f64,
    pub value_tick_count: usize,
}

impl FocusChartConfig {
    #[must_use]
    pub fn new(nav_viewport: Viewport, detail_viewport: Viewport) -> Self {
        Self {
            nav_viewport,
            detail_viewport,
            nav_margins: Margins::new(5, 5, 50, 50),
            detail_margins: Margins::new(5, 5, 30, 50),
            zoom_step_ratio: 0.2,
            time_tick_target_spacing_px: 72.0,
            value_tick_count: 5,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, nav_margins: Margins, detail_margins: Margins) -> Self {
        self.nav_margins = nav_margins;
        self.detail_margins = detail_margins;
        self
    }

    #[must_use]
    pub fn with_zoom_step_ratio(mut self, zoom_step_ratio: f64) -> Self {
        self.zoom_step_ratio = zoom_step_ratio;
        self
    }

    #[must_use]
    pub fn with_time_tick_spacing(mut self, spacing_px: f64) -> Self {
        self.time_tick_target_spacing_px = spacing_px;
        self
    }

    #[must_use]
    pub fn with_value_tick_count(mut self, tick_count: usize) -> Self {
        self.value_tick_count = tick_count;
        self
    }

    pub(super) fn validate(&self) -> ChartResult<()> {
        if !self.zoom_step_ratio.is_finite() || self.zoom_step_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom step ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.time_tick_target_spacing_px.is_finite() || self.time_tick_target_spacing_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "time tick spacing must be finite and > 0".to_owned(),
            ));
        }
        if self.value_tick_count < 2 {
            return Err(ChartError::InvalidData(
                "value tick count must be at least 2".to_owned(),
            ));
        }
        // Margin feasibility is proven by resolving both plot areas.
        self.nav_margins.inner_viewport(self.nav_viewport)?;
        self.detail_margins.inner_viewport(self.detail_viewport)?;
        Ok(())
    }
}

/// Focus+context chart engine: one dataset, two synchronized views, a brush, a
/// pointer-zoom transform and a legend, behind a pluggable renderer.
pub struct FocusChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: FocusChartConfig,
    pub(super) dataset: Dataset,
    pub(super) nav_plot: Viewport,
    pub(super) detail_plot: Viewport,
    pub(super) nav_time: TimeScale,
    pub(super) detail_time: TimeScale,
    pub(super) value_scale: ValueScale,
    pub(super) brush: BrushState,
    pub(super) zoom: ZoomTransform,
    pub(super) legend: Legend,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> FocusChart<R> {
    /// Builds the chart and performs the initial full render: both time scales
    /// span the dataset extent, the shared value domain is `[0, global max]`,
    /// the brush covers the whole navigation plot and the zoom transform is
    /// identity.
    pub fn new(renderer: R, config: FocusChartConfig, dataset: Dataset) -> ChartResult<Self> {
        config.validate()?;
        let nav_plot = config.nav_margins.inner_viewport(config.nav_viewport)?;
        let detail_plot = config.detail_margins.inner_viewport(config.detail_viewport)?;

        let nav_time = TimeScale::from_dataset(&dataset)?;
        let detail_time = nav_time;
        let value_scale = ValueScale::from_dataset(&dataset)?;
        let legend = Legend::from_series(dataset.series_names());

        let mut brush = BrushState::default();
        brush.set_selection(Some(PixelInterval::new(0.0, f64::from(nav_plot.width))));

        debug!(
            series_count = dataset.series_names().len(),
            record_count = dataset.len(),
            "focus chart constructed"
        );

        let mut chart = Self {
            renderer,
            config,
            dataset,
            nav_plot,
            detail_plot,
            nav_time,
            detail_time,
            value_scale,
            brush,
            zoom: ZoomTransform::identity(),
            legend,
            interaction: InteractionState::default(),
        };
        chart.render_full()?;
        Ok(chart)
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> FocusChartConfig {
        self.config
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    #[must_use]
    pub fn nav_plot(&self) -> Viewport {
        self.nav_plot
    }

    #[must_use]
    pub fn detail_plot(&self) -> Viewport {
        self.detail_plot
    }

    /// Full dataset time extent (the navigation view domain).
    #[must_use]
    pub fn time_full_range(&self) -> (f64, f64) {
        self.nav_time.full_range()
    }

    /// Currently selected time sub-range (the detail view domain).
    #[must_use]
    pub fn detail_visible_range(&self) -> (f64, f64) {
        self.detail_time.visible_range()
    }

    /// Shared value axis domain.
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    #[must_use]
    pub fn brush_selection(&self) -> Option<PixelInterval> {
        self.brush.selection()
    }

    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        self.zoom
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Maps a detail-plot pixel to the time it shows.
    pub fn map_detail_pixel_to_time(&self, pixel: f64) -> ChartResult<f64> {
        self.detail_time.pixel_to_time(pixel, self.detail_plot)
    }

    pub fn map_time_to_detail_pixel(&self, time: f64) -> ChartResult<f64> {
        self.detail_time.time_to_pixel(time, self.detail_plot)
    }

    /// Maps a navigation-plot pixel to the time it shows.
    pub fn map_nav_pixel_to_time(&self, pixel: f64) -> ChartResult<f64> {
        self.nav_time.pixel_to_time(pixel, self.nav_plot)
    }

    pub fn map_time_to_nav_pixel(&self, time: f64) -> ChartResult<f64> {
        self.nav_time.time_to_pixel(time, self.nav_plot)
    }

    /// Restores the initial state: full-range brush, identity zoom.
    pub fn reset_selection(&mut self) -> ChartResult<()> {
        self.brush_moved(UpdateSource::Gesture, None)
    }
}
