use crate::core::windowing::points_in_window_with_neighbors;
use crate::core::{AreaGeometry, AreaVertex, TimeScale, Viewport, project_area_geometry};
use crate::error::ChartResult;
use crate::render::{
    ClipRect, Color, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, palette_color,
};

use super::FocusChart;
use super::axis_ticks::{
    TIME_AXIS_MAX_TICKS, TIME_AXIS_MIN_TICKS, evenly_spaced_ticks, format_time_label,
    tick_target_count,
};

const AXIS_COLOR: Color = Color::rgb(0.25, 0.25, 0.25);
const AXIS_STROKE_PX: f64 = 1.0;
const TICK_LENGTH_PX: f64 = 6.0;
const TICK_FONT_SIZE_PX: f64 = 11.0;
const PATH_STROKE_PX: f64 = 1.5;
const AREA_FILL_ALPHA: f64 = 0.15;
const BRUSH_FILL: Color = Color::rgba(0.45, 0.45, 0.45, 0.3);

impl<R: Renderer> FocusChart<R> {
    /// Navigation scene: full-extent series paths, bottom time axis and the
    /// brush overlay.
    pub fn nav_frame(&self) -> ChartResult<RenderFrame> {
        let left = f64::from(self.config.nav_margins.left);
        let top = f64::from(self.config.nav_margins.top);
        let mut frame = RenderFrame::new(self.config.nav_viewport);

        for entry in self.legend.entries() {
            let points = self.dataset.series_points(&entry.series)?;
            let geometry =
                project_area_geometry(&points, self.nav_time, self.value_scale, self.nav_plot)?;
            frame = push_series_geometry(
                frame,
                &geometry,
                palette_color(entry.palette_index),
                left,
                top,
            );
        }

        frame = self.push_time_axis(frame, self.nav_time, self.nav_plot, left, top)?;

        let selection = self.brush.resolve(f64::from(self.nav_plot.width));
        frame = frame.with_rect(RectPrimitive::new(
            left + selection.start,
            top,
            selection.width(),
            f64::from(self.nav_plot.height),
            BRUSH_FILL,
        ));
        Ok(frame)
    }

    /// Detail scene for brush/zoom updates: clipped series paths and the time
    /// axis only.
    pub fn detail_frame_partial(&self) -> ChartResult<RenderFrame> {
        self.detail_frame(false)
    }

    /// Detail scene for construction/resize: partial content plus the value
    /// axis.
    pub fn detail_frame_full(&self) -> ChartResult<RenderFrame> {
        self.detail_frame(true)
    }

    fn detail_frame(&self, include_value_axis: bool) -> ChartResult<RenderFrame> {
        let left = f64::from(self.config.detail_margins.left);
        let top = f64::from(self.config.detail_margins.top);
        let mut frame = RenderFrame::new(self.config.detail_viewport).with_clip(ClipRect::new(
            left,
            top,
            f64::from(self.detail_plot.width),
            f64::from(self.detail_plot.height),
        ));

        let (start, end) = self.detail_time.visible_range();
        for entry in self.legend.entries() {
            let points = self.dataset.series_points(&entry.series)?;
            let visible = points_in_window_with_neighbors(&points, start, end);
            let geometry = project_area_geometry(
                &visible,
                self.detail_time,
                self.value_scale,
                self.detail_plot,
            )?;
            frame = push_series_geometry(
                frame,
                &geometry,
                palette_color(entry.palette_index),
                left,
                top,
            );
        }

        frame = self.push_time_axis(frame, self.detail_time, self.detail_plot, left, top)?;
        if include_value_axis {
            frame = self.push_value_axis(frame, left, top)?;
        }
        Ok(frame)
    }

    fn push_time_axis(
        &self,
        mut frame: RenderFrame,
        time_scale: TimeScale,
        plot: Viewport,
        left: f64,
        top: f64,
    ) -> ChartResult<RenderFrame> {
        let axis_y = top + f64::from(plot.height);
        frame = frame.with_line(LinePrimitive::new(
            left,
            axis_y,
            left + f64::from(plot.width),
            axis_y,
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));

        let (start, end) = time_scale.visible_range();
        let count = tick_target_count(
            f64::from(plot.width),
            self.config.time_tick_target_spacing_px,
            TIME_AXIS_MIN_TICKS,
            TIME_AXIS_MAX_TICKS,
        );
        for tick in evenly_spaced_ticks((start, end), count) {
            let x = left + time_scale.time_to_pixel(tick, plot)?;
            frame = frame
                .with_line(LinePrimitive::new(
                    x,
                    axis_y,
                    x,
                    axis_y + TICK_LENGTH_PX,
                    AXIS_STROKE_PX,
                    AXIS_COLOR,
                ))
                .with_text(TextPrimitive::new(
                    format_time_label(end - start, tick),
                    x,
                    axis_y + TICK_LENGTH_PX + TICK_FONT_SIZE_PX,
                    TICK_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
        }
        Ok(frame)
    }

    fn push_value_axis(&self, mut frame: RenderFrame, left: f64, top: f64) -> ChartResult<RenderFrame> {
        frame = frame.with_line(LinePrimitive::new(
            left,
            top,
            left,
            top + f64::from(self.detail_plot.height),
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));

        for tick in self.value_scale.ticks(self.config.value_tick_count) {
            let y = top + self.value_scale.to_pixel(tick, self.detail_plot)?;
            frame = frame
                .with_line(LinePrimitive::new(
                    left - TICK_LENGTH_PX,
                    y,
                    left,
                    y,
                    AXIS_STROKE_PX,
                    AXIS_COLOR,
                ))
                .with_text(TextPrimitive::new(
                    format_value_label(tick),
                    left - TICK_LENGTH_PX - 2.0,
                    y + TICK_FONT_SIZE_PX / 3.0,
                    TICK_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
        }
        Ok(frame)
    }
}

fn format_value_label(value: f64) -> String {
    if value.abs() >= 100.0 || value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn push_series_geometry(
    mut frame: RenderFrame,
    geometry: &AreaGeometry,
    color: Color,
    dx: f64,
    dy: f64,
) -> RenderFrame {
    if geometry.fill_polygon.len() >= 3 {
        frame = frame.with_polygon(PolygonPrimitive::new(
            offset_vertices(&geometry.fill_polygon, dx, dy),
            color.with_alpha(AREA_FILL_ALPHA),
        ));
    }
    if geometry.line_points.len() >= 2 {
        frame = frame.with_polyline(PolylinePrimitive::new(
            offset_vertices(&geometry.line_points, dx, dy),
            PATH_STROKE_PX,
            color,
        ));
    }
    frame
}

fn offset_vertices(points: &[AreaVertex], dx: f64, dy: f64) -> Vec<AreaVertex> {
    points
        .iter()
        .map(|vertex| AreaVertex {
            x: vertex.x + dx,
            y: vertex.y + dy,
        })
        .collect()
}
