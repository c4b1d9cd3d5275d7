use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    CATEGORICAL_PALETTE, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    palette_color,
};

use super::FocusChart;

const SWATCH_SIZE_PX: f64 = 20.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
const LABEL_ADVANCE_PX: f64 = 7.0;
const ENTRY_GAP_PX: f64 = 12.0;

/// One series name with its fixed palette assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series: String,
    pub palette_index: usize,
}

/// Static legend model, built once at construction.
///
/// The explicit series-to-palette mapping is shared by the scene builders, so
/// chart paths and legend swatches can never disagree on colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    #[must_use]
    pub fn from_series(series_names: &[String]) -> Self {
        Self {
            entries: series_names
                .iter()
                .enumerate()
                .map(|(index, name)| LegendEntry {
                    series: name.clone(),
                    palette_index: index % CATEGORICAL_PALETTE.len(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[must_use]
    pub fn color_for(&self, series: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|entry| entry.series == series)
            .map(|entry| palette_color(entry.palette_index))
    }
}

impl<R: Renderer> FocusChart<R> {
    /// Builds the legend surface: one swatch line and label per series, in
    /// series order.
    pub fn legend_frame(&self) -> ChartResult<RenderFrame> {
        let label_color = Color::rgb(0.1, 0.1, 0.1);
        let mut width = 0.0_f64;
        let mut frame = RenderFrame::new(Viewport::new(1, 1));

        for entry in self.legend.entries() {
            let color = palette_color(entry.palette_index);
            frame = frame
                .with_line(LinePrimitive::new(
                    width + 2.0,
                    SWATCH_SIZE_PX / 2.0,
                    width + SWATCH_SIZE_PX - 2.0,
                    SWATCH_SIZE_PX / 2.0,
                    2.0,
                    color,
                ))
                .with_text(TextPrimitive::new(
                    entry.series.clone(),
                    width + SWATCH_SIZE_PX + 4.0,
                    SWATCH_SIZE_PX * 0.75,
                    LABEL_FONT_SIZE_PX,
                    label_color,
                    TextHAlign::Left,
                ));
            width += SWATCH_SIZE_PX
                + 4.0
                + entry.series.chars().count() as f64 * LABEL_ADVANCE_PX
                + ENTRY_GAP_PX;
        }

        frame.viewport = Viewport::new(width.ceil().max(1.0) as u32, SWATCH_SIZE_PX as u32);
        Ok(frame)
    }
}
