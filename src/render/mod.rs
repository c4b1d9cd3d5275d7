mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ClipRect, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CATEGORICAL_PALETTE, Color, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive, palette_color,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
