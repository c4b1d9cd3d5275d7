//! focuschart: headless focus+context time-series chart engine.
//!
//! Two linked views over one dataset: a full-range navigation strip with a
//! draggable brush, and a magnified detail view with pointer zoom/pan. The
//! engine owns all chart state and emits backend-agnostic render frames;
//! embedding hosts supply a [`render::Renderer`] and deliver gestures.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{FocusChart, FocusChartConfig};
pub use error::{ChartError, ChartResult};
