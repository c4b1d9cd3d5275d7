mod axis_ticks;
mod engine;
mod gestures;
mod layout;
mod legend;
mod scene;
mod snapshot;
mod sync;

pub use engine::{FocusChart, FocusChartConfig};
pub use legend::{Legend, LegendEntry};
pub use snapshot::{ChartSnapshot, ChartSnapshotJsonContractV1, SNAPSHOT_JSON_SCHEMA_V1};
