pub mod dataset;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod windowing;

pub use dataset::{Dataset, Record, TIME_FIELD};
pub use scale::LinearScale;
pub use series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use time_scale::TimeScale;
pub use types::{DataPoint, Margins, Viewport};
pub use value_scale::ValueScale;
