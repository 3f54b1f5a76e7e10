pub mod axis;
pub mod geometry;
pub mod wheel;

pub use axis::{AxisId, AxisSet};
pub use geometry::{PlotBox, PlotPoint};
pub use wheel::{RawWheelEvent, WheelEvent, zoom_factor};
