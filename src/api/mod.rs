mod behavior;
mod composition;
mod intent;
mod wheel_handler;
mod zoom_coordinator;

pub use behavior::{WheelZoomOptions, WheelZoomSetting};
pub use composition::{CompositionRegistry, CompositionToken};
pub use wheel_handler::{WheelOutcome, WheelZoomController};
