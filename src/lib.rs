//! wheelzoom-rs: deterministic mouse-wheel zoom core for charting engines.
//!
//! This crate isolates the wheel-zoom gesture pipeline from any rendering
//! stack: delta normalization, plot-space coordinate translation, zoom-intent
//! resolution across axis sets, atomic zoom-toward-cursor transform requests,
//! and a debounced tick-settle state machine driven by an injected clock.
//! Host charts plug in through the [`chart::ChartSurface`] trait.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{CompositionRegistry, CompositionToken, WheelOutcome, WheelZoomController};
pub use error::{ZoomError, ZoomResult};
