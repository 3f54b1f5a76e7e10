//! Contract between the zoom core and the host chart.
//!
//! The chart remains a black box: it owns axes, plot layout, pointer
//! normalization and the actual range arithmetic. The zoom core only issues a
//! single atomic [`TransformRequest`] per wheel event and asks the chart
//! whether anything changed.

mod null_chart;

pub use null_chart::NullChart;

use crate::core::{AxisId, AxisSet, PlotBox, RawWheelEvent, WheelEvent};
use crate::interaction::ZoomDimension;

/// One atomic pan+zoom instruction consumed by the chart.
///
/// `move_x`/`move_y` are plot-relative pixel translations and
/// `zoom_x`/`zoom_y` multiplicative scale factors. The convention is
/// `old_px = (new_px - move) / zoom` per affected axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub axes: AxisSet,
    pub move_x: f64,
    pub move_y: f64,
    pub zoom_x: f64,
    pub zoom_y: f64,
}

/// Per-axis hit-test result for a pointer position.
///
/// An axis is associated when its value range contains the pointer's
/// plot-relative position; `None` means the event falls back to the chart's
/// full axis collection for that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisHit {
    pub x_axis: Option<AxisId>,
    pub y_axis: Option<AxisId>,
}

/// Host-chart operations the wheel-zoom pipeline consumes.
pub trait ChartSurface {
    /// Plot-box geometry in chart-container coordinates.
    fn plot_box(&self) -> PlotBox;

    /// All x-axes owned by the chart, in chart order.
    fn x_axes(&self) -> AxisSet;

    /// All y-axes owned by the chart, in chart order.
    fn y_axes(&self) -> AxisSet;

    /// Union of every chart axis, in chart order.
    fn all_axes(&self) -> AxisSet;

    /// Chart-level zoom type, used when the wheel config leaves the
    /// dimension unset.
    fn zoom_dimension(&self) -> Option<ZoomDimension>;

    /// Translates a raw platform event into chart-container coordinates.
    fn normalize(&self, raw: &RawWheelEvent) -> WheelEvent;

    /// Associated-axis hit test at the event's pointer position.
    fn axes_at(&self, event: &WheelEvent) -> AxisHit;

    /// Whether wheel zoom is allowed at the event target (the hook charts use
    /// to exempt toolbars and other overlays from zooming).
    fn wheel_zoom_allowed(&self, event: &WheelEvent) -> bool;

    /// Whether a plot-relative point lies inside the plot box.
    fn is_inside_plot(&self, plot_x: f64, plot_y: f64) -> bool;

    /// Applies one atomic transform.
    ///
    /// Returns `true` only when the transform changed visible ranges; a
    /// request clipped entirely by configured extremes reports `false`.
    fn apply_transform(&mut self, request: &TransformRequest) -> bool;

    /// Deferred re-layout pass re-applying tick-alignment constraints after
    /// interactive zooming stops.
    fn settle(&mut self);
}
