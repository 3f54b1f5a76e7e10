use smallvec::smallvec;

use crate::chart::{AxisHit, ChartSurface};
use crate::core::AxisSet;
use crate::interaction::ZoomDimension;

/// Picks the axis subset a wheel event should transform.
///
/// For `x`/`y` the associated axis under the pointer wins over the chart's
/// full collection for that dimension. `xy` always selects every chart axis,
/// not just the associated pair; that asymmetry is deliberate and matches
/// long-standing charting behavior. No dimension resolves to an empty set,
/// meaning the event leaves the chart untouched and keeps its default
/// scrolling behavior.
pub(super) fn resolve_zoom_axes<C: ChartSurface + ?Sized>(
    chart: &C,
    dimension: Option<ZoomDimension>,
    hit: AxisHit,
) -> AxisSet {
    match dimension {
        Some(ZoomDimension::X) => match hit.x_axis {
            Some(axis) => smallvec![axis],
            None => chart.x_axes(),
        },
        Some(ZoomDimension::Y) => match hit.y_axis {
            Some(axis) => smallvec![axis],
            None => chart.y_axes(),
        },
        Some(ZoomDimension::Xy) => chart.all_axes(),
        None => AxisSet::new(),
    }
}
