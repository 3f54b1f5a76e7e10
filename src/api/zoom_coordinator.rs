use crate::chart::{ChartSurface, TransformRequest};
use crate::core::{AxisSet, PlotPoint};
use crate::interaction::ZoomSession;

pub(super) struct ZoomCoordinator;

impl ZoomCoordinator {
    /// Applies one wheel step as an atomic pan+zoom around the cursor.
    ///
    /// The pending settle is cancelled before anything else so a stale settle
    /// can never fire mid-gesture, even when this step ends up a no-op. The
    /// translation `mouse - how_much * mouse` keeps the data point under the
    /// cursor fixed while the surrounding scale changes by `how_much`.
    ///
    /// Returns whether the chart reported an effective change; only then is
    /// the settle timer re-armed.
    pub(super) fn zoom_by<C: ChartSurface + ?Sized>(
        chart: &mut C,
        session: &mut ZoomSession,
        how_much: f64,
        axes: AxisSet,
        mouse: PlotPoint,
        now_ms: u64,
    ) -> bool {
        session.cancel_settle();

        if axes.is_empty() {
            return false;
        }

        let request = TransformRequest {
            axes,
            move_x: mouse.x - how_much * mouse.x,
            move_y: mouse.y - how_much * mouse.y,
            zoom_x: how_much,
            zoom_y: how_much,
        };

        let has_zoomed = chart.apply_transform(&request);
        if has_zoomed {
            // After the last wheel event of the burst, axes with
            // start-on-tick or end-on-tick constraints get re-adjusted by the
            // settle pass.
            session.arm_settle(now_ms);
        }

        has_zoomed
    }
}
