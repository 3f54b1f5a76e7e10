use tracing::trace;

use crate::chart::ChartSurface;
use crate::core::{RawWheelEvent, zoom_factor};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::{WheelZoomConfig, ZoomSession};

use super::intent::resolve_zoom_axes;
use super::zoom_coordinator::ZoomCoordinator;

/// Result of routing one wheel event through the pipeline.
///
/// `prevent_default` is set only when a zoom actually took effect; otherwise
/// the event keeps its default behavior (typically page scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelOutcome {
    pub zoomed: bool,
    pub prevent_default: bool,
}

impl WheelOutcome {
    fn zoomed(has_zoomed: bool) -> Self {
        Self {
            zoomed: has_zoomed,
            prevent_default: has_zoomed,
        }
    }
}

/// Per-chart-instance wheel-zoom pipeline.
///
/// Holds the config resolved at attach time and the instance's zoom session.
/// The host forwards raw wheel events to [`handle_wheel`] and pumps
/// [`advance`] from its frame/timer loop so the deferred settle pass can run.
///
/// [`handle_wheel`]: WheelZoomController::handle_wheel
/// [`advance`]: WheelZoomController::advance
#[derive(Debug, Clone)]
pub struct WheelZoomController {
    config: WheelZoomConfig,
    session: ZoomSession,
}

impl WheelZoomController {
    #[must_use]
    pub fn new(config: WheelZoomConfig) -> Self {
        Self {
            config,
            session: ZoomSession::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> WheelZoomConfig {
        self.config
    }

    #[must_use]
    pub fn is_settle_armed(&self) -> bool {
        self.session.is_settle_armed()
    }

    #[must_use]
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.session.settle_deadline_ms()
    }

    /// Routes one raw wheel event through the full pipeline.
    ///
    /// `now_ms` is the host's monotonic clock reading for this event; the
    /// settle deadline is derived from it.
    pub fn handle_wheel<C: ChartSurface + ?Sized>(
        &mut self,
        chart: &mut C,
        raw: &RawWheelEvent,
        now_ms: u64,
    ) -> ZoomResult<WheelOutcome> {
        if !raw.is_finite() {
            return Err(ZoomError::InvalidInput(
                "wheel event coordinates and deltas must be finite".to_owned(),
            ));
        }

        if !self.config.enabled {
            return Ok(WheelOutcome::default());
        }

        let event = chart.normalize(raw);
        let mouse = chart.plot_box().to_plot_relative(event.chart_x, event.chart_y);

        if !chart.is_inside_plot(mouse.x, mouse.y) || !chart.wheel_zoom_allowed(&event) {
            return Ok(WheelOutcome::default());
        }

        let delta_units = event.delta_units();
        let how_much = zoom_factor(self.config.sensitivity, delta_units);
        let dimension = self.config.dimension.or(chart.zoom_dimension());
        let axes = resolve_zoom_axes(chart, dimension, chart.axes_at(&event));

        let has_zoomed =
            ZoomCoordinator::zoom_by(chart, &mut self.session, how_much, axes, mouse, now_ms);

        trace!(
            delta_units,
            how_much,
            ?dimension,
            has_zoomed,
            "wheel event processed"
        );

        Ok(WheelOutcome::zoomed(has_zoomed))
    }

    /// Fires the settle pass once the quiet period after the last effective
    /// zoom has elapsed.
    ///
    /// Returns `true` when the chart was settled on this call.
    pub fn advance<C: ChartSurface + ?Sized>(&mut self, chart: &mut C, now_ms: u64) -> bool {
        if self.session.poll_settle(now_ms) {
            chart.settle();
            return true;
        }
        false
    }

    /// Cancels any pending settle. Hosts call this from the same lifecycle
    /// hook that detaches the wheel listener, so no timer survives chart
    /// teardown.
    pub fn release(&mut self) {
        self.session.cancel_settle();
    }
}
