use crate::core::{AxisId, AxisSet, PlotBox, RawWheelEvent, WheelEvent};
use crate::interaction::ZoomDimension;

use super::{AxisHit, ChartSurface, TransformRequest};

/// In-memory [`ChartSurface`] with no rendering stack behind it.
///
/// Records every transform request and settle pass instead of applying them,
/// so suites can assert on the exact instructions the pipeline emits. Axis
/// hits, opt-out regions and transform acceptance are all configurable.
#[derive(Debug, Clone)]
pub struct NullChart {
    plot_box: PlotBox,
    container_left: f64,
    container_top: f64,
    x_axes: AxisSet,
    y_axes: AxisSet,
    zoom_dimension: Option<ZoomDimension>,
    axis_hit: AxisHit,
    opt_out_regions: Vec<PlotBox>,
    accepts_transforms: bool,
    transform_log: Vec<TransformRequest>,
    settle_count: usize,
}

impl NullChart {
    #[must_use]
    pub fn new(plot_box: PlotBox, x_axis_count: u32, y_axis_count: u32) -> Self {
        let x_axes: AxisSet = (0..x_axis_count).map(AxisId::new).collect();
        let y_axes: AxisSet = (x_axis_count..x_axis_count + y_axis_count)
            .map(AxisId::new)
            .collect();

        Self {
            plot_box,
            container_left: 0.0,
            container_top: 0.0,
            x_axes,
            y_axes,
            zoom_dimension: None,
            axis_hit: AxisHit::default(),
            opt_out_regions: Vec::new(),
            accepts_transforms: true,
            transform_log: Vec::new(),
            settle_count: 0,
        }
    }

    /// Offsets the chart container within the viewport; `normalize` subtracts
    /// this origin from client coordinates.
    #[must_use]
    pub fn with_container_origin(mut self, left: f64, top: f64) -> Self {
        self.container_left = left;
        self.container_top = top;
        self
    }

    #[must_use]
    pub fn with_zoom_dimension(mut self, dimension: Option<ZoomDimension>) -> Self {
        self.zoom_dimension = dimension;
        self
    }

    /// Fixes the associated-axis hit returned for every event.
    #[must_use]
    pub fn with_axis_hit(mut self, hit: AxisHit) -> Self {
        self.axis_hit = hit;
        self
    }

    /// Marks a chart-coordinate region as exempt from wheel zoom.
    #[must_use]
    pub fn with_opt_out_region(mut self, region: PlotBox) -> Self {
        self.opt_out_regions.push(region);
        self
    }

    /// Makes every transform report as a no-op, simulating axes pinned at
    /// their configured extremes.
    pub fn set_accepts_transforms(&mut self, accepts: bool) {
        self.accepts_transforms = accepts;
    }

    #[must_use]
    pub fn transform_log(&self) -> &[TransformRequest] {
        &self.transform_log
    }

    #[must_use]
    pub fn settle_count(&self) -> usize {
        self.settle_count
    }
}

impl ChartSurface for NullChart {
    fn plot_box(&self) -> PlotBox {
        self.plot_box
    }

    fn x_axes(&self) -> AxisSet {
        self.x_axes.clone()
    }

    fn y_axes(&self) -> AxisSet {
        self.y_axes.clone()
    }

    fn all_axes(&self) -> AxisSet {
        let mut axes = self.x_axes.clone();
        axes.extend(self.y_axes.iter().copied());
        axes
    }

    fn zoom_dimension(&self) -> Option<ZoomDimension> {
        self.zoom_dimension
    }

    fn normalize(&self, raw: &RawWheelEvent) -> WheelEvent {
        WheelEvent {
            chart_x: raw.client_x - self.container_left,
            chart_y: raw.client_y - self.container_top,
            delta_y: raw.delta_y,
            detail: raw.detail,
        }
    }

    fn axes_at(&self, _event: &WheelEvent) -> AxisHit {
        self.axis_hit
    }

    fn wheel_zoom_allowed(&self, event: &WheelEvent) -> bool {
        !self.opt_out_regions.iter().any(|region| {
            region.contains(region.to_plot_relative(event.chart_x, event.chart_y))
        })
    }

    fn is_inside_plot(&self, plot_x: f64, plot_y: f64) -> bool {
        self.plot_box.contains(crate::core::PlotPoint::new(plot_x, plot_y))
    }

    fn apply_transform(&mut self, request: &TransformRequest) -> bool {
        self.transform_log.push(request.clone());
        self.accepts_transforms
    }

    fn settle(&mut self) {
        self.settle_count += 1;
    }
}
