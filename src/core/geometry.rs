use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

/// A point expressed relative to the plot-box origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rectangular drawing area inside chart margins, in chart coordinates.
///
/// `left`/`top` are the plot-box origin within the chart container; series
/// data is rendered inside `width` x `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> ZoomResult<Self> {
        let finite =
            left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 {
            return Err(ZoomError::InvalidPlotBox {
                left,
                top,
                width,
                height,
            });
        }

        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Translates chart-container coordinates into plot-relative coordinates.
    #[must_use]
    pub fn to_plot_relative(self, chart_x: f64, chart_y: f64) -> PlotPoint {
        PlotPoint::new(chart_x - self.left, chart_y - self.top)
    }

    /// Whether a plot-relative point falls inside the plot box.
    #[must_use]
    pub fn contains(self, point: PlotPoint) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}
