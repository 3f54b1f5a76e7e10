use serde::{Deserialize, Serialize};

/// One wheel notch in `delta_y` units on browsers reporting pixel-style deltas.
pub const WHEEL_DELTA_PER_NOTCH: f64 = 120.0;

/// A wheel event as delivered by the host platform, before chart-space
/// normalization.
///
/// `detail` carries the legacy notch count reported by some engines; when it
/// is present and non-zero it wins over `delta_y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawWheelEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub delta_y: f64,
    #[serde(default)]
    pub detail: Option<f64>,
}

impl RawWheelEvent {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64, delta_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_y,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: f64) -> Self {
        self.detail = Some(detail);
        self
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.client_x.is_finite()
            && self.client_y.is_finite()
            && self.delta_y.is_finite()
            && self.detail.is_none_or(f64::is_finite)
    }
}

/// A wheel event translated into chart-container coordinates by the host
/// chart's pointer subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub chart_x: f64,
    pub chart_y: f64,
    pub delta_y: f64,
    #[serde(default)]
    pub detail: Option<f64>,
}

impl WheelEvent {
    /// Signed zoom step count for this event.
    ///
    /// A non-zero legacy `detail` is already expressed in notches; otherwise
    /// `delta_y` is divided down by the 120-per-notch convention.
    #[must_use]
    pub fn delta_units(self) -> f64 {
        match self.detail {
            Some(detail) if detail != 0.0 => detail,
            _ => self.delta_y / WHEEL_DELTA_PER_NOTCH,
        }
    }
}

/// Multiplicative zoom factor for a signed number of wheel steps.
///
/// Repeated same-direction steps compound: `zoom_factor(s, a + b)` equals
/// `zoom_factor(s, a) * zoom_factor(s, b)`.
#[must_use]
pub fn zoom_factor(sensitivity: f64, delta_units: f64) -> f64 {
    sensitivity.powf(delta_units)
}

#[cfg(test)]
mod tests {
    use super::{WheelEvent, zoom_factor};

    fn event(delta_y: f64, detail: Option<f64>) -> WheelEvent {
        WheelEvent {
            chart_x: 0.0,
            chart_y: 0.0,
            delta_y,
            detail,
        }
    }

    #[test]
    fn detail_wins_over_delta_y_when_present() {
        assert_eq!(event(720.0, Some(3.0)).delta_units(), 3.0);
        assert_eq!(event(0.0, Some(-2.0)).delta_units(), -2.0);
    }

    #[test]
    fn zero_detail_falls_through_to_delta_y() {
        assert_eq!(event(240.0, Some(0.0)).delta_units(), 2.0);
    }

    #[test]
    fn delta_y_is_normalized_per_notch() {
        assert_eq!(event(240.0, None).delta_units(), 2.0);
        assert_eq!(event(-120.0, None).delta_units(), -1.0);
        assert_eq!(event(0.0, None).delta_units(), 0.0);
    }

    #[test]
    fn zoom_factor_is_signed_power() {
        assert!((zoom_factor(1.1, 1.0) - 1.1).abs() <= 1e-12);
        assert!((zoom_factor(1.1, -1.0) - 1.0 / 1.1).abs() <= 1e-12);
        assert!((zoom_factor(1.1, 0.0) - 1.0).abs() <= 1e-12);
    }
}
