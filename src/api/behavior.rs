use serde::{Deserialize, Serialize};

use crate::interaction::{WheelZoomConfig, ZoomDimension};

/// Optional overrides layered on top of the built-in wheel-zoom defaults.
///
/// Unset fields inherit the defaults (`enabled = true`, `sensitivity = 1.1`,
/// dimension deferred to the chart-level zoom type).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelZoomOptions {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub sensitivity: Option<f64>,
    #[serde(default, rename = "type")]
    pub dimension: Option<ZoomDimension>,
}

impl WheelZoomOptions {
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: ZoomDimension) -> Self {
        self.dimension = Some(dimension);
        self
    }
}

/// Host-facing wheel-zoom setting: either a bare enabled flag or a full
/// options object.
///
/// Mirrors config formats where the same key accepts `true`/`false` or a
/// nested object, so a plain boolean in persisted JSON keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WheelZoomSetting {
    Enabled(bool),
    Options(WheelZoomOptions),
}

impl Default for WheelZoomSetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl From<bool> for WheelZoomSetting {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<WheelZoomOptions> for WheelZoomSetting {
    fn from(options: WheelZoomOptions) -> Self {
        Self::Options(options)
    }
}

impl WheelZoomSetting {
    /// Resolves this setting into an immutable per-instance config.
    ///
    /// Normalization never fails: a bare boolean only toggles `enabled`, and
    /// a zero or non-finite sensitivity falls back to the default rather
    /// than producing a degenerate zoom factor.
    #[must_use]
    pub fn resolve(self) -> WheelZoomConfig {
        let defaults = WheelZoomConfig::default();
        match self {
            Self::Enabled(enabled) => WheelZoomConfig {
                enabled,
                ..defaults
            },
            Self::Options(options) => {
                let sensitivity = options
                    .sensitivity
                    .filter(|s| s.is_finite() && *s != 0.0)
                    .unwrap_or(defaults.sensitivity);
                WheelZoomConfig {
                    enabled: options.enabled.unwrap_or(defaults.enabled),
                    sensitivity,
                    dimension: options.dimension,
                }
            }
        }
    }
}
