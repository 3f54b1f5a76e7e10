use serde::{Deserialize, Serialize};

/// Quiet period after the last qualifying wheel event before the settle pass
/// runs, in milliseconds.
pub const SETTLE_QUIET_PERIOD_MS: u64 = 400;

/// Axis dimensions a wheel gesture may zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDimension {
    X,
    Y,
    Xy,
}

/// Resolved wheel-zoom configuration for one chart instance.
///
/// Resolved once at container-attach time and immutable afterwards; changing
/// chart options later requires re-running composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelZoomConfig {
    pub enabled: bool,
    /// Zoom factor per wheel notch. Values below `1.0` invert direction;
    /// that is left to the caller and not rejected here.
    pub sensitivity: f64,
    /// Wheel-specific zoom dimension. `None` defers to the chart-level zoom
    /// type, and when both are unset wheel events leave the chart untouched.
    pub dimension: Option<ZoomDimension>,
}

impl Default for WheelZoomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity: 1.1,
            dimension: None,
        }
    }
}

/// Settle-timer phase of a zoom session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleState {
    Idle,
    Armed { deadline_ms: u64 },
}

/// Per-chart-instance wheel-zoom session state.
///
/// Owns the debounced settle timer: axes with tick-alignment constraints must
/// not re-snap on every wheel notch, so a settle pass runs only once input
/// quiesces. Time is injected by the caller in milliseconds, which keeps the
/// state machine deterministic under test.
///
/// Each chart instance owns its own session. Sharing one timer across charts
/// would let one chart's gesture cancel another's pending settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomSession {
    settle: SettleState,
}

impl Default for ZoomSession {
    fn default() -> Self {
        Self {
            settle: SettleState::Idle,
        }
    }
}

impl ZoomSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn settle_state(self) -> SettleState {
        self.settle
    }

    #[must_use]
    pub fn is_settle_armed(self) -> bool {
        matches!(self.settle, SettleState::Armed { .. })
    }

    #[must_use]
    pub fn settle_deadline_ms(self) -> Option<u64> {
        match self.settle {
            SettleState::Armed { deadline_ms } => Some(deadline_ms),
            SettleState::Idle => None,
        }
    }

    /// Cancels any pending settle. Idempotent: cancelling an idle session is
    /// a no-op.
    pub fn cancel_settle(&mut self) {
        self.settle = SettleState::Idle;
    }

    /// Arms (or re-arms) the settle timer for one quiet period from `now_ms`.
    pub fn arm_settle(&mut self, now_ms: u64) {
        self.settle = SettleState::Armed {
            deadline_ms: now_ms.saturating_add(SETTLE_QUIET_PERIOD_MS),
        };
    }

    /// Fires the settle timer when its deadline has passed.
    ///
    /// Returns `true` exactly once per armed period; the session returns to
    /// idle on firing.
    pub fn poll_settle(&mut self, now_ms: u64) -> bool {
        match self.settle {
            SettleState::Armed { deadline_ms } if now_ms >= deadline_ms => {
                self.settle = SettleState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SETTLE_QUIET_PERIOD_MS, SettleState, ZoomSession};

    #[test]
    fn arm_sets_deadline_one_quiet_period_out() {
        let mut session = ZoomSession::new();
        session.arm_settle(1_000);
        assert_eq!(
            session.settle_state(),
            SettleState::Armed {
                deadline_ms: 1_000 + SETTLE_QUIET_PERIOD_MS
            }
        );
    }

    #[test]
    fn poll_before_deadline_does_not_fire() {
        let mut session = ZoomSession::new();
        session.arm_settle(0);
        assert!(!session.poll_settle(SETTLE_QUIET_PERIOD_MS - 1));
        assert!(session.is_settle_armed());
    }

    #[test]
    fn poll_at_deadline_fires_once_and_returns_to_idle() {
        let mut session = ZoomSession::new();
        session.arm_settle(0);
        assert!(session.poll_settle(SETTLE_QUIET_PERIOD_MS));
        assert!(!session.is_settle_armed());
        assert!(!session.poll_settle(SETTLE_QUIET_PERIOD_MS + 1));
    }

    #[test]
    fn rearm_replaces_previous_deadline() {
        let mut session = ZoomSession::new();
        session.arm_settle(0);
        session.arm_settle(300);
        assert!(!session.poll_settle(SETTLE_QUIET_PERIOD_MS));
        assert!(session.poll_settle(300 + SETTLE_QUIET_PERIOD_MS));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut session = ZoomSession::new();
        session.cancel_settle();
        session.arm_settle(0);
        session.cancel_settle();
        session.cancel_settle();
        assert!(!session.poll_settle(u64::MAX));
    }
}
