use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use super::behavior::WheelZoomSetting;
use super::wheel_handler::WheelZoomController;
use crate::chart::ChartSurface;

/// Proof that a chart class was composed; releasing it detaches the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionToken {
    class: TypeId,
    serial: u64,
}

#[derive(Debug, Clone, Copy)]
struct ClassComposition {
    serial: u64,
    setting: WheelZoomSetting,
}

/// Registry of chart classes already composed with wheel-zoom handling.
///
/// Owned by the host runtime's initialization context rather than living as
/// process-global state, so its lifecycle follows the runtime's. Composing
/// the same chart class twice is a no-op: a chart instance must never see two
/// handlers fire for one physical wheel event.
#[derive(Debug, Default)]
pub struct CompositionRegistry {
    composed: HashMap<TypeId, ClassComposition>,
    next_serial: u64,
}

impl CompositionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers wheel-zoom handling for chart class `C`.
    ///
    /// Returns a token on first composition and `None` when the class is
    /// already composed (the call is safe to repeat once per instance
    /// created from the class).
    pub fn compose<C: ChartSurface + 'static>(
        &mut self,
        setting: WheelZoomSetting,
    ) -> Option<CompositionToken> {
        let class = TypeId::of::<C>();
        if self.composed.contains_key(&class) {
            return None;
        }

        self.next_serial += 1;
        let serial = self.next_serial;
        self.composed.insert(class, ClassComposition { serial, setting });
        debug!(?class, "wheel zoom composed onto chart class");

        Some(CompositionToken { class, serial })
    }

    #[must_use]
    pub fn is_composed<C: ChartSurface + 'static>(&self) -> bool {
        self.composed.contains_key(&TypeId::of::<C>())
    }

    /// Container-attach hook for one chart instance of class `C`.
    ///
    /// Resolves the composed setting into an immutable config and hands the
    /// instance its own controller (and with it, its own settle timer).
    /// Returns `None` when the class is not composed or wheel zoom is
    /// disabled, in which case no listener should be attached at all.
    #[must_use]
    pub fn attach<C: ChartSurface + 'static>(&self) -> Option<WheelZoomController> {
        let composition = self.composed.get(&TypeId::of::<C>())?;
        let config = composition.setting.resolve();
        config.enabled.then(|| WheelZoomController::new(config))
    }

    /// Detaches a composed chart class.
    ///
    /// Idempotent: a stale token (already released, or superseded by a newer
    /// composition for the same class) returns `false`. After release the
    /// class may be composed again.
    pub fn release(&mut self, token: CompositionToken) -> bool {
        match self.composed.get(&token.class) {
            Some(composition) if composition.serial == token.serial => {
                self.composed.remove(&token.class);
                true
            }
            _ => false,
        }
    }
}
