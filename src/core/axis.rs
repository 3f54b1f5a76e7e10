use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Non-owning reference to an axis owned by the host chart.
///
/// The zoom core only selects subsets of axes; it never creates, destroys or
/// mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisId(u32);

impl AxisId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Ordered axis selection passed along with a transform request.
///
/// Most charts carry a handful of axes at most, so selections stay inline.
pub type AxisSet = SmallVec<[AxisId; 4]>;
