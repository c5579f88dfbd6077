use crate::config::EffectConfig;
use crate::direction::SwipeDirection;

/// Host-assigned identity of a cell, typically its row index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellKey(pub usize);

/// Owner of a [`GooeyCell`](crate::GooeyCell), usually the list it sits in.
///
/// The cell only holds a weak reference; the owner is expected to outlive it.
/// Both methods are called with no cell state borrowed, so they may call back
/// into the cell (for example [`reset`](crate::GooeyCell::reset) on removal).
pub trait GooeyEffectDelegate {
    /// Configuration for a gesture starting in `direction`, or `None` to
    /// suppress the effect for this gesture.
    fn provide_config(&self, cell: CellKey, direction: SwipeDirection) -> Option<EffectConfig>;

    /// The effect reached 1.0. Called exactly once per committed gesture.
    fn on_committed(&self, cell: CellKey, direction: SwipeDirection);
}
