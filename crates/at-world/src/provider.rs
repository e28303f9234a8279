//! The snapshot contract between a world and the scheduler.

use at_core::{Frame, TilePos, WorldEntity};

/// Everything the policy needs for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub actor:    TilePos,
    /// Visible entities in a stable order.
    pub entities: Vec<WorldEntity>,
}

/// Supplies world snapshots on demand.
///
/// Called at most once per policy tick.  Returning `None` means the world is
/// not ready (still loading, in a cutscene, …); the scheduler skips the tick.
pub trait WorldProvider {
    fn snapshot(&mut self, frame: Frame) -> Option<WorldSnapshot>;
}

impl<W: WorldProvider + ?Sized> WorldProvider for Box<W> {
    fn snapshot(&mut self, frame: Frame) -> Option<WorldSnapshot> {
        (**self).snapshot(frame)
    }
}
