//! The action performed on each triggered entity.

use at_core::{TilePos, WorldEntity};
use tracing::trace;

/// Performs the triggered action for one entity.
///
/// The scheduler calls this once per entity the policy emits, in emission
/// order, and never looks at the outcome.  What "touching" an entity means
/// is entirely up to the implementation.
///
/// Any `FnMut(&WorldEntity, TilePos)` is an `ActionInvoker`.
pub trait ActionInvoker {
    fn invoke(&mut self, entity: &WorldEntity, actor: TilePos);
}

impl<F> ActionInvoker for F
where
    F: FnMut(&WorldEntity, TilePos),
{
    fn invoke(&mut self, entity: &WorldEntity, actor: TilePos) {
        self(entity, actor)
    }
}

/// Logs each trigger at trace level and does nothing else.
#[derive(Debug, Default)]
pub struct LoggingInvoker;

impl ActionInvoker for LoggingInvoker {
    fn invoke(&mut self, entity: &WorldEntity, actor: TilePos) {
        trace!(name = %entity.name, position = %entity.position, %actor, "auto-touched object");
    }
}

/// Remembers every invocation.  Useful in tests and for post-run reports.
#[derive(Debug, Default)]
pub struct RecordingInvoker {
    pub calls: Vec<(WorldEntity, TilePos)>,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.calls.iter().map(|(e, _)| e.name.as_str()).collect()
    }
}

impl ActionInvoker for RecordingInvoker {
    fn invoke(&mut self, entity: &WorldEntity, actor: TilePos) {
        self.calls.push((entity.clone(), actor));
    }
}
