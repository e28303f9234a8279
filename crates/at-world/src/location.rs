//! An in-memory location: named objects keyed by tile.

use std::collections::HashMap;

use at_core::{Frame, TilePos, WorldEntity};
use tracing::debug;

use crate::{ActorPath, WorldProvider, WorldSnapshot};

/// A single map with placed objects and an actor.
///
/// Objects are keyed by tile: placing onto an occupied tile replaces the old
/// object in place, so snapshot order is insertion order of the *tile*.
pub struct Location {
    pub name: String,
    objects:  Vec<WorldEntity>,
    by_tile:  HashMap<TilePos, usize>,
    actor:    ActorPath,
    ready:    bool,
}

impl Location {
    pub fn new(name: impl Into<String>, actor: ActorPath) -> Self {
        Self { name: name.into(), objects: Vec::new(), by_tile: HashMap::new(), actor, ready: true }
    }

    /// Builder-style [`place`][Self::place].
    pub fn with_object(mut self, position: impl Into<TilePos>, name: impl Into<String>) -> Self {
        self.place(position, name);
        self
    }

    /// Place an object, replacing any object already on that tile.
    ///
    /// Returns the replaced object, if any.
    pub fn place(
        &mut self,
        position: impl Into<TilePos>,
        name:     impl Into<String>,
    ) -> Option<WorldEntity> {
        let entity = WorldEntity::new(position, name);
        match self.by_tile.get(&entity.position) {
            Some(&index) => Some(std::mem::replace(&mut self.objects[index], entity)),
            None => {
                self.by_tile.insert(entity.position, self.objects.len());
                self.objects.push(entity);
                None
            }
        }
    }

    /// Remove the object on `position`, keeping the order of the rest.
    pub fn remove(&mut self, position: impl Into<TilePos>) -> Option<WorldEntity> {
        let position = position.into();
        let index = self.by_tile.remove(&position)?;
        let removed = self.objects.remove(index);
        for later in &self.objects[index..] {
            if let Some(slot) = self.by_tile.get_mut(&later.position) {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn objects(&self) -> &[WorldEntity] {
        &self.objects
    }

    pub fn actor(&self) -> &ActorPath {
        &self.actor
    }

    pub fn set_actor(&mut self, actor: ActorPath) {
        self.actor = actor;
    }

    /// Mark the world as (not) ready.  Snapshots are `None` while not ready.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

impl WorldProvider for Location {
    fn snapshot(&mut self, frame: Frame) -> Option<WorldSnapshot> {
        if !self.ready {
            return None;
        }
        let Some(actor) = self.actor.step() else {
            debug!(location = %self.name, %frame, "actor has no position, skipping snapshot");
            return None;
        };
        Some(WorldSnapshot { actor, entities: self.objects.clone() })
    }
}
