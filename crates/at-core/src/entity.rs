//! World entities as seen by the trigger policy.

use crate::TilePos;

/// One interactive object placed in the world.
///
/// The `position` is the object's identity; `name` is the host's display
/// name and may be empty for unnamed objects.  Entities are rebuilt from the
/// world on every snapshot and are never mutated by the policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldEntity {
    pub position: TilePos,
    pub name:     String,
}

impl WorldEntity {
    pub fn new(position: impl Into<TilePos>, name: impl Into<String>) -> Self {
        Self { position: position.into(), name: name.into() }
    }
}
