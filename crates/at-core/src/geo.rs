//! Tile coordinates.
//!
//! A `TilePos` doubles as the identity of a placed object: two objects at the
//! same tile are the same object as far as the trigger policy is concerned.
//! Equality and hashing therefore go through the raw bit pattern, with `-0.0`
//! folded into `0.0` so the two zeros key the same tile.

use std::hash::{Hash, Hasher};

/// A 2D tile coordinate.  Whole tiles are the common case, but fractional
/// positions are allowed (an actor standing between tiles).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePos {
    pub x: f32,
    pub y: f32,
}

impl TilePos {
    pub const ORIGIN: TilePos = TilePos { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position of the whole tile `(x, y)`.
    #[inline]
    pub fn tile(x: i32, y: i32) -> Self {
        Self { x: x as f32, y: y as f32 }
    }

    /// Euclidean distance in tiles.
    #[inline]
    pub fn distance(self, other: TilePos) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Shift by `(dx, dy)` tiles.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> TilePos {
        TilePos { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    fn key(self) -> (u32, u32) {
        // Adding 0.0 turns -0.0 into +0.0.
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl PartialEq for TilePos {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TilePos {}

impl Hash for TilePos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(i32, i32)> for TilePos {
    fn from((x, y): (i32, i32)) -> Self {
        TilePos::tile(x, y)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
