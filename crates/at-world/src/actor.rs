//! How the actor moves between snapshots.

use at_core::{SimRng, TilePos};

/// The actor's movement model.  Advanced once per snapshot.
pub enum ActorPath {
    /// Stands still.
    Fixed(TilePos),

    /// Visits `waypoints` in order, one per snapshot, looping at the end.
    Scripted {
        waypoints: Vec<TilePos>,
        next:      usize,
    },

    /// Steps at most one tile in each axis per snapshot, staying inside the
    /// `min..=max` box.
    RandomWalk {
        position: TilePos,
        min:      TilePos,
        max:      TilePos,
        rng:      SimRng,
    },
}

impl ActorPath {
    pub fn scripted(waypoints: Vec<TilePos>) -> Self {
        ActorPath::Scripted { waypoints, next: 0 }
    }

    /// A seeded random walk from `start`.  The two corners may be given in
    /// any order.
    pub fn random_walk(start: TilePos, a: TilePos, b: TilePos, seed: u64) -> Self {
        let min = TilePos::new(a.x.min(b.x), a.y.min(b.y));
        let max = TilePos::new(a.x.max(b.x), a.y.max(b.y));
        ActorPath::RandomWalk { position: start, min, max, rng: SimRng::new(seed) }
    }

    /// Current position without moving.  `None` for an empty script.
    pub fn position(&self) -> Option<TilePos> {
        match self {
            ActorPath::Fixed(p) => Some(*p),
            ActorPath::Scripted { waypoints, next } => {
                if waypoints.is_empty() {
                    None
                } else {
                    Some(waypoints[*next % waypoints.len()])
                }
            }
            ActorPath::RandomWalk { position, .. } => Some(*position),
        }
    }

    /// Return the position for this snapshot, then move.
    pub fn step(&mut self) -> Option<TilePos> {
        let current = self.position()?;
        match self {
            ActorPath::Fixed(_) => {}
            ActorPath::Scripted { waypoints, next } => {
                *next = (*next + 1) % waypoints.len();
            }
            ActorPath::RandomWalk { position, min, max, rng } => {
                let dx = rng.gen_range(-1i32..=1) as f32;
                let dy = rng.gen_range(-1i32..=1) as f32;
                let moved = position.offset(dx, dy);
                *position = TilePos::new(
                    moved.x.clamp(min.x, max.x),
                    moved.y.clamp(min.y, max.y),
                );
            }
        }
        Some(current)
    }
}
