//! `at-core` — foundational types for the `autotouch` trigger harness.
//!
//! This crate is a dependency of every other `at-*` crate.  It has no `at-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`geo`]    | `TilePos`, Euclidean tile distance                 |
//! | [`entity`] | `WorldEntity` — one named object at a tile         |
//! | [`time`]   | `Frame`, `GameClock`, `SimConfig`                  |
//! | [`rng`]    | `SimRng` (seeded, deterministic)                   |
//! | [`error`]  | `CoreError`, `CoreResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod entity;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entity::WorldEntity;
pub use error::{CoreError, CoreResult};
pub use geo::TilePos;
pub use rng::SimRng;
pub use time::{Frame, GameClock, SimConfig};
