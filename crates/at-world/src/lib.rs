//! `at-world` — the world side of the trigger harness.
//!
//! The trigger policy never sees a world directly; each tick the scheduler
//! asks a [`WorldProvider`] for a [`WorldSnapshot`] (actor position plus the
//! visible entities) and hands that to the policy.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`provider`] | `WorldSnapshot`, `WorldProvider` trait                    |
//! | [`location`] | `Location` — tile-keyed objects with stable order         |
//! | [`actor`]    | `ActorPath` (`Fixed`, `Scripted`, `RandomWalk`)           |
//! | [`loader`]   | CSV layout loader (`name,x,y`)                            |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                            |

pub mod actor;
pub mod error;
pub mod loader;
pub mod location;
pub mod provider;

#[cfg(test)]
mod tests;

pub use actor::ActorPath;
pub use error::{WorldError, WorldResult};
pub use loader::{load_layout_csv, load_layout_reader};
pub use location::Location;
pub use provider::{WorldProvider, WorldSnapshot};
