//! `at-policy` — the proximity trigger policy.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`predicate`] | `NamePredicate` trait, `ContainsPredicate` (`"statue"`)    |
//! | [`config`]    | `TriggerConfig` — the radius read once per tick            |
//! | [`policy`]    | `ProximityTriggerPolicy` — `tick` and `reset_epoch`        |
//! | [`shared`]    | `SharedTriggerPolicy` — whole-tick mutex for threaded hosts|
//!
//! # Per-tick decision
//!
//! ```text
//! for entity in snapshot (input order):
//!   ① name blank?                 → skip
//!   ② name cached as non-match?   → skip
//!   ③ predicate(name) false?      → cache name, skip
//!   ④ distance > radius?          → skip (not cached; actor may come closer)
//!   ⑤ first touch this epoch?     → emit
//! ```
//!
//! The policy has no error type: every input produces a well-defined outcome.

pub mod config;
pub mod policy;
pub mod predicate;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::TriggerConfig;
pub use policy::ProximityTriggerPolicy;
pub use predicate::{ContainsPredicate, NamePredicate};
pub use shared::SharedTriggerPolicy;
