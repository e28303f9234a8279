//! Simulation observer trait for progress reporting and data collection.

use at_core::{Frame, TilePos, WorldEntity};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called on the first frame of each day, right after the epoch reset.
    fn on_day_start(&mut self, _frame: Frame, _day: u64) {}

    /// Called after every policy tick that produced a snapshot.
    ///
    /// `triggered` is the number of entities the policy emitted.
    fn on_policy_tick(&mut self, _frame: Frame, _triggered: usize) {}

    /// Called once per triggered entity, after the action was invoked.
    fn on_trigger(&mut self, _frame: Frame, _day: u64, _entity: &WorldEntity, _actor: TilePos) {}

    /// Called once after the final frame of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
