//! Fluent builder for constructing a [`Sim`].

use at_config::SharedSettings;
use at_core::SimConfig;
use at_policy::{ContainsPredicate, NamePredicate, ProximityTriggerPolicy};
use at_world::WorldProvider;

use crate::{ActionInvoker, Sim, SimError, SimResult, SimStats};

/// Fluent builder for [`Sim<W, A, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total frames, frames per day, seed
/// - `W: WorldProvider` — where snapshots come from
/// - `A: ActionInvoker` — what happens to triggered entities
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                  |
/// |------------------|------------------------------------------|
/// | `.settings(s)`   | `SharedSettings::default()`              |
/// | `.predicate(p)`  | `ContainsPredicate::statue()`            |
pub struct SimBuilder<W: WorldProvider, A: ActionInvoker, P: NamePredicate = ContainsPredicate> {
    config:    SimConfig,
    world:     W,
    invoker:   A,
    predicate: P,
    settings:  Option<SharedSettings>,
}

impl<W: WorldProvider, A: ActionInvoker> SimBuilder<W, A> {
    /// Create a builder with all required inputs and the statue predicate.
    pub fn new(config: SimConfig, world: W, invoker: A) -> Self {
        Self {
            config,
            world,
            invoker,
            predicate: ContainsPredicate::statue(),
            settings:  None,
        }
    }
}

impl<W: WorldProvider, A: ActionInvoker, P: NamePredicate> SimBuilder<W, A, P> {
    /// Share a live settings handle with the sim (e.g. one registered with a
    /// configuration menu).
    pub fn settings(mut self, settings: SharedSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replace the name predicate.
    pub fn predicate<Q: NamePredicate>(self, predicate: Q) -> SimBuilder<W, A, Q> {
        SimBuilder {
            config:   self.config,
            world:    self.world,
            invoker:  self.invoker,
            predicate,
            settings: self.settings,
        }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<W, A, P>> {
        if self.config.total_frames == 0 {
            return Err(SimError::Config("total_frames must be non-zero".into()));
        }
        let clock = self.config.make_clock()?;

        Ok(Sim {
            config:   self.config,
            clock,
            world:    self.world,
            invoker:  self.invoker,
            policy:   ProximityTriggerPolicy::new(self.predicate),
            settings: self.settings.unwrap_or_default(),
            stats:    SimStats::default(),
        })
    }
}
