//! Thread-safe wrapper for hosts that tick from more than one thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use at_core::{TilePos, WorldEntity};

use crate::{ContainsPredicate, NamePredicate, ProximityTriggerPolicy, TriggerConfig};

/// A cloneable handle to one [`ProximityTriggerPolicy`] behind a single mutex.
///
/// The lock is held for the whole tick, so the insert-then-emit step cannot
/// interleave with another tick and an entity is still emitted at most once
/// per epoch.
pub struct SharedTriggerPolicy<P: NamePredicate = ContainsPredicate> {
    inner: Arc<Mutex<ProximityTriggerPolicy<P>>>,
}

impl<P: NamePredicate> Clone for SharedTriggerPolicy<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: NamePredicate> SharedTriggerPolicy<P> {
    pub fn new(policy: ProximityTriggerPolicy<P>) -> Self {
        Self { inner: Arc::new(Mutex::new(policy)) }
    }

    pub fn tick<'e>(
        &self,
        entities: &'e [WorldEntity],
        actor:    TilePos,
        config:   &TriggerConfig,
    ) -> Vec<&'e WorldEntity> {
        self.lock().tick(entities, actor, config)
    }

    pub fn reset_epoch(&self) {
        self.lock().reset_epoch();
    }

    /// Lock the policy for inspection.
    ///
    /// A panic in another thread mid-tick leaves the sets in a consistent
    /// state (every mutation is a single insert), so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, ProximityTriggerPolicy<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
