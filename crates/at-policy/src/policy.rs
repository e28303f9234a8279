//! The `ProximityTriggerPolicy` struct.

use at_core::{TilePos, WorldEntity};
use tracing::{debug, trace};

use crate::{ContainsPredicate, NamePredicate, TriggerConfig};

#[cfg(feature = "fx-hash")]
type Set<T> = rustc_hash::FxHashSet<T>;
#[cfg(not(feature = "fx-hash"))]
type Set<T> = std::collections::HashSet<T>;

/// Emits each in-range, name-matching entity at most once per epoch.
///
/// Holds two pieces of state:
///
/// - the **non-match cache**: normalized names the predicate rejected.  It
///   only grows; a cached name is never classified again.
/// - the **touched set**: positions already emitted this epoch.  Cleared by
///   [`reset_epoch`][Self::reset_epoch].
///
/// Matches are never cached because a match still has to pass the distance
/// check, which changes as the actor moves.
///
/// # Example
///
/// ```rust,ignore
/// let mut policy = ProximityTriggerPolicy::statue();
/// let hits = policy.tick(&snapshot.entities, snapshot.actor, &TriggerConfig::default());
/// for entity in hits {
///     invoker.invoke(entity, snapshot.actor);
/// }
/// // at every day start:
/// policy.reset_epoch();
/// ```
pub struct ProximityTriggerPolicy<P: NamePredicate = ContainsPredicate> {
    predicate:         P,
    known_non_matches: Set<String>,
    touched:           Set<TilePos>,
}

impl ProximityTriggerPolicy<ContainsPredicate> {
    /// A policy using the `"statue"` substring rule.
    pub fn statue() -> Self {
        Self::new(ContainsPredicate::statue())
    }
}

impl Default for ProximityTriggerPolicy<ContainsPredicate> {
    fn default() -> Self {
        Self::statue()
    }
}

impl<P: NamePredicate> ProximityTriggerPolicy<P> {
    /// Create a policy with empty state around `predicate`.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            known_non_matches: Set::default(),
            touched:           Set::default(),
        }
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Run one policy tick over `entities` and return those to trigger.
    ///
    /// The result preserves input order.  Mutates the non-match cache and the
    /// touched set; never fails.
    pub fn tick<'e>(
        &mut self,
        entities: &'e [WorldEntity],
        actor:    TilePos,
        config:   &TriggerConfig,
    ) -> Vec<&'e WorldEntity> {
        let mut triggered = Vec::new();

        for entity in entities {
            if entity.name.trim().is_empty() {
                continue;
            }

            let name = entity.name.to_lowercase();
            if self.known_non_matches.contains(&name) {
                continue;
            }

            if !self.predicate.matches(&name) {
                debug!(name = %name, "name classified as non-match");
                self.known_non_matches.insert(name);
                continue;
            }

            // NaN distance or radius is out of range.
            let distance = actor.distance(entity.position);
            if !(distance <= config.proximity_radius) {
                continue;
            }

            if self.touched.insert(entity.position) {
                trace!(
                    name = %entity.name,
                    position = %entity.position,
                    distance,
                    "entity in range, triggering",
                );
                triggered.push(entity);
            }
        }

        triggered
    }

    /// Forget every position touched this epoch.
    ///
    /// Call exactly once per epoch boundary.  The non-match cache is kept.
    pub fn reset_epoch(&mut self) {
        let cleared = self.touched.len();
        self.touched.clear();
        debug!(cleared, "epoch reset");
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// `true` if `name` (any case) has been classified as a non-match.
    pub fn is_known_non_match(&self, name: &str) -> bool {
        self.known_non_matches.contains(&name.to_lowercase())
    }

    /// `true` if the entity at `position` was triggered this epoch.
    pub fn is_touched(&self, position: TilePos) -> bool {
        self.touched.contains(&position)
    }

    pub fn known_non_match_count(&self) -> usize {
        self.known_non_matches.len()
    }

    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}
