//! Unit tests for at-policy.

use at_core::{TilePos, WorldEntity};

use crate::{ProximityTriggerPolicy, TriggerConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn entity(name: &str, x: i32, y: i32) -> WorldEntity {
    WorldEntity::new((x, y), name)
}

fn names(hits: &[&WorldEntity]) -> Vec<String> {
    hits.iter().map(|e| e.name.clone()).collect()
}

fn radius(r: f32) -> TriggerConfig {
    TriggerConfig::with_radius(r)
}

// ── Predicates ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod predicate_tests {
    use crate::{ContainsPredicate, NamePredicate};

    #[test]
    fn statue_rule_is_case_insensitive() {
        let p = ContainsPredicate::statue();
        assert!(p.matches("statue of endless fortune"));
        assert!(p.matches("Statue_1"));
        assert!(p.matches("BIG STATUE"));
        assert!(!p.matches("chair"));
        assert!(!p.matches("stat ue"));
    }

    #[test]
    fn needle_is_normalized() {
        let p = ContainsPredicate::new("Totem");
        assert_eq!(p.needle(), "totem");
        assert!(p.matches("warp totem: farm"));
    }

    #[test]
    fn closures_are_predicates() {
        let p = |name: &str| name.starts_with("crystal");
        assert!(p.matches("crystalarium"));
        assert!(!p.matches("keg"));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn radius_five_from_origin() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![
            entity("Statue_1", 3, 4),
            entity("Statue_2", 4, 4),
            entity("Chair", 0, 0),
        ];

        let hits = policy.tick(&world, TilePos::ORIGIN, &radius(5.0));

        assert_eq!(names(&hits), ["Statue_1"]);
        assert!(policy.is_known_non_match("Chair"));
        assert!(!policy.is_known_non_match("Statue_2"));
    }

    #[test]
    fn once_per_epoch_then_again_after_reset() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("Statue_1", 3, 4)];
        let cfg = radius(5.0);

        let tick1 = policy.tick(&world, TilePos::ORIGIN, &cfg);
        assert_eq!(names(&tick1), ["Statue_1"]);

        let tick2 = policy.tick(&world, TilePos::ORIGIN, &cfg);
        assert!(tick2.is_empty());

        policy.reset_epoch();
        let tick3 = policy.tick(&world, TilePos::ORIGIN, &cfg);
        assert_eq!(names(&tick3), ["Statue_1"]);
    }
}

// ── Classification cache ──────────────────────────────────────────────────────

#[cfg(test)]
mod cache_tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn non_match_is_classified_once() {
        let calls = Cell::new(0usize);
        let counting = |name: &str| {
            calls.set(calls.get() + 1);
            name.contains("statue")
        };
        let mut policy = ProximityTriggerPolicy::new(counting);
        let world = vec![entity("Chair", 0, 0)];

        for _ in 0..5 {
            assert!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).is_empty());
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(policy.known_non_match_count(), 1);
    }

    #[test]
    fn cache_is_keyed_by_normalized_name() {
        let calls = Cell::new(0usize);
        let counting = |_name: &str| {
            calls.set(calls.get() + 1);
            false
        };
        let mut policy = ProximityTriggerPolicy::new(counting);
        let world = vec![entity("Chair", 0, 0), entity("CHAIR", 1, 0), entity("chair", 2, 0)];

        policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn matches_are_reclassified_every_tick() {
        let calls = Cell::new(0usize);
        let counting = |name: &str| {
            calls.set(calls.get() + 1);
            name.contains("statue")
        };
        let mut policy = ProximityTriggerPolicy::new(counting);
        let world = vec![entity("Statue", 50, 50)];

        for _ in 0..3 {
            policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        }
        assert_eq!(calls.get(), 3);
        assert_eq!(policy.known_non_match_count(), 0);
    }

    #[test]
    fn cache_survives_epoch_reset() {
        let mut policy = ProximityTriggerPolicy::statue();
        policy.tick(&[entity("Keg", 0, 0)], TilePos::ORIGIN, &radius(5.0));
        policy.reset_epoch();
        assert!(policy.is_known_non_match("keg"));
    }

    #[test]
    fn far_match_is_not_cached() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("Statue", 10, 0)];

        assert!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).is_empty());
        assert!(!policy.is_touched(TilePos::tile(10, 0)));

        // Actor walks over.
        let hits = policy.tick(&world, TilePos::tile(8, 0), &radius(5.0));
        assert_eq!(names(&hits), ["Statue"]);
    }
}

// ── Edge cases ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge_tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn blank_names_are_skipped_without_classifying() {
        let calls = Cell::new(0usize);
        let counting = |_: &str| {
            calls.set(calls.get() + 1);
            true
        };
        let mut policy = ProximityTriggerPolicy::new(counting);
        let world = vec![entity("", 0, 0), entity("   ", 1, 0), entity("\t\n", 0, 1)];

        assert!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).is_empty());
        assert_eq!(calls.get(), 0);
        assert_eq!(policy.known_non_match_count(), 0);
        assert_eq!(policy.touched_count(), 0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![
            WorldEntity::new(TilePos::new(5.0, 0.0), "statue a"),
            WorldEntity::new(TilePos::new(5.001, 0.0), "statue b"),
        ];
        let hits = policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        assert_eq!(names(&hits), ["statue a"]);
    }

    #[test]
    fn nan_distance_is_out_of_range() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![WorldEntity::new(TilePos::new(f32::NAN, 0.0), "statue")];
        assert!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).is_empty());
        assert!(policy.tick(&world, TilePos::new(0.0, f32::NAN), &radius(5.0)).is_empty());
        assert_eq!(policy.touched_count(), 0);
    }

    #[test]
    fn nan_radius_triggers_nothing() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("statue", 0, 0), entity("statue", 1000, 1000)];
        assert!(policy.tick(&world, TilePos::ORIGIN, &radius(f32::NAN)).is_empty());
        assert_eq!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).len(), 1);
    }

    #[test]
    fn zero_radius_only_hits_same_tile() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("statue", 0, 0), entity("statue", 0, 1)];
        let hits = policy.tick(&world, TilePos::ORIGIN, &radius(0.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, TilePos::ORIGIN);
    }

    #[test]
    fn duplicate_position_in_one_snapshot_emits_once() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("statue", 1, 1), entity("Statue", 1, 1)];
        let hits = policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn result_preserves_input_order() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![
            entity("statue c", 2, 0),
            entity("bench", 0, 0),
            entity("statue a", 0, 2),
            entity("statue b", 1, 1),
        ];
        let hits = policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        assert_eq!(names(&hits), ["statue c", "statue a", "statue b"]);
    }

    #[test]
    fn radius_change_applies_next_tick() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("statue", 8, 0)];
        assert!(policy.tick(&world, TilePos::ORIGIN, &radius(5.0)).is_empty());
        assert_eq!(policy.tick(&world, TilePos::ORIGIN, &radius(10.0)).len(), 1);
    }

    #[test]
    fn reset_clears_all_touched_positions() {
        let mut policy = ProximityTriggerPolicy::statue();
        let world = vec![entity("statue", 0, 1), entity("statue", 1, 0)];
        policy.tick(&world, TilePos::ORIGIN, &radius(5.0));
        assert_eq!(policy.touched_count(), 2);

        policy.reset_epoch();
        assert_eq!(policy.touched_count(), 0);
        assert!(!policy.is_touched(TilePos::tile(0, 1)));
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let world = vec![entity("statue", 0, 0)];
        let mut a = ProximityTriggerPolicy::statue();
        let mut b = ProximityTriggerPolicy::statue();
        assert_eq!(a.tick(&world, TilePos::ORIGIN, &radius(1.0)).len(), 1);
        assert_eq!(b.tick(&world, TilePos::ORIGIN, &radius(1.0)).len(), 1);
    }
}

// ── SharedTriggerPolicy ───────────────────────────────────────────────────────

#[cfg(test)]
mod shared_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::SharedTriggerPolicy;

    #[test]
    fn concurrent_ticks_emit_at_most_once() {
        let shared = SharedTriggerPolicy::new(ProximityTriggerPolicy::statue());
        let world: Vec<WorldEntity> = (0..16).map(|i| entity("statue", i % 4, i / 4)).collect();
        let emitted = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                let policy = shared.clone();
                let world = &world;
                let emitted = &emitted;
                s.spawn(move || {
                    for _ in 0..10 {
                        let hits = policy.tick(world, TilePos::ORIGIN, &radius(10.0));
                        emitted.fetch_add(hits.len(), Ordering::Relaxed);
                    }
                });
            }
        });

        assert_eq!(emitted.load(Ordering::Relaxed), 16);
        assert_eq!(shared.lock().touched_count(), 16);
    }

    #[test]
    fn reset_through_handle() {
        let shared = SharedTriggerPolicy::new(ProximityTriggerPolicy::statue());
        let world = vec![entity("statue", 0, 0)];
        assert_eq!(shared.tick(&world, TilePos::ORIGIN, &radius(1.0)).len(), 1);
        shared.clone().reset_epoch();
        assert_eq!(shared.tick(&world, TilePos::ORIGIN, &radius(1.0)).len(), 1);
    }
}
