//! Unit tests for at-world.

use at_core::{Frame, TilePos};

use crate::{ActorPath, Location, WorldProvider};

fn farm() -> Location {
    Location::new("Farm", ActorPath::Fixed(TilePos::ORIGIN))
        .with_object((3, 4), "Statue_1")
        .with_object((4, 4), "Statue_2")
        .with_object((0, 0), "Chair")
}

// ── ActorPath ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod actor_tests {
    use super::*;

    #[test]
    fn fixed_never_moves() {
        let mut path = ActorPath::Fixed(TilePos::tile(2, 2));
        for _ in 0..5 {
            assert_eq!(path.step(), Some(TilePos::tile(2, 2)));
        }
    }

    #[test]
    fn scripted_loops() {
        let mut path = ActorPath::scripted(vec![TilePos::tile(0, 0), TilePos::tile(1, 0)]);
        let seen: Vec<_> = (0..5).filter_map(|_| path.step()).collect();
        assert_eq!(
            seen,
            [
                TilePos::tile(0, 0),
                TilePos::tile(1, 0),
                TilePos::tile(0, 0),
                TilePos::tile(1, 0),
                TilePos::tile(0, 0),
            ]
        );
    }

    #[test]
    fn empty_script_has_no_position() {
        let mut path = ActorPath::scripted(vec![]);
        assert_eq!(path.position(), None);
        assert_eq!(path.step(), None);
    }

    #[test]
    fn random_walk_stays_in_bounds_and_steps_one_tile() {
        let mut path = ActorPath::random_walk(
            TilePos::tile(5, 5),
            TilePos::tile(10, 10),
            TilePos::tile(0, 0),
            7,
        );
        let mut prev = path.step().unwrap();
        for _ in 0..500 {
            let next = path.step().unwrap();
            assert!((0.0..=10.0).contains(&next.x) && (0.0..=10.0).contains(&next.y));
            assert!((next.x - prev.x).abs() <= 1.0 && (next.y - prev.y).abs() <= 1.0);
            prev = next;
        }
    }

    #[test]
    fn random_walk_is_deterministic() {
        let walk = |seed| {
            let mut path = ActorPath::random_walk(
                TilePos::ORIGIN,
                TilePos::tile(-5, -5),
                TilePos::tile(5, 5),
                seed,
            );
            (0..50).filter_map(|_| path.step()).collect::<Vec<_>>()
        };
        assert_eq!(walk(3), walk(3));
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn snapshot_keeps_placement_order() {
        let mut farm = farm();
        let snap = farm.snapshot(Frame(0)).unwrap();
        let names: Vec<_> = snap.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Statue_1", "Statue_2", "Chair"]);
        assert_eq!(snap.actor, TilePos::ORIGIN);
    }

    #[test]
    fn tiles_stay_keyed_after_remove() {
        let mut loc = Location::new("Shed", ActorPath::Fixed(TilePos::ORIGIN))
            .with_object((0, 0), "a")
            .with_object((1, 0), "b")
            .with_object((2, 0), "c")
            .with_object((3, 0), "d");

        assert_eq!(loc.remove((1, 0)).map(|e| e.name), Some("b".to_string()));
        assert!(loc.remove((1, 0)).is_none());

        let replaced = loc.place((3, 0), "statue");
        assert_eq!(replaced.map(|e| e.name), Some("d".to_string()));
        assert!(loc.place((1, 0), "b2").is_none());

        let names: Vec<_> = loc.objects().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "statue", "b2"]);
    }

    #[test]
    fn placing_on_occupied_tile_replaces_in_place() {
        let mut farm = farm();
        let old = farm.place((4, 4), "Keg");
        assert_eq!(old.map(|e| e.name), Some("Statue_2".to_owned()));
        let names: Vec<_> = farm.objects().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Statue_1", "Keg", "Chair"]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut farm = farm();
        assert!(farm.remove((3, 4)).is_some());
        assert!(farm.remove((3, 4)).is_none());
        let names: Vec<_> = farm.objects().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Statue_2", "Chair"]);
    }

    #[test]
    fn not_ready_yields_no_snapshot() {
        let mut farm = farm();
        farm.set_ready(false);
        assert!(farm.snapshot(Frame(0)).is_none());
        farm.set_ready(true);
        assert!(farm.snapshot(Frame(1)).is_some());
    }

    #[test]
    fn boxed_provider() {
        let mut provider: Box<dyn WorldProvider> = Box::new(farm());
        assert_eq!(provider.snapshot(Frame(0)).unwrap().entities.len(), 3);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{WorldError, load_layout_csv, load_layout_reader};

    const LAYOUT: &str = "\
name,x,y\n\
Statue Of Endless Fortune,12,8\n\
Chair,3,4\n\
,3,5\n\
Keg,3.5,6\n\
";

    #[test]
    fn loads_rows_in_order() {
        let loc = load_layout_reader(Cursor::new(LAYOUT), "Farm", ActorPath::Fixed(TilePos::ORIGIN))
            .unwrap();
        assert_eq!(loc.name, "Farm");
        let objects = loc.objects();
        assert_eq!(objects.len(), 4);
        assert_eq!(objects[0].name, "Statue Of Endless Fortune");
        assert_eq!(objects[0].position, TilePos::tile(12, 8));
        assert_eq!(objects[2].name, "");
        assert_eq!(objects[3].position, TilePos::new(3.5, 6.0));
    }

    #[test]
    fn duplicate_tile_replaces() {
        let csv = "name,x,y\nChair,1,1\nStatue,1,1\n";
        let loc = load_layout_reader(Cursor::new(csv), "x", ActorPath::Fixed(TilePos::ORIGIN))
            .unwrap();
        assert_eq!(loc.objects().len(), 1);
        assert_eq!(loc.objects()[0].name, "Statue");
    }

    #[test]
    fn bad_coordinate_is_parse_error() {
        let csv = "name,x,y\nChair,one,1\n";
        let err = load_layout_reader(Cursor::new(csv), "x", ActorPath::Fixed(TilePos::ORIGIN))
            .err()
            .unwrap();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let csv = "name,x,y\nChair,1,1\nStatue,inf,1\n";
        let result = load_layout_reader(Cursor::new(csv), "x", ActorPath::Fixed(TilePos::ORIGIN));
        match result {
            Err(WorldError::Parse(msg)) => assert!(msg.starts_with("line 3:"), "{msg}"),
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn file_name_becomes_location_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greenhouse.csv");
        std::fs::write(&path, LAYOUT).unwrap();
        let loc = load_layout_csv(&path, ActorPath::Fixed(TilePos::ORIGIN)).unwrap();
        assert_eq!(loc.name, "greenhouse");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_layout_csv(
            std::path::Path::new("/definitely/not/here.csv"),
            ActorPath::Fixed(TilePos::ORIGIN),
        );
        assert!(matches!(result, Err(WorldError::Io(_))));
    }
}
