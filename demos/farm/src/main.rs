//! farm — end-to-end run of the autotouch harness.
//!
//! Loads (or creates) the settings file, registers the settings menu with an
//! in-memory menu host, lays out a small farm with a few statues among the
//! furniture, and lets the player wander for a few in-game days.  Every
//! auto-touch is written to `./output/triggers.csv`.
//!
//! ```text
//! cargo run -p farm -- [settings.json] [distance]
//! RUST_LOG=trace cargo run -p farm     # one line per touch
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use at_config::{
    JsonSettingsStore, MenuRegistration, MenuRegistry, SettingsStore, SharedSettings,
};
use at_core::{SimConfig, TilePos};
use at_output::{CsvWriter, SimOutputObserver};
use at_sim::{LoggingInvoker, SimBuilder};
use at_world::{ActorPath, load_layout_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const FRAMES_PER_DAY: u64 = 6_000; // 100 s of play per day at 60 frames/s
const SIM_DAYS:       u64 = 3;

const DEFAULT_SETTINGS_PATH: &str = "autotouch-config.json";
const OUTPUT_DIR:            &str = "output";

// ── Layout CSV ────────────────────────────────────────────────────────────────

// A 24×24 farm corner.  Only the names containing "statue" are targets.
const FARM_CSV: &str = "\
name,x,y\n\
Statue Of Endless Fortune,4,4\n\
Statue Of Perfection,18,5\n\
Chair,3,3\n\
Table,4,3\n\
Keg,10,10\n\
Keg,11,10\n\
Preserves Jar,12,10\n\
Scarecrow,8,16\n\
Statue Of Blessings,20,20\n\
Crystalarium,6,19\n\
,2,2\n\
Bee House,15,14\n\
Sprinkler,9,9\n\
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let distance_override = args
        .next()
        .map(|s| s.parse::<i32>().context("distance must be an integer"))
        .transpose()?;

    // ── Settings + menu ───────────────────────────────────────────────────
    let store = Arc::new(JsonSettingsStore::new(&settings_path));
    let settings = SharedSettings::new(store.load().context("loading settings")?);

    let mut menu = MenuRegistry::new();
    let mut registration = MenuRegistration::new();
    registration.register_once(Some(&mut menu), &settings, store.clone());
    info!(options = ?menu.field_ids(), "settings menu registered");

    if let Some(distance) = distance_override {
        menu.set_number("distance", distance)?;
        menu.save();
    }

    let config = SimConfig {
        total_frames:   SIM_DAYS * FRAMES_PER_DAY,
        frames_per_day: FRAMES_PER_DAY,
        seed:           SEED,
    };

    // ── World ─────────────────────────────────────────────────────────────
    let player = ActorPath::random_walk(
        TilePos::tile(12, 12),
        TilePos::tile(0, 0),
        TilePos::tile(23, 23),
        config.seed,
    );
    let farm = load_layout_reader(Cursor::new(FARM_CSV), "Farm", player)
        .context("parsing farm layout")?;
    info!(location = %farm.name, objects = farm.objects().len(), "layout loaded");

    // ── Run ───────────────────────────────────────────────────────────────
    let mut sim = SimBuilder::new(config, farm, LoggingInvoker)
        .settings(settings.clone())
        .build()?;

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = SimOutputObserver::new(writer);
    let stats = sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing trigger log");
    }

    let current = settings.get();
    println!(
        "{} days, {} policy ticks, {} auto-touches (distance {}, every {} frames)",
        stats.days_started, stats.policy_ticks, stats.triggers, current.distance, current.tick_interval,
    );
    println!(
        "{} object names cached as non-targets; log in {}/",
        sim.policy.known_non_match_count(),
        OUTPUT_DIR,
    );
    Ok(())
}
