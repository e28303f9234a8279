//! The `Sim` struct and its frame loop.

use at_config::SharedSettings;
use at_core::{GameClock, SimConfig};
use at_policy::{NamePredicate, ProximityTriggerPolicy};
use at_world::WorldProvider;
use tracing::{debug, info};

use crate::{ActionInvoker, SimObserver};

/// Counters accumulated over the lifetime of a [`Sim`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Frames processed.
    pub frames:          u64,
    /// Day starts seen (= epoch resets issued).
    pub days_started:    u64,
    /// Policy ticks that ran against a snapshot.
    pub policy_ticks:    u64,
    /// Gated frames skipped because the world was not ready.
    pub not_ready_skips: u64,
    /// Actions invoked.
    pub triggers:        u64,
}

/// The frame-loop runner.
///
/// Owns the world, the invoker, and the one [`ProximityTriggerPolicy`]
/// instance; drives them as described in the crate docs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: WorldProvider, A: ActionInvoker, P: NamePredicate> {
    pub config:   SimConfig,

    /// Current frame and day.
    pub clock:    GameClock,

    pub world:    W,

    pub invoker:  A,

    pub policy:   ProximityTriggerPolicy<P>,

    /// Live settings, read once per frame.
    pub settings: SharedSettings,

    pub stats:    SimStats,
}

impl<W: WorldProvider, A: ActionInvoker, P: NamePredicate> Sim<W, A, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimStats {
        while self.clock.current_frame < self.config.end_frame() {
            self.process_frame(observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_frame);
        info!(
            frames = self.stats.frames,
            days = self.stats.days_started,
            policy_ticks = self.stats.policy_ticks,
            triggers = self.stats.triggers,
            "simulation finished",
        );
        self.stats
    }

    /// Run exactly `n` frames from the current position (ignores `end_frame`).
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimStats {
        for _ in 0..n {
            self.process_frame(observer);
            self.clock.advance();
        }
        self.stats
    }

    /// Current in-game day.
    #[inline]
    pub fn day(&self) -> u64 {
        self.clock.day()
    }

    // ── Core frame processing ─────────────────────────────────────────────

    /// Returns the number of actions invoked this frame.
    fn process_frame<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_frame;
        let day = self.clock.day();
        self.stats.frames += 1;

        // ── Phase 1: epoch boundary ───────────────────────────────────────
        if self.clock.is_day_start() {
            self.policy.reset_epoch();
            self.stats.days_started += 1;
            debug!(day, %now, "day started");
            observer.on_day_start(now, day);
        }

        // ── Phase 2: gate ─────────────────────────────────────────────────
        let settings = self.settings.get();
        if !settings.enabled || !now.is_multiple_of(settings.tick_interval as u64) {
            return 0;
        }

        // ── Phase 3: snapshot ─────────────────────────────────────────────
        let Some(snapshot) = self.world.snapshot(now) else {
            self.stats.not_ready_skips += 1;
            return 0;
        };

        // ── Phase 4: policy tick ──────────────────────────────────────────
        let config = settings.trigger_config();
        let triggered = self.policy.tick(&snapshot.entities, snapshot.actor, &config);
        self.stats.policy_ticks += 1;

        // ── Phase 5: invoke, in emission order ────────────────────────────
        for entity in &triggered {
            self.invoker.invoke(entity, snapshot.actor);
            observer.on_trigger(now, day, entity, snapshot.actor);
        }
        let count = triggered.len();
        self.stats.triggers += count as u64;
        observer.on_policy_tick(now, count);
        count
    }
}
