//! A shared, hot-mutable settings handle.

use std::sync::{Arc, PoisonError, RwLock};

use crate::Settings;
use crate::settings::{DISTANCE_RANGE, TICK_INTERVAL_RANGE, clamp};

/// Cloneable handle to the live settings.
///
/// The scheduler copies the settings out once per tick with [`get`][Self::get];
/// menu callbacks write through the setters at any time.  Setters clamp into
/// the allowed bounds.
#[derive(Clone, Debug, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<Settings>>,
}

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        Self { inner: Arc::new(RwLock::new(settings.clamped())) }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Settings {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn replace(&self, settings: Settings) {
        self.update(|s| *s = settings.clamped());
    }

    /// Restore the defaults.
    pub fn reset(&self) {
        self.replace(Settings::default());
    }

    pub fn set_distance(&self, distance: u32) {
        self.update(|s| s.distance = clamp(distance, &DISTANCE_RANGE));
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.update(|s| s.enabled = enabled);
    }

    pub fn set_tick_interval(&self, frames: u32) {
        self.update(|s| s.tick_interval = clamp(frames, &TICK_INTERVAL_RANGE));
    }

    fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}
