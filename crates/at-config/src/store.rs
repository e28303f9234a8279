//! Settings persistence.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::{ConfigResult, Settings};

/// Where settings live between runs.
pub trait SettingsStore: Send + Sync {
    /// Load the stored settings, creating them with defaults if absent.
    fn load(&self) -> ConfigResult<Settings>;

    /// Persist `settings`, replacing whatever was stored.
    fn save(&self, settings: &Settings) -> ConfigResult<()>;
}

// ── JSON file ─────────────────────────────────────────────────────────────────

/// Stores settings as a pretty-printed JSON object in a single file.
#[derive(Clone, Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    /// A missing file is created with the defaults.  Out-of-range values are
    /// clamped (and logged) rather than rejected; malformed JSON is an error.
    fn load(&self) -> ConfigResult<Settings> {
        if !self.path.exists() {
            let defaults = Settings::default();
            self.save(&defaults)?;
            info!(path = %self.path.display(), "settings file not found, wrote defaults");
            return Ok(defaults);
        }

        let text = std::fs::read_to_string(&self.path)?;
        let raw: Settings = serde_json::from_str(&text)?;
        if let Err(e) = raw.validate() {
            warn!(path = %self.path.display(), error = %e, "clamping out-of-range setting");
        }
        let settings = raw.clamped();
        info!(
            path = %self.path.display(),
            distance = settings.distance,
            enabled = settings.enabled,
            tick_interval = settings.tick_interval,
            "loaded settings",
        );
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, text)?;
        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Keeps the "persisted" settings in memory.  Counts saves, for tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    stored: Mutex<(Option<Settings>, usize)>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved settings, if any.
    pub fn stored(&self) -> Option<Settings> {
        self.stored.lock().unwrap_or_else(PoisonError::into_inner).0
    }

    pub fn save_count(&self) -> usize {
        self.stored.lock().unwrap_or_else(PoisonError::into_inner).1
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> ConfigResult<Settings> {
        let mut guard = self.stored.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(*guard.0.get_or_insert_with(Settings::default))
    }

    fn save(&self, settings: &Settings) -> ConfigResult<()> {
        let mut guard = self.stored.lock().unwrap_or_else(PoisonError::into_inner);
        guard.0 = Some(*settings);
        guard.1 += 1;
        Ok(())
    }
}
