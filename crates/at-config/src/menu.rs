//! Configuration-menu integration.
//!
//! The menu itself belongs to an external plugin.  This module describes what
//! we hand it (two actions and three options) through [`ConfigMenuApi`], and
//! ships [`MenuRegistry`], an in-memory host that drives the options by field
//! id.  When no menu host is installed, registration is skipped and the
//! settings are still usable through the settings file.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::settings::{DISTANCE_RANGE, TICK_INTERVAL_RANGE};
use crate::{ConfigError, ConfigResult, SettingsStore, SharedSettings};

pub type MenuAction = Box<dyn Fn() + Send + Sync>;
pub type Getter<T> = Box<dyn Fn() -> T + Send + Sync>;
pub type Setter<T> = Box<dyn Fn(T) + Send + Sync>;

/// An integer slider.
pub struct NumberOption {
    pub field_id: &'static str,
    pub name:     &'static str,
    pub tooltip:  &'static str,
    pub min:      i32,
    pub max:      i32,
    pub get:      Getter<i32>,
    pub set:      Setter<i32>,
}

/// A checkbox.
pub struct BoolOption {
    pub field_id: &'static str,
    pub name:     &'static str,
    pub tooltip:  &'static str,
    pub get:      Getter<bool>,
    pub set:      Setter<bool>,
}

/// The surface of an external configuration-menu plugin.
pub trait ConfigMenuApi {
    /// Register the mod with the menu.  `reset` restores defaults; `save`
    /// persists the current values.
    fn register(&mut self, reset: MenuAction, save: MenuAction);

    fn add_number_option(&mut self, option: NumberOption);

    fn add_bool_option(&mut self, option: BoolOption);
}

// ── Registration ──────────────────────────────────────────────────────────────

/// Register reset/save and the three settings options with `api`.
///
/// Returns `false` without doing anything when `api` is `None`.
pub fn register_settings_menu(
    api:      Option<&mut dyn ConfigMenuApi>,
    settings: &SharedSettings,
    store:    Arc<dyn SettingsStore>,
) -> bool {
    let Some(api) = api else {
        debug!("no configuration menu installed, skipping registration");
        return false;
    };

    let reset = settings.clone();
    let save = settings.clone();
    api.register(
        Box::new(move || reset.reset()),
        Box::new(move || {
            if let Err(e) = store.save(&save.get()) {
                warn!(error = %e, "failed to save settings from menu");
            }
        }),
    );

    let (get, set) = (settings.clone(), settings.clone());
    api.add_number_option(NumberOption {
        field_id: "distance",
        name:     "distance",
        tooltip:  "When the player is within this distance from the statue, automatically touch the statue",
        min:      *DISTANCE_RANGE.start() as i32,
        max:      *DISTANCE_RANGE.end() as i32,
        get:      Box::new(move || get.get().distance as i32),
        set:      Box::new(move |v: i32| set.set_distance(v.max(0) as u32)),
    });

    let (get, set) = (settings.clone(), settings.clone());
    api.add_bool_option(BoolOption {
        field_id: "enabled",
        name:     "enabled",
        tooltip:  "Automatically touch nearby statues",
        get:      Box::new(move || get.get().enabled),
        set:      Box::new(move |v: bool| set.set_enabled(v)),
    });

    let (get, set) = (settings.clone(), settings.clone());
    api.add_number_option(NumberOption {
        field_id: "tick_interval",
        name:     "check interval",
        tooltip:  "Frames between two proximity checks (60 frames = 1 second)",
        min:      *TICK_INTERVAL_RANGE.start() as i32,
        max:      *TICK_INTERVAL_RANGE.end() as i32,
        get:      Box::new(move || get.get().tick_interval as i32),
        set:      Box::new(move |v: i32| set.set_tick_interval(v.max(0) as u32)),
    });

    true
}

/// Ensures the menu is registered at most once per launch.
#[derive(Debug, Default)]
pub struct MenuRegistration {
    attempted: bool,
}

impl MenuRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt registration on the first call only.  Later calls return
    /// `false`, even if the first attempt found no menu host.
    pub fn register_once(
        &mut self,
        api:      Option<&mut dyn ConfigMenuApi>,
        settings: &SharedSettings,
        store:    Arc<dyn SettingsStore>,
    ) -> bool {
        if self.attempted {
            return false;
        }
        self.attempted = true;
        register_settings_menu(api, settings, store)
    }
}

// ── In-memory menu host ───────────────────────────────────────────────────────

/// A [`ConfigMenuApi`] that keeps everything in memory.
///
/// Number edits are clamped to the option's `min..=max` the way a slider
/// would, then passed to the option's setter.
#[derive(Default)]
pub struct MenuRegistry {
    actions: Option<(MenuAction, MenuAction)>,
    numbers: Vec<NumberOption>,
    bools:   Vec<BoolOption>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.actions.is_some()
    }

    /// Field ids in registration order, numbers first.
    pub fn field_ids(&self) -> Vec<&'static str> {
        self.numbers
            .iter()
            .map(|o| o.field_id)
            .chain(self.bools.iter().map(|o| o.field_id))
            .collect()
    }

    pub fn number_option(&self, field_id: &str) -> Option<&NumberOption> {
        self.numbers.iter().find(|o| o.field_id == field_id)
    }

    pub fn number(&self, field_id: &str) -> ConfigResult<i32> {
        let option = self.find_number(field_id)?;
        Ok((option.get)())
    }

    pub fn set_number(&self, field_id: &str, value: i32) -> ConfigResult<()> {
        let option = self.find_number(field_id)?;
        (option.set)(value.clamp(option.min, option.max));
        Ok(())
    }

    pub fn boolean(&self, field_id: &str) -> ConfigResult<bool> {
        let option = self.find_bool(field_id)?;
        Ok((option.get)())
    }

    pub fn set_boolean(&self, field_id: &str, value: bool) -> ConfigResult<()> {
        let option = self.find_bool(field_id)?;
        (option.set)(value);
        Ok(())
    }

    /// Press "reset to defaults".  No-op if nothing registered.
    pub fn reset(&self) {
        if let Some((reset, _)) = &self.actions {
            reset();
        }
    }

    /// Press "save".  No-op if nothing registered.
    pub fn save(&self) {
        if let Some((_, save)) = &self.actions {
            save();
        }
    }

    fn find_number(&self, field_id: &str) -> ConfigResult<&NumberOption> {
        self.number_option(field_id)
            .ok_or_else(|| ConfigError::UnknownOption(field_id.to_owned()))
    }

    fn find_bool(&self, field_id: &str) -> ConfigResult<&BoolOption> {
        self.bools
            .iter()
            .find(|o| o.field_id == field_id)
            .ok_or_else(|| ConfigError::UnknownOption(field_id.to_owned()))
    }
}

impl ConfigMenuApi for MenuRegistry {
    fn register(&mut self, reset: MenuAction, save: MenuAction) {
        self.actions = Some((reset, save));
    }

    fn add_number_option(&mut self, option: NumberOption) {
        self.numbers.push(option);
    }

    fn add_bool_option(&mut self, option: BoolOption) {
        self.bools.push(option);
    }
}
