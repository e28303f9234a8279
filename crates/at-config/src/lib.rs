//! `at-config` — user settings for the trigger policy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`settings`] | `Settings` (distance, enabled, tick interval) and bounds    |
//! | [`shared`]   | `SharedSettings` — hot-mutable handle read once per tick    |
//! | [`store`]    | `SettingsStore` trait, `JsonSettingsStore`, `MemorySettingsStore` |
//! | [`menu`]     | `ConfigMenuApi` trait, `MenuRegistry`, menu registration    |
//! | [`error`]    | `ConfigError`, `ConfigResult<T>`                            |
//!
//! Settings are persisted as a flat JSON object:
//!
//! ```json
//! {
//!   "distance": 5,
//!   "enabled": true,
//!   "tick_interval": 10
//! }
//! ```

pub mod error;
pub mod menu;
pub mod settings;
pub mod shared;
pub mod store;


pub use error::{ConfigError, ConfigResult};
pub use menu::{
    BoolOption, ConfigMenuApi, MenuAction, MenuRegistration, MenuRegistry, NumberOption,
    register_settings_menu,
};
pub use settings::Settings;
pub use shared::SharedSettings;
pub use store::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
