//! The persisted settings and their bounds.

use std::ops::RangeInclusive;

use at_policy::TriggerConfig;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Allowed proximity radius, in whole tiles.
pub const DISTANCE_RANGE: RangeInclusive<u32> = 1..=100;

/// Allowed frames between two policy ticks.  10 frames ≈ 6 ticks per second.
pub const TICK_INTERVAL_RANGE: RangeInclusive<u32> = 1..=60;

/// User-facing settings.
///
/// Missing keys in a settings file fall back to the defaults below, so files
/// written by older versions keep loading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trigger entities within this many tiles of the actor.
    pub distance:      u32,
    /// Master switch.  When off, the scheduler skips policy ticks entirely.
    pub enabled:       bool,
    /// Run the policy every `tick_interval` frames.
    pub tick_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { distance: 5, enabled: true, tick_interval: 10 }
    }
}

impl Settings {
    /// Check every numeric field against its bounds.
    pub fn validate(&self) -> ConfigResult<()> {
        check("distance", self.distance, &DISTANCE_RANGE)?;
        check("tick_interval", self.tick_interval, &TICK_INTERVAL_RANGE)?;
        Ok(())
    }

    /// Copy of `self` with every numeric field clamped into bounds.
    pub fn clamped(self) -> Self {
        Self {
            distance:      clamp(self.distance, &DISTANCE_RANGE),
            tick_interval: clamp(self.tick_interval, &TICK_INTERVAL_RANGE),
            ..self
        }
    }

    /// The policy parameters derived from these settings.
    #[inline]
    pub fn trigger_config(&self) -> TriggerConfig {
        TriggerConfig::with_radius(self.distance as f32)
    }
}

pub(crate) fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

fn check(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> ConfigResult<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::OutOfRange {
        field,
        value: value as i64,
        min:   *range.start() as i64,
        max:   *range.end() as i64,
    })
}
