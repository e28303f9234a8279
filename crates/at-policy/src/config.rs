//! Per-tick policy configuration.

/// Default proximity radius in tiles.
pub const DEFAULT_RADIUS: f32 = 5.0;

/// Parameters the policy reads at the start of every tick.
///
/// Built fresh from the live settings each tick, so a radius changed through
/// the settings surface takes effect on the next tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Maximum actor→entity distance (inclusive) that still triggers.
    pub proximity_radius: f32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self { proximity_radius: DEFAULT_RADIUS }
    }
}

impl TriggerConfig {
    #[inline]
    pub fn with_radius(proximity_radius: f32) -> Self {
        Self { proximity_radius }
    }
}
