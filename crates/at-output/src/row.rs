//! Plain data row types written by output backends.

/// One invoked action.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRow {
    pub frame:   u64,
    pub day:     u64,
    pub name:    String,
    pub x:       f32,
    pub y:       f32,
    pub actor_x: f32,
    pub actor_y: f32,
}

/// Actions invoked during one in-game day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub day:       u64,
    pub triggered: u64,
}
