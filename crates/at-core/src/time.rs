//! Frame clock and day boundaries.
//!
//! # Design
//!
//! Time is a monotonically increasing `Frame` counter, one per host update.
//! Days are a fixed number of frames long:
//!
//!   day = frame / frames_per_day
//!
//! A frame is a *day start* when it is the first frame of its day.  Frame 0
//! is the start of day 0, so the first epoch boundary fires on the very
//! first frame just like a host "day started" event after loading a save.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Frames per second of the reference host.  Used only for defaults.
pub const FRAMES_PER_SECOND: u64 = 60;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// `true` if this frame is a multiple of `n`.  `n == 0` never matches.
    #[inline]
    pub fn is_multiple_of(self, n: u64) -> bool {
        n != 0 && self.0 % n == 0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── GameClock ─────────────────────────────────────────────────────────────────

/// Tracks the current frame and maps it onto in-game days.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// Length of one day in frames.  Always non-zero.
    pub frames_per_day: u64,
    /// The current frame — advanced by `GameClock::advance()` each iteration.
    pub current_frame:  Frame,
}

impl GameClock {
    /// Create a clock at frame 0.
    ///
    /// Returns [`CoreError::Config`] if `frames_per_day` is zero.
    pub fn new(frames_per_day: u64) -> CoreResult<Self> {
        if frames_per_day == 0 {
            return Err(CoreError::Config("frames_per_day must be non-zero".into()));
        }
        Ok(Self { frames_per_day, current_frame: Frame::ZERO })
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = self.current_frame + 1;
    }

    /// Day index of the current frame, starting at 0.
    #[inline]
    pub fn day(&self) -> u64 {
        self.current_frame.0 / self.frames_per_day
    }

    /// `true` on the first frame of each day.
    #[inline]
    pub fn is_day_start(&self) -> bool {
        self.current_frame.is_multiple_of(self.frames_per_day)
    }

    /// Frame offset within the current day.
    #[inline]
    pub fn frame_of_day(&self) -> u64 {
        self.current_frame.0 % self.frames_per_day
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} +{})", self.current_frame, self.day(), self.frame_of_day())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Harness-level run configuration.  Not user-facing; see `at-config` for the
/// persisted settings the trigger policy reads.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total frames to simulate.
    pub total_frames:   u64,

    /// Frames per in-game day.  Must be non-zero.
    pub frames_per_day: u64,

    /// Seed for any randomized actor path; same seed, same run.
    pub seed:           u64,
}

impl Default for SimConfig {
    /// One in-game day of 20 real minutes at 60 frames per second.
    fn default() -> Self {
        let frames_per_day = 20 * 60 * FRAMES_PER_SECOND;
        Self { total_frames: frames_per_day, frames_per_day, seed: 42 }
    }
}

impl SimConfig {
    /// The frame at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Construct a `GameClock` for this run.
    pub fn make_clock(&self) -> CoreResult<GameClock> {
        GameClock::new(self.frames_per_day)
    }
}
