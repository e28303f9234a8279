//! `at-sim` — frame loop scheduler for the autotouch harness.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Day start  — first frame of a day: policy.reset_epoch()
//!   ② Gate       — skip unless settings.enabled and
//!                  frame % settings.tick_interval == 0
//!   ③ Snapshot   — world.snapshot(frame); None (not ready) → skip
//!   ④ Policy     — policy.tick(entities, actor, settings.trigger_config())
//!   ⑤ Invoke     — invoker.invoke(entity, actor) for each result, in order
//! ```
//!
//! Settings are read once per frame from a [`SharedSettings`][at_config::SharedSettings]
//! handle, so menu edits apply on the next policy tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use at_core::SimConfig;
//! use at_sim::{LoggingInvoker, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, location, LoggingInvoker)
//!     .settings(settings)
//!     .build()?;
//! let stats = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod invoker;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use invoker::{ActionInvoker, LoggingInvoker, RecordingInvoker};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimStats};
