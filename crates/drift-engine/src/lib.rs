//! Paced tick loop and command thread for Drift spaces.
//!
//! [`TickLoop`] owns the real-time pacing rules: at most
//! `max_tick_rate` ticks per second, with a warning when the achieved
//! rate sags below `min_tick_rate`. [`TickThread`] runs a loop on a
//! dedicated thread, draining queued [`SpaceCommand`]s between ticks so
//! external callers never write to the space directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod pacing;
pub mod tick_thread;

pub use config::{ConfigError, EngineConfig};
pub use metrics::TickMetrics;
pub use pacing::TickLoop;
pub use tick_thread::{CommandReceipt, SpaceCommand, SubmitError, TickThread};
