//! Per-tick observability counters.

use drift_core::TickId;

/// What one completed tick did and how long it took.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickMetrics {
    /// Which tick this describes.
    pub tick: TickId,
    /// Wall time spent inside the space tick, in microseconds.
    pub duration_us: u64,
    /// Objects whose `tick` callback ran.
    pub ticked: usize,
    /// Objects gravity moved.
    pub gravity_moves: usize,
    /// Degenerate gravity steps skipped.
    pub gravity_skips: usize,
    /// Queued commands applied just before this tick.
    pub commands_applied: usize,
    /// Ticks per second measured against the previous tick.
    pub achieved_rate: f64,
}
