//! Real-time pacing for the tick loop.

use std::time::{Duration, Instant};

use log::warn;

use drift_core::TickId;
use drift_space::SharedSpace;

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::TickMetrics;

/// Drives a [`SharedSpace`] at a bounded rate.
///
/// `try_tick` is cheap to call in a tight loop: it returns `None`
/// without touching the space while the current pacing slot has not
/// elapsed. Callers decide how to idle; [`TickLoop::until_next_slot`]
/// says for how long.
pub struct TickLoop {
    shared: SharedSpace,
    period: Duration,
    min_tick_rate: f64,
    max_tick_rate: f64,
    last_tick: Option<Instant>,
    next_tick: TickId,
    last_metrics: Option<TickMetrics>,
}

impl TickLoop {
    /// A paced loop over `shared` with a validated configuration.
    pub fn new(shared: SharedSpace, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shared,
            period: Duration::from_secs_f64(1.0 / config.max_tick_rate),
            min_tick_rate: config.min_tick_rate,
            max_tick_rate: config.max_tick_rate,
            last_tick: None,
            next_tick: TickId::default(),
            last_metrics: None,
        })
    }

    /// The space this loop drives.
    pub fn shared(&self) -> &SharedSpace {
        &self.shared
    }

    /// Metrics from the most recent completed tick.
    pub fn last_metrics(&self) -> Option<TickMetrics> {
        self.last_metrics
    }

    /// Ticks completed so far.
    pub fn completed_ticks(&self) -> u64 {
        self.next_tick.0
    }

    /// Time remaining until the next pacing slot opens.
    pub fn until_next_slot(&self) -> Duration {
        match self.last_tick {
            Some(last) => self.period.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Tick once if the pacing slot has elapsed.
    ///
    /// `commands_applied` is carried into the metrics so callers that
    /// drain a command queue first can report the batch size. Warns
    /// when the achieved rate falls below the configured floor.
    pub fn try_tick(&mut self, commands_applied: usize) -> Option<TickMetrics> {
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < self.period {
                return None;
            }
        }

        let started = Instant::now();
        let summary = self.shared.tick();
        let duration = started.elapsed();

        let achieved = match self.last_tick {
            Some(last) => {
                let gap = now.duration_since(last).as_secs_f64();
                if gap > 0.0 {
                    1.0 / gap
                } else {
                    self.max_tick_rate
                }
            }
            None => self.max_tick_rate,
        };
        if achieved < self.min_tick_rate {
            warn!(
                "space is ticking slowly: {achieved:.1} ticks/s against a floor of {}",
                self.min_tick_rate
            );
        }

        let metrics = TickMetrics {
            tick: self.next_tick,
            duration_us: duration.as_micros() as u64,
            ticked: summary.ticked,
            gravity_moves: summary.gravity_moves,
            gravity_skips: summary.gravity_skips,
            commands_applied,
            achieved_rate: achieved,
        };
        self.next_tick = self.next_tick.successor();
        self.last_tick = Some(now);
        self.last_metrics = Some(metrics);
        Some(metrics)
    }
}
