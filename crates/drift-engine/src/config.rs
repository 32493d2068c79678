//! Engine configuration and validation.

use std::error::Error;
use std::fmt;

use drift_space::gravity::{GravityParams, G_CONSTANT};

/// Tunable parameters for a running engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Ceiling on ticks per second; the loop idles between slots.
    pub max_tick_rate: f64,
    /// Floor below which the achieved rate draws a warning.
    pub min_tick_rate: f64,
    /// Bound on queued command batches awaiting the tick thread.
    pub ingress_capacity: usize,
    /// Gravitational constant handed to the space.
    pub g_constant: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tick_rate: 64.0,
            min_tick_rate: 10.0,
            ingress_capacity: 64,
            g_constant: G_CONSTANT,
        }
    }
}

impl EngineConfig {
    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_tick_rate", self.max_tick_rate),
            ("min_tick_rate", self.min_tick_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveTickRate { name, value });
            }
        }
        if self.min_tick_rate > self.max_tick_rate {
            return Err(ConfigError::MinAboveMax {
                min: self.min_tick_rate,
                max: self.max_tick_rate,
            });
        }
        if self.ingress_capacity == 0 {
            return Err(ConfigError::ZeroIngressCapacity);
        }
        if !self.g_constant.is_finite() {
            return Err(ConfigError::NonFiniteGravity {
                value: self.g_constant,
            });
        }
        Ok(())
    }

    /// Gravity parameters for a space driven at this configuration.
    pub fn gravity_params(&self) -> GravityParams {
        GravityParams {
            g_constant: self.g_constant,
            max_tick_rate: self.max_tick_rate,
        }
    }
}

/// Rejected engine configurations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A tick rate was zero, negative, or not finite.
    NonPositiveTickRate {
        /// Which field.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The warning floor exceeds the pacing ceiling.
    MinAboveMax {
        /// Configured floor.
        min: f64,
        /// Configured ceiling.
        max: f64,
    },
    /// A zero-capacity ingress queue could never accept a command.
    ZeroIngressCapacity,
    /// A non-finite gravitational constant would poison every gravity
    /// speed and, through relocation, the position index itself.
    NonFiniteGravity {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTickRate { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            Self::MinAboveMax { min, max } => {
                write!(f, "min_tick_rate {min} exceeds max_tick_rate {max}")
            }
            Self::ZeroIngressCapacity => write!(f, "ingress_capacity must be at least 1"),
            Self::NonFiniteGravity { value } => {
                write!(f, "g_constant must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
