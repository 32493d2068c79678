//! Gravity parameters and the per-tick attraction speed.

/// Newtonian gravitational constant, m³/(kg·s²).
pub const G_CONSTANT: f64 = 6.67e-11;

/// Tuning knobs for the gravity applied during [`crate::Space::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityParams {
    /// Gravitational constant; scale to taste for snappier worlds.
    pub g_constant: f64,
    /// The tick rate the speed is normalised against, so per-tick
    /// movement stays rate-independent.
    pub max_tick_rate: f64,
}

impl Default for GravityParams {
    fn default() -> Self {
        Self {
            g_constant: G_CONSTANT,
            max_tick_rate: 64.0,
        }
    }
}

impl GravityParams {
    /// Distance an object of mass `m1` moves towards a cluster of mass
    /// `m2` at `distance` during one tick.
    pub fn speed(&self, m1: f64, m2: f64, distance: f64) -> f64 {
        ((self.g_constant * m1 * m2) / (distance * distance)) / self.max_tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_follows_inverse_square() {
        let params = GravityParams::default();
        let near = params.speed(1000.0, 1000.0, 1.0);
        let far = params.speed(1000.0, 1000.0, 2.0);
        assert!((near / far - 4.0).abs() < 1e-9);
    }

    #[test]
    fn speed_scales_down_with_tick_rate() {
        let fast = GravityParams {
            max_tick_rate: 128.0,
            ..GravityParams::default()
        };
        let base = GravityParams::default();
        let ratio = base.speed(10.0, 10.0, 1.0) / fast.speed(10.0, 10.0, 1.0);
        assert!((ratio - 2.0).abs() < 1e-9);
    }
}
