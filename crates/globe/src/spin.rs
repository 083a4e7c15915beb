/// Auto-rotation rate (degrees per second).
pub const AUTO_ROTATE_DEG_PER_S: f64 = 4.0;

/// Maximum frame delta integrated per update (seconds). Large gaps are
/// capped rather than integrated to avoid visual jumps.
const MAX_FRAME_DT_S: f64 = 0.1;

/// Free-running globe spin accumulator.
///
/// The rotation feeds straight into the projector's azimuth offset. It is
/// kept in [0, 360) for display, but consumers must accept any value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    pub rotation_deg: f64,
    pub rate_deg_per_s: f64,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            rate_deg_per_s: AUTO_ROTATE_DEG_PER_S,
        }
    }
}

impl Spin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the accumulator by `dt_s` seconds of wall time.
    pub fn advance(&mut self, dt_s: f64) {
        let dt_s = if dt_s.is_finite() { dt_s } else { 0.0 };
        let dt_s = dt_s.clamp(0.0, MAX_FRAME_DT_S);
        self.rotation_deg = (self.rotation_deg + self.rate_deg_per_s * dt_s).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::Spin;

    #[test]
    fn advances_at_the_configured_rate() {
        let mut spin = Spin::new();
        spin.advance(0.05);
        assert!((spin.rotation_deg - 0.2).abs() < 1e-12);
    }

    #[test]
    fn wraps_at_a_full_turn() {
        let mut spin = Spin {
            rotation_deg: 359.9,
            ..Spin::default()
        };
        spin.advance(0.05);
        assert!((spin.rotation_deg - 0.1).abs() < 1e-9);
        assert!(spin.rotation_deg >= 0.0 && spin.rotation_deg < 360.0);
    }

    #[test]
    fn large_and_bogus_deltas_are_capped() {
        let mut spin = Spin::new();
        spin.advance(10.0);
        assert!((spin.rotation_deg - 0.4).abs() < 1e-12);

        spin.advance(f64::NAN);
        assert!((spin.rotation_deg - 0.4).abs() < 1e-12);

        spin.advance(-1.0);
        assert!((spin.rotation_deg - 0.4).abs() < 1e-12);
    }
}
