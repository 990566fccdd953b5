//! Point-field animators
//!
//! Drift mutates positions cumulatively from their prior values; ripple
//! recomputes heights from the home layout, so it is stateless given the
//! elapsed time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cumulative wander for scattered particles, plus a slow spin of the
/// whole field about the Y axis
///
/// Each frame a point moves by a small offset derived from its own prior
/// coordinates, so neighboring points follow different paths while the
/// field as a whole stays inside its original neighborhood.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drift {
    /// Per-frame displacement magnitude
    pub amplitude: f32,
    /// Field yaw rate in radians per second
    pub spin_rate: f32,
}

impl Drift {
    pub fn new(amplitude: f32, spin_rate: f32) -> Self {
        Self {
            amplitude,
            spin_rate,
        }
    }

    /// One point's next position, computed purely from (t, prior position)
    #[inline]
    pub fn displaced(&self, t: f32, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x + (t + p.y).cos() * self.amplitude,
            p.y + (t + p.x).sin() * self.amplitude,
            p.z,
        )
    }

    /// Field yaw angle at elapsed time `t`
    #[inline]
    pub fn angle(&self, t: f32) -> f32 {
        self.spin_rate * t
    }

    /// Apply one frame of drift to every point
    pub fn apply(&self, t: f32, positions: &mut [Vec3]) {
        for p in positions {
            *p = self.displaced(t, *p);
        }
    }
}

/// Traveling height wave radiating from the origin
///
/// Heights are recomputed from the home layout every frame:
/// `y = sin(d * frequency - t * speed) * amplitude` with `d` the
/// horizontal distance from the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ripple {
    /// Spatial frequency of the wave
    pub frequency: f32,
    /// Outward travel speed
    pub speed: f32,
    /// Peak height
    pub amplitude: f32,
}

impl Ripple {
    pub fn new(frequency: f32, speed: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            speed,
            amplitude,
        }
    }

    /// Height of the dot whose home position is `home` at elapsed time `t`
    #[inline]
    pub fn height(&self, t: f32, home: Vec3) -> f32 {
        let d = (home.x * home.x + home.z * home.z).sqrt();
        (d * self.frequency - t * self.speed).sin() * self.amplitude
    }

    /// Recompute every dot's height for elapsed time `t`
    ///
    /// `home` and `positions` come from the same field, so the lengths
    /// match by construction.
    pub fn apply(&self, t: f32, home: &[Vec3], positions: &mut [Vec3]) {
        for (p, h) in positions.iter_mut().zip(home) {
            p.y = self.height(t, *h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_is_pure() {
        let drift = Drift::new(0.01, 0.05);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(drift.displaced(4.2, p), drift.displaced(4.2, p));
    }

    #[test]
    fn test_drift_zero_amplitude_is_identity() {
        let drift = Drift::new(0.0, 0.05);
        let p = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(drift.displaced(10.0, p), p);
    }

    #[test]
    fn test_drift_keeps_depth() {
        let drift = Drift::new(0.01, 0.0);
        let p = Vec3::new(0.3, 0.7, -4.0);
        assert_eq!(drift.displaced(1.0, p).z, -4.0);
    }

    #[test]
    fn test_drift_step_is_bounded() {
        let drift = Drift::new(0.01, 0.0);
        let p = Vec3::new(5.0, -3.0, 1.0);
        let q = drift.displaced(2.0, p);
        assert!((q - p).length() <= 0.01 * 2.0_f32.sqrt() + 1e-6);
    }

    #[test]
    fn test_drift_accumulates() {
        let drift = Drift::new(0.01, 0.0);
        let mut positions = vec![Vec3::new(0.25, 0.5, 0.0)];
        let start = positions[0];

        drift.apply(0.7, &mut positions);
        let after_one = positions[0];
        drift.apply(0.7, &mut positions);

        assert_ne!(after_one, start);
        assert_ne!(positions[0], after_one);
    }

    #[test]
    fn test_drift_empty_field_is_noop() {
        let drift = Drift::new(0.01, 0.05);
        let mut positions: Vec<Vec3> = Vec::new();
        drift.apply(1.0, &mut positions);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_drift_angle_linear() {
        let drift = Drift::new(0.01, 0.05);
        assert_eq!(drift.angle(0.0), 0.0);
        assert!((drift.angle(10.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ripple_is_stateless() {
        let ripple = Ripple::new(0.3, 2.0, 0.5);
        let home = vec![Vec3::new(3.0, 0.0, 4.0), Vec3::new(-1.0, 0.0, 0.0)];
        let mut a = home.clone();
        let mut b = home.clone();

        ripple.apply(1.5, &home, &mut a);
        // A second field catching up in one jump lands on the same heights
        ripple.apply(0.5, &home, &mut b);
        ripple.apply(1.5, &home, &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_ripple_height_bounded() {
        let ripple = Ripple::new(0.3, 2.0, 0.5);
        for i in 0..50 {
            let home = Vec3::new(i as f32, 0.0, -(i as f32) * 0.5);
            assert!(ripple.height(i as f32 * 0.1, home).abs() <= 0.5);
        }
    }

    #[test]
    fn test_ripple_at_origin() {
        let ripple = Ripple::new(0.3, 2.0, 0.5);
        let expected = (-2.0_f32).sin() * 0.5;
        assert!((ripple.height(1.0, Vec3::ZERO) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_ripple_only_touches_height() {
        let ripple = Ripple::new(0.3, 2.0, 0.5);
        let home = vec![Vec3::new(2.0, 0.0, -3.0)];
        let mut positions = home.clone();
        ripple.apply(2.2, &home, &mut positions);
        assert_eq!(positions[0].x, 2.0);
        assert_eq!(positions[0].z, -3.0);
    }
}
