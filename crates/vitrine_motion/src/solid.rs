//! Transform animators for floating and rotating solids
//!
//! All three are pure functions of elapsed time and a static per-entity
//! phase, so phase-staggered siblings never share state: each computes its
//! own angles from its own index and the scene clock.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Constant-rate rotation about any combination of axes
///
/// The angle is set absolutely (`rates * t`), never integrated, so the
/// result is independent of frame timing history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spin {
    /// Rotation rate per axis in radians per second
    pub rates: Vec3,
}

impl Spin {
    pub fn new(rates: Vec3) -> Self {
        Self { rates }
    }

    /// Rotation angles at elapsed time `t`, relative to the rest rotation
    #[inline]
    pub fn angles(&self, t: f32) -> Vec3 {
        self.rates * t
    }
}

/// Rock-and-bob motion for floating cards
///
/// Yaw rocks back and forth while the card bobs vertically at half the
/// rocking rate; `phase` staggers siblings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sway {
    /// Peak yaw angle in radians
    pub rock: f32,
    /// Peak vertical offset
    pub bob: f32,
    /// Bob frequency relative to the clock (cards use 0.5)
    pub bob_rate: f32,
    /// Static phase offset, usually the entity's index
    pub phase: f32,
}

impl Sway {
    pub fn new(rock: f32, bob: f32, bob_rate: f32, phase: f32) -> Self {
        Self {
            rock,
            bob,
            bob_rate,
            phase,
        }
    }

    /// Yaw angle at elapsed time `t`
    #[inline]
    pub fn angle(&self, t: f32) -> f32 {
        (t + self.phase).sin() * self.rock
    }

    /// Vertical offset from the rest position at elapsed time `t`
    #[inline]
    pub fn offset(&self, t: f32) -> f32 {
        (t * self.bob_rate + self.phase).sin() * self.bob
    }
}

/// Rock-and-turn motion for service cubes
///
/// Pitch rocks sinusoidally while yaw turns continuously; `phase` both
/// staggers the rocking and fans out the yaw so siblings never align.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tumble {
    /// Peak pitch angle in radians
    pub rock: f32,
    /// Yaw rate in radians per second
    pub rate: f32,
    /// Static phase offset, usually the entity's index
    pub phase: f32,
}

impl Tumble {
    pub fn new(rock: f32, rate: f32, phase: f32) -> Self {
        Self { rock, rate, phase }
    }

    /// Pitch angle at elapsed time `t`
    #[inline]
    pub fn pitch(&self, t: f32) -> f32 {
        (t + self.phase).sin() * self.rock
    }

    /// Yaw angle at elapsed time `t`
    #[inline]
    pub fn yaw(&self, t: f32) -> f32 {
        t * self.rate + self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_starts_at_rest() {
        assert_eq!(Spin::new(Vec3::new(0.3, 0.5, 0.0)).angles(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_spin_is_absolute() {
        let spin = Spin::new(Vec3::new(0.0, 0.2, 0.0));
        // Evaluating intermediate times must not change the result at t
        let direct = spin.angles(8.0);
        let _ = spin.angles(3.0);
        let _ = spin.angles(5.0);
        assert_eq!(spin.angles(8.0), direct);
        assert!((direct.y - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_sway_is_pure() {
        let sway = Sway::new(0.2, 0.5, 0.5, 1.0);
        assert_eq!(sway.angle(2.5), sway.angle(2.5));
        assert_eq!(sway.offset(2.5), sway.offset(2.5));
    }

    #[test]
    fn test_sway_bounded() {
        let sway = Sway::new(0.2, 0.5, 0.5, 2.0);
        for i in 0..100 {
            let t = i as f32 * 0.3;
            assert!(sway.angle(t).abs() <= 0.2 + 1e-6);
            assert!(sway.offset(t).abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_sway_phase_staggers_siblings() {
        let a = Sway::new(0.2, 0.5, 0.5, 0.0);
        let b = Sway::new(0.2, 0.5, 0.5, 1.0);
        let t = 0.7;
        assert_ne!(a.angle(t), b.angle(t));
        assert_ne!(a.offset(t), b.offset(t));
    }

    #[test]
    fn test_tumble_pitch_bounded() {
        let tumble = Tumble::new(0.3, 0.5, 3.0);
        for i in 0..100 {
            assert!(tumble.pitch(i as f32 * 0.2).abs() <= 0.3 + 1e-6);
        }
    }

    #[test]
    fn test_tumble_yaw_advances() {
        let tumble = Tumble::new(0.3, 0.5, 2.0);
        assert!((tumble.yaw(0.0) - 2.0).abs() < 1e-6);
        assert!((tumble.yaw(4.0) - 4.0).abs() < 1e-6);
        assert!(tumble.yaw(10.0) > tumble.yaw(4.0));
    }

    #[test]
    fn test_tumble_phase_staggers_siblings() {
        let t = 1.3;
        let angles: Vec<f32> = (0..5)
            .map(|i| Tumble::new(0.3, 0.5, i as f32).yaw(t))
            .collect();
        for pair in angles.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
