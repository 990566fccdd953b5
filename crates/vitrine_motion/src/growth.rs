//! Staged bar growth
//!
//! The one animator with real state: a monotonic progress variable that
//! climbs by a fixed increment each frame until the bar reaches its target
//! height, then holds forever.

use serde::{Deserialize, Serialize};

/// Growth phase of a stat bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthState {
    /// Still scaling up toward the target
    Growing,
    /// Reached the target; scale stays at 1 from here on
    Settled,
}

/// Staged scale-up toward a target height
///
/// `advance` is called once per frame. The returned scale factor is
/// non-decreasing, reaches exactly 1.0 within `frames_to_settle()` calls,
/// and stays there: the Growing -> Settled transition is irreversible and
/// advancing a settled bar mutates nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Growth {
    /// Target height the bar grows toward
    pub target: f32,
    /// Accumulated height per frame
    pub increment: f32,
    #[serde(skip)]
    current: f32,
    #[serde(skip, default = "initial_state")]
    state: GrowthState,
}

fn initial_state() -> GrowthState {
    GrowthState::Growing
}

impl Growth {
    /// Create a bar growing toward `target` in steps of `increment`
    pub fn new(target: f32, increment: f32) -> Self {
        assert!(target > 0.0, "growth target must be positive");
        assert!(increment > 0.0, "growth increment must be positive");
        Self {
            target,
            increment,
            current: 0.0,
            state: GrowthState::Growing,
        }
    }

    /// Advance one frame and return the current scale factor in [0, 1]
    pub fn advance(&mut self) -> f32 {
        if self.state == GrowthState::Growing {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.state = GrowthState::Settled;
            }
        }
        self.scale()
    }

    /// Current scale factor without advancing
    #[inline]
    pub fn scale(&self) -> f32 {
        (self.current / self.target).min(1.0)
    }

    /// Whether the bar has reached its target
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.state == GrowthState::Settled
    }

    /// Number of frames until a freshly created bar settles
    pub fn frames_to_settle(&self) -> u32 {
        (self.target / self.increment).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_non_decreasing() {
        let mut growth = Growth::new(4.0, 0.05);
        let mut last = 0.0;
        for _ in 0..100 {
            let scale = growth.advance();
            assert!(scale >= last, "scale shrank: {} -> {}", last, scale);
            last = scale;
        }
    }

    #[test]
    fn test_settles_within_expected_frames() {
        for (target, increment) in [(4.0, 0.05), (3.0, 0.05), (2.5, 0.05), (2.0, 0.05), (1.0, 0.3)]
        {
            let mut growth = Growth::new(target, increment);
            let frames = growth.frames_to_settle();
            for _ in 0..frames {
                growth.advance();
            }
            assert!(growth.is_settled(), "not settled after {} frames", frames);
            assert_eq!(growth.scale(), 1.0);
        }
    }

    #[test]
    fn test_not_settled_one_frame_early() {
        let mut growth = Growth::new(4.0, 0.05);
        for _ in 0..growth.frames_to_settle() - 1 {
            growth.advance();
        }
        assert!(!growth.is_settled());
        assert!(growth.scale() < 1.0);
    }

    #[test]
    fn test_settled_is_idempotent() {
        let mut growth = Growth::new(2.0, 0.5);
        for _ in 0..growth.frames_to_settle() {
            growth.advance();
        }
        let settled = growth;
        for _ in 0..10 {
            assert_eq!(growth.advance(), 1.0);
        }
        assert_eq!(growth.current, settled.current);
    }

    #[test]
    fn test_scale_never_exceeds_one() {
        // Increment larger than the target settles in a single frame
        let mut growth = Growth::new(0.1, 5.0);
        assert_eq!(growth.advance(), 1.0);
        assert!(growth.is_settled());
    }

    #[test]
    fn test_fresh_bar_starts_at_zero() {
        let growth = Growth::new(4.0, 0.05);
        assert_eq!(growth.scale(), 0.0);
        assert!(!growth.is_settled());
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_zero_increment_rejected() {
        Growth::new(4.0, 0.0);
    }
}
