//! Per-frame simulation system
//!
//! Manages the animation tick:
//! - Delta time calculation
//! - Scene clock advance
//! - Animator execution via the world
//! - Dirty-state reporting for the renderer

use std::time::Instant;

use vitrine_core::MountedScene;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether any entity has buffers or transforms to re-upload
    pub geometry_dirty: bool,
    /// Scene clock after the tick, in seconds
    pub elapsed: f32,
}

/// Drives the mounted scene's animators once per rendered frame
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one simulation frame
    pub fn update(&mut self, scene: &mut MountedScene) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        // Cap dt so the first frame or a window-focus stall doesn't jump
        // the scene clock
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        scene.advance(dt);

        SimulationResult {
            geometry_dirty: scene.world.has_dirty_entities(),
            elapsed: scene.elapsed(),
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{CameraConfig, Scene};

    #[test]
    fn test_update_advances_clock() {
        let scene = Scene::new("Empty", CameraConfig::default());
        let mut mounted = MountedScene::from_template(&scene, Some(1));
        let mut sim = SimulationSystem::new();

        std::thread::sleep(std::time::Duration::from_millis(5));
        let result = sim.update(&mut mounted);

        assert!(result.elapsed > 0.0);
        // No entities, nothing to upload
        assert!(!result.geometry_dirty);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.last_frame.elapsed().as_secs() < 1);
    }
}
