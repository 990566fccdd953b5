//! Print every built-in showcase with its composition summary.
//!
//! Run with: cargo run --example list_showcases

use vitrine::Showcase;
use vitrine_core::MountedScene;

fn main() {
    env_logger::init();

    for showcase in Showcase::ALL {
        let scene = showcase.scene();
        let mounted = MountedScene::from_template(&scene, Some(0));

        let vertices: usize = mounted
            .world
            .iter()
            .map(|e| e.primitive.vertex_count())
            .sum();

        println!(
            "{:14} {:14} {:3} entities, {:2} lights, fog: {:5}, {:6} vertices",
            showcase.name(),
            scene.name,
            mounted.world.entity_count(),
            scene.lights.len(),
            scene.fog.is_some(),
            vertices,
        );
    }
}
