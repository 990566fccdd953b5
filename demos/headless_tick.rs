//! Advance a showcase without a window and report what moved.
//!
//! Exercises the full mount/advance path (layouts, animators, dirty
//! tracking) with no GPU. Run with: cargo run --example headless_tick

use vitrine::Showcase;
use vitrine_core::{MountedScene, Primitive};

fn main() {
    env_logger::init();

    let scene = Showcase::Stats.scene();
    let mut mounted = MountedScene::from_template(&scene, Some(42));

    // Two seconds of 60 fps frames
    for _ in 0..120 {
        mounted.advance(1.0 / 60.0);
    }

    for entity in mounted.world.iter() {
        let name = entity.name.as_deref().unwrap_or("<unnamed>");
        match &entity.primitive {
            Primitive::Mesh(_) => {
                println!(
                    "{:28} scale.y {:.3}  pos.y {:.3}",
                    name, entity.transform.scale.y, entity.transform.position.y
                );
            }
            _ => println!("{:28} {} vertices", name, entity.primitive.vertex_count()),
        }
    }

    println!("clock: {:.2}s", mounted.elapsed());
}
