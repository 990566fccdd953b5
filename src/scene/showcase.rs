//! The six built-in showcase scenes
//!
//! Each builder composes one Scene template: camera, lights, fog, and
//! animated entities. All numeric parameters live here; nothing is computed
//! at runtime beyond what the animators do per frame.

use glam::Vec3;
use vitrine_core::{
    Animation, CameraConfig, Distort, Drift, EntityTemplate, Fog, Growth, Light, Material,
    PrimitiveTemplate, Ripple, Scene, Spin, Sway, Transform, Tumble,
};

// Brand palette
const CYAN: [f32; 3] = [0.0, 0.831, 1.0];
const PINK: [f32; 3] = [1.0, 0.42, 0.616];
const PURPLE: [f32; 3] = [0.753, 0.518, 0.988];
const GREEN: [f32; 3] = [0.063, 0.725, 0.506];
const AMBER: [f32; 3] = [0.961, 0.62, 0.043];
const NIGHT: [f32; 3] = [0.039, 0.039, 0.059];
const SLATE: [f32; 3] = [0.118, 0.161, 0.231];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// One of the built-in showcase scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    /// Full-screen particle field background
    Particles,
    /// Rippling dot grid with a rotating connection ring
    TechGrid,
    /// Three floating service cards
    ServiceCards,
    /// Five distorted service cubes around a spinning ring
    ServiceCubes,
    /// Staged-growth statistic bars over a grid floor
    Stats,
    /// Interlocked torus logotype
    Logo,
}

impl Showcase {
    /// All showcases, in display order
    pub const ALL: [Showcase; 6] = [
        Showcase::Particles,
        Showcase::TechGrid,
        Showcase::ServiceCards,
        Showcase::ServiceCubes,
        Showcase::Stats,
        Showcase::Logo,
    ];

    /// Look up a showcase by its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "particles" => Some(Showcase::Particles),
            "tech_grid" => Some(Showcase::TechGrid),
            "service_cards" => Some(Showcase::ServiceCards),
            "service_cubes" => Some(Showcase::ServiceCubes),
            "stats" => Some(Showcase::Stats),
            "logo" => Some(Showcase::Logo),
            _ => None,
        }
    }

    /// The config name of this showcase
    pub fn name(&self) -> &'static str {
        match self {
            Showcase::Particles => "particles",
            Showcase::TechGrid => "tech_grid",
            Showcase::ServiceCards => "service_cards",
            Showcase::ServiceCubes => "service_cubes",
            Showcase::Stats => "stats",
            Showcase::Logo => "logo",
        }
    }

    /// Build the scene template for this showcase
    pub fn scene(&self) -> Scene {
        match self {
            Showcase::Particles => particles(),
            Showcase::TechGrid => tech_grid(),
            Showcase::ServiceCards => service_cards(),
            Showcase::ServiceCubes => service_cubes(),
            Showcase::Stats => stats(),
            Showcase::Logo => logo(),
        }
    }
}

/// Full-screen background: 2000 drifting particles in random hues
fn particles() -> Scene {
    let mut scene = Scene::new(
        "Particles",
        CameraConfig {
            position: [0.0, 0.0, 15.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 75.0,
            near: 0.1,
            far: 100.0,
        },
    );

    scene.add_entity(
        EntityTemplate::new(
            PrimitiveTemplate::Scatter {
                count: 2000,
                extent: [30.0, 30.0, 20.0],
                size: 0.1,
                opacity: 0.8,
                additive: true,
            },
            Transform::identity(),
            Material::default(),
        )
        .with_name("particles")
        .with_animation(Animation::Drift(Drift::new(0.01, 0.05))),
    );

    scene
}

/// Section backdrop: rippling dot grid plus a slowly rotating ring
fn tech_grid() -> Scene {
    let mut scene = Scene::new(
        "Tech Grid",
        CameraConfig {
            position: [0.0, 15.0, 15.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 100.0,
        },
    )
    .with_fog(Fog {
        color: NIGHT,
        near: 15.0,
        far: 35.0,
    });

    scene.add_entity(
        EntityTemplate::new(
            PrimitiveTemplate::GridDots {
                half_size: 30,
                spacing: 1.0,
                size: 0.05,
                opacity: 0.6,
            },
            Transform::identity(),
            Material::default(),
        )
        .with_name("grid_dots")
        .with_animation(Animation::Ripple(Ripple::new(0.3, 2.0, 0.5))),
    );

    scene.add_entity(
        EntityTemplate::new(
            PrimitiveTemplate::Ring {
                radius: 8.0,
                segments: 12,
            },
            Transform::identity(),
            Material::default().with_opacity(0.4),
        )
        .with_name("connection_ring")
        .with_animation(Animation::Spin(Spin::new(Vec3::new(0.0, 0.1, 0.0)))),
    );

    scene
}

/// Three phase-staggered floating cards
fn service_cards() -> Scene {
    let mut scene = Scene::new(
        "Service Cards",
        CameraConfig {
            position: [0.0, 0.0, 12.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 50.0,
            near: 0.1,
            far: 100.0,
        },
    )
    .with_light(Light::Ambient {
        color: WHITE,
        intensity: 0.5,
    })
    .with_light(Light::Spot {
        position: [10.0, 10.0, 10.0],
        angle: 0.15,
        penumbra: 1.0,
        color: WHITE,
        intensity: 1.0,
    })
    .with_light(Light::Point {
        position: [-10.0, -10.0, -10.0],
        color: CYAN,
        intensity: 0.5,
    });

    for (index, (x, color)) in [(-4.0, CYAN), (0.0, PINK), (4.0, PURPLE)].iter().enumerate() {
        scene.add_entity(
            EntityTemplate::new(
                PrimitiveTemplate::Box {
                    size: [2.0, 2.5, 0.3],
                    offset: [0.0; 3],
                },
                Transform::from_position(Vec3::new(*x, 0.0, 0.0)),
                Material {
                    base_color: *color,
                    metallic: 0.9,
                    roughness: 0.1,
                    emissive: [0.0; 3],
                    emissive_intensity: 0.0,
                    opacity: 0.8,
                },
            )
            .with_name(format!("card_{}", index))
            .with_animation(Animation::Sway(Sway::new(0.2, 0.5, 0.5, index as f32))),
        );
    }

    scene
}

/// Five tumbling distorted cubes around a spinning torus ring
fn service_cubes() -> Scene {
    let mut scene = Scene::new(
        "Service Cubes",
        CameraConfig {
            position: [0.0, 0.0, 15.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 100.0,
        },
    )
    .with_light(Light::Ambient {
        color: WHITE,
        intensity: 0.5,
    })
    .with_light(Light::Spot {
        position: [10.0, 10.0, 10.0],
        angle: 0.15,
        penumbra: 1.0,
        color: WHITE,
        intensity: 1.0,
    })
    .with_light(Light::Point {
        position: [-10.0, -10.0, -10.0],
        color: CYAN,
        intensity: 1.0,
    });

    scene.add_entity(
        EntityTemplate::new(
            PrimitiveTemplate::Torus {
                radius: 6.0,
                tube: 0.2,
                radial_segments: 16,
                tubular_segments: 100,
            },
            Transform::identity(),
            Material {
                base_color: CYAN,
                metallic: 0.9,
                roughness: 0.1,
                emissive: CYAN,
                emissive_intensity: 0.2,
                opacity: 0.6,
            },
        )
        .with_name("spinning_ring")
        .with_animation(Animation::Spin(Spin::new(Vec3::new(0.3, 0.5, 0.0)))),
    );

    let cubes: [([f32; 3], [f32; 3], &str); 5] = [
        ([-4.0, 2.0, 0.0], CYAN, "AI"),
        ([4.0, 2.0, 0.0], PINK, "WEB"),
        ([-4.0, -2.0, 0.0], PURPLE, "BOT"),
        ([4.0, -2.0, 0.0], GREEN, "APP"),
        ([0.0, 0.0, 0.0], AMBER, "DB"),
    ];

    for (index, (position, color, icon)) in cubes.iter().enumerate() {
        scene.add_entity(
            EntityTemplate::new(
                PrimitiveTemplate::Box {
                    size: [2.0, 2.0, 2.0],
                    offset: [0.0; 3],
                },
                Transform::from_position(Vec3::from_array(*position)),
                Material {
                    base_color: *color,
                    metallic: 0.9,
                    roughness: 0.2,
                    emissive: *color,
                    emissive_intensity: 0.4,
                    opacity: 1.0,
                },
            )
            .with_name(format!("cube_{}", icon.to_lowercase()))
            .with_animation(Animation::Tumble(Tumble::new(0.3, 0.5, index as f32)))
            .with_animation(Animation::Distort(Distort::new(0.3, 2.0)))
            .with_caption(*icon, ""),
        );
    }

    scene
}

/// Four staged-growth statistic bars over a grid floor
fn stats() -> Scene {
    let mut scene = Scene::new(
        "Stats",
        CameraConfig {
            position: [8.0, 6.0, 8.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 50.0,
            near: 0.1,
            far: 100.0,
        },
    )
    .with_fog(Fog {
        color: NIGHT,
        near: 10.0,
        far: 25.0,
    })
    .with_light(Light::Ambient {
        color: WHITE,
        intensity: 0.4,
    })
    .with_light(Light::Spot {
        position: [10.0, 15.0, 10.0],
        angle: 0.3,
        penumbra: 1.0,
        color: WHITE,
        intensity: 1.0,
    })
    .with_light(Light::Point {
        position: [-10.0, 10.0, -10.0],
        color: CYAN,
        intensity: 0.5,
    });

    scene.add_entity(
        EntityTemplate::new(
            PrimitiveTemplate::GridFloor {
                size: 20.0,
                divisions: 20,
                center_color: CYAN,
                grid_color: SLATE,
            },
            Transform::identity(),
            Material::default().with_opacity(0.8),
        )
        .with_name("grid_floor"),
    );

    let bars: [(f32, f32, [f32; 3], &str, &str); 4] = [
        (-4.0, 4.0, CYAN, "150+", "Projects Completed"),
        (-1.3, 3.0, PINK, "80+", "Active Clients"),
        (1.3, 2.5, PURPLE, "15+", "Countries Served"),
        (4.0, 2.0, GREEN, "5+", "Years Experience"),
    ];

    for (x, height, color, value, label) in bars {
        let slug = label.to_lowercase().replace(' ', "_");

        // The bar grows out of the floor: its box is anchored at the local
        // origin and the growth animator scales it up along Y
        scene.add_entity(
            EntityTemplate::new(
                PrimitiveTemplate::Box {
                    size: [1.2, height, 1.2],
                    offset: [0.0, height / 2.0, 0.0],
                },
                Transform::from_position(Vec3::new(x, 0.0, 0.0)),
                Material {
                    base_color: color,
                    metallic: 0.8,
                    roughness: 0.2,
                    emissive: color,
                    emissive_intensity: 0.3,
                    opacity: 1.0,
                },
            )
            .with_name(format!("bar_{}", slug))
            .with_animation(Animation::Growth(Growth::new(height, 0.05)))
            .with_caption(value, label),
        );

        // Glow disc riding the top edge, growing with the same schedule
        scene.add_entity(
            EntityTemplate::new(
                PrimitiveTemplate::Cylinder {
                    radius_top: 0.7,
                    radius_bottom: 0.7,
                    height: 0.1,
                    segments: 32,
                    offset: [0.0, height + 0.1, 0.0],
                },
                Transform::from_position(Vec3::new(x, 0.0, 0.0)),
                Material {
                    base_color: color,
                    metallic: 0.0,
                    roughness: 1.0,
                    emissive: color,
                    emissive_intensity: 1.0,
                    opacity: 0.8,
                },
            )
            .with_name(format!("glow_{}", slug))
            .with_animation(Animation::Growth(Growth::new(height, 0.05))),
        );
    }

    scene
}

/// Interlocked torus logotype, slowly rotating and wobbling
fn logo() -> Scene {
    let mut scene = Scene::new(
        "Logo",
        CameraConfig {
            position: [0.0, 0.0, 8.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 100.0,
        },
    )
    .with_light(Light::Ambient {
        color: WHITE,
        intensity: 0.5,
    })
    .with_light(Light::Point {
        position: [10.0, 10.0, 10.0],
        color: WHITE,
        intensity: 1.0,
    })
    .with_light(Light::Point {
        position: [-10.0, -10.0, -10.0],
        color: CYAN,
        intensity: 0.5,
    });

    let tori = [
        (Vec3::ZERO, PINK, "logo_ring_a"),
        (
            Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            PURPLE,
            "logo_ring_b",
        ),
    ];

    for (rotation, color, name) in tori {
        scene.add_entity(
            EntityTemplate::new(
                PrimitiveTemplate::Torus {
                    radius: 2.0,
                    tube: 0.5,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
                Transform::from_position_rotation(Vec3::ZERO, rotation),
                Material {
                    base_color: color,
                    metallic: 0.9,
                    roughness: 0.2,
                    emissive: [0.0; 3],
                    emissive_intensity: 0.0,
                    opacity: 1.0,
                },
            )
            .with_name(name)
            .with_animation(Animation::Spin(Spin::new(Vec3::new(0.0, 0.2, 0.0))))
            .with_animation(Animation::Distort(Distort::new(0.3, 1.5))),
        );
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::MountedScene;

    #[test]
    fn test_from_name_round_trips() {
        for showcase in Showcase::ALL {
            assert_eq!(Showcase::from_name(showcase.name()), Some(showcase));
        }
        assert_eq!(Showcase::from_name("nope"), None);
    }

    #[test]
    fn test_particles_scene() {
        let scene = particles();
        assert_eq!(scene.entities.len(), 1);
        assert_eq!(scene.camera.fov, 75.0);
        assert!(scene.lights.is_empty());
        match &scene.entities[0].primitive {
            PrimitiveTemplate::Scatter { count, extent, .. } => {
                assert_eq!(*count, 2000);
                assert_eq!(*extent, [30.0, 30.0, 20.0]);
            }
            _ => panic!("expected scatter"),
        }
    }

    #[test]
    fn test_tech_grid_scene() {
        let scene = tech_grid();
        assert_eq!(scene.entities.len(), 2);
        assert!(scene.fog.is_some());
        let mounted = MountedScene::from_template(&scene, Some(1));
        let (_, dots) = mounted.world.get_by_name("grid_dots").unwrap();
        assert_eq!(dots.primitive.vertex_count(), 61 * 61);
        let (_, ring) = mounted.world.get_by_name("connection_ring").unwrap();
        assert_eq!(ring.primitive.vertex_count(), 24);
    }

    #[test]
    fn test_service_cards_scene() {
        let scene = service_cards();
        assert_eq!(scene.entities.len(), 3);
        assert_eq!(scene.lights.len(), 3);
        // Sibling phases are staggered by index
        for (i, entity) in scene.entities.iter().enumerate() {
            match &entity.animations[0] {
                Animation::Sway(sway) => assert_eq!(sway.phase, i as f32),
                _ => panic!("expected sway"),
            }
        }
    }

    #[test]
    fn test_service_cubes_scene() {
        let scene = service_cubes();
        // Ring + five cubes
        assert_eq!(scene.entities.len(), 6);
        // Every cube carries both a tumble and a distortion
        for entity in scene.entities.iter().skip(1) {
            assert_eq!(entity.animations.len(), 2);
            assert!(entity.caption.is_some());
        }
    }

    #[test]
    fn test_stats_scene() {
        let scene = stats();
        // Grid floor + four bars with a glow each
        assert_eq!(scene.entities.len(), 9);
        assert!(scene.fog.is_some());

        let growth_targets: Vec<f32> = scene
            .entities
            .iter()
            .filter_map(|e| match e.animations.first() {
                Some(Animation::Growth(g)) => Some(g.target),
                _ => None,
            })
            .collect();
        assert_eq!(
            growth_targets,
            vec![4.0, 4.0, 3.0, 3.0, 2.5, 2.5, 2.0, 2.0]
        );
    }

    #[test]
    fn test_logo_scene() {
        let scene = logo();
        assert_eq!(scene.entities.len(), 2);
        // Second torus stands upright
        let rot = scene.entities[1].transform.rotation;
        assert!((rot.x - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_all_showcases_mount() {
        for showcase in Showcase::ALL {
            let scene = showcase.scene();
            let mounted = MountedScene::from_template(&scene, Some(42));
            assert_eq!(mounted.world.entity_count(), scene.entities.len());
            assert!(!mounted.world.is_empty(), "{} is empty", showcase.name());
        }
    }

    #[test]
    fn test_all_showcases_animate() {
        for showcase in Showcase::ALL {
            let scene = showcase.scene();
            let mut mounted = MountedScene::from_template(&scene, Some(42));
            mounted.world.clear_all_dirty();
            mounted.advance(0.016);
            assert!(
                mounted.world.has_dirty_entities(),
                "{} did not animate",
                showcase.name()
            );
        }
    }
}
