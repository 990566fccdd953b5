//! Scene templates and the mounted-scene lifecycle
//!
//! A [`Scene`] is the serializable description of one showcase: camera,
//! lights, fog, and entity templates. Scenes load from and save to RON
//! files. A [`MountedScene`] is a live instantiation: buffers allocated,
//! clock running. Dropping it releases everything - teardown is the
//! destructor, not a lifecycle callback.

use std::fs;
use std::io;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use vitrine_motion::Animation;

use crate::{Entity, Material, PrimitiveTemplate, Transform, World};

/// Camera parameters for a scene, set once at composition time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position
    pub position: [f32; 3],
    /// Point the camera looks at
    #[serde(default)]
    pub look_at: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    #[serde(default = "default_near")]
    pub near: f32,
    /// Far clipping plane
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    100.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 15.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: default_near(),
            far: default_far(),
        }
    }
}

/// A light in a scene
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Light {
    /// Uniform fill light
    Ambient { color: [f32; 3], intensity: f32 },
    /// Omnidirectional light at a position
    Point {
        position: [f32; 3],
        color: [f32; 3],
        intensity: f32,
    },
    /// Cone light aimed at the origin
    Spot {
        position: [f32; 3],
        angle: f32,
        penumbra: f32,
        color: [f32; 3],
        intensity: f32,
    },
}

/// Distance fog, fading geometry toward a background color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fog {
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

/// Display strings carried by an entity template (stat values, icons)
///
/// These are scene data, not geometry: they serialize with the scene and
/// show up in mount logs, but nothing rasterizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    /// Headline string (e.g. "150+")
    pub value: String,
    /// Secondary string (e.g. "Projects Completed")
    #[serde(default)]
    pub label: String,
}

/// A serializable entity template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityTemplate {
    /// Optional name (for lookup and logs)
    pub name: Option<String>,
    /// The pose the entity is composed at
    #[serde(default)]
    pub transform: Transform,
    /// Geometry construction parameters
    pub primitive: PrimitiveTemplate,
    /// Surface properties
    #[serde(default)]
    pub material: Material,
    /// Per-frame animators, applied in order
    #[serde(default)]
    pub animations: Vec<Animation>,
    /// Display strings, if any
    #[serde(default)]
    pub caption: Option<Caption>,
}

impl EntityTemplate {
    /// Create a new entity template
    pub fn new(primitive: PrimitiveTemplate, transform: Transform, material: Material) -> Self {
        Self {
            name: None,
            transform,
            primitive,
            material,
            animations: Vec::new(),
            caption: None,
        }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an animator (templates may carry several)
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animations.push(animation);
        self
    }

    /// Attach display strings
    pub fn with_caption(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.caption = Some(Caption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Instantiate this template into a live entity
    pub fn instantiate<R: rand::Rng>(&self, rng: &mut R) -> Entity {
        let mut entity =
            Entity::with_transform(self.primitive.instantiate(rng), self.transform, self.material);
        if let Some(ref name) = self.name {
            entity = entity.with_name(name.clone());
        }
        for animation in &self.animations {
            entity = entity.with_animation(animation.clone());
        }
        entity
    }
}

/// A serializable scene: camera, lights, fog, and entities
///
/// Scene configuration is static - it is set at composition time and never
/// mutated after mounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display and logs)
    pub name: String,
    /// Camera placement
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scene lights
    #[serde(default)]
    pub lights: Vec<Light>,
    /// Optional distance fog
    #[serde(default)]
    pub fog: Option<Fog>,
    /// Entity templates in this scene
    pub entities: Vec<EntityTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>, camera: CameraConfig) -> Self {
        Self {
            name: name.into(),
            camera,
            lights: Vec::new(),
            fog: None,
            entities: Vec::new(),
        }
    }

    /// Add a light to this scene
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set the fog for this scene
    pub fn with_fog(mut self, fog: Fog) -> Self {
        self.fog = Some(fog);
        self
    }

    /// Add an entity template
    pub fn add_entity(&mut self, entity: EntityTemplate) {
        self.entities.push(entity);
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

/// A live scene: instantiated world plus its clock
///
/// Buffers are allocated once here and owned exclusively by this scene.
/// Dropping the mounted scene is the teardown; the renderer-side resources
/// keyed to it go with it.
pub struct MountedScene {
    /// Scene name (from the template)
    pub name: String,
    /// Camera placement
    pub camera: CameraConfig,
    /// Scene lights
    pub lights: Vec<Light>,
    /// Optional distance fog
    pub fog: Option<Fog>,
    /// The live world with all entities
    pub world: World,
    elapsed: f32,
}

impl MountedScene {
    /// Instantiate a scene template
    ///
    /// `seed` fixes the random source for scatter layouts; `None` draws
    /// from entropy.
    pub fn from_template(template: &Scene, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = World::with_capacity(template.entities.len());
        for entity_template in &template.entities {
            world.add_entity(entity_template.instantiate(&mut rng));
            if let Some(ref caption) = entity_template.caption {
                log::debug!(
                    "  {}: {} {}",
                    entity_template.name.as_deref().unwrap_or("entity"),
                    caption.value,
                    caption.label
                );
            }
        }

        log::info!(
            "Mounted scene '{}' with {} entities",
            template.name,
            world.entity_count()
        );

        Self {
            name: template.name.clone(),
            camera: template.camera,
            lights: template.lights.clone(),
            fog: template.fog,
            world,
            elapsed: 0.0,
        }
    }

    /// Advance the scene clock by `dt` seconds and run one animation tick
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.world.update(self.elapsed);
    }

    /// Seconds since the scene was mounted
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Drop for MountedScene {
    fn drop(&mut self) {
        log::info!("Unmounted scene '{}'", self.name);
    }
}
