//! World container for entities
//!
//! The World owns every entity of a mounted scene and steps their animators
//! once per frame, sequentially, as a function of the scene clock.

use vitrine_motion::Animation;

use crate::{DirtyFlags, Entity, Primitive};

/// A handle to an entity in the world
///
/// Entities are never removed from a mounted scene, so a plain index is a
/// stable handle for the scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityHandle(usize);

impl EntityHandle {
    /// Raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Container for all entities of one scene
#[derive(Default)]
pub struct World {
    entities: Vec<Entity>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity, returning its handle
    pub fn add_entity(&mut self, entity: Entity) -> EntityHandle {
        let handle = EntityHandle(self.entities.len());
        self.entities.push(entity);
        handle
    }

    /// Get a reference to an entity by handle
    pub fn get_entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle.0)
    }

    /// Get a mutable reference to an entity by handle
    pub fn get_entity_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.entities.get_mut(handle.0)
    }

    /// Find an entity by name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityHandle, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .find(|(_, e)| e.name.as_deref() == Some(name))
            .map(|(i, e)| (EntityHandle(i), e))
    }

    /// Number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Iterate over handles and entities
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityHandle(i), e))
    }

    /// Run one animation tick at elapsed time `t` (seconds since mount)
    ///
    /// Every animator runs sequentially within the tick, in the order it was
    /// attached. Stateless animators derive the new pose from the entity's
    /// rest transform and `t` alone; dirty flags record what each entity
    /// needs re-uploaded.
    pub fn update(&mut self, t: f32) {
        for entity in &mut self.entities {
            let mut animations = std::mem::take(&mut entity.animations);
            let mut flags = DirtyFlags::NONE;
            for animation in &mut animations {
                flags |= apply_animation(entity, animation, t);
            }
            entity.animations = animations;
            entity.mark_dirty(flags);
        }
    }

    /// Whether any entity has pending uploads
    pub fn has_dirty_entities(&self) -> bool {
        self.entities.iter().any(|e| e.is_dirty())
    }

    /// Clear dirty flags on every entity (after upload)
    pub fn clear_all_dirty(&mut self) {
        for entity in &mut self.entities {
            entity.clear_dirty();
        }
    }
}

/// Apply one animator to its entity, returning what it dirtied
///
/// Animators that only fit one primitive kind (ripple on points, distort
/// on meshes) are no-ops on anything else.
fn apply_animation(entity: &mut Entity, animation: &mut Animation, t: f32) -> DirtyFlags {
    match animation {
        Animation::Drift(drift) => {
            entity.transform.rotation.y = entity.rest.rotation.y + drift.angle(t);
            if let Primitive::Points { field, .. } = &mut entity.primitive {
                drift.apply(t, field.positions_mut());
                DirtyFlags::TRANSFORM | DirtyFlags::BUFFER
            } else {
                DirtyFlags::TRANSFORM
            }
        }
        Animation::Ripple(ripple) => {
            if let Primitive::Points { field, .. } = &mut entity.primitive {
                let (home, positions) = field.home_and_positions_mut();
                ripple.apply(t, home, positions);
                DirtyFlags::BUFFER
            } else {
                DirtyFlags::NONE
            }
        }
        Animation::Spin(spin) => {
            entity.transform.rotation = entity.rest.rotation + spin.angles(t);
            DirtyFlags::TRANSFORM
        }
        Animation::Sway(sway) => {
            entity.transform.rotation.y = entity.rest.rotation.y + sway.angle(t);
            entity.transform.position.y = entity.rest.position.y + sway.offset(t);
            DirtyFlags::TRANSFORM
        }
        Animation::Tumble(tumble) => {
            entity.transform.rotation.x = entity.rest.rotation.x + tumble.pitch(t);
            entity.transform.rotation.y = entity.rest.rotation.y + tumble.yaw(t);
            DirtyFlags::TRANSFORM
        }
        Animation::Growth(growth) => {
            entity.transform.scale.y = entity.rest.scale.y * growth.advance();
            DirtyFlags::TRANSFORM
        }
        Animation::Distort(distort) => {
            if let Primitive::Mesh(mesh) = &mut entity.primitive {
                let (home, normals, positions) = mesh.deform_parts_mut();
                distort.apply(t, home, normals, positions);
                DirtyFlags::BUFFER
            } else {
                DirtyFlags::NONE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Transform};
    use glam::Vec3;
    use vitrine_geom::{box_mesh, GridLayout};
    use vitrine_motion::{Drift, Growth, Ripple, Sway};

    fn make_cube() -> Entity {
        Entity::new(Primitive::Mesh(box_mesh(Vec3::splat(2.0))))
    }

    fn make_grid(half_size: i32) -> Entity {
        Entity::new(Primitive::Points {
            field: GridLayout::new(half_size, 1.0).generate(),
            style: Default::default(),
        })
    }

    #[test]
    fn test_world_add_and_get() {
        let mut world = World::new();
        let handle = world.add_entity(make_cube());
        assert_eq!(handle.index(), 0);
        assert_eq!(world.entity_count(), 1);
        assert!(world.get_entity(handle).is_some());
    }

    #[test]
    fn test_world_get_by_name() {
        let mut world = World::new();
        world.add_entity(make_cube().with_name("ring"));
        world.add_entity(make_cube().with_name("logo"));

        let (handle, entity) = world.get_by_name("logo").unwrap();
        assert_eq!(handle.index(), 1);
        assert_eq!(entity.name.as_deref(), Some("logo"));
        assert!(world.get_by_name("missing").is_none());
    }

    #[test]
    fn test_update_without_animation_is_noop() {
        let mut world = World::new();
        let handle = world.add_entity(make_cube());
        world.clear_all_dirty();

        world.update(1.0);

        let entity = world.get_entity(handle).unwrap();
        assert!(!entity.is_dirty());
        assert_eq!(entity.transform.position, entity.rest.position);
    }

    #[test]
    fn test_sway_updates_transform() {
        let mut world = World::new();
        let rest = Transform::from_position(Vec3::new(-4.0, 0.0, 0.0));
        let entity = Entity::with_transform(
            Primitive::Mesh(box_mesh(Vec3::new(2.0, 2.5, 0.3))),
            rest,
            Material::default(),
        )
        .with_animation(Animation::Sway(Sway::new(0.2, 0.5, 0.5, 0.0)));
        let handle = world.add_entity(entity);
        world.clear_all_dirty();

        world.update(1.0);

        let entity = world.get_entity(handle).unwrap();
        assert!(entity.dirty_flags().contains(DirtyFlags::TRANSFORM));
        assert!(!entity.dirty_flags().contains(DirtyFlags::BUFFER));
        assert_ne!(entity.transform.position.y, 0.0);
        // Lateral position untouched
        assert_eq!(entity.transform.position.x, -4.0);
    }

    #[test]
    fn test_stateless_update_is_reproducible() {
        let build = || {
            let mut world = World::new();
            world.add_entity(
                make_cube().with_animation(Animation::Sway(Sway::new(0.2, 0.5, 0.5, 1.0))),
            );
            world
        };
        let mut a = build();
        let mut b = build();

        a.update(2.5);
        // Extra intermediate ticks must not matter for a stateless animator
        b.update(0.5);
        b.update(1.5);
        b.update(2.5);

        let ea = a.get_entity(EntityHandle(0)).unwrap();
        let eb = b.get_entity(EntityHandle(0)).unwrap();
        assert_eq!(ea.transform.position, eb.transform.position);
        assert_eq!(ea.transform.rotation, eb.transform.rotation);
    }

    #[test]
    fn test_ripple_marks_buffer_dirty() {
        let mut world = World::new();
        let handle = world.add_entity(
            make_grid(5).with_animation(Animation::Ripple(Ripple::new(0.3, 2.0, 0.5))),
        );
        world.clear_all_dirty();

        world.update(1.0);

        let entity = world.get_entity(handle).unwrap();
        assert!(entity.dirty_flags().contains(DirtyFlags::BUFFER));
        if let Primitive::Points { field, .. } = &entity.primitive {
            assert!(field.positions().iter().any(|p| p.y != 0.0));
            assert!(field.positions().iter().all(|p| p.y.abs() <= 0.5));
        } else {
            panic!("expected points");
        }
    }

    #[test]
    fn test_drift_spins_field_and_moves_points() {
        let mut world = World::new();
        let handle = world
            .add_entity(make_grid(2).with_animation(Animation::Drift(Drift::new(0.01, 0.05))));
        world.clear_all_dirty();

        world.update(2.0);

        let entity = world.get_entity(handle).unwrap();
        assert_eq!(entity.dirty_flags(), DirtyFlags::ALL);
        assert!((entity.transform.rotation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_growth_accumulates_across_ticks() {
        let mut world = World::new();
        let handle =
            world.add_entity(make_cube().with_animation(Animation::Growth(Growth::new(2.0, 0.5))));

        for _ in 0..4 {
            world.update(0.0);
        }

        let entity = world.get_entity(handle).unwrap();
        assert_eq!(entity.transform.scale.y, 1.0);
        match &entity.animations[0] {
            Animation::Growth(growth) => assert!(growth.is_settled()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_mismatched_animator_is_noop() {
        let mut world = World::new();
        // A ripple makes no sense on a mesh; the tick must leave it alone
        let handle = world
            .add_entity(make_cube().with_animation(Animation::Ripple(Ripple::new(0.3, 2.0, 0.5))));
        world.clear_all_dirty();

        world.update(1.0);

        assert!(!world.get_entity(handle).unwrap().is_dirty());
    }

    #[test]
    fn test_combined_animators() {
        use vitrine_motion::{Distort, Tumble};

        let mut world = World::new();
        // Service cubes carry both a tumble and a surface distortion
        let handle = world.add_entity(
            make_cube()
                .with_animation(Animation::Tumble(Tumble::new(0.3, 0.5, 1.0)))
                .with_animation(Animation::Distort(Distort::new(0.3, 2.0))),
        );
        world.clear_all_dirty();

        world.update(1.0);

        let entity = world.get_entity(handle).unwrap();
        assert_eq!(entity.dirty_flags(), DirtyFlags::ALL);
        assert_ne!(entity.transform.rotation.y, 0.0);
        if let Primitive::Mesh(mesh) = &entity.primitive {
            assert_ne!(mesh.positions(), mesh.home());
        } else {
            panic!("expected mesh");
        }
        assert_eq!(entity.animations.len(), 2);
    }

    #[test]
    fn test_dirty_bookkeeping() {
        let mut world = World::new();
        world.add_entity(make_cube());
        assert!(world.has_dirty_entities());
        world.clear_all_dirty();
        assert!(!world.has_dirty_entities());
    }
}
