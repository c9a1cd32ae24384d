//! Object Factory
//!
//! Turns a `CreateParams` record into an assembled `Entity`. Every object
//! type goes through the same steps, driven by its catalog recipe:
//!
//! 1. Build the part tree: one render slot per part, mesh reference or
//!    copy, local transform, parent link
//! 2. Register crash, camera and jostling spheres and request the shadow
//! 3. Level the terrain under buildings
//! 4. Snap to the floor, add the height offset, settle ruins
//! 5. Spawn crystal sparkles
//! 6. Attach an automation controller, or the behavior triad for animate
//!    objects (whose body is built by `Motion::create` through the same
//!    tree builder)
//! 7. Load textures
//!
//! Unknown types return `None` before any collaborator is touched.

use std::rc::Rc;

use crate::automation::{Automation, AutomationKind};
use crate::behavior::{BodyBuilder, Brain, Link, Motion, MotionKind, Physics};
use crate::config::FactoryConfig;
use crate::engine::{
    Engine, ModelManager, Particle, ParticleKind, ParticleSystem, RenderSlot, SlotKind, Terrain,
};
use crate::error::FactoryError;
use crate::math::{Point, Vec3};
use crate::object::{Category, CreateParams, Entity, ObjectType, Part, Transform};
use crate::recipe::{Catalog, Joint, Recipe, Sparkle};

pub struct ObjectFactory<E: Engine, T: Terrain, P: ParticleSystem> {
    engine: E,
    terrain: T,
    particles: P,
    models: ModelManager,
    catalog: Rc<Catalog>,
    config: FactoryConfig,
}

impl<E: Engine, T: Terrain, P: ParticleSystem> ObjectFactory<E, T, P> {
    /// Factory over the built-in recipes and the default config.
    pub fn new(engine: E, terrain: T, particles: P) -> Self {
        Self {
            engine,
            terrain,
            particles,
            models: ModelManager::new(),
            catalog: Rc::new(Catalog::standard().clone()),
            config: FactoryConfig::default(),
        }
    }

    /// Factory using `config`, including its catalog override if any.
    pub fn with_config(engine: E, terrain: T, particles: P, config: FactoryConfig) -> Result<Self, FactoryError> {
        let catalog = config.catalog()?;
        Ok(Self {
            catalog: Rc::new(catalog),
            config,
            ..Self::new(engine, terrain, particles)
        })
    }

    /// Replace the recipe catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Rc::new(catalog);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    pub fn particles(&self) -> &P {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut P {
        &mut self.particles
    }

    pub fn models(&self) -> &ModelManager {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut ModelManager {
        &mut self.models
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Build one object. Returns `None` for types the factory cannot build,
    /// without touching the engine, the model cache or the terrain.
    pub fn create_object(&mut self, params: &CreateParams) -> Option<Entity> {
        let object_type = params.object_type;
        let Some(category) = object_type.category() else {
            log::warn!("cannot create object of type {:?}", object_type);
            return None;
        };

        let catalog = Rc::clone(&self.catalog);
        let Some(recipe) = catalog.get(object_type) else {
            log::warn!("no recipe for {:?}", object_type);
            return None;
        };
        if recipe.root().is_none() {
            log::error!("recipe of {:?} has no root part", object_type);
            return None;
        }

        let entity = match category {
            Category::Static => self.create_static(params, recipe),
            Category::Vehicle => self.create_vehicle(params),
            Category::Insect => self.create_insect(params),
            _ => self.create_stationary(params, category, recipe),
        };

        if !recipe.transient {
            self.engine.load_all_textures();
        }
        log::debug!(
            "created {:?} #{} with {} parts at ({:.1}, {:.1}, {:.1})",
            object_type,
            params.id.0,
            entity.parts().len(),
            entity.position().x,
            entity.position().y,
            entity.position().z
        );
        Some(entity)
    }

    /// Release the render slots of an object that leaves the world.
    pub fn destroy_object(&mut self, entity: Entity) {
        for slot in entity.slots() {
            self.engine.delete_slot(slot);
        }
        log::debug!("destroyed {:?} #{}", entity.object_type(), entity.id().0);
    }

    /// Decor that never changes: a single part with no collision.
    fn create_static(&mut self, params: &CreateParams, recipe: &Recipe) -> Entity {
        let mut entity = Entity::new(params.id, params.object_type);
        entity.option = params.option;
        entity.is_static = true;

        if let Some(root) = recipe.root() {
            let single = Recipe {
                parts: vec![root.clone()],
                ..Recipe::default()
            };
            self.build_parts(&mut entity, &single, params.position, params.angle);
        }
        self.place(&mut entity, recipe, params.height);
        self.sync_root(&entity);
        entity
    }

    fn create_stationary(&mut self, params: &CreateParams, category: Category, recipe: &Recipe) -> Entity {
        let mut entity = Entity::new(params.id, params.object_type);
        entity.option = params.option;

        self.build_parts(&mut entity, recipe, params.position, params.angle);
        if recipe.energy_from_power {
            entity.energy = params.power;
        }
        entity.power_position = recipe.power_position;

        // Markers keep their raw placement
        if recipe.transient {
            return entity;
        }

        self.attach_volumes(&mut entity, recipe);
        if let Some(level) = recipe.building_level {
            self.terrain.add_building_level(params.position, level);
        }
        entity.show_limit_radius = self.config.show_limit_radius(recipe.show_limit);

        self.place(&mut entity, recipe, params.height);
        if let Some(sparkle) = recipe.sparkle {
            self.spawn_sparkles(&entity, sparkle);
        }
        if category.hosts_automation() {
            attach_automation(&mut entity);
        }

        self.sync_root(&entity);
        entity
    }

    fn create_vehicle(&mut self, params: &CreateParams) -> Entity {
        let object_type = params.object_type;
        let mut entity = Entity::new(params.id, object_type);
        entity.option = params.option;

        if object_type == ObjectType::Toto {
            let mut motion = Motion::new(params.id, MotionKind::Toto);
            motion.create(self, &mut entity, params.position, params.angle, 1.0);
            entity.set_motion(motion);
            return entity;
        }

        // Characters are never remote-controlled
        entity.trainer = match object_type {
            ObjectType::Human | ObjectType::Tech => false,
            _ => params.trainer,
        };
        entity.toy = params.toy;

        let kind = MotionKind::for_type(object_type).unwrap_or(MotionKind::Vehicle);
        self.wire_triad(&mut entity, kind, params, params.power);
        entity
    }

    fn create_insect(&mut self, params: &CreateParams) -> Entity {
        let mut entity = Entity::new(params.id, params.object_type);
        entity.option = params.option;

        let kind = match MotionKind::for_type(params.object_type) {
            Some(
                kind @ (MotionKind::Queen
                | MotionKind::Ant
                | MotionKind::Spider
                | MotionKind::Bee
                | MotionKind::Worm),
            ) => kind,
            other => unreachable!("{:?} dispatched as an insect with motion {:?}", params.object_type, other),
        };
        self.wire_triad(&mut entity, kind, params, 0.0);
        entity
    }

    /// Create motion, physics and brain, link each to the other two, build
    /// the body and hand all three to the entity.
    fn wire_triad(&mut self, entity: &mut Entity, kind: MotionKind, params: &CreateParams, power: f32) {
        let id = entity.id();
        let mut motion = Motion::new(id, kind);
        let mut physics = Physics::new(id, kind);
        let mut brain = Brain::new(id);

        motion.set_physics(Link::new(id));
        motion.set_brain(Link::new(id));
        physics.set_motion(Link::new(id));
        physics.set_brain(Link::new(id));
        brain.set_motion(Link::new(id));
        brain.set_physics(Link::new(id));

        motion.create(self, entity, params.position, params.angle, power);

        entity.set_motion(motion);
        entity.set_physics(physics);
        entity.set_brain(brain);
    }

    // =========================================================================
    // Assembly steps
    // =========================================================================

    /// Create the render slots and parts of `recipe`. Returns the
    /// articulated parts.
    fn build_parts(&mut self, entity: &mut Entity, recipe: &Recipe, position: Vec3, angle: f32) -> Vec<(usize, Joint)> {
        let mut slots: Vec<(usize, RenderSlot)> = Vec::with_capacity(recipe.parts.len());
        let mut joints = Vec::new();

        for spec in &recipe.parts {
            let slot = self.engine.create_slot();
            let kind = if spec.rank == 0 { recipe.root_kind } else { SlotKind::Descendant };
            self.engine.set_slot_kind(slot, kind);

            let mesh = if spec.copy {
                self.models.copy(&spec.mesh)
            } else {
                self.models.reference(&spec.mesh)
            };
            self.engine.attach_mesh(slot, &mesh, spec.mirror);

            let transform = if spec.rank == 0 {
                Transform {
                    position,
                    angles: spec.angles + Vec3::new(0.0, angle, 0.0),
                    scale: spec.scale,
                }
            } else {
                Transform {
                    position: spec.position,
                    angles: spec.angles,
                    scale: spec.scale,
                }
            };
            self.engine.set_transform(slot, transform.position, transform.angles, transform.scale);

            if let Some(parent) = spec.parent {
                match slots.iter().find(|(rank, _)| *rank == parent) {
                    Some(&(_, parent_slot)) => self.engine.set_parent(slot, parent_slot),
                    None => log::error!(
                        "{:?} part {} references undeclared parent {}",
                        entity.object_type(),
                        spec.rank,
                        parent
                    ),
                }
            }

            slots.push((spec.rank, slot));
            if spec.joint != Joint::Rigid {
                joints.push((spec.rank, spec.joint));
            }
            entity.add_part(Part {
                rank: spec.rank,
                parent: spec.parent,
                slot,
                mesh,
                mirror: spec.mirror,
                transform,
            });
        }
        joints
    }

    fn attach_volumes(&mut self, entity: &mut Entity, recipe: &Recipe) {
        for sphere in &recipe.crash_spheres {
            entity.add_crash_sphere(*sphere);
        }
        entity.set_camera_sphere(recipe.camera_sphere);
        entity.set_jostling_sphere(recipe.jostling_sphere);

        if let Some(shadow) = recipe.shadow {
            if let Some(root) = entity.root() {
                self.engine.create_shadow(root.slot, &shadow);
            }
            entity.set_shadow(shadow);
        }
    }

    /// Floor snap, height offset and ruin settling.
    fn place(&mut self, entity: &mut Entity, recipe: &Recipe, height: f32) {
        let mut position = entity.position();
        let mut angles = entity.angles();

        if recipe.floor_adjust {
            position.y = self.terrain.floor_height(position.x, position.z);
        }
        position.y += recipe.height.offset(height);
        if let Some(tilt) = recipe.tilt {
            position.y += tilt.dy;
            angles.x += tilt.dx;
            angles.z += tilt.dz;
        }

        entity.set_position(position);
        entity.set_angles(angles);
        entity.floor_height = position.y - self.terrain.floor_height(position.x, position.z);
    }

    fn spawn_sparkles(&mut self, entity: &Entity, sparkle: Sparkle) {
        let position = entity.position() + Vec3::new(0.0, sparkle.height, 0.0);
        for _ in 0..sparkle.count {
            self.particles.create_particle(Particle {
                position,
                speed: Vec3::ZERO,
                size: Point::new(2.0, 2.0),
                kind: ParticleKind::QuartzSparkle,
                duration: 0.7 + macroquad::rand::gen_range(0.0f32, 0.7),
                mass: sparkle.radius,
                wind_sensitivity: 0.0,
            });
        }
    }

    /// Push the root's final placement to the engine.
    fn sync_root(&mut self, entity: &Entity) {
        if let Some(root) = entity.root() {
            let t = root.transform;
            self.engine.set_transform(root.slot, t.position, t.angles, t.scale);
        }
    }
}

fn attach_automation(entity: &mut Entity) {
    let Some(kind) = AutomationKind::for_type(entity.object_type()) else {
        return;
    };
    let mut automation = Automation::new(kind, entity.id());
    automation.init();
    entity.set_automation(automation);
}

impl<E: Engine, T: Terrain, P: ParticleSystem> BodyBuilder for ObjectFactory<E, T, P> {
    fn build_body(&mut self, entity: &mut Entity, position: Vec3, angle: f32) -> Vec<(usize, Joint)> {
        let catalog = Rc::clone(&self.catalog);
        let Some(recipe) = catalog.get(entity.object_type()) else {
            log::error!("no body recipe for {:?}", entity.object_type());
            return Vec::new();
        };

        let joints = self.build_parts(entity, recipe, position, angle);
        entity.power_position = recipe.power_position;
        self.attach_volumes(entity, recipe);
        entity.show_limit_radius = self.config.show_limit_radius(recipe.show_limit);
        self.place(entity, recipe, 0.0);
        self.sync_root(entity);
        joints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::Phase;
    use crate::behavior::Order;
    use crate::engine::{FlatTerrain, ParticlePool, Scene};
    use crate::object::ObjectId;
    use crate::recipe::PartSpec;
    use std::f32::consts::PI;
    use std::io::Write;

    type TestFactory = ObjectFactory<Scene, FlatTerrain, ParticlePool>;

    fn factory() -> TestFactory {
        ObjectFactory::new(Scene::new(), FlatTerrain::new(), ParticlePool::new())
    }

    fn create(factory: &mut TestFactory, object_type: ObjectType) -> Entity {
        let params = CreateParams::new(ObjectId(1), object_type, Vec3::new(10.0, 0.0, -20.0));
        factory.create_object(&params).unwrap()
    }

    fn buildable() -> impl Iterator<Item = ObjectType> {
        ObjectType::ALL.iter().copied().filter(|t| t.is_buildable())
    }

    #[test]
    fn test_every_type_has_a_placed_root() {
        let mut factory = factory();
        for object_type in buildable() {
            let entity = create(&mut factory, object_type);
            let root = entity.root().unwrap_or_else(|| panic!("{:?} has no root", object_type));
            assert_eq!(root.parent, None, "{:?}", object_type);

            let recipe = factory.catalog().get(object_type).unwrap();
            let expected_y = if recipe.transient { 0.0 } else { recipe.vertical_offset(0.0) };
            let position = entity.position();
            assert_eq!(position.x, 10.0, "{:?}", object_type);
            assert_eq!(position.z, -20.0, "{:?}", object_type);
            assert!((position.y - expected_y).abs() < 1e-5, "{:?}: y = {}", object_type, position.y);
        }
    }

    #[test]
    fn test_no_forward_parent_references() {
        let mut factory = factory();
        for object_type in buildable() {
            let entity = create(&mut factory, object_type);
            for (i, part) in entity.parts().iter().enumerate() {
                if let Some(parent) = part.parent {
                    assert!(
                        entity.parts()[..i].iter().any(|p| p.rank == parent),
                        "{:?} part {} has forward parent {}",
                        object_type,
                        part.rank,
                        parent
                    );
                    let record = factory.engine().slot(part.slot).unwrap();
                    assert_eq!(record.parent, entity.part(parent).map(|p| p.slot));
                }
            }
        }
    }

    #[test]
    fn test_unknown_type_has_no_side_effects() {
        let mut factory = factory();
        for object_type in [ObjectType::Null, ObjectType::Fix, ObjectType::Frame] {
            let params = CreateParams::new(ObjectId(9), object_type, Vec3::ZERO);
            assert!(factory.create_object(&params).is_none());
        }
        assert_eq!(factory.engine().slot_count(), 0);
        assert_eq!(factory.engine().texture_loads(), 0);
        assert_eq!(factory.models().loaded_count(), 0);
        assert!(factory.terrain().levels().is_empty());
    }

    #[test]
    fn test_missing_recipe_has_no_side_effects() {
        let mut factory = factory();
        let mut catalog = Catalog::standard().clone();
        catalog.insert(ObjectType::Stone, Recipe::default());
        factory.set_catalog(catalog);

        let params = CreateParams::new(ObjectId(1), ObjectType::Stone, Vec3::ZERO);
        assert!(factory.create_object(&params).is_none());
        assert_eq!(factory.engine().slot_count(), 0);
    }

    #[test]
    fn test_triad_members_link_each_other() {
        let mut factory = factory();
        for object_type in buildable().filter(|t| t.category().is_some_and(|c| c.is_animate())) {
            if object_type == ObjectType::Toto {
                continue;
            }
            let entity = create(&mut factory, object_type);
            let id = entity.id();
            let motion = entity.motion().unwrap();
            let physics = entity.physics().unwrap();
            let brain = entity.brain().unwrap();

            assert!(motion.is_created(), "{:?}", object_type);
            assert_eq!(motion.physics(), Some(Link::new(id)));
            assert_eq!(motion.brain(), Some(Link::new(id)));
            assert_eq!(physics.motion(), Some(Link::new(id)));
            assert_eq!(physics.brain(), Some(Link::new(id)));
            assert_eq!(brain.motion(), Some(Link::new(id)));
            assert_eq!(brain.physics(), Some(Link::new(id)));

            assert!(entity.physics_of(motion.physics().unwrap()).is_some());
            assert!(entity.brain_of(physics.brain().unwrap()).is_some());
            assert!(entity.motion_of(brain.motion().unwrap()).is_some());
            assert!(entity.automation().is_none());
        }
    }

    #[test]
    fn test_toto_has_motion_only() {
        let mut factory = factory();
        let params = CreateParams::new(ObjectId(2), ObjectType::Toto, Vec3::ZERO).with_power(0.2);
        let entity = factory.create_object(&params).unwrap();

        assert_eq!(entity.motion().map(|m| m.kind()), Some(MotionKind::Toto));
        assert!(entity.physics().is_none());
        assert!(entity.brain().is_none());
        assert_eq!(entity.energy, 1.0);
    }

    #[test]
    fn test_motion_kinds_by_type() {
        let mut factory = factory();
        let kind = |f: &mut TestFactory, t| create(f, t).motion().map(|m| m.kind());
        assert_eq!(kind(&mut factory, ObjectType::Tech), Some(MotionKind::Human));
        assert_eq!(kind(&mut factory, ObjectType::Controller), Some(MotionKind::LevelController));
        assert_eq!(kind(&mut factory, ObjectType::MobileIc), Some(MotionKind::Vehicle));
        assert_eq!(kind(&mut factory, ObjectType::Apollo2), Some(MotionKind::Vehicle));
        assert_eq!(kind(&mut factory, ObjectType::Mother), Some(MotionKind::Queen));
        assert_eq!(kind(&mut factory, ObjectType::Worm), Some(MotionKind::Worm));
    }

    #[test]
    fn test_motion_follows_type_table() {
        let mut factory = factory();
        for object_type in buildable().filter(|t| t.category().is_some_and(|c| c.is_animate())) {
            let entity = create(&mut factory, object_type);
            assert_eq!(
                entity.motion().map(|m| m.kind()),
                MotionKind::for_type(object_type),
                "{:?}",
                object_type
            );
        }
    }

    #[test]
    fn test_insects_start_without_power() {
        let mut factory = factory();
        let params = CreateParams::new(ObjectId(1), ObjectType::Ant, Vec3::ZERO).with_power(1.0);
        assert_eq!(factory.create_object(&params).unwrap().energy, 0.0);

        let params = CreateParams::new(ObjectId(2), ObjectType::MobileWa, Vec3::ZERO).with_power(0.4);
        assert_eq!(factory.create_object(&params).unwrap().energy, 0.4);
    }

    #[test]
    fn test_automation_initialised_once() {
        let mut factory = factory();
        for object_type in buildable() {
            let entity = create(&mut factory, object_type);
            let expected = AutomationKind::for_type(object_type);
            assert_eq!(entity.automation().map(|a| a.kind()), expected, "{:?}", object_type);
            if let Some(automation) = entity.automation() {
                assert_eq!(automation.init_count(), 1, "{:?}", object_type);
                assert_eq!(automation.owner(), entity.id());
            }
        }
    }

    #[test]
    fn test_copies_are_distinct_references_are_shared() {
        let mut factory = factory();
        let a = create(&mut factory, ObjectType::Power);
        let b = create(&mut factory, ObjectType::Power);
        assert!(a.parts()[0].mesh.is_copy());
        assert!(!a.parts()[0].mesh.shares_data_with(&b.parts()[0].mesh));

        let c = create(&mut factory, ObjectType::Stone);
        let d = create(&mut factory, ObjectType::Stone);
        assert!(!c.parts()[0].mesh.is_copy());
        assert!(c.parts()[0].mesh.shares_data_with(&d.parts()[0].mesh));
        assert_eq!(factory.models().copies_made(), 2);
    }

    #[test]
    fn test_show_returns_after_placement() {
        let mut factory = ObjectFactory::new(Scene::new(), FlatTerrain::with_height(5.0), ParticlePool::new());
        let params = CreateParams::new(ObjectId(1), ObjectType::Show, Vec3::new(0.0, 1.0, 0.0)).with_power(0.5);
        let entity = factory.create_object(&params).unwrap();

        assert!(entity.crash_spheres().is_empty());
        assert!(entity.shadow().is_none());
        assert!(entity.automation().is_none());
        assert_eq!(entity.position().y, 1.0);
        assert_eq!(entity.energy, 0.5);
        assert_eq!(factory.engine().texture_loads(), 0);
    }

    #[test]
    fn test_textures_loaded_once_per_call() {
        let mut factory = factory();
        create(&mut factory, ObjectType::Factory);
        create(&mut factory, ObjectType::MobileWa);
        create(&mut factory, ObjectType::Tree0);
        assert_eq!(factory.engine().texture_loads(), 3);
        assert!(factory.engine().records().all(|r| r.textured));
    }

    #[test]
    fn test_floor_adjust_follows_terrain() {
        let mut factory = ObjectFactory::new(Scene::new(), FlatTerrain::with_height(3.0), ParticlePool::new());
        let at = Vec3::new(0.0, 10.0, 0.0);

        let stone = factory.create_object(&CreateParams::new(ObjectId(1), ObjectType::Stone, at)).unwrap();
        assert_eq!(stone.position().y, 3.0);
        assert_eq!(stone.floor_height, 0.0);

        let ruin = factory.create_object(&CreateParams::new(ObjectId(2), ObjectType::RuinFactory, at)).unwrap();
        assert_eq!(ruin.position().y, 10.0);
        assert_eq!(ruin.floor_height, 7.0);
    }

    #[test]
    fn test_height_rules() {
        let mut factory = factory();
        let mut height_of = |object_type| {
            let params = CreateParams::new(ObjectId(1), object_type, Vec3::ZERO).with_height(2.0);
            factory.create_object(&params).unwrap().position().y
        };
        assert_eq!(height_of(ObjectType::Target2), 77.0);
        assert_eq!(height_of(ObjectType::Plant2), 0.0);
        assert_eq!(height_of(ObjectType::Plant7), 2.0);
        assert_eq!(height_of(ObjectType::Stone), 0.0);
        assert!((height_of(ObjectType::Bag) + 1.4).abs() < 1e-6);
        assert_eq!(height_of(ObjectType::FlagR), 0.0);
        assert_eq!(height_of(ObjectType::Apollo1), 0.0);
        assert_eq!(height_of(ObjectType::MobileTa), 0.0);
        assert_eq!(height_of(ObjectType::Tree0), 2.0);
    }

    #[test]
    fn test_ruin_settles() {
        let mut factory = factory();
        let params = CreateParams::new(ObjectId(1), ObjectType::RuinHead, Vec3::ZERO).with_angle(0.5);
        let head = factory.create_object(&params).unwrap();

        assert_eq!(head.position().y, 8.0);
        assert!((head.angles().x - PI * 0.4).abs() < 1e-6);
        assert_eq!(head.angles().y, 0.5);

        let root = head.root().unwrap();
        let record = factory.engine().slot(root.slot).unwrap();
        assert_eq!(record.position.y, 8.0);
        assert_eq!(record.angles, head.angles());
    }

    #[test]
    fn test_building_leveling() {
        let mut factory = factory();
        let params = CreateParams::new(ObjectId(1), ObjectType::Base, Vec3::new(5.0, 0.0, 5.0));
        factory.create_object(&params).unwrap();

        let levels = factory.terrain().levels();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].0, Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(levels[0].1.min, 28.6);

        create(&mut factory, ObjectType::Stone);
        assert_eq!(factory.terrain().levels().len(), 1);
    }

    #[test]
    fn test_show_limits() {
        let mut factory = factory();
        assert_eq!(create(&mut factory, ObjectType::Base).show_limit_radius, 200.0);
        assert_eq!(create(&mut factory, ObjectType::Tower).show_limit_radius, 40.0);
        assert_eq!(create(&mut factory, ObjectType::Para).show_limit_radius, 40.0);
        assert_eq!(create(&mut factory, ObjectType::MobileRt).show_limit_radius, 400.0);
        assert_eq!(create(&mut factory, ObjectType::MobileRc).show_limit_radius, 0.0);
        assert_eq!(create(&mut factory, ObjectType::Stone).show_limit_radius, 0.0);
    }

    #[test]
    fn test_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.ron");
        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Para, Recipe::single("para").show_limit(crate::recipe::ShowLimit::LightningProtection));
        crate::recipe::save_catalog_plain(&catalog, &catalog_path).unwrap();

        let config_path = dir.path().join("factory.ron");
        let mut file = std::fs::File::create(&config_path).unwrap();
        write!(file, "(lightning_protection_radius: 55.0, catalog_path: Some({:?}))", catalog_path).unwrap();

        let config = FactoryConfig::load(&config_path).unwrap();
        let mut factory =
            ObjectFactory::with_config(Scene::new(), FlatTerrain::new(), ParticlePool::new(), config).unwrap();
        assert_eq!(create(&mut factory, ObjectType::Para).show_limit_radius, 55.0);

        // Types missing from the override catalog cannot be built
        let params = CreateParams::new(ObjectId(2), ObjectType::Tower, Vec3::ZERO);
        assert!(factory.create_object(&params).is_none());
    }

    #[test]
    fn test_quartz_sparkles() {
        let mut factory = factory();
        let crystal = create(&mut factory, ObjectType::Quartz2);
        assert_eq!(factory.particles().spawned_count(), 2);

        let (particle, _) = factory.particles().iter().next().unwrap();
        assert_eq!(particle.kind, ParticleKind::QuartzSparkle);
        assert!(particle.duration >= 0.7 && particle.duration <= 1.4);
        assert!(particle.position.y > crystal.position().y);

        create(&mut factory, ObjectType::Stone);
        assert_eq!(factory.particles().spawned_count(), 2);

        let root = crystal.root().unwrap();
        assert_eq!(factory.engine().slot(root.slot).unwrap().kind, SlotKind::Quartz);
    }

    #[test]
    fn test_energy_storage() {
        let mut factory = factory();
        let energy_of = |f: &mut TestFactory, t| {
            let params = CreateParams::new(ObjectId(1), t, Vec3::ZERO).with_power(0.6);
            f.create_object(&params).unwrap().energy
        };
        assert_eq!(energy_of(&mut factory, ObjectType::Power), 0.6);
        assert_eq!(energy_of(&mut factory, ObjectType::Energy), 0.6);
        assert_eq!(energy_of(&mut factory, ObjectType::Station), 0.6);
        assert_eq!(energy_of(&mut factory, ObjectType::Factory), 0.0);
    }

    #[test]
    fn test_trainer_and_toy_flags() {
        let mut factory = factory();
        let flags = |f: &mut TestFactory, t| {
            let params = CreateParams::new(ObjectId(1), t, Vec3::ZERO).with_flags(true, true).with_option(3);
            let e = f.create_object(&params).unwrap();
            (e.trainer, e.toy, e.option)
        };
        assert_eq!(flags(&mut factory, ObjectType::Human), (false, true, 3));
        assert_eq!(flags(&mut factory, ObjectType::Tech), (false, true, 3));
        assert_eq!(flags(&mut factory, ObjectType::MobileWt), (true, true, 3));
    }

    #[test]
    fn test_static_tree() {
        let mut factory = factory();
        let params = CreateParams::new(ObjectId(1), ObjectType::Tree0, Vec3::ZERO).with_height(1.5);
        let tree = factory.create_object(&params).unwrap();

        assert!(tree.is_static);
        assert_eq!(tree.parts().len(), 1);
        assert!(tree.crash_spheres().is_empty());
        assert!(tree.camera_sphere().is_none());
        assert!(tree.automation().is_none());
        assert_eq!(tree.position().y, 1.5);
    }

    #[test]
    fn test_root_angle_adds_recipe_angle() {
        let mut factory = factory();
        let mut catalog = Catalog::new();
        catalog.insert(
            ObjectType::Stone,
            Recipe::default().part(PartSpec::root("stone").angles(0.0, 0.25, 0.0)),
        );
        factory.set_catalog(catalog);

        let params = CreateParams::new(ObjectId(1), ObjectType::Stone, Vec3::ZERO).with_angle(1.0);
        let stone = factory.create_object(&params).unwrap();
        assert_eq!(stone.angles().y, 1.25);
    }

    #[test]
    fn test_camera_sphere_is_explicit() {
        let mut factory = factory();
        assert!(create(&mut factory, ObjectType::Plant19).camera_sphere().is_none());
        assert!(create(&mut factory, ObjectType::Plant18).camera_sphere().is_some());
        assert!(create(&mut factory, ObjectType::FlagB).jostling_sphere().is_some());
    }

    #[test]
    fn test_shadow_requested_on_root() {
        let mut factory = factory();
        let barrier = create(&mut factory, ObjectType::Barrier1);
        let record = factory.engine().slot(barrier.root().unwrap().slot).unwrap();
        assert_eq!(record.shadow, barrier.shadow().copied());
        assert_eq!(barrier.shadow().unwrap().kind, crate::object::ShadowKind::Worm);
    }

    #[test]
    fn test_destroy_frees_slots() {
        let mut factory = factory();
        let entity = create(&mut factory, ObjectType::Factory);
        assert!(factory.engine().slot_count() > 1);
        factory.destroy_object(entity);
        assert_eq!(factory.engine().slot_count(), 0);
    }

    #[test]
    fn test_update_drives_vehicle() {
        let mut factory = factory();
        let mut robot = create(&mut factory, ObjectType::MobileWa);
        let start = robot.position();
        let wheel = robot.motion().unwrap().joints()[0].0;

        robot.brain_mut().unwrap().push_order(Order::Drive { speed: 1.0, turn: 0.0, duration: 5.0 });
        for _ in 0..30 {
            robot.update(0.1);
        }

        assert!(robot.position().distance(start) > 1.0);
        assert!(robot.part(wheel).unwrap().transform.angles.z < 0.0);
        assert!(robot.physics().unwrap().speed() > 0.0);
    }

    #[test]
    fn test_update_steps_automation() {
        let mut factory = factory();
        let mut building = create(&mut factory, ObjectType::Factory);
        building.update(3.5);
        assert_eq!(building.automation().unwrap().phase(), Phase::Assembling);
    }
}
