//! Showcase viewer
//!
//! Builds one of every buildable object on a grid through the factory and
//! draws the result as wireframes: a box per part, crash spheres, shadow
//! rings. Robots get a short drive order so their wheels and legs move.

use macroquad::prelude as mq;

use crate::behavior::Order;
use crate::engine::{FlatTerrain, ParticlePool, Scene};
use crate::factory::ObjectFactory;
use crate::math::Vec3;
use crate::object::{CreateParams, Entity, ObjectId, ObjectType, ObjectWorld};

/// Distance between showcase cells
pub const CELL_SIZE: f32 = 60.0;
/// Cells per grid row
pub const ROW_LENGTH: usize = 14;

pub type ShowcaseFactory = ObjectFactory<Scene, FlatTerrain, ParticlePool>;

/// Grid placement of every buildable type, centered on the origin.
pub fn showcase_layout() -> Vec<(ObjectType, Vec3)> {
    let types: Vec<ObjectType> = ObjectType::ALL.iter().copied().filter(|t| t.is_buildable()).collect();
    let rows = types.len().div_ceil(ROW_LENGTH);
    let half_w = (ROW_LENGTH - 1) as f32 * CELL_SIZE / 2.0;
    let half_d = rows.saturating_sub(1) as f32 * CELL_SIZE / 2.0;

    types
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let col = (i % ROW_LENGTH) as f32;
            let row = (i / ROW_LENGTH) as f32;
            (t, Vec3::new(col * CELL_SIZE - half_w, 0.0, row * CELL_SIZE - half_d))
        })
        .collect()
}

pub struct Showcase {
    pub factory: ShowcaseFactory,
    pub world: ObjectWorld,
    pub show_spheres: bool,
    pub paused: bool,
    orbit: f32,
}

impl Showcase {
    pub fn new(factory: ShowcaseFactory) -> Self {
        let mut showcase = Self {
            factory,
            world: ObjectWorld::new(),
            show_spheres: true,
            paused: false,
            orbit: 0.0,
        };
        showcase.populate();
        showcase
    }

    /// Create every object of the layout into the world.
    pub fn populate(&mut self) {
        for (i, (object_type, position)) in showcase_layout().into_iter().enumerate() {
            let params = CreateParams::new(ObjectId(i as u32 + 1), object_type, position);
            let Some(mut entity) = self.factory.create_object(&params) else {
                continue;
            };
            if let Some(brain) = entity.brain_mut() {
                brain.push_order(Order::Drive { speed: 0.5, turn: 0.3, duration: 4.0 });
                brain.push_order(Order::Wait { duration: 1.0 });
                brain.push_order(Order::Drive { speed: -0.5, turn: -0.3, duration: 4.0 });
            }
            self.world.spawn(entity);
        }
        log::info!("showcase holds {} objects", self.world.len());
    }

    /// Destroy everything and build the showcase again.
    pub fn rebuild(&mut self) {
        let ids: Vec<ObjectId> = self.world.iter().map(|e| e.id()).collect();
        for id in ids {
            self.world.despawn(id);
        }
        for entity in self.world.flush_despawns() {
            self.factory.destroy_object(entity);
        }
        self.populate();
    }

    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.orbit += dt * 0.1;
        self.world.update(dt);
        self.factory.particles_mut().update(dt);
    }

    pub fn handle_input(&mut self) {
        if mq::is_key_pressed(mq::KeyCode::Tab) {
            self.show_spheres = !self.show_spheres;
        }
        if mq::is_key_pressed(mq::KeyCode::Space) {
            self.paused = !self.paused;
        }
        if mq::is_key_pressed(mq::KeyCode::R) {
            self.rebuild();
        }
    }

    pub fn draw(&self) {
        mq::clear_background(mq::Color::from_rgba(24, 26, 32, 255));

        let radius = ROW_LENGTH as f32 * CELL_SIZE * 0.8;
        let (s, c) = self.orbit.sin_cos();
        mq::set_camera(&mq::Camera3D {
            position: mq::vec3(radius * c, radius * 0.6, radius * s),
            up: mq::vec3(0.0, 1.0, 0.0),
            target: mq::vec3(0.0, 0.0, 0.0),
            ..Default::default()
        });

        mq::draw_grid(40, CELL_SIZE / 2.0, mq::DARKGRAY, mq::Color::from_rgba(40, 44, 52, 255));
        for entity in self.world.iter() {
            self.draw_entity(entity);
        }
        for (particle, life) in self.factory.particles().iter() {
            let alpha = (life / particle.duration).clamp(0.0, 1.0);
            let color = mq::Color::new(0.7, 0.9, 1.0, alpha);
            mq::draw_cube(to_mq(particle.position), mq::vec3(0.4, 0.4, 0.4), None, color);
        }

        mq::set_default_camera();
        mq::draw_text(
            &format!(
                "{} objects  [Tab] spheres  [Space] pause  [R] rebuild",
                self.world.len()
            ),
            12.0,
            24.0,
            20.0,
            mq::WHITE,
        );
    }

    fn draw_entity(&self, entity: &Entity) {
        let globals = entity.global_transforms();
        let color = if entity.motion().is_some() {
            mq::ORANGE
        } else if entity.automation().is_some() {
            mq::SKYBLUE
        } else {
            mq::LIGHTGRAY
        };

        for (part, global) in entity.parts().iter().zip(&globals) {
            let size = part.mesh.mesh().bounding_radius().max(0.5) * part.transform.scale.x.abs();
            mq::draw_cube_wires(to_mq(global.position()), mq::vec3(size, size, size), color);
        }

        let Some(root) = globals.first() else {
            return;
        };
        if let Some(shadow) = entity.shadow() {
            let center = entity.position();
            let ring = mq::Color::new(0.0, 0.0, 0.0, shadow.intensity);
            draw_ring(Vec3::new(center.x, center.y - entity.floor_height + 0.05, center.z), shadow.radius, ring);
        }
        if self.show_spheres {
            for crash in entity.crash_spheres() {
                let center = root.transform_point(crash.sphere.center);
                mq::draw_sphere_wires(to_mq(center), crash.sphere.radius, None, mq::RED);
            }
        }
    }
}

fn to_mq(v: Vec3) -> mq::Vec3 {
    mq::vec3(v.x, v.y, v.z)
}

fn draw_ring(center: Vec3, radius: f32, color: mq::Color) {
    const SEGMENTS: usize = 24;
    let point = |i: usize| {
        let a = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        mq::vec3(center.x + radius * a.cos(), center.y, center.z + radius * a.sin())
    };
    for i in 0..SEGMENTS {
        mq::draw_line_3d(point(i), point(i + 1), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_layout_covers_buildable_types() {
        let layout = showcase_layout();
        let buildable = ObjectType::ALL.iter().filter(|t| t.is_buildable()).count();
        assert_eq!(layout.len(), buildable);
        assert!(layout.iter().all(|(t, _)| t.is_buildable()));
    }

    #[test]
    fn test_layout_cells_are_distinct() {
        let layout = showcase_layout();
        for (i, (_, a)) in layout.iter().enumerate() {
            for (_, b) in &layout[i + 1..] {
                assert!(a.distance(*b) >= CELL_SIZE - 1e-3);
            }
        }
    }

    #[test]
    fn test_showcase_populates_world() {
        let factory = ObjectFactory::new(Scene::new(), FlatTerrain::new(), ParticlePool::new());
        let mut showcase = Showcase::new(factory);
        assert_eq!(showcase.world.len(), showcase_layout().len());

        let slots = showcase.factory.engine().slot_count();
        showcase.rebuild();
        assert_eq!(showcase.world.len(), showcase_layout().len());
        assert_eq!(showcase.factory.engine().slot_count(), slots);
    }
}
