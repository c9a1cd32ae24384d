//! Engine Collaborators
//!
//! The factory never renders, simulates or loads files itself. It issues
//! calls against these seams:
//! - `Engine`: render-slot table (allocate, type, mesh, transform, parent,
//!   shadow, bulk texture load)
//! - `ModelManager`: mesh references and copies by name
//! - `Terrain`: floor height queries and building-footprint leveling
//! - `ParticleSystem`: one-shot particle effects
//!
//! `Scene`, `FlatTerrain` and `ParticlePool` are the in-memory
//! implementations used by the viewer and by tests.

pub mod slot;
pub mod model;
pub mod scene;
pub mod terrain;
pub mod particles;

pub use slot::{RenderSlot, SlotAllocator};
pub use model::{Mesh, MeshHandle, ModelManager};
pub use scene::{Scene, SlotRecord};
pub use terrain::{BuildingLevel, FlatTerrain};
pub use particles::{Particle, ParticleKind, ParticlePool};

use serde::{Deserialize, Serialize};

use crate::math::Vec3;
use crate::object::ShadowCircle;

/// How the engine treats a render slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Stationary root of an object
    Fixed,
    /// Child part, placed relative to its parent
    Descendant,
    /// Crystal root (drawn with the refraction pass)
    Quartz,
    /// Root of a moving body
    Vehicle,
}

/// Render-slot table of the graphics engine.
pub trait Engine {
    /// Allocate a fresh slot.
    fn create_slot(&mut self) -> RenderSlot;

    /// Release a slot and everything attached to it.
    fn delete_slot(&mut self, slot: RenderSlot) -> bool;

    fn set_slot_kind(&mut self, slot: RenderSlot, kind: SlotKind);

    /// Attach mesh geometry to a slot. `mirror` flips the model along Z.
    fn attach_mesh(&mut self, slot: RenderSlot, mesh: &MeshHandle, mirror: bool);

    fn set_parent(&mut self, slot: RenderSlot, parent: RenderSlot);

    /// Local transform relative to the parent slot (or the world for roots).
    fn set_transform(&mut self, slot: RenderSlot, position: Vec3, angles: Vec3, scale: Vec3);

    /// Circular shadow decal drawn under the slot.
    fn create_shadow(&mut self, slot: RenderSlot, shadow: &ShadowCircle);

    /// Upload textures for every slot created since the last call.
    fn load_all_textures(&mut self);

    /// Number of slots currently allocated.
    fn slot_count(&self) -> usize;
}

/// Ground height queries and footprint leveling.
pub trait Terrain {
    /// Height of the ground at world (x, z).
    fn floor_height(&self, x: f32, z: f32) -> f32;

    /// Flatten the ground around a building footprint.
    fn add_building_level(&mut self, center: Vec3, level: BuildingLevel);
}

/// Spawner for particle effects.
pub trait ParticleSystem {
    fn create_particle(&mut self, particle: Particle);
}
