//! In-memory render-slot table
//!
//! `Scene` implements `Engine` by recording everything the factory asks
//! for. The viewer draws from these records and tests inspect them.

use super::{Engine, MeshHandle, RenderSlot, SlotAllocator, SlotKind};
use crate::math::Vec3;
use crate::object::ShadowCircle;
use crate::storage::SparseStorage;

/// What the engine knows about one slot.
#[derive(Debug, Clone)]
pub struct SlotRecord {
    pub kind: SlotKind,
    /// Name of the attached mesh
    pub mesh: Option<String>,
    /// Attached as an exclusive copy
    pub mesh_is_copy: bool,
    pub mirror: bool,
    pub parent: Option<RenderSlot>,
    pub position: Vec3,
    pub angles: Vec3,
    pub scale: Vec3,
    pub shadow: Option<ShadowCircle>,
    /// Textures uploaded by a `load_all_textures` call
    pub textured: bool,
}

impl Default for SlotRecord {
    fn default() -> Self {
        Self {
            kind: SlotKind::Fixed,
            mesh: None,
            mesh_is_copy: false,
            mirror: false,
            parent: None,
            position: Vec3::ZERO,
            angles: Vec3::ZERO,
            scale: Vec3::ONE,
            shadow: None,
            textured: false,
        }
    }
}

/// Recording engine.
#[derive(Default)]
pub struct Scene {
    allocator: SlotAllocator,
    slots: SparseStorage<RenderSlot, SlotRecord>,
    /// Number of `load_all_textures` calls
    texture_loads: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a live slot.
    pub fn slot(&self, slot: RenderSlot) -> Option<&SlotRecord> {
        if !self.allocator.is_alive(slot) {
            return None;
        }
        self.slots.get(slot)
    }

    fn slot_mut(&mut self, slot: RenderSlot) -> Option<&mut SlotRecord> {
        if !self.allocator.is_alive(slot) {
            log::warn!("engine call on dead slot {:?}", slot);
            return None;
        }
        self.slots.get_mut(slot)
    }

    pub fn texture_loads(&self) -> usize {
        self.texture_loads
    }

    /// All live slot records.
    pub fn records(&self) -> impl Iterator<Item = &SlotRecord> {
        self.slots.iter().map(|(_, record)| record)
    }
}

impl Engine for Scene {
    fn create_slot(&mut self) -> RenderSlot {
        let slot = self.allocator.allocate();
        self.slots.insert(slot, SlotRecord::default());
        slot
    }

    fn delete_slot(&mut self, slot: RenderSlot) -> bool {
        if !self.allocator.free(slot) {
            return false;
        }
        self.slots.remove(slot);
        true
    }

    fn set_slot_kind(&mut self, slot: RenderSlot, kind: SlotKind) {
        if let Some(record) = self.slot_mut(slot) {
            record.kind = kind;
        }
    }

    fn attach_mesh(&mut self, slot: RenderSlot, mesh: &MeshHandle, mirror: bool) {
        if let Some(record) = self.slot_mut(slot) {
            record.mesh = Some(mesh.name().to_string());
            record.mesh_is_copy = mesh.is_copy();
            record.mirror = mirror;
        }
    }

    fn set_parent(&mut self, slot: RenderSlot, parent: RenderSlot) {
        if let Some(record) = self.slot_mut(slot) {
            record.parent = Some(parent);
        }
    }

    fn set_transform(&mut self, slot: RenderSlot, position: Vec3, angles: Vec3, scale: Vec3) {
        if let Some(record) = self.slot_mut(slot) {
            record.position = position;
            record.angles = angles;
            record.scale = scale;
        }
    }

    fn create_shadow(&mut self, slot: RenderSlot, shadow: &ShadowCircle) {
        if let Some(record) = self.slot_mut(slot) {
            record.shadow = Some(*shadow);
        }
    }

    fn load_all_textures(&mut self) {
        self.texture_loads += 1;
        for (_, record) in self.slots.iter_mut() {
            record.textured = true;
        }
    }

    fn slot_count(&self) -> usize {
        self.allocator.alive_count() as usize
    }
}
