//! Object World
//!
//! Owns every entity created by the factory, keyed by its stable id, and
//! steps their controllers each frame. Ids come from level files and may be
//! anywhere in the `u32` range. Removal is deferred to the end of
//! the frame so callers can queue despawns while iterating.

use std::collections::BTreeMap;

use super::entity::{Entity, ObjectId};
use crate::behavior::{Brain, Link, Motion, Physics};

#[derive(Default)]
pub struct ObjectWorld {
    entities: BTreeMap<ObjectId, Entity>,
    /// Objects queued for removal at end of frame
    despawn_queue: Vec<ObjectId>,
}

impl ObjectWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an entity. Returns the entity previously stored
    /// under the same id, if any.
    pub fn spawn(&mut self, entity: Entity) -> Option<Entity> {
        let replaced = self.entities.insert(entity.id(), entity);
        if let Some(old) = &replaced {
            log::warn!("object id {} reused, replacing a {:?}", old.id().0, old.object_type());
        }
        replaced
    }

    pub fn get(&self, id: ObjectId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    // =========================================================================
    // Link resolution
    // =========================================================================

    pub fn motion(&self, link: Link<Motion>) -> Option<&Motion> {
        self.get(link.owner()).and_then(|e| e.motion_of(link))
    }

    pub fn physics(&self, link: Link<Physics>) -> Option<&Physics> {
        self.get(link.owner()).and_then(|e| e.physics_of(link))
    }

    pub fn brain(&self, link: Link<Brain>) -> Option<&Brain> {
        self.get(link.owner()).and_then(|e| e.brain_of(link))
    }

    // =========================================================================
    // Lifetime
    // =========================================================================

    /// Queue an object for removal at the end of the frame.
    pub fn despawn(&mut self, id: ObjectId) {
        if !self.despawn_queue.contains(&id) {
            self.despawn_queue.push(id);
        }
    }

    /// Remove queued objects and hand them back, so the caller can release
    /// their render slots.
    pub fn flush_despawns(&mut self) -> Vec<Entity> {
        let ids: Vec<ObjectId> = self.despawn_queue.drain(..).collect();
        ids.into_iter().filter_map(|id| self.entities.remove(&id)).collect()
    }

    /// Step every object's controllers.
    pub fn update(&mut self, dt: f32) {
        for entity in self.entities.values_mut() {
            entity.update(dt);
        }
    }
}
