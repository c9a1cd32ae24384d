//! Render Slots with Generational Indices
//!
//! Every part of an object occupies one render slot in the graphics engine.
//! Slots are recycled when objects are destroyed, so a handle carries a
//! generation counter:
//! - Each slot has a generation counter
//! - Freeing a slot makes it available for reuse
//! - The generation increments on reuse, invalidating old handles
//!
//! A part that outlives its object can therefore never draw some other
//! object's mesh by accident.

use serde::{Deserialize, Serialize};

/// Handle to one render slot in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSlot {
    /// Index into the engine's slot table
    index: u32,
    /// Generation counter - increments when slot is reused
    generation: u32,
}

impl RenderSlot {
    /// Should only be called by SlotAllocator.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Index into the slot table.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Hands out render slots and tracks which ones are alive.
#[derive(Debug, Default)]
pub struct SlotAllocator {
    /// Generation counter for each slot
    generations: Vec<u32>,
    /// Free slots available for reuse (LIFO)
    free_indices: Vec<u32>,
    /// Number of currently allocated slots
    alive_count: u32,
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a slot, reusing a freed one when possible.
    pub fn allocate(&mut self) -> RenderSlot {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already incremented on free
            RenderSlot::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            RenderSlot::new(index, 0)
        }
    }

    /// Free a slot. Returns true if it was alive.
    pub fn free(&mut self, slot: RenderSlot) -> bool {
        if !self.is_alive(slot) {
            return false;
        }

        self.generations[slot.index as usize] += 1;
        self.free_indices.push(slot.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, slot: RenderSlot) -> bool {
        let idx = slot.index as usize;
        idx < self.generations.len() && self.generations[idx] == slot.generation
    }

    /// Number of slots currently in use.
    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }

    /// Highest index ever allocated + 1.
    pub fn capacity(&self) -> u32 {
        self.generations.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = SlotAllocator::new();

        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);
        assert!(alloc.is_alive(a));

        assert!(alloc.free(a));
        assert!(!alloc.free(a));
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(a));
        assert!(alloc.is_alive(b));
    }

    #[test]
    fn test_reused_slot_gets_new_generation() {
        let mut alloc = SlotAllocator::new();

        let a = alloc.allocate();
        alloc.free(a);
        let b = alloc.allocate();

        assert_eq!(a.index(), b.index());
        assert_ne!(a.generation(), b.generation());
        assert!(!alloc.is_alive(a));
        assert_eq!(alloc.capacity(), 1);
    }
}
