//! Model Manager - shared mesh cache
//!
//! Meshes are looked up by name (e.g. `"portico1"`). A part either:
//! - references the cached mesh (`MeshHandle::Shared`), so every instance
//!   of the same model shares one copy of the geometry, or
//! - takes an exclusive copy (`MeshHandle::Owned`) that it may tint or
//!   deform without touching other instances.
//!
//! Mesh files themselves are not parsed here. A name that was never
//! registered resolves to a placeholder cube so that construction can
//! proceed; the renderer decides how to present it.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Geometry of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Model name without extension
    pub name: String,
    /// Vertex positions in model space
    pub vertices: Vec<Vec3>,
    /// Vertex color multiplier (RGB 0-255)
    pub tint: [u8; 3],
}

impl Mesh {
    /// Unit cube placeholder for models that were not registered.
    pub fn placeholder(name: &str) -> Self {
        let mut vertices = Vec::with_capacity(8);
        for &x in &[-1.0, 1.0] {
            for &y in &[0.0, 2.0] {
                for &z in &[-1.0, 1.0] {
                    vertices.push(Vec3::new(x, y, z));
                }
            }
        }
        Self {
            name: name.to_string(),
            vertices,
            tint: [255, 255, 255],
        }
    }

    /// Radius of the smallest origin-centered sphere enclosing the mesh.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices.iter().map(|v| v.len()).fold(0.0, f32::max)
    }
}

/// A part's hold on its mesh.
#[derive(Debug, Clone)]
pub enum MeshHandle {
    /// Shared, immutable geometry owned by the model manager's cache
    Shared(Rc<Mesh>),
    /// Exclusively owned, mutable duplicate
    Owned(Box<Mesh>),
}

impl MeshHandle {
    pub fn mesh(&self) -> &Mesh {
        match self {
            MeshHandle::Shared(mesh) => mesh,
            MeshHandle::Owned(mesh) => mesh,
        }
    }

    /// Mutable access, only available on copies.
    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            MeshHandle::Shared(_) => None,
            MeshHandle::Owned(mesh) => Some(mesh),
        }
    }

    pub fn name(&self) -> &str {
        &self.mesh().name
    }

    pub fn is_copy(&self) -> bool {
        matches!(self, MeshHandle::Owned(_))
    }

    /// True when both handles point at the very same geometry.
    pub fn shares_data_with(&self, other: &MeshHandle) -> bool {
        std::ptr::eq(self.mesh(), other.mesh())
    }
}

/// Caches meshes by name and hands out references or copies.
#[derive(Debug, Default)]
pub struct ModelManager {
    /// Loaded meshes keyed by name
    meshes: HashMap<String, Rc<Mesh>>,
    /// Number of copies handed out since creation
    copies_made: usize,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register geometry for a model name, replacing any cached mesh.
    pub fn register(&mut self, mesh: Mesh) {
        self.meshes.insert(mesh.name.clone(), Rc::new(mesh));
    }

    fn load(&mut self, name: &str) -> Rc<Mesh> {
        if let Some(mesh) = self.meshes.get(name) {
            return Rc::clone(mesh);
        }
        log::debug!("model '{}' not registered, using placeholder", name);
        let mesh = Rc::new(Mesh::placeholder(name));
        self.meshes.insert(name.to_string(), Rc::clone(&mesh));
        mesh
    }

    /// Shared reference to the named mesh.
    pub fn reference(&mut self, name: &str) -> MeshHandle {
        MeshHandle::Shared(self.load(name))
    }

    /// Exclusive copy of the named mesh.
    pub fn copy(&mut self, name: &str) -> MeshHandle {
        let mesh = self.load(name);
        self.copies_made += 1;
        MeshHandle::Owned(Box::new((*mesh).clone()))
    }

    /// Whether the named mesh is in the cache.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
    }

    /// Number of distinct meshes in the cache.
    pub fn loaded_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn copies_made(&self) -> usize {
        self.copies_made
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_share_data() {
        let mut models = ModelManager::new();
        let a = models.reference("stone");
        let b = models.reference("stone");

        assert!(!a.is_copy());
        assert!(a.shares_data_with(&b));
        assert_eq!(models.loaded_count(), 1);
    }

    #[test]
    fn test_copies_are_distinct() {
        let mut models = ModelManager::new();
        let shared = models.reference("power");
        let mut a = models.copy("power");
        let b = models.copy("power");

        assert!(a.is_copy());
        assert!(!a.shares_data_with(&b));
        assert!(!a.shares_data_with(&shared));
        assert_eq!(models.copies_made(), 2);

        // Tinting one copy leaves the other untouched
        if let Some(mesh) = a.mesh_mut() {
            mesh.tint = [255, 0, 0];
        }
        assert_eq!(b.mesh().tint, [255, 255, 255]);
        assert_eq!(shared.mesh().tint, [255, 255, 255]);
    }

    #[test]
    fn test_registered_mesh_is_used() {
        let mut models = ModelManager::new();
        models.register(Mesh {
            name: "flag1b".to_string(),
            vertices: vec![Vec3::new(0.0, 3.0, 4.0)],
            tint: [0, 0, 255],
        });
        let handle = models.reference("flag1b");
        assert_eq!(handle.mesh().tint, [0, 0, 255]);
        assert!((handle.mesh().bounding_radius() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_shared_handle_is_read_only() {
        let mut models = ModelManager::new();
        let mut handle = models.reference("metal");
        assert!(handle.mesh_mut().is_none());
        assert!(models.is_loaded("metal"));
    }
}
