//! Game objects
//!
//! Types describing what the factory produces: the object-type catalog,
//! entities and their parts, collision volumes, shadows, and the world that
//! owns created entities.

pub mod collision;
pub mod entity;
pub mod object_type;
pub mod shadow;
pub mod transform;
pub mod world;

pub use collision::{CrashSphere, Sound, Sphere};
pub use entity::{CreateParams, Entity, ObjectId, Part};
pub use object_type::{Category, ObjectType};
pub use shadow::{ShadowCircle, ShadowKind};
pub use transform::{propagate_transforms, GlobalTransform, Transform};
pub use world::ObjectWorld;
