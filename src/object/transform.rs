//! Part Transforms
//!
//! Two-tier transform system:
//! - Transform: local position/angles/scale of a part (relative to its parent)
//! - GlobalTransform: computed world-space matrix (for drawing and collision)
//!
//! For parts with a parent, GlobalTransform = parent.GlobalTransform * self.Transform.
//! For the root part, GlobalTransform = Transform.

use serde::{Deserialize, Serialize};

use super::entity::Part;
use crate::math::{mat4_from_trs, mat4_identity, mat4_mul, mat4_transform_point, Mat4, Vec3};

/// Local transform relative to the parent part (or the world for the root).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position relative to parent
    pub position: Vec3,
    /// Rotation angles in radians, applied Z, X, then Y
    pub angles: Vec3,
    /// Non-uniform scale
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform (origin, no rotation, scale 1)
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        angles: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        mat4_from_trs(self.position, self.angles, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// World-space transform, computed from the part hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform {
    matrix: Mat4,
}

impl GlobalTransform {
    pub fn identity() -> Self {
        Self { matrix: mat4_identity() }
    }

    /// For the root part
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            matrix: transform.to_matrix(),
        }
    }

    /// Compute a child's global transform from its parent's global and its local
    pub fn from_parent_and_local(parent: &GlobalTransform, local: &Transform) -> Self {
        Self {
            matrix: mat4_mul(&parent.matrix, &local.to_matrix()),
        }
    }

    /// World position (translation component)
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.matrix[0][3], self.matrix[1][3], self.matrix[2][3])
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        mat4_transform_point(&self.matrix, point)
    }
}

impl Default for GlobalTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compute world transforms for an object's parts.
///
/// Parts are stored in creation order and a parent is always created before
/// its children, so one forward pass is enough. The result is indexed like
/// `parts`. A part whose parent rank is missing is treated as a root.
pub fn propagate_transforms(parts: &[Part]) -> Vec<GlobalTransform> {
    let mut globals: Vec<GlobalTransform> = Vec::with_capacity(parts.len());

    for part in parts {
        let parent_global = part
            .parent
            .and_then(|rank| parts.iter().position(|p| p.rank == rank))
            .filter(|&idx| idx < globals.len())
            .map(|idx| globals[idx]);

        let global = match parent_global {
            Some(parent) => GlobalTransform::from_parent_and_local(&parent, &part.transform),
            None => GlobalTransform::from_transform(&part.transform),
        };
        globals.push(global);
    }

    globals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_to_matrix() {
        let t = Transform::from_position(Vec3::new(10.0, 20.0, 30.0));
        let m = t.to_matrix();

        // Translation should be in the last column
        assert!((m[0][3] - 10.0).abs() < 0.001);
        assert!((m[1][3] - 20.0).abs() < 0.001);
        assert!((m[2][3] - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_parent_child_transform() {
        let parent = GlobalTransform::from_transform(&Transform::from_position(Vec3::new(100.0, 0.0, 0.0)));
        let child_local = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));

        let child_global = GlobalTransform::from_parent_and_local(&parent, &child_local);
        assert!(child_global.position().approx_eq(Vec3::new(110.0, 0.0, 0.0), 0.001));
    }

    #[test]
    fn test_parent_scale_applies_to_child_offset() {
        let parent_local = Transform {
            position: Vec3::ZERO,
            angles: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let parent = GlobalTransform::from_transform(&parent_local);
        let child = GlobalTransform::from_parent_and_local(&parent, &Transform::from_position(Vec3::new(0.0, 4.5, 1.9)));
        assert!(child.position().approx_eq(Vec3::new(0.0, 9.0, 3.8), 0.001));
    }
}
