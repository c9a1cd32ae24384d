//! Vector and matrix math for object placement
//!
//! Angles are radians throughout. Part rotations compose in Z, X, Y order
//! (the matrix is `Ry * Rx * Rz`), which is how the game's models were
//! authored.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Uniform vector, used for zoom factors.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).len()
    }

    /// Approximate equality, for float comparisons in tests and validation.
    pub fn approx_eq(self, other: Vec3, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// 2D point on the ground plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Point at `dist` from the origin along `angle`.
///
/// The Y component is negated so that positive angles turn clockwise when
/// seen from above, matching the ground plane convention of the models.
pub fn rotate_point(angle: f32, dist: f32) -> Point {
    Point::new(dist * angle.cos(), -dist * angle.sin())
}

/// Degrees to radians.
pub fn deg(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

// ============================================================================
// Matrices
// ============================================================================

pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub fn mat4_identity() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Create translation matrix
pub fn mat4_translation(t: Vec3) -> Mat4 {
    [
        [1.0, 0.0, 0.0, t.x],
        [0.0, 1.0, 0.0, t.y],
        [0.0, 0.0, 1.0, t.z],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Non-uniform scale matrix
pub fn mat4_scale(s: Vec3) -> Mat4 {
    [
        [s.x, 0.0, 0.0, 0.0],
        [0.0, s.y, 0.0, 0.0],
        [0.0, 0.0, s.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

fn mat4_rotation_x(a: f32) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

fn mat4_rotation_y(a: f32) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

fn mat4_rotation_z(a: f32) -> Mat4 {
    let (s, c) = a.sin_cos();
    [
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation from euler angles (radians), applied Z first, then X, then Y.
pub fn mat4_rotation_zxy(angles: Vec3) -> Mat4 {
    let zx = mat4_mul(&mat4_rotation_x(angles.x), &mat4_rotation_z(angles.z));
    mat4_mul(&mat4_rotation_y(angles.y), &zx)
}

/// Multiply two 4x4 matrices
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Transform a point by a 4x4 matrix
pub fn mat4_transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
        m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
        m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
    )
}

/// Translation * rotation * scale
pub fn mat4_from_trs(position: Vec3, angles: Vec3, scale: Vec3) -> Mat4 {
    let rs = mat4_mul(&mat4_rotation_zxy(angles), &mat4_scale(scale));
    mat4_mul(&mat4_translation(position), &rs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_point_quarter_turns() {
        let p = rotate_point(0.0, 10.0);
        assert!((p.x - 10.0).abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        let p = rotate_point(PI / 2.0, 10.0);
        assert!(p.x.abs() < 0.001);
        assert!((p.y + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_deg() {
        assert!((deg(180.0) - PI).abs() < 0.0001);
        assert!((deg(-90.0) + PI / 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_y_turns_x_into_minus_z() {
        let m = mat4_rotation_zxy(Vec3::new(0.0, PI / 2.0, 0.0));
        let p = mat4_transform_point(&m, Vec3::new(1.0, 0.0, 0.0));
        assert!(p.approx_eq(Vec3::new(0.0, 0.0, -1.0), 0.001));
    }

    #[test]
    fn test_trs_applies_scale_before_translation() {
        let m = mat4_from_trs(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::splat(2.0));
        let p = mat4_transform_point(&m, Vec3::new(1.0, 1.0, 0.0));
        assert!(p.approx_eq(Vec3::new(2.0, 7.0, 0.0), 0.001));
    }

    #[test]
    fn test_identity_is_neutral() {
        let t = mat4_from_trs(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, 0.2, 0.1), Vec3::ONE);
        let m = mat4_mul(&mat4_identity(), &t);
        assert_eq!(m, t);
    }
}
