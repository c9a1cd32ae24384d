//! Collision volumes
//!
//! All volumes are spheres in the object's local space (relative to the
//! root part). They are descriptive data: the physics subsystem decides
//! what happens on contact.
//!
//! - Crash spheres: solid volumes, with the sound and hardness of an impact
//! - Camera sphere: keeps the camera from entering the object
//! - Jostling sphere: soft volume that makes plants sway when brushed

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Impact sound played when something hits a crash sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Soft thud (plants, mushrooms)
    Boum,
    /// Metallic impact (buildings, resources)
    BoumM,
    /// Wooden impact (trees, home)
    BoumS,
    /// Vegetal impact (roots)
    BoumV,
}

/// Plain sphere in local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn intersects(&self, other: &Sphere) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }
}

/// Solid collision sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrashSphere {
    pub sphere: Sphere,
    pub sound: Sound,
    /// 0 = soft, 1 = rock hard
    pub hardness: f32,
}

impl CrashSphere {
    pub const fn new(center: Vec3, radius: f32, sound: Sound, hardness: f32) -> Self {
        Self {
            sphere: Sphere::new(center, radius),
            sound,
            hardness,
        }
    }

    /// Metallic sphere of standard hardness, the most common kind.
    pub const fn metal(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius, Sound::BoumM, 0.45)
    }
}
