//! Shadow circles
//!
//! Objects cast a round blob shadow onto the terrain, centered under the
//! root part. Barriers use the elongated worm-style decal instead.

use serde::{Deserialize, Serialize};

/// Decal used for the shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadowKind {
    #[default]
    Normal,
    Worm,
}

/// Round shadow under an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowCircle {
    pub radius: f32,
    /// Darkness at the center (0 = invisible, 1 = black)
    pub intensity: f32,
    #[serde(default)]
    pub kind: ShadowKind,
}

impl ShadowCircle {
    pub const fn new(radius: f32, intensity: f32) -> Self {
        Self {
            radius,
            intensity,
            kind: ShadowKind::Normal,
        }
    }

    pub const fn worm(radius: f32, intensity: f32) -> Self {
        Self {
            radius,
            intensity,
            kind: ShadowKind::Worm,
        }
    }

    /// Darkness at `distance` from the center, fading linearly to the rim.
    pub fn darkness_at(&self, distance: f32) -> f32 {
        if self.radius <= 0.0 || distance >= self.radius {
            return 0.0;
        }
        self.intensity * (1.0 - distance / self.radius)
    }
}
