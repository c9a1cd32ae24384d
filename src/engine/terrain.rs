//! Terrain collaborator
//!
//! Buildings with a wide footprint ask the terrain to flatten the ground
//! under them; most small objects instead snap their root to the floor.

use serde::{Deserialize, Serialize};

use super::Terrain;
use crate::math::Vec3;

/// Footprint leveling request.
///
/// Inside `min` the ground is fully flattened to the building's base; between
/// `min` and `max` it blends back to the original relief.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingLevel {
    /// Radius of the fully flat area
    pub min: f32,
    /// Radius where the relief is untouched again
    pub max: f32,
    /// Height of the flat area above the original ground
    pub height: f32,
    /// Blend factor between flat and original ground
    pub factor: f32,
}

impl BuildingLevel {
    pub const fn new(min: f32, max: f32, height: f32, factor: f32) -> Self {
        Self { min, max, height, factor }
    }

    /// The footprint most small buildings use.
    pub const STANDARD: BuildingLevel = BuildingLevel::new(7.0, 9.0, 1.0, 0.5);
}

/// Flat ground at a fixed height that records leveling requests.
#[derive(Debug, Clone, Default)]
pub struct FlatTerrain {
    height: f32,
    levels: Vec<(Vec3, BuildingLevel)>,
}

impl FlatTerrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(height: f32) -> Self {
        Self {
            height,
            levels: Vec::new(),
        }
    }

    /// Leveling requests received so far, with their centers.
    pub fn levels(&self) -> &[(Vec3, BuildingLevel)] {
        &self.levels
    }
}

impl Terrain for FlatTerrain {
    fn floor_height(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }

    fn add_building_level(&mut self, center: Vec3, level: BuildingLevel) {
        log::debug!(
            "leveling footprint at ({:.1}, {:.1}) r{}..{}",
            center.x, center.z, level.min, level.max
        );
        self.levels.push((center, level));
    }
}
