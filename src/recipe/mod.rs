//! Construction recipes
//!
//! A `Recipe` describes everything the factory needs to assemble one object
//! type: the part tree, collision volumes, shadow, terrain leveling and the
//! placement rules applied afterwards. Recipes are plain data, so the whole
//! catalog can be written to and read back from RON.
//!
//! Part ranks follow the engine convention:
//! - rank 0 is the root and carries the object's world placement
//! - every other part names a parent rank created before it
//! - ranks may leave gaps (ruins put their wheels at 6..9)

pub mod catalog;
pub mod io;
pub mod tables;

pub use catalog::Catalog;
pub use io::{load_catalog, load_catalog_from_str, save_catalog, save_catalog_plain};

use serde::{Deserialize, Serialize};

use crate::engine::{BuildingLevel, SlotKind};
use crate::math::Vec3;
use crate::object::{CrashSphere, ShadowCircle, Sphere};

/// One node of a recipe's part tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub rank: usize,
    /// `None` only for the root
    pub parent: Option<usize>,
    /// Model name in the model manager
    pub mesh: String,
    /// Take an exclusive copy instead of a shared reference
    #[serde(default)]
    pub copy: bool,
    #[serde(default)]
    pub mirror: bool,
    #[serde(default = "zero")]
    pub position: Vec3,
    /// Radians, applied Z, X, then Y
    #[serde(default = "zero")]
    pub angles: Vec3,
    #[serde(default = "one")]
    pub scale: Vec3,
    /// How a motion controller drives this part
    #[serde(default)]
    pub joint: Joint,
}

/// Articulation of a body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Joint {
    #[default]
    Rigid,
    /// Spins around Z with ground speed
    Wheel,
    /// Swings back and forth while walking
    Leg,
    /// Flaps continuously
    Wing,
}

fn zero() -> Vec3 {
    Vec3::ZERO
}

fn one() -> Vec3 {
    Vec3::ONE
}

impl PartSpec {
    /// Root part at the object's origin.
    pub fn root(mesh: &str) -> Self {
        Self {
            rank: 0,
            parent: None,
            mesh: mesh.to_string(),
            copy: false,
            mirror: false,
            position: Vec3::ZERO,
            angles: Vec3::ZERO,
            scale: Vec3::ONE,
            joint: Joint::Rigid,
        }
    }

    pub fn child(rank: usize, parent: usize, mesh: &str) -> Self {
        Self {
            rank,
            parent: Some(parent),
            ..Self::root(mesh)
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn angles(mut self, x: f32, y: f32, z: f32) -> Self {
        self.angles = Vec3::new(x, y, z);
        self
    }

    /// Uniform scale.
    pub fn zoom(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn zoom_xyz(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn copied(mut self) -> Self {
        self.copy = true;
        self
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror = true;
        self
    }

    pub fn joint(mut self, joint: Joint) -> Self {
        self.joint = joint;
        self
    }
}

/// How the root is raised after placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeightRule {
    /// Placement height is ignored
    None,
    /// Caller's height offset plus a per-type extra
    Params { extra: f32 },
    /// A literal offset, whatever the caller asked for
    Fixed(f32),
}

impl HeightRule {
    pub fn offset(self, requested: f32) -> f32 {
        match self {
            HeightRule::None => 0.0,
            HeightRule::Params { extra } => requested + extra,
            HeightRule::Fixed(h) => h,
        }
    }
}

impl Default for HeightRule {
    fn default() -> Self {
        HeightRule::Params { extra: 0.0 }
    }
}

/// Map reveal radius. Named values are resolved against `FactoryConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ShowLimit {
    #[default]
    None,
    Base,
    LightningProtection,
    Thumper,
    Radius(f32),
}

/// Settling applied to wrecks after the height offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub dy: f32,
    pub dx: f32,
    pub dz: f32,
}

/// Glints spawned above a crystal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    /// Height above the root
    pub height: f32,
    pub radius: f32,
    pub count: u32,
}

/// Construction recipe of one object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Engine treatment of the root slot
    pub root_kind: SlotKind,
    pub parts: Vec<PartSpec>,
    pub crash_spheres: Vec<CrashSphere>,
    pub camera_sphere: Option<Sphere>,
    pub jostling_sphere: Option<Sphere>,
    pub shadow: Option<ShadowCircle>,
    /// Terrain flattening around the footprint
    pub building_level: Option<BuildingLevel>,
    /// Snap the root to the terrain
    pub floor_adjust: bool,
    pub height: HeightRule,
    pub tilt: Option<Tilt>,
    /// Local position of the power-cell socket
    pub power_position: Option<Vec3>,
    pub show_limit: ShowLimit,
    /// Store the caller's power level as energy
    pub energy_from_power: bool,
    pub sparkle: Option<Sparkle>,
    /// Marker with parts only: no collision, no snapping, no controller
    pub transient: bool,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            root_kind: SlotKind::Fixed,
            parts: Vec::new(),
            crash_spheres: Vec::new(),
            camera_sphere: None,
            jostling_sphere: None,
            shadow: None,
            building_level: None,
            floor_adjust: false,
            height: HeightRule::default(),
            tilt: None,
            power_position: None,
            show_limit: ShowLimit::None,
            energy_from_power: false,
            sparkle: None,
            transient: false,
        }
    }
}

impl Recipe {
    /// Recipe with a single root part.
    pub fn single(mesh: &str) -> Self {
        Self::default().part(PartSpec::root(mesh))
    }

    pub fn kind(mut self, kind: SlotKind) -> Self {
        self.root_kind = kind;
        self
    }

    pub fn part(mut self, part: PartSpec) -> Self {
        self.parts.push(part);
        self
    }

    /// Metallic crash sphere of standard hardness.
    pub fn crash(self, x: f32, y: f32, z: f32, radius: f32) -> Self {
        self.sphere(CrashSphere::metal(Vec3::new(x, y, z), radius))
    }

    pub fn sphere(mut self, sphere: CrashSphere) -> Self {
        self.crash_spheres.push(sphere);
        self
    }

    pub fn camera(mut self, x: f32, y: f32, z: f32, radius: f32) -> Self {
        self.camera_sphere = Some(Sphere::new(Vec3::new(x, y, z), radius));
        self
    }

    pub fn jostle(mut self, x: f32, y: f32, z: f32, radius: f32) -> Self {
        self.jostling_sphere = Some(Sphere::new(Vec3::new(x, y, z), radius));
        self
    }

    pub fn shadow(mut self, shadow: ShadowCircle) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn level(mut self, level: BuildingLevel) -> Self {
        self.building_level = Some(level);
        self
    }

    pub fn floor_adjusted(mut self) -> Self {
        self.floor_adjust = true;
        self
    }

    pub fn height(mut self, rule: HeightRule) -> Self {
        self.height = rule;
        self
    }

    pub fn tilt(mut self, dy: f32, dx: f32, dz: f32) -> Self {
        self.tilt = Some(Tilt { dy, dx, dz });
        self
    }

    pub fn power_at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.power_position = Some(Vec3::new(x, y, z));
        self
    }

    pub fn show_limit(mut self, limit: ShowLimit) -> Self {
        self.show_limit = limit;
        self
    }

    pub fn stores_energy(mut self) -> Self {
        self.energy_from_power = true;
        self
    }

    pub fn sparkle(mut self, height: f32, radius: f32, count: u32) -> Self {
        self.sparkle = Some(Sparkle { height, radius, count });
        self
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Root part of the tree, if present.
    pub fn root(&self) -> Option<&PartSpec> {
        self.parts.iter().find(|p| p.rank == 0)
    }

    /// Vertical offset of the root after placement: the height rule plus
    /// the tilt settling.
    pub fn vertical_offset(&self, requested: f32) -> f32 {
        let tilt = self.tilt.map(|t| t.dy).unwrap_or(0.0);
        self.height.offset(requested) + tilt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_rules() {
        assert_eq!(HeightRule::None.offset(5.0), 0.0);
        assert_eq!(HeightRule::Params { extra: 75.0 }.offset(5.0), 80.0);
        assert_eq!(HeightRule::Fixed(-1.4).offset(5.0), -1.4);
        assert_eq!(HeightRule::default().offset(2.5), 2.5);
    }

    #[test]
    fn test_vertical_offset_includes_tilt() {
        let recipe = Recipe::single("ruin10").tilt(8.0, 1.2, 0.0);
        assert_eq!(recipe.vertical_offset(1.0), 9.0);
    }

    #[test]
    fn test_part_builder() {
        let part = PartSpec::child(18, 1, "base4").at(23.5, 0.0, -7.0).mirrored();
        assert_eq!(part.parent, Some(1));
        assert!(part.mirror);
        assert!(!part.copy);
        assert_eq!(part.scale, Vec3::ONE);
    }

    #[test]
    fn test_part_defaults_from_ron() {
        let part: PartSpec = ron::from_str("(rank: 1, parent: Some(0), mesh: \"derrick2\")").unwrap();
        assert_eq!(part.position, Vec3::ZERO);
        assert_eq!(part.scale, Vec3::ONE);
        assert!(!part.mirror);
    }
}
