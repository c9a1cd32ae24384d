//! Entities
//!
//! An `Entity` is one assembled game object: its part tree, collision
//! volumes, shadow, and whichever controllers drive it. It is created in a
//! single factory call and then mutated by simulation code.

use serde::{Deserialize, Serialize};

use super::collision::{CrashSphere, Sphere};
use super::object_type::ObjectType;
use super::shadow::ShadowCircle;
use super::transform::{propagate_transforms, GlobalTransform, Transform};
use crate::automation::Automation;
use crate::behavior::{Brain, Link, Motion, Physics};
use crate::engine::{MeshHandle, RenderSlot};
use crate::math::Vec3;

/// Stable identifier of an object, chosen by the caller (level loader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// Everything needed to construct one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateParams {
    pub id: ObjectId,
    pub object_type: ObjectType,
    /// World position of the root part before floor snapping
    pub position: Vec3,
    /// Heading around the vertical axis, radians
    pub angle: f32,
    /// Extra vertical offset applied after placement
    pub height: f32,
    /// Energy level for cells and vehicles (0..1, above 1 for nuclear cells)
    pub power: f32,
    /// Vehicle is remote-controlled by the player
    pub trainer: bool,
    /// Vehicle is a toy (cosmetic variant)
    pub toy: bool,
    /// Variant index, meaning depends on the type
    pub option: i32,
}

impl Default for CreateParams {
    fn default() -> Self {
        Self {
            id: ObjectId(0),
            object_type: ObjectType::Null,
            position: Vec3::ZERO,
            angle: 0.0,
            height: 0.0,
            power: 1.0,
            trainer: false,
            toy: false,
            option: 0,
        }
    }
}

impl CreateParams {
    pub fn new(id: ObjectId, object_type: ObjectType, position: Vec3) -> Self {
        Self {
            id,
            object_type,
            position,
            ..Self::default()
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_power(mut self, power: f32) -> Self {
        self.power = power;
        self
    }

    pub fn with_flags(mut self, trainer: bool, toy: bool) -> Self {
        self.trainer = trainer;
        self.toy = toy;
        self
    }

    pub fn with_option(mut self, option: i32) -> Self {
        self.option = option;
        self
    }
}

/// One node of an object's render hierarchy.
#[derive(Debug, Clone)]
pub struct Part {
    /// Rank within the object (0 = root). Ranks may leave gaps.
    pub rank: usize,
    /// Rank of the parent part; `None` only for the root
    pub parent: Option<usize>,
    /// Engine slot drawing this part
    pub slot: RenderSlot,
    pub mesh: MeshHandle,
    /// Model drawn mirrored along Z
    pub mirror: bool,
    pub transform: Transform,
}

/// An assembled game object.
#[derive(Debug)]
pub struct Entity {
    id: ObjectId,
    object_type: ObjectType,
    pub option: i32,
    pub trainer: bool,
    pub toy: bool,
    /// Stored energy (cells, power buildings)
    pub energy: f32,
    /// Distance at which the object is revealed on the map, 0 = never
    pub show_limit_radius: f32,
    /// Where a power cell sits, in local space
    pub power_position: Option<Vec3>,
    /// Height of the root above the terrain once placed, including the
    /// height offset and ruin settling. Zero for floor-snapped objects.
    pub floor_height: f32,
    /// Built by the static-object path
    pub is_static: bool,

    parts: Vec<Part>,
    crash_spheres: Vec<CrashSphere>,
    camera_sphere: Option<Sphere>,
    jostling_sphere: Option<Sphere>,
    shadow: Option<ShadowCircle>,

    motion: Option<Motion>,
    physics: Option<Physics>,
    brain: Option<Brain>,
    automation: Option<Automation>,
}

impl Entity {
    pub fn new(id: ObjectId, object_type: ObjectType) -> Self {
        Self {
            id,
            object_type,
            option: 0,
            trainer: false,
            toy: false,
            energy: 0.0,
            show_limit_radius: 0.0,
            power_position: None,
            floor_height: 0.0,
            is_static: false,
            parts: Vec::new(),
            crash_spheres: Vec::new(),
            camera_sphere: None,
            jostling_sphere: None,
            shadow: None,
            motion: None,
            physics: None,
            brain: None,
            automation: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    // =========================================================================
    // Parts
    // =========================================================================

    /// Append a part. The caller guarantees the parent rank already exists.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Parts in creation order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, rank: usize) -> Option<&Part> {
        self.parts.iter().find(|p| p.rank == rank)
    }

    pub fn part_mut(&mut self, rank: usize) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.rank == rank)
    }

    pub fn root(&self) -> Option<&Part> {
        self.part(0)
    }

    /// Local position of the root, which is also its world position.
    pub fn position(&self) -> Vec3 {
        self.root().map(|p| p.transform.position).unwrap_or(Vec3::ZERO)
    }

    pub fn set_position(&mut self, position: Vec3) {
        if let Some(root) = self.part_mut(0) {
            root.transform.position = position;
        }
    }

    /// Root rotation angles.
    pub fn angles(&self) -> Vec3 {
        self.root().map(|p| p.transform.angles).unwrap_or(Vec3::ZERO)
    }

    pub fn set_angles(&mut self, angles: Vec3) {
        if let Some(root) = self.part_mut(0) {
            root.transform.angles = angles;
        }
    }

    /// World transforms of all parts, indexed like `parts()`.
    pub fn global_transforms(&self) -> Vec<GlobalTransform> {
        propagate_transforms(&self.parts)
    }

    /// Render slots owned by this entity.
    pub fn slots(&self) -> impl Iterator<Item = RenderSlot> + '_ {
        self.parts.iter().map(|p| p.slot)
    }

    // =========================================================================
    // Collision & shadow
    // =========================================================================

    pub fn add_crash_sphere(&mut self, sphere: CrashSphere) {
        self.crash_spheres.push(sphere);
    }

    pub fn crash_spheres(&self) -> &[CrashSphere] {
        &self.crash_spheres
    }

    pub fn set_camera_sphere(&mut self, sphere: Option<Sphere>) {
        self.camera_sphere = sphere;
    }

    pub fn camera_sphere(&self) -> Option<&Sphere> {
        self.camera_sphere.as_ref()
    }

    pub fn set_jostling_sphere(&mut self, sphere: Option<Sphere>) {
        self.jostling_sphere = sphere;
    }

    pub fn jostling_sphere(&self) -> Option<&Sphere> {
        self.jostling_sphere.as_ref()
    }

    pub fn set_shadow(&mut self, shadow: ShadowCircle) {
        self.shadow = Some(shadow);
    }

    pub fn shadow(&self) -> Option<&ShadowCircle> {
        self.shadow.as_ref()
    }

    // =========================================================================
    // Controllers
    // =========================================================================

    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = Some(motion);
    }

    pub fn set_physics(&mut self, physics: Physics) {
        self.physics = Some(physics);
    }

    pub fn set_brain(&mut self, brain: Brain) {
        self.brain = Some(brain);
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    pub fn physics(&self) -> Option<&Physics> {
        self.physics.as_ref()
    }

    pub fn brain(&self) -> Option<&Brain> {
        self.brain.as_ref()
    }

    pub fn motion_mut(&mut self) -> Option<&mut Motion> {
        self.motion.as_mut()
    }

    pub fn physics_mut(&mut self) -> Option<&mut Physics> {
        self.physics.as_mut()
    }

    pub fn brain_mut(&mut self) -> Option<&mut Brain> {
        self.brain.as_mut()
    }

    /// Resolve a link to this entity's motion.
    pub fn motion_of(&self, link: Link<Motion>) -> Option<&Motion> {
        self.motion.as_ref().filter(|_| link.owner() == self.id)
    }

    pub fn physics_of(&self, link: Link<Physics>) -> Option<&Physics> {
        self.physics.as_ref().filter(|_| link.owner() == self.id)
    }

    pub fn brain_of(&self, link: Link<Brain>) -> Option<&Brain> {
        self.brain.as_ref().filter(|_| link.owner() == self.id)
    }

    pub fn set_automation(&mut self, automation: Automation) {
        self.automation = Some(automation);
    }

    pub fn automation(&self) -> Option<&Automation> {
        self.automation.as_ref()
    }

    pub fn automation_mut(&mut self) -> Option<&mut Automation> {
        self.automation.as_mut()
    }

    /// Advance controllers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(automation) = self.automation.as_mut() {
            automation.step(dt);
        }

        if self.brain.is_none() || self.physics.is_none() {
            // Decor bodies such as Toto only animate in place
            if let Some(motion) = self.motion.as_mut() {
                motion.animate(dt, 0.0, &mut self.parts);
            }
            return;
        }

        let (Some(brain), Some(motion), Some(physics)) =
            (self.brain.as_mut(), self.motion.as_mut(), self.physics.as_mut())
        else {
            return;
        };

        let command = brain.think(dt);
        physics.set_motor(command);
        let displacement = physics.step(dt);
        motion.animate(dt, physics.speed(), &mut self.parts);

        if let Some(root) = self.parts.iter_mut().find(|p| p.rank == 0) {
            root.transform.angles.y += command.turn * physics.turn_rate() * dt;
            let heading = root.transform.angles.y;
            let (s, c) = heading.sin_cos();
            root.transform.position = root.transform.position
                + Vec3::new(displacement * c, 0.0, -displacement * s);
        }
    }
}
