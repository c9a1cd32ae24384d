//! Motion
//!
//! Owns the body of an animate object: `create` asks a `BodyBuilder` to
//! assemble the parts, then remembers which of them are articulated so
//! `animate` can spin wheels, swing legs and flap wings.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Brain, Link, Physics};
use crate::math::Vec3;
use crate::object::{Entity, ObjectId, ObjectType, Part};
use crate::recipe::Joint;

/// Leg swing amplitude, radians
const LEG_SWING: f32 = 0.5;
/// Leg cycles per unit travelled
const STRIDE_RATE: f32 = 1.5;
const WING_SWING: f32 = 0.6;
/// Wing beats per second
const WING_RATE: f32 = 12.0;
const WHEEL_RADIUS: f32 = 1.0;

/// Animation family of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionKind {
    /// Any robot, and the Apollo jeep
    Vehicle,
    Human,
    /// Invisible mission script driver
    LevelController,
    Toto,
    Queen,
    Ant,
    Spider,
    Bee,
    Worm,
}

impl MotionKind {
    /// Motion of an animate object type, `None` for stationary types.
    pub fn for_type(object_type: ObjectType) -> Option<MotionKind> {
        use ObjectType::*;
        let kind = match object_type {
            Human | Tech => MotionKind::Human,
            Controller => MotionKind::LevelController,
            Toto => MotionKind::Toto,
            Mother => MotionKind::Queen,
            Ant => MotionKind::Ant,
            Spider => MotionKind::Spider,
            Bee => MotionKind::Bee,
            Worm => MotionKind::Worm,
            other if other.category().is_some_and(|c| c.is_animate()) => MotionKind::Vehicle,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether legs keep moving while the body stands still.
    fn fidgets(self) -> bool {
        matches!(self, MotionKind::Queen | MotionKind::Ant | MotionKind::Spider | MotionKind::Bee)
    }
}

/// Assembles the parts of a body. Implemented by the object factory.
pub trait BodyBuilder {
    /// Build `entity`'s part tree from its recipe with the root at
    /// `position`, heading `angle`. Returns the articulated parts.
    fn build_body(&mut self, entity: &mut Entity, position: Vec3, angle: f32) -> Vec<(usize, Joint)>;
}

#[derive(Debug)]
pub struct Motion {
    owner: ObjectId,
    kind: MotionKind,
    physics: Option<Link<Physics>>,
    brain: Option<Link<Brain>>,
    joints: Vec<(usize, Joint)>,
    /// Rest angles of the articulated parts, captured at creation
    rest: Vec<Vec3>,
    created: bool,
    time: f32,
    stride: f32,
}

impl Motion {
    pub fn new(owner: ObjectId, kind: MotionKind) -> Self {
        Self {
            owner,
            kind,
            physics: None,
            brain: None,
            joints: Vec::new(),
            rest: Vec::new(),
            created: false,
            time: 0.0,
            stride: 0.0,
        }
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn set_physics(&mut self, link: Link<Physics>) {
        if self.physics.replace(link).is_some() {
            log::warn!("motion of {:?} relinked to a physics", self.owner);
        }
    }

    pub fn set_brain(&mut self, link: Link<Brain>) {
        if self.brain.replace(link).is_some() {
            log::warn!("motion of {:?} relinked to a brain", self.owner);
        }
    }

    pub fn physics(&self) -> Option<Link<Physics>> {
        self.physics
    }

    pub fn brain(&self) -> Option<Link<Brain>> {
        self.brain
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Articulated parts, by rank.
    pub fn joints(&self) -> &[(usize, Joint)] {
        &self.joints
    }

    /// Build the body into `entity` and store the power level as its energy.
    pub fn create<B: BodyBuilder + ?Sized>(
        &mut self,
        builder: &mut B,
        entity: &mut Entity,
        position: Vec3,
        angle: f32,
        power: f32,
    ) {
        self.joints = builder.build_body(entity, position, angle);
        self.rest = self
            .joints
            .iter()
            .map(|&(rank, _)| entity.part(rank).map(|p| p.transform.angles).unwrap_or(Vec3::ZERO))
            .collect();
        entity.energy = power;
        self.created = true;
        log::debug!("{:?} motion created for {:?} with {} joints", self.kind, self.owner, self.joints.len());
    }

    /// Animate the joints for one frame at ground `speed`.
    pub fn animate(&mut self, dt: f32, speed: f32, parts: &mut [Part]) {
        self.time += dt;
        self.stride += speed.abs() * dt * STRIDE_RATE;

        // Legs swing with distance covered, plus a slow idle cycle for insects
        let leg_phase = if speed.abs() > f32::EPSILON {
            self.stride * 2.0 * PI
        } else if self.kind.fidgets() {
            self.time * 2.0
        } else {
            0.0
        };

        for (i, &(rank, joint)) in self.joints.iter().enumerate() {
            let Some(part) = parts.iter_mut().find(|p| p.rank == rank) else {
                continue;
            };
            let rest = self.rest.get(i).copied().unwrap_or(Vec3::ZERO);
            // Alternate sides step out of phase
            let offset = if i % 2 == 0 { 0.0 } else { PI };
            match joint {
                Joint::Rigid => {}
                Joint::Wheel => {
                    part.transform.angles.z -= speed * dt / WHEEL_RADIUS;
                }
                Joint::Leg => {
                    let swing = if leg_phase == 0.0 { 0.0 } else { LEG_SWING * (leg_phase + offset).sin() };
                    part.transform.angles.z = rest.z + swing;
                }
                Joint::Wing => {
                    let flap = WING_SWING * (self.time * WING_RATE * 2.0 * PI + offset).sin();
                    part.transform.angles.x = rest.x + flap;
                }
            }
        }
    }
}
