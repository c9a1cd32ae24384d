//! Physics
//!
//! A kinematic integrator: the motor command sets a target speed, the
//! current speed chases it with a bounded acceleration. Collisions and
//! terrain following belong to the simulation, not to this crate.

use super::{Brain, Link, MotorCommand, Motion, MotionKind};
use crate::object::ObjectId;

/// Speed limits of a body type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handling {
    /// Top speed in units per second
    pub max_speed: f32,
    /// Units per second squared
    pub acceleration: f32,
    /// Radians per second at full steering
    pub turn_rate: f32,
}

impl Handling {
    pub fn for_kind(kind: MotionKind) -> Self {
        let (max_speed, acceleration, turn_rate) = match kind {
            MotionKind::Vehicle => (10.0, 20.0, 1.5),
            MotionKind::Human => (4.0, 12.0, 3.0),
            MotionKind::Ant => (6.0, 12.0, 2.5),
            MotionKind::Spider => (8.0, 16.0, 2.5),
            MotionKind::Bee => (12.0, 24.0, 3.0),
            MotionKind::Worm => (2.0, 4.0, 1.0),
            // The queen never leaves her nest
            MotionKind::Queen | MotionKind::Toto | MotionKind::LevelController => (0.0, 0.0, 0.0),
        };
        Self {
            max_speed,
            acceleration,
            turn_rate,
        }
    }
}

#[derive(Debug)]
pub struct Physics {
    owner: ObjectId,
    motion: Option<Link<Motion>>,
    brain: Option<Link<Brain>>,
    handling: Handling,
    motor: MotorCommand,
    speed: f32,
    traveled: f32,
}

impl Physics {
    pub fn new(owner: ObjectId, kind: MotionKind) -> Self {
        Self {
            owner,
            motion: None,
            brain: None,
            handling: Handling::for_kind(kind),
            motor: MotorCommand::STOP,
            speed: 0.0,
            traveled: 0.0,
        }
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn set_motion(&mut self, link: Link<Motion>) {
        if self.motion.replace(link).is_some() {
            log::warn!("physics of {:?} relinked to a motion", self.owner);
        }
    }

    pub fn set_brain(&mut self, link: Link<Brain>) {
        if self.brain.replace(link).is_some() {
            log::warn!("physics of {:?} relinked to a brain", self.owner);
        }
    }

    pub fn motion(&self) -> Option<Link<Motion>> {
        self.motion
    }

    pub fn brain(&self) -> Option<Link<Brain>> {
        self.brain
    }

    pub fn handling(&self) -> Handling {
        self.handling
    }

    pub fn set_motor(&mut self, command: MotorCommand) {
        self.motor = command;
    }

    /// Signed speed along the heading.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn turn_rate(&self) -> f32 {
        self.handling.turn_rate
    }

    /// Total distance covered, forwards and backwards.
    pub fn distance_traveled(&self) -> f32 {
        self.traveled
    }

    /// Integrate one step and return the displacement along the heading.
    pub fn step(&mut self, dt: f32) -> f32 {
        let target = self.motor.speed * self.handling.max_speed;
        let max_delta = self.handling.acceleration * dt;
        self.speed += (target - self.speed).clamp(-max_delta, max_delta);

        let displacement = self.speed * dt;
        self.traveled += displacement.abs();
        displacement
    }
}
