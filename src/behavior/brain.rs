//! Brain
//!
//! The decision layer. Real decision-making (programs, insect AI) lives
//! outside the factory; here the brain executes a queue of timed orders and
//! turns the current one into a motor command.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Link, Motion, Physics};
use crate::object::ObjectId;

/// Throttle and steering, both in -1..1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorCommand {
    pub speed: f32,
    pub turn: f32,
}

impl MotorCommand {
    pub const STOP: MotorCommand = MotorCommand { speed: 0.0, turn: 0.0 };

    pub fn new(speed: f32, turn: f32) -> Self {
        Self {
            speed: speed.clamp(-1.0, 1.0),
            turn: turn.clamp(-1.0, 1.0),
        }
    }
}

/// One queued instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Order {
    /// Hold a motor command for `duration` seconds
    Drive { speed: f32, turn: f32, duration: f32 },
    /// Stand still
    Wait { duration: f32 },
}

impl Order {
    fn duration(&self) -> f32 {
        match *self {
            Order::Drive { duration, .. } | Order::Wait { duration } => duration,
        }
    }

    fn command(&self) -> MotorCommand {
        match *self {
            Order::Drive { speed, turn, .. } => MotorCommand::new(speed, turn),
            Order::Wait { .. } => MotorCommand::STOP,
        }
    }
}

#[derive(Debug)]
pub struct Brain {
    owner: ObjectId,
    motion: Option<Link<Motion>>,
    physics: Option<Link<Physics>>,
    orders: VecDeque<Order>,
    /// Time spent on the front order
    elapsed: f32,
}

impl Brain {
    pub fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            motion: None,
            physics: None,
            orders: VecDeque::new(),
            elapsed: 0.0,
        }
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn set_motion(&mut self, link: Link<Motion>) {
        if self.motion.replace(link).is_some() {
            log::warn!("brain of {:?} relinked to a motion", self.owner);
        }
    }

    pub fn set_physics(&mut self, link: Link<Physics>) {
        if self.physics.replace(link).is_some() {
            log::warn!("brain of {:?} relinked to a physics", self.owner);
        }
    }

    pub fn motion(&self) -> Option<Link<Motion>> {
        self.motion
    }

    pub fn physics(&self) -> Option<Link<Physics>> {
        self.physics
    }

    pub fn push_order(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn clear_orders(&mut self) {
        self.orders.clear();
        self.elapsed = 0.0;
    }

    pub fn pending_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn is_idle(&self) -> bool {
        self.orders.is_empty()
    }

    /// Advance the order queue by `dt` and return the command to apply.
    pub fn think(&mut self, dt: f32) -> MotorCommand {
        self.elapsed += dt;
        while let Some(front) = self.orders.front() {
            if self.elapsed < front.duration() {
                return front.command();
            }
            self.elapsed -= front.duration();
            self.orders.pop_front();
        }
        self.elapsed = 0.0;
        MotorCommand::STOP
    }
}
