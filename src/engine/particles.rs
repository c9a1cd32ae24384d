//! Particle collaborator
//!
//! A fixed-size pool of one-shot particles. The factory only spawns them
//! (crystal sparkles); the viewer ages and draws them.

use serde::{Deserialize, Serialize};

use super::ParticleSystem;
use crate::math::{Point, Vec3};

/// Maximum number of live particles
pub const MAX_PARTICLES: usize = 256;

/// Visual effect of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Glint floating above a crystal
    QuartzSparkle,
}

/// A single particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World position
    pub position: Vec3,
    /// Velocity (units per second)
    pub speed: Vec3,
    /// Billboard size
    pub size: Point,
    pub kind: ParticleKind,
    /// Total lifetime in seconds
    pub duration: f32,
    /// Spread radius of the effect around `position`
    pub mass: f32,
    /// How much wind pushes the particle (0 = not at all)
    pub wind_sensitivity: f32,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    particle: Particle,
    /// Remaining life in seconds
    life: f32,
}

/// The particle pool
pub struct ParticlePool {
    slots: Vec<Slot>,
    /// Particles ever spawned, including dropped ones
    spawned: usize,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_PARTICLES),
            spawned: 0,
        }
    }

    /// Age all live particles and drop the expired ones.
    pub fn update(&mut self, delta_time: f32) {
        for slot in &mut self.slots {
            slot.life -= delta_time;
            slot.particle.position = slot.particle.position + slot.particle.speed * delta_time;
        }
        self.slots.retain(|slot| slot.life > 0.0);
    }

    /// Live particles with their remaining life fraction (1 = just spawned).
    pub fn iter(&self) -> impl Iterator<Item = (&Particle, f32)> {
        self.slots.iter().map(|slot| {
            let t = if slot.particle.duration > 0.0 {
                slot.life / slot.particle.duration
            } else {
                0.0
            };
            (&slot.particle, t)
        })
    }

    pub fn alive_count(&self) -> usize {
        self.slots.len()
    }

    pub fn spawned_count(&self) -> usize {
        self.spawned
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem for ParticlePool {
    fn create_particle(&mut self, particle: Particle) {
        self.spawned += 1;
        if self.slots.len() >= MAX_PARTICLES {
            log::debug!("particle pool full, dropping {:?}", particle.kind);
            return;
        }
        self.slots.push(Slot {
            particle,
            life: particle.duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparkle(duration: f32) -> Particle {
        Particle {
            position: Vec3::new(0.0, 4.0, 0.0),
            speed: Vec3::ZERO,
            size: Point::new(2.0, 2.0),
            kind: ParticleKind::QuartzSparkle,
            duration,
            mass: 2.0,
            wind_sensitivity: 0.0,
        }
    }

    #[test]
    fn test_particles_expire() {
        let mut pool = ParticlePool::new();
        pool.create_particle(sparkle(0.5));
        pool.create_particle(sparkle(1.0));
        assert_eq!(pool.alive_count(), 2);

        pool.update(0.6);
        assert_eq!(pool.alive_count(), 1);
        pool.update(0.6);
        assert_eq!(pool.alive_count(), 0);
        assert_eq!(pool.spawned_count(), 2);
    }

    #[test]
    fn test_pool_is_bounded() {
        let mut pool = ParticlePool::new();
        for _ in 0..MAX_PARTICLES + 10 {
            pool.create_particle(sparkle(1.0));
        }
        assert_eq!(pool.alive_count(), MAX_PARTICLES);
        assert_eq!(pool.spawned_count(), MAX_PARTICLES + 10);
    }

    #[test]
    fn test_life_fraction() {
        let mut pool = ParticlePool::new();
        pool.create_particle(sparkle(1.0));
        pool.update(0.25);
        let (_, t) = pool.iter().next().expect("live particle");
        assert!((t - 0.75).abs() < 0.001);
    }
}
