//! Headless simulation of the success particle burst.
//!
//! The engine only owns the motion; drawing the spheres is up to the front-end.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Offset from the burst origin.
    pub offset: Vec3,
    pub velocity: Vec3,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleBurst {
    pub origin: Vec3,
    pub color: [f32; 3],
    particles: Vec<Particle>,
}

impl ParticleBurst {
    pub fn new<R: Rng + ?Sized>(origin: Vec3, color: [f32; 3], rng: &mut R) -> Self {
        let particles = (0..BURST_PARTICLE_COUNT)
            .map(|_| {
                let mut spread = || (rng.gen::<f32>() - 0.5) * BURST_SPREAD;
                let velocity = Vec3::new(spread(), spread() + BURST_LIFT, spread());
                Particle {
                    offset: Vec3::ZERO,
                    velocity,
                    scale: rng.gen::<f32>() * 0.4 + 0.1,
                }
            })
            .collect();
        Self {
            origin,
            color,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one tick. Returns whether any particle is still visible.
    pub fn step(&mut self) -> bool {
        let mut active = 0usize;
        for p in &mut self.particles {
            p.offset += p.velocity;
            p.velocity.y -= BURST_GRAVITY;
            p.scale *= BURST_SCALE_DECAY;
            if p.scale > BURST_MIN_SCALE {
                active += 1;
            }
        }
        active > 0
    }

    pub fn is_finished(&self) -> bool {
        self.particles.iter().all(|p| p.scale <= BURST_MIN_SCALE)
    }
}
