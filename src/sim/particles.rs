//! Sparkle bursts shown on a perfect drop
//!
//! Particles drift at constant velocity while their radius shrinks; a particle
//! dies at radius <= 0 and a burst dies with its last particle.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::SparkleTuning;

/// A single sparkle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World position
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    /// Remaining radius
    pub radius: f32,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.radius > 0.0
    }
}

/// One burst of particles from a single perfect drop
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
}

impl ParticleBurst {
    /// Scatter `tuning.count` particles around `center`
    pub fn spawn<R: Rng>(center: Vec2, tuning: &SparkleTuning, rng: &mut R) -> Self {
        let particles = (0..tuning.count)
            .map(|_| {
                let radius = rng.random_range(tuning.radius_min..=tuning.radius_max) as f32;
                let drift = if rng.random_bool(0.5) {
                    -tuning.drift
                } else {
                    tuning.drift
                };
                let rise = rng.random_range(tuning.rise_min..=tuning.rise_max) as f32;
                Particle {
                    pos: center,
                    vel: Vec2::new(drift, rise),
                    radius,
                }
            })
            .collect();
        Self { particles }
    }

    /// Build a burst from explicit particles
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Move every particle, shrink it by `decay`, and drop the dead ones in place
    pub fn update(&mut self, decay: f32) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.radius -= decay;
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
}
