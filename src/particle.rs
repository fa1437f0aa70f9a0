/*
 * Particle Module
 *
 * This module defines the Particle struct: one element of the fixed-size
 * swarm, with a position, a heading angle in radians, and the per-particle
 * speed/turn jitter drawn once at creation.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::PARTICLE_SIZE;

#[derive(Clone, Copy)]
pub struct Particle {
    pub position: Point2,
    // Heading in radians, kept in [0, 2*pi) by the simulation
    pub heading: f32,
    pub speed_jitter: f32,
    pub turn_jitter: f32,
}

impl Particle {
    // Create a particle at the given position with a random heading.
    // Jitter values are drawn once in [0, 1); the variance scales are applied
    // at update time, so tuning them live changes behavior without
    // regenerating the swarm.
    pub fn new<R: Rng>(x: f32, y: f32, rng: &mut R) -> Self {
        Self {
            position: pt2(x, y),
            heading: rng.gen_range(0.0..TAU),
            speed_jitter: rng.gen_range(0.0..1.0),
            turn_jitter: rng.gen_range(0.0..1.0),
        }
    }

    // Draw the particle as a small round point
    pub fn draw(&self, draw: &Draw) {
        draw.ellipse()
            .xy(self.position)
            .radius(PARTICLE_SIZE)
            .color(rgba(0.05, 0.15, 0.92, 0.8));
    }
}
