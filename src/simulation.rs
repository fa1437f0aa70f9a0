/*
 * Simulation Module
 *
 * This module is the engine-agnostic core of the effect: a fixed pool of
 * particles advanced one tick at a time inside a rectangular domain.
 * Each tick applies three rules, in order, per particle:
 * 1. Drift: move along the current heading at the particle's speed
 * 2. Boundary reflection: mirror the heading when a wall is crossed, with
 *    an escape-correction snap to the origin as a backstop
 * 3. Follower steering: turn toward the already-updated predecessor,
 *    cascading down the index sequence
 *
 * The swarm exclusively owns its particle array while `step` runs; the host
 * reads positions out between ticks to fill its render buffer. All
 * randomness goes through an injected Rng, so seeded tests are
 * deterministic.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::params::SimulationParams;
use crate::particle::Particle;

// Rectangular domain centered at the origin, described by its half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Bounds {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    // Derive the domain from a window rectangle
    pub fn of_rect(rect: Rect) -> Self {
        Self::new(rect.w() / 2.0, rect.h() / 2.0)
    }
}

// Wrap an angle into the canonical [0, 2*pi) range.
// rem_euclid rounds up to exactly 2*pi for tiny negative inputs, which would
// leave the canonical range, so that case collapses to zero.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped == TAU {
        0.0
    } else {
        wrapped
    }
}

// Signed angular difference from `from` to `to`, wrapped into [-pi, pi)
fn signed_angle_delta(to: f32, from: f32) -> f32 {
    (to - from + PI).rem_euclid(TAU) - PI
}

// The fixed-size particle swarm. Count never changes for the lifetime of an
// instance; the host discards the swarm and initializes a new one when the
// particle-count slider moves.
#[derive(Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
    // Last-known domain, used by reset
    bounds: Bounds,
}

impl Swarm {
    // Scatter `count` particles uniformly over the domain with random
    // headings. A count of zero yields an empty swarm on which `step` is a
    // no-op.
    pub fn initialize<R: Rng>(count: usize, bounds: Bounds, rng: &mut R) -> Self {
        Self {
            particles: sample_particles(count, bounds, rng),
            bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Read-only view for the host to copy positions out for rendering
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Advance every particle by one tick, in index order. Followers read the
    // predecessor's position as updated earlier in this same loop; that
    // cascade down the index sequence is what produces the trailing streams,
    // so the loop must stay sequential.
    pub fn step(&mut self, bounds: Bounds, params: &SimulationParams) {
        self.bounds = bounds;
        let stride = params.follower_stride.max(1);

        for i in 0..self.particles.len() {
            let Particle {
                position,
                heading,
                speed_jitter,
                turn_jitter,
            } = self.particles[i];

            let v = params.base_speed + speed_jitter * params.speed_variance_scale;
            let turn_v = params.base_turn_rate + turn_jitter * params.turn_variance_scale;

            let mut x = position.x + v * heading.cos();
            let mut y = position.y + v * heading.sin();
            let mut new_heading = heading;

            if x.abs() > bounds.half_width {
                // Mirror the heading about the vertical wall normal
                new_heading = (v * heading.sin()).atan2(-v * heading.cos());

                // A jitter-inflated speed can overshoot the wall by more than
                // the reflection recovers. Recheck from the pre-step position
                // at the reflected heading; if even that lands outside, the
                // speed is too large for the domain, so park the particle at
                // the origin instead of letting it escape.
                if (position.x + v * new_heading.cos()).abs() > bounds.half_width {
                    x = 0.0;
                    y = 0.0;
                }
            } else if y.abs() > bounds.half_height {
                new_heading = (-v * heading.sin()).atan2(v * heading.cos());

                if (position.y + v * new_heading.sin()).abs() > bounds.half_height {
                    x = 0.0;
                    y = 0.0;
                }
            } else if i > 0 && i % stride != 0 {
                let ahead = self.particles[i - 1].position;
                let goal = (ahead.y - y).atan2(ahead.x - x);
                let delta = signed_angle_delta(goal, heading);

                new_heading = if delta.abs() < turn_v {
                    // Close enough to finish the turn this tick
                    goal
                } else if goal > wrap_angle(heading + PI) {
                    heading - turn_v
                } else {
                    heading + turn_v
                };
            }
            // Index 0 and nonzero multiples of the stride hold their heading
            // until a wall turns them

            let particle = &mut self.particles[i];
            particle.position = pt2(x, y);
            particle.heading = wrap_angle(new_heading);
        }
    }

    // Resample every particle with the same count and the last-known domain.
    // The replacement set is built first, so the swap is a single assignment
    // and the host never observes a partially-cleared array.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let fresh = sample_particles(self.particles.len(), self.bounds, rng);
        self.particles = fresh;
    }
}

fn sample_particles<R: Rng>(count: usize, bounds: Bounds, rng: &mut R) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);

    for _ in 0..count {
        // Degenerate half extents collapse the spawn area to the origin
        let x = if bounds.half_width > 0.0 {
            rng.gen_range(-bounds.half_width..bounds.half_width)
        } else {
            0.0
        };
        let y = if bounds.half_height > 0.0 {
            rng.gen_range(-bounds.half_height..bounds.half_height)
        } else {
            0.0
        };
        particles.push(Particle::new(x, y, rng));
    }

    particles
}
