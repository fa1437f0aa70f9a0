/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle trail simulation. These parameters
 * can be modified through the UI and take effect at the start of the next
 * tick. It also provides methods for parameter change detection and
 * management to improve separation of concerns.
 */

use std::f32::consts::PI;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    // Effective speed per particle is base_speed + jitter * variance scale
    pub base_speed: f32,
    pub speed_variance_scale: f32,
    // Effective max turn per tick is base_turn_rate + jitter * variance scale
    pub base_turn_rate: f32,
    pub turn_variance_scale: f32,
    // Every nonzero multiple of this index is a free thinker
    pub follower_stride: usize,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    base_speed: f32,
    speed_variance_scale: f32,
    base_turn_rate: f32,
    turn_variance_scale: f32,
    follower_stride: usize,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 2000,
            base_speed: 1.5,
            speed_variance_scale: 0.5,
            base_turn_rate: 0.02 * PI,
            turn_variance_scale: 0.002 * PI,
            follower_stride: 200,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            base_speed: self.base_speed,
            speed_variance_scale: self.speed_variance_scale,
            base_turn_rate: self.base_turn_rate,
            turn_variance_scale: self.turn_variance_scale,
            follower_stride: self.follower_stride,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (should_reset_swarm, num_particles_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let mut num_particles_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            // Check for particle count change
            if self.num_particles != prev.num_particles {
                num_particles_changed = true;
                ui_changed = true;
            }

            // Check for other parameter changes
            if self.base_speed != prev.base_speed
                || self.speed_variance_scale != prev.speed_variance_scale
                || self.base_turn_rate != prev.base_turn_rate
                || self.turn_variance_scale != prev.turn_variance_scale
                || self.follower_stride != prev.follower_stride
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        // The first element (should_reset_swarm) is set by the UI when the
        // reset button is clicked
        (false, num_particles_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        10..=10000
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=10.0
    }

    pub fn get_speed_variance_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_turn_rate_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn get_turn_variance_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }

    // Stride bottoms out at 1 so index exemption never divides by zero
    pub fn get_follower_stride_range() -> std::ops::RangeInclusive<usize> {
        1..=1000
    }
}
