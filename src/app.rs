/*
 * Application Module
 *
 * This module defines the main application model and logic for the particle
 * trail simulation. It owns the swarm, runs one simulation tick per frame,
 * and applies UI-driven parameter changes at tick boundaries.
 *
 * The simulation domain is re-derived from the window rectangle every tick,
 * so window resizes reshape the domain without any special casing.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::renderer;
use crate::simulation::{Bounds, Swarm};
use crate::ui;

// Main model for the application
pub struct Model {
    pub swarm: Swarm,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Particle Trail Simulation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Scatter the swarm over the initial window area
    let bounds = Bounds::new(window_width / 2.0, window_height / 2.0);
    let swarm = Swarm::initialize(params.num_particles, bounds, &mut rand::thread_rng());

    Model {
        swarm,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the swarm needs to be reset or regenerated
    let (should_reset_swarm, num_particles_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // The domain follows the current window, recomputed once per tick
    let bounds = Bounds::of_rect(app.window_rect());

    if num_particles_changed {
        // Count changes are owned by the host: discard the swarm and
        // initialize a new one at the requested size
        model.swarm = Swarm::initialize(
            model.params.num_particles,
            bounds,
            &mut rand::thread_rng(),
        );
    } else if should_reset_swarm {
        model.swarm.reset(&mut rand::thread_rng());
    }

    // Only advance the swarm if the simulation is not paused
    if !model.params.pause_simulation {
        model.swarm.step(bounds, &model.params);
        model.debug_info.ticks += 1;
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
