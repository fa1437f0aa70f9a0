/*
 * Renderer Module
 *
 * This module handles the rendering of the particle trail simulation.
 * It draws the swarm as point sprites over a light background, plus debug
 * information when enabled. Headings are simulation state only; rendering
 * uses positions alone, except for the leader arrow in the debug overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::simulation::Bounds;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear to the light backdrop the particles float over
    draw.background().color(rgb(0.93, 0.93, 0.95));

    let window_rect = app.window_rect();

    // Draw each particle
    for particle in model.swarm.particles() {
        particle.draw(&draw);
    }

    // Draw debug visualization if enabled
    if model.params.show_debug {
        // Draw the leader's heading so the cascade source is visible
        if let Some(leader) = model.swarm.particles().first() {
            let dir = vec2(leader.heading.cos(), leader.heading.sin());
            draw.arrow()
                .start(leader.position)
                .end(leader.position + dir * 30.0)
                .color(ORANGE)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.swarm.len(),
            Bounds::of_rect(window_rect),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
