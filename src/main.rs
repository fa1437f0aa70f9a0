/*
 * Particle Trail Simulation
 *
 * A decorative swarm of particles drifting inside the window: each particle
 * moves along its heading, bounces off the window edges, and steers toward
 * the particle ahead of it in index order, forming long trailing streams.
 * Interactive sliders adjust speed, turn rate, jitter variance, and the
 * follower stride in real time.
 */

use trails::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
