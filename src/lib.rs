/*
 * Particle Trail Simulation - Module Definitions
 *
 * This file defines the module structure for the particle trail application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use particle::Particle;
pub use simulation::{Bounds, Swarm};
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod particle;
pub mod simulation;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Constants
pub const PARTICLE_SIZE: f32 = 2.5;
