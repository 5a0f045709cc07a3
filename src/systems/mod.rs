//! Application systems
//!
//! The pieces `Game` wires together: simulation, window, rendering and frame pacing.

mod frame_limiter;
mod render;
mod simulation;
mod window;

pub use frame_limiter::FrameLimiter;
pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
