//! Application systems
//!
//! The pieces `main.rs` drives from the event loop.

mod render;
mod simulation;
mod window;

pub use render::RenderSystem;
pub use simulation::AnimationClock;
pub use window::{WindowError, WindowSystem};
