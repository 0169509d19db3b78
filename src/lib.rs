//! Solar - animated solar system model
//!
//! Bodies orbit their parents in a plane, with each frame's transforms
//! composed on a matrix stack and drawn as shared sphere meshes.

pub mod config;
pub mod scene;
pub mod systems;
