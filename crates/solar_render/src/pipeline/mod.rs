//! Rendering pipeline components
//!
//! This module contains the sphere render pipeline and the GPU data types
//! it consumes.

pub mod types;
pub mod planet_pipeline;

// Re-export types
pub use types::{Vertex, FrameUniforms, BodyUniforms};

// Re-export pipelines
pub use planet_pipeline::{PlanetPipeline, DEPTH_FORMAT};
