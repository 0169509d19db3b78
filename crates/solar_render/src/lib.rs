//! Solar Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws each body of the
//! solar system as a flat-colored sphere.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::ViewCamera`] - Fixed viewing and projection transforms
//! - [`geometry::SphereMesh`] - Shared unit sphere mesh
//! - [`pipeline::PlanetPipeline`] - Per-body uniform slots and draw calls

pub mod context;
pub mod camera;
pub mod geometry;
pub mod pipeline;

pub use context::{RenderContext, RenderError};
pub use camera::ViewCamera;
pub use geometry::SphereMesh;
pub use pipeline::{PlanetPipeline, BodyUniforms, FrameUniforms, Vertex};

// Re-export math types for convenience
pub use solar_math::{Mat4, Vec3};
