//! GPU-compatible data types for the planet pipeline
//!
//! These types are designed to match the shader layouts in
//! `shaders/planet.wgsl` exactly. All types derive Pod and Zeroable for safe
//! GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use solar_math::mat4::{Mat4, IDENTITY};

/// A sphere vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position on the unit sphere
    pub position: [f32; 3],
    /// Outward surface normal
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Uniforms shared by every draw in a frame (bind group 0)
/// Layout: 64 bytes (must match planet.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Projection matrix (64 bytes)
    pub projection: Mat4,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self { projection: IDENTITY }
    }
}

/// Per-body uniforms (bind group 1)
/// Layout: 80 bytes (must match planet.wgsl BodyUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyUniforms {
    /// Model-view matrix (64 bytes)
    pub model_view: Mat4,
    /// RGBA color (16 bytes)
    pub color: [f32; 4],
}

impl BodyUniforms {
    pub fn new(model_view: Mat4, color: [f32; 4]) -> Self {
        Self { model_view, color }
    }
}

impl Default for BodyUniforms {
    fn default() -> Self {
        Self {
            model_view: IDENTITY,
            color: [1.0; 4],
        }
    }
}
