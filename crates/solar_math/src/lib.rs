//! Solar Mathematics Library
//!
//! This crate provides the small amount of linear algebra the Solar renderer
//! needs to position bodies each frame.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix and its constructors in [`mat4`]
//! - [`MatrixStack`] - LIFO stack used to compose nested model-view transforms

mod vec3;
pub mod mat4;
pub mod matrix_stack;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use matrix_stack::{MatrixStack, MatrixStackError};
