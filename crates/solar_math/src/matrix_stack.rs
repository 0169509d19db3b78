//! Matrix stack for composing nested transforms
//!
//! The top of the stack is the *current* matrix. Every transform operation
//! post-multiplies the current matrix, so operations issued later act closer
//! to the model (the last `scale` applies to the vertices first).
//!
//! ```
//! use solar_math::{MatrixStack, Vec3};
//!
//! let mut ms = MatrixStack::new();
//! ms.push();
//! ms.translate(5.0, 0.0, 0.0);
//! ms.scale(2.0);
//! ms.pop().unwrap();
//! assert_eq!(ms.depth(), 1);
//! ```

use crate::mat4::{self, Mat4, IDENTITY};
use crate::Vec3;

/// Errors raised by [`MatrixStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixStackError {
    /// `pop` was called with only the base matrix left
    Underflow,
}

impl std::fmt::Display for MatrixStackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixStackError::Underflow => write!(f, "Matrix stack underflow: cannot pop the base matrix"),
        }
    }
}

impl std::error::Error for MatrixStackError {}

/// LIFO stack of 4x4 matrices
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Create a stack holding only the identity matrix
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a stack with room for `capacity` nested pushes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut stack = Vec::with_capacity(capacity.max(1));
        stack.push(IDENTITY);
        Self { stack }
    }

    /// Replace the current matrix
    pub fn load(&mut self, m: Mat4) {
        *self.top_mut() = m;
    }

    /// Duplicate the current matrix so it can be restored by [`pop`](Self::pop)
    pub fn push(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    /// Discard the current matrix, restoring the one saved by the matching `push`
    pub fn pop(&mut self) -> Result<(), MatrixStackError> {
        if self.stack.len() <= 1 {
            return Err(MatrixStackError::Underflow);
        }
        self.stack.pop();
        Ok(())
    }

    /// The current (top) matrix
    pub fn current(&self) -> Mat4 {
        // The base matrix is never popped
        self.stack[self.stack.len() - 1]
    }

    /// Number of matrices on the stack (1 when nothing is pushed)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Post-multiply the current matrix by `m`
    pub fn mult(&mut self, m: Mat4) {
        let top = self.top_mut();
        *top = mat4::mul(*top, m);
    }

    /// Rotate by `angle_degrees` about `axis`
    pub fn rotate(&mut self, angle_degrees: f32, axis: Vec3) {
        self.mult(mat4::rotation(angle_degrees, axis));
    }

    /// Translate by (x, y, z)
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.mult(mat4::translation(x, y, z));
    }

    /// Uniform scale
    pub fn scale(&mut self, s: f32) {
        self.mult(mat4::uniform_scaling(s));
    }

    /// Per-axis scale
    pub fn scale_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.mult(mat4::scaling(x, y, z));
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::transform_point;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_new_is_identity() {
        let ms = MatrixStack::new();
        assert_eq!(ms.current(), IDENTITY);
        assert_eq!(ms.depth(), 1);
    }

    #[test]
    fn test_pop_restores_pushed_matrix() {
        let mut ms = MatrixStack::new();
        ms.load(mat4::translation(0.0, 0.0, -80.0));
        let saved = ms.current();

        ms.push();
        ms.rotate(30.0, Vec3::Z);
        ms.scale(4.0);
        assert_ne!(ms.current(), saved);

        ms.pop().unwrap();
        assert_eq!(ms.current(), saved);
    }

    #[test]
    fn test_underflow() {
        let mut ms = MatrixStack::new();
        assert_eq!(ms.pop(), Err(MatrixStackError::Underflow));

        ms.push();
        assert!(ms.pop().is_ok());
        assert_eq!(ms.pop(), Err(MatrixStackError::Underflow));
        assert_eq!(ms.depth(), 1);
    }

    #[test]
    fn test_operations_post_multiply() {
        // rotate then translate: the point is moved out along X, then swung round Z
        let mut ms = MatrixStack::new();
        ms.rotate(90.0, Vec3::Z);
        ms.translate(10.0, 0.0, 0.0);
        ms.scale(2.0);

        let p = transform_point(ms.current(), Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(0.0, 12.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_nested_push_isolates_inner_transform() {
        let mut ms = MatrixStack::new();
        ms.push();
        ms.translate(5.0, 0.0, 0.0);

        ms.push();
        ms.rotate(90.0, Vec3::X);
        ms.scale(3.0);
        ms.pop().unwrap();

        // Inner rotation and scale no longer apply
        let p = transform_point(ms.current(), Vec3::Y);
        assert!(vec_approx_eq(p, Vec3::new(5.0, 1.0, 0.0)), "got {:?}", p);
        assert_eq!(ms.depth(), 2);
    }

    #[test]
    fn test_scale_xyz() {
        let mut ms = MatrixStack::new();
        ms.scale_xyz(1.0, 2.0, 3.0);
        let p = transform_point(ms.current(), Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_load_replaces_current() {
        let mut ms = MatrixStack::with_capacity(4);
        ms.translate(1.0, 1.0, 1.0);
        ms.load(IDENTITY);
        assert_eq!(ms.current(), IDENTITY);
        assert_eq!(ms.depth(), 1);
    }
}
