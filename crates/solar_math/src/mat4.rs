//! 4x4 Matrix utilities for 3D homogeneous transformations
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! so they can be copied into uniform buffers without transposing.
//!
//! Angles taken by [`rotation`] and [`perspective`] are in **degrees**.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Translation by (x, y, z)
pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = x;
    m[3][1] = y;
    m[3][2] = z;
    m
}

/// Non-uniform scale along each axis
pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = x;
    m[1][1] = y;
    m[2][2] = z;
    m
}

/// Uniform scale
pub fn uniform_scaling(s: f32) -> Mat4 {
    scaling(s, s, s)
}

/// Counter-clockwise rotation of `angle_degrees` about `axis`.
///
/// The axis does not need to be normalized. A zero-length axis has no
/// direction to rotate about and yields the identity.
///
/// # Example
/// ```
/// use solar_math::mat4::{rotation, transform_point};
/// use solar_math::Vec3;
/// let m = rotation(90.0, Vec3::Z);
/// let p = transform_point(m, Vec3::X);
/// assert!((p.y - 1.0).abs() < 1e-6);
/// ```
pub fn rotation(angle_degrees: f32, axis: Vec3) -> Mat4 {
    let axis = axis.normalized();
    if axis == Vec3::ZERO {
        return IDENTITY;
    }

    let (s, c) = angle_degrees.to_radians().sin_cos();
    let t = 1.0 - c;
    let Vec3 { x, y, z } = axis;

    [
        [t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0],
        [t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Right-handed perspective projection with depth mapped to `[0, 1]`.
///
/// The camera looks down -Z. `fovy_degrees` is the full vertical field of view.
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy_degrees.to_radians() / 2.0).tan();
    let range_inv = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range_inv, -1.0],
        [0.0, 0.0, near * far * range_inv, 0.0],
    ]
}

/// Transform a point (w = 1) and drop the homogeneous coordinate
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a point and return clip-space `[x, y, z, w]`
pub fn transform_homogeneous(m: Mat4, p: Vec3) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * p.x + m[1][row] * p.y + m[2][row] * p.z + m[3][row];
    }
    out
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_translation() {
        let m = translation(1.0, -2.0, 3.0);
        let result = transform_point(m, Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(result, Vec3::new(2.0, -1.0, 4.0)), "got {:?}", result);
    }

    #[test]
    fn test_scaling() {
        let m = uniform_scaling(2.5);
        let result = transform_point(m, Vec3::new(1.0, -1.0, 2.0));
        assert!(vec_approx_eq(result, Vec3::new(2.5, -2.5, 5.0)));
    }

    #[test]
    fn test_rotation_z_is_counter_clockwise() {
        let m = rotation(90.0, Vec3::Z);

        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::Y), "X should become Y, got {:?}", result);

        let result = transform_point(m, Vec3::Y);
        assert!(vec_approx_eq(result, -Vec3::X), "Y should become -X, got {:?}", result);

        let result = transform_point(m, Vec3::Z);
        assert!(vec_approx_eq(result, Vec3::Z), "Z should be unchanged, got {:?}", result);
    }

    #[test]
    fn test_rotation_x() {
        let m = rotation(90.0, Vec3::X);
        let result = transform_point(m, Vec3::Y);
        assert!(vec_approx_eq(result, Vec3::Z), "Y should become Z, got {:?}", result);
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let a = rotation(33.0, Vec3::new(0.0, 0.0, 5.0));
        let b = rotation(33.0, Vec3::Z);
        assert!(mat_approx_eq(a, b));
    }

    #[test]
    fn test_rotation_zero_axis_is_identity() {
        assert!(mat_approx_eq(rotation(45.0, Vec3::ZERO), IDENTITY));
    }

    #[test]
    fn test_rotation_full_turn() {
        let m = rotation(360.0, Vec3::new(1.0, 1.0, 0.0));
        assert!(mat_approx_eq(m, IDENTITY));
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation(30.0, Vec3::Y);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        // Translate then rotate, read right to left: rotate(translate(p))
        let m = mul(rotation(90.0, Vec3::Z), translation(1.0, 0.0, 0.0));
        let result = transform_point(m, Vec3::ZERO);
        assert!(vec_approx_eq(result, Vec3::Y), "got {:?}", result);
    }

    #[test]
    fn test_mul_composition() {
        let r45 = rotation(45.0, Vec3::Z);
        let r90 = rotation(90.0, Vec3::Z);
        assert!(mat_approx_eq(mul(r45, r45), r90));
    }

    #[test]
    fn test_perspective_depth_range() {
        let near = 10.0;
        let far = 150.0;
        let proj = perspective(120.0, 16.0 / 9.0, near, far);

        let at_near = transform_homogeneous(proj, Vec3::new(0.0, 0.0, -near));
        assert!(approx_eq(at_near[2] / at_near[3], 0.0), "near plane maps to 0, got {:?}", at_near);

        let at_far = transform_homogeneous(proj, Vec3::new(0.0, 0.0, -far));
        assert!(approx_eq(at_far[2] / at_far[3], 1.0), "far plane maps to 1, got {:?}", at_far);
    }

    #[test]
    fn test_perspective_field_of_view() {
        // With a 90 degree fov, a point at 45 degrees up lands on the top edge
        let proj = perspective(90.0, 1.0, 1.0, 100.0);
        let clip = transform_homogeneous(proj, Vec3::new(0.0, 5.0, -5.0));
        assert!(approx_eq(clip[1] / clip[3], 1.0), "got {:?}", clip);
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = mul(translation(1.0, 2.0, 3.0), rotation(20.0, Vec3::X));
        assert!(mat_approx_eq(transpose(transpose(m)), m));
        assert!(approx_eq(transpose(m)[0][3], 1.0));
    }
}
