//! UV sphere geometry
//!
//! A sphere of `slices` meridians and `stacks` latitude bands. Every body is
//! drawn with the same unit sphere; size comes from the model-view scale.
//!
//! Vertices form a `(stacks + 1) x (slices + 1)` grid so the seam has its
//! own column. Pole rows collapse to a point, so the first and last bands
//! only emit one triangle per slice.

use std::f32::consts::{PI, TAU};

use crate::pipeline::types::Vertex;

/// Fewest meridians that still enclose a volume
pub const MIN_SLICES: u32 = 3;
/// Fewest latitude bands that still enclose a volume
pub const MIN_STACKS: u32 = 2;

/// Indexed unit sphere
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub slices: u32,
    pub stacks: u32,
}

impl SphereMesh {
    /// Build a unit sphere centered at the origin
    ///
    /// Counts below [`MIN_SLICES`] / [`MIN_STACKS`] are raised to the minimum.
    pub fn new(slices: u32, stacks: u32) -> Self {
        let slices = slices.max(MIN_SLICES);
        let stacks = stacks.max(MIN_STACKS);

        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for i in 0..=stacks {
            let phi = PI * i as f32 / stacks as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..=slices {
                let theta = TAU * j as f32 / slices as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let p = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
                vertices.push(Vertex::new(p, p));
            }
        }

        let row = slices + 1;
        let mut indices = Vec::with_capacity(Self::triangle_count_for(slices, stacks) as usize * 3);
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * row + j;
                let b = a + row;
                let c = a + 1;
                let d = b + 1;

                // (a, c, b) winds counter-clockwise seen from outside
                if i != 0 {
                    indices.extend_from_slice(&[a, c, b]);
                }
                if i + 1 != stacks {
                    indices.extend_from_slice(&[c, d, b]);
                }
            }
        }

        Self {
            vertices,
            indices,
            slices,
            stacks,
        }
    }

    fn triangle_count_for(slices: u32, stacks: u32) -> u32 {
        2 * slices * (stacks - 1)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for SphereMesh {
    fn default() -> Self {
        Self::new(18, 8)
    }
}
