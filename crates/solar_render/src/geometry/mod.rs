//! Body geometry

mod sphere;

pub use sphere::{SphereMesh, MIN_SLICES, MIN_STACKS};
