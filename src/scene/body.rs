//! Body records
//!
//! A body is a name, a size, a distance from what it orbits and a color.
//! How it moves each frame is described by an optional [`Orbit`] (around its
//! parent) and an optional [`Spin`] (about its own center).

use serde::{Deserialize, Serialize};
use solar_math::Vec3;

fn one() -> f32 {
    1.0
}

/// Circular orbit in the XY plane around a parent body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Name of the body being orbited
    pub parent: String,
    /// Multiplier applied to the frame's base angle
    pub rate: f32,
    /// Extra factor on the scaled orbital distance
    #[serde(default = "one")]
    pub distance_boost: f32,
    /// Extra factor on the drawn size, for bodies too small to see otherwise
    #[serde(default = "one")]
    pub size_boost: f32,
}

impl Orbit {
    pub fn new(parent: impl Into<String>, rate: f32) -> Self {
        Self {
            parent: parent.into(),
            rate,
            distance_boost: 1.0,
            size_boost: 1.0,
        }
    }

    pub fn with_distance_boost(mut self, boost: f32) -> Self {
        self.distance_boost = boost;
        self
    }

    pub fn with_size_boost(mut self, boost: f32) -> Self {
        self.size_boost = boost;
        self
    }
}

/// Rotation of a body about its own center
///
/// Spin only affects the body itself, never the bodies orbiting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    /// Rotation axis (need not be normalized, must be non-zero)
    pub axis: [f32; 3],
    /// Multiplier applied to the frame's base angle
    pub rate: f32,
}

impl Spin {
    pub fn new(axis: [f32; 3], rate: f32) -> Self {
        Self { axis, rate }
    }

    pub fn axis(&self) -> Vec3 {
        Vec3::from_array(self.axis)
    }
}

/// One celestial body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique name
    pub name: String,
    /// Root bodies: radius in scene units. Orbiting bodies: radius in
    /// multiples of the system's `radius_unit` (Earth radii).
    pub radius: f32,
    /// Orbital distance from the parent in AU
    #[serde(default)]
    pub distance: f32,
    /// RGBA color
    pub color: [f32; 4],
    #[serde(default)]
    pub orbit: Option<Orbit>,
    #[serde(default)]
    pub spin: Option<Spin>,
}

impl Body {
    /// A body that orbits nothing
    pub fn root(name: impl Into<String>, radius: f32, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            radius,
            distance: 0.0,
            color,
            orbit: None,
            spin: None,
        }
    }

    /// A body orbiting `orbit.parent` at `distance` AU
    pub fn orbiting(
        name: impl Into<String>,
        radius: f32,
        distance: f32,
        color: [f32; 4],
        orbit: Orbit,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            distance,
            color,
            orbit: Some(orbit),
            spin: None,
        }
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }

    pub fn is_root(&self) -> bool {
        self.orbit.is_none()
    }

    pub fn parent(&self) -> Option<&str> {
        self.orbit.as_ref().map(|o| o.parent.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_parent() {
        let sun = Body::root("Sun", 10.0, [1.0, 1.0, 0.0, 1.0]);
        assert!(sun.is_root());
        assert_eq!(sun.parent(), None);
        assert_eq!(sun.distance, 0.0);
    }

    #[test]
    fn test_orbit_defaults() {
        let orbit = Orbit::new("Sun", 2.0);
        assert_eq!(orbit.distance_boost, 1.0);
        assert_eq!(orbit.size_boost, 1.0);

        let moon = Body::orbiting("Moon", 0.27, 0.00257, [0.8; 4], Orbit::new("Earth", 13.04).with_distance_boost(10.0));
        assert_eq!(moon.parent(), Some("Earth"));
        assert_eq!(moon.orbit.as_ref().map(|o| o.distance_boost), Some(10.0));
    }

    #[test]
    fn test_boosts_default_when_missing_from_ron() {
        let orbit: Orbit = ron::from_str("(parent: \"Sun\", rate: 0.5)").unwrap();
        assert_eq!(orbit, Orbit::new("Sun", 0.5));
    }
}
