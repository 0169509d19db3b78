//! The body table
//!
//! A [`SolarSystem`] is an ordered list of bodies plus the two factors that
//! turn catalogue units into scene units. Bodies are listed parents-first;
//! the order of the list is the order bodies are drawn in.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::body::{Body, Orbit, Spin};

fn default_distance_scale() -> f32 {
    30.0
}

fn default_radius_unit() -> f32 {
    1.0
}

/// Ordered collection of bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    /// Display name
    pub name: String,
    /// Scene units per AU
    #[serde(default = "default_distance_scale")]
    pub distance_scale: f32,
    /// Scene units per Earth radius
    #[serde(default = "default_radius_unit")]
    pub radius_unit: f32,
    /// Bodies, parents before children
    pub bodies: Vec<Body>,
}

impl SolarSystem {
    /// Create an empty system with the default scale factors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance_scale: default_distance_scale(),
            radius_unit: default_radius_unit(),
            bodies: Vec::new(),
        }
    }

    /// Add a body (builder style)
    pub fn with_body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    /// The sun, its nine planets and the moon.
    ///
    /// Planet radii are in Earth radii and distances in AU. Mercury and Pluto
    /// are drawn ten times larger and the moon's distance stretched ten times
    /// so they are visible at this scale.
    pub fn standard() -> Self {
        Self::new("Solar System")
            .with_body(Body::root("Sun", 10.0, [1.0, 0.85, 0.2, 1.0]))
            .with_body(Body::orbiting(
                "Mercury", 0.383, 0.387, [0.6, 0.6, 0.6, 1.0],
                Orbit::new("Sun", 4.15).with_size_boost(10.0),
            ))
            .with_body(Body::orbiting(
                "Venus", 0.949, 0.723, [0.9, 0.7, 0.4, 1.0],
                Orbit::new("Sun", 1.63),
            ))
            .with_body(
                Body::orbiting(
                    "Earth", 1.0, 1.0, [0.2, 0.4, 1.0, 1.0],
                    Orbit::new("Sun", 1.0),
                )
                .with_spin(Spin::new([1.0, 0.0, 0.0], 1.0)),
            )
            .with_body(Body::orbiting(
                "Moon", 0.2724, 0.00257, [0.8, 0.8, 0.8, 1.0],
                Orbit::new("Earth", 13.04).with_distance_boost(10.0),
            ))
            .with_body(Body::orbiting(
                "Mars", 0.532, 1.524, [0.9, 0.3, 0.1, 1.0],
                Orbit::new("Sun", 0.53),
            ))
            .with_body(Body::orbiting(
                "Jupiter", 11.21, 5.203, [0.8, 0.6, 0.4, 1.0],
                Orbit::new("Sun", 0.09),
            ))
            .with_body(Body::orbiting(
                "Saturn", 9.45, 9.537, [0.9, 0.8, 0.5, 1.0],
                Orbit::new("Sun", 0.03),
            ))
            .with_body(Body::orbiting(
                "Uranus", 4.01, 19.19, [0.5, 0.8, 0.9, 1.0],
                Orbit::new("Sun", 0.01),
            ))
            .with_body(Body::orbiting(
                "Neptune", 3.88, 30.07, [0.3, 0.4, 0.9, 1.0],
                Orbit::new("Sun", 0.006),
            ))
            .with_body(Body::orbiting(
                "Pluto", 0.186, 39.48, [0.7, 0.6, 0.5, 1.0],
                Orbit::new("Sun", 0.004).with_size_boost(10.0),
            ))
    }

    /// Load from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse from a RON string
    pub fn from_ron_str(contents: &str) -> Result<Self, SceneError> {
        Ok(ron::from_str(contents)?)
    }

    /// Save as pretty-printed RON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("    ".to_string());
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Position of the body called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    /// Look a body up by name
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Indices of bodies with no parent, in table order
    pub fn roots(&self) -> Vec<usize> {
        (0..self.bodies.len())
            .filter(|&i| self.bodies[i].is_root())
            .collect()
    }

    /// Indices of the bodies orbiting `index`, in table order
    pub fn children(&self, index: usize) -> Vec<usize> {
        let Some(parent) = self.bodies.get(index) else {
            return Vec::new();
        };
        (0..self.bodies.len())
            .filter(|&i| self.bodies[i].parent() == Some(parent.name.as_str()))
            .collect()
    }

    /// Drawn radius of a body in scene units
    ///
    /// Root bodies are already in scene units; orbiting bodies are in
    /// `radius_unit`s and include their orbit's size boost.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. Indices come from [`roots`](Self::roots),
    /// [`children`](Self::children) or [`index_of`](Self::index_of).
    pub fn scene_radius(&self, index: usize) -> f32 {
        let body = &self.bodies[index];
        match &body.orbit {
            None => body.radius,
            Some(orbit) => self.radius_unit * body.radius * orbit.size_boost,
        }
    }

    /// Distance in scene units from the parent's center to the body's center
    ///
    /// The parent's drawn radius is added so orbits start at its surface.
    /// Root bodies sit at their own origin and return 0.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, like [`scene_radius`](Self::scene_radius).
    pub fn orbit_offset(&self, index: usize) -> f32 {
        let body = &self.bodies[index];
        let Some(orbit) = &body.orbit else {
            return 0.0;
        };
        let parent_radius = self
            .index_of(&orbit.parent)
            .map(|p| self.scene_radius(p))
            .unwrap_or(0.0);
        parent_radius + body.distance * self.distance_scale * orbit.distance_boost
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::standard()
    }
}

/// Error loading or saving a body table
#[derive(Debug)]
pub enum SceneError {
    /// IO error
    Io(io::Error),
    /// RON parse error
    Parse(ron::error::SpannedError),
    /// RON serialize error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
            SceneError::Serialize(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let system = SolarSystem::standard();
        let names: Vec<&str> = system.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"]
        );
    }

    #[test]
    fn test_roots_and_children() {
        let system = SolarSystem::standard();
        assert_eq!(system.roots(), vec![0]);

        let earth = system.index_of("Earth").unwrap();
        let moon = system.index_of("Moon").unwrap();
        assert_eq!(system.children(earth), vec![moon]);
        assert_eq!(system.children(0).len(), 9);
        assert!(system.children(moon).is_empty());
        assert!(system.children(99).is_empty());
    }

    #[test]
    fn test_scene_radius() {
        let system = SolarSystem::standard();
        assert_eq!(system.scene_radius(0), 10.0);

        let earth = system.index_of("Earth").unwrap();
        assert_eq!(system.scene_radius(earth), 1.0);

        let mercury = system.index_of("Mercury").unwrap();
        assert!((system.scene_radius(mercury) - 3.83).abs() < 1e-5);
    }

    #[test]
    fn test_orbit_offset() {
        let system = SolarSystem::standard();
        assert_eq!(system.orbit_offset(0), 0.0);

        let earth = system.index_of("Earth").unwrap();
        assert!((system.orbit_offset(earth) - 40.0).abs() < 1e-4);

        // Moon: Earth's radius plus its distance stretched by ten
        let moon = system.index_of("Moon").unwrap();
        assert!((system.orbit_offset(moon) - (1.0 + 0.00257 * 300.0)).abs() < 1e-5);
    }

    #[test]
    #[should_panic]
    fn test_scene_radius_out_of_bounds_panics() {
        SolarSystem::standard().scene_radius(99);
    }

    #[test]
    #[should_panic]
    fn test_orbit_offset_out_of_bounds_panics() {
        SolarSystem::standard().orbit_offset(99);
    }

    #[test]
    fn test_ron_round_trip() {
        let system = SolarSystem::standard();
        let text = ron::ser::to_string_pretty(&system, ron::ser::PrettyConfig::new()).unwrap();
        let parsed = SolarSystem::from_ron_str(&text).unwrap();
        assert_eq!(parsed, system);
    }

    #[test]
    fn test_scale_defaults_when_missing() {
        let system = SolarSystem::from_ron_str(
            "(name: \"Tiny\", bodies: [(name: \"Star\", radius: 2.0, color: (1.0, 1.0, 1.0, 1.0))])",
        )
        .unwrap();
        assert_eq!(system.distance_scale, 30.0);
        assert_eq!(system.radius_unit, 1.0);
        assert!(system.bodies[0].is_root());
    }

    #[test]
    fn test_load_missing_file() {
        let result = SolarSystem::load("/nonexistent/solar_system.ron");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = SolarSystem::from_ron_str("not ron at all");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }
}
