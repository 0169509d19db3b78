//! Per-frame model-view composition
//!
//! Walks the body hierarchy with a [`MatrixStack`] seeded with the viewing
//! transform. Each body is placed in its parent's orbital frame:
//!
//! ```text
//! push
//!   rotate(angle * orbit.rate, Z)           orbiting bodies only
//!   translate(orbit_offset, 0, 0)
//!   push
//!     rotate(angle * spin.rate, spin.axis)  spinning bodies only
//!     scale(scene_radius)
//!     -> draw
//!   pop
//!   children...
//! pop
//! ```
//!
//! The inner push keeps a body's spin and scale out of its children's frame,
//! so a moon follows its planet's orbit without inheriting its rotation.

use solar_math::{Mat4, MatrixStack, MatrixStackError, Vec3};

use super::solar_system::SolarSystem;

/// One draw call's worth of data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDraw {
    /// Index of the body in its [`SolarSystem`]
    pub index: usize,
    /// Model-view matrix
    pub model_view: Mat4,
    /// RGBA color
    pub color: [f32; 4],
}

/// Every body's draw data for one frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    pub draws: Vec<BodyDraw>,
}

impl FrameLayout {
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Draw data for the body at `index`
    pub fn get(&self, index: usize) -> Option<&BodyDraw> {
        self.draws.iter().find(|d| d.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyDraw> {
        self.draws.iter()
    }
}

/// Error composing a frame
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Push/pop pairing broke while walking the hierarchy
    Stack(MatrixStackError),
    /// The body was reached twice, so the hierarchy loops back on itself
    Cycle(String),
}

impl From<MatrixStackError> for LayoutError {
    fn from(e: MatrixStackError) -> Self {
        LayoutError::Stack(e)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Stack(e) => write!(f, "Layout error: {}", e),
            LayoutError::Cycle(name) => write!(f, "Layout error: body '{}' orbits itself through its parents", name),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Compose every body's model-view matrix for the given base angle (degrees)
///
/// Bodies are emitted depth-first: each root, then its children in table
/// order, each child followed by its own children. Each body is placed at
/// most once; reaching one again returns [`LayoutError::Cycle`].
pub fn compose_frame(system: &SolarSystem, view: Mat4, angle: f32) -> Result<FrameLayout, LayoutError> {
    // Two frames per nesting level, plus the view
    let mut stack = MatrixStack::with_capacity(2 * system.len() + 1);
    stack.load(view);

    let mut layout = FrameLayout {
        draws: Vec::with_capacity(system.len()),
    };
    let mut placed = vec![false; system.len()];

    for root in system.roots() {
        place_body(system, root, angle, &mut stack, &mut layout, &mut placed)?;
    }

    Ok(layout)
}

fn place_body(
    system: &SolarSystem,
    index: usize,
    angle: f32,
    stack: &mut MatrixStack,
    layout: &mut FrameLayout,
    placed: &mut [bool],
) -> Result<(), LayoutError> {
    let body = &system.bodies[index];
    if std::mem::replace(&mut placed[index], true) {
        return Err(LayoutError::Cycle(body.name.clone()));
    }

    stack.push();

    if let Some(orbit) = &body.orbit {
        stack.rotate(angle * orbit.rate, Vec3::Z);
        stack.translate(system.orbit_offset(index), 0.0, 0.0);
    }

    stack.push();
    if let Some(spin) = &body.spin {
        stack.rotate(angle * spin.rate, spin.axis());
    }
    stack.scale(system.scene_radius(index));
    layout.draws.push(BodyDraw {
        index,
        model_view: stack.current(),
        color: body.color,
    });
    stack.pop()?;

    for child in system.children(index) {
        place_body(system, child, angle, stack, layout, placed)?;
    }

    stack.pop()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Body, Orbit, Spin};
    use solar_math::mat4::{self, transform_point, IDENTITY};

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn center(draw: &BodyDraw) -> Vec3 {
        transform_point(draw.model_view, Vec3::ZERO)
    }

    #[test]
    fn test_draw_order_is_depth_first() {
        let system = SolarSystem::standard();
        let layout = compose_frame(&system, IDENTITY, 0.0).unwrap();
        let names: Vec<&str> = layout
            .iter()
            .map(|d| system.bodies[d.index].name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"]
        );
    }

    #[test]
    fn test_sun_is_scaled_view() {
        let system = SolarSystem::standard();
        let view = mat4::translation(0.0, 0.0, -80.0);
        let layout = compose_frame(&system, view, 37.0).unwrap();

        let sun = layout.get(0).unwrap();
        assert_eq!(sun.model_view, mat4::mul(view, mat4::uniform_scaling(10.0)));
        assert_eq!(sun.color, system.bodies[0].color);
    }

    #[test]
    fn test_earth_orbit_position() {
        let system = SolarSystem::standard();
        let earth = system.index_of("Earth").unwrap();

        let layout = compose_frame(&system, IDENTITY, 0.0).unwrap();
        assert!(vec_approx_eq(center(layout.get(earth).unwrap()), Vec3::new(40.0, 0.0, 0.0)));

        // Earth's orbit rate is 1, so a 90 degree base angle puts it on +Y
        let layout = compose_frame(&system, IDENTITY, 90.0).unwrap();
        assert!(vec_approx_eq(center(layout.get(earth).unwrap()), Vec3::new(0.0, 40.0, 0.0)));
    }

    #[test]
    fn test_orbit_rate_scales_angle() {
        let system = SolarSystem::standard();
        let mercury = system.index_of("Mercury").unwrap();
        let radius = system.orbit_offset(mercury);

        let angle = 10.0;
        let layout = compose_frame(&system, IDENTITY, angle).unwrap();
        let expected = (angle * 4.15f32).to_radians();
        let c = center(layout.get(mercury).unwrap());
        assert!(vec_approx_eq(c, Vec3::new(radius * expected.cos(), radius * expected.sin(), 0.0)), "got {:?}", c);
    }

    #[test]
    fn test_moon_follows_earth_not_its_spin() {
        let system = SolarSystem::standard();
        let earth = system.index_of("Earth").unwrap();
        let moon = system.index_of("Moon").unwrap();
        let moon_offset = system.orbit_offset(moon);

        for angle in [0.0f32, 15.0, 200.0] {
            let layout = compose_frame(&system, IDENTITY, angle).unwrap();
            let earth_center = center(layout.get(earth).unwrap());
            let moon_center = center(layout.get(moon).unwrap());

            assert!(((moon_center - earth_center).length() - moon_offset).abs() < EPSILON);
            // Earth spins about X; the moon must stay in the orbital plane
            assert!(moon_center.z.abs() < EPSILON, "moon left the orbital plane: {:?}", moon_center);
        }
    }

    #[test]
    fn test_body_scale_matches_scene_radius() {
        let system = SolarSystem::standard();
        let layout = compose_frame(&system, IDENTITY, 123.0).unwrap();

        for draw in layout.iter() {
            let edge = transform_point(draw.model_view, Vec3::Z);
            let radius = (edge - center(draw)).length();
            assert!(
                (radius - system.scene_radius(draw.index)).abs() < 1e-3,
                "{} drawn with radius {}",
                system.bodies[draw.index].name,
                radius
            );
        }
    }

    #[test]
    fn test_spin_rotates_only_the_body() {
        let system = SolarSystem::new("Spinner")
            .with_body(Body::root("Star", 1.0, [1.0; 4]).with_spin(Spin::new([0.0, 0.0, 1.0], 1.0)))
            .with_body(Body::orbiting("Planet", 1.0, 1.0, [1.0; 4], Orbit::new("Star", 0.0)));

        let layout = compose_frame(&system, IDENTITY, 90.0).unwrap();

        let star = layout.get(0).unwrap();
        let tip = transform_point(star.model_view, Vec3::X);
        assert!(vec_approx_eq(tip, Vec3::Y), "star should be spun, got {:?}", tip);

        // Planet has orbit rate 0 and must not inherit the star's spin
        let planet = center(layout.get(1).unwrap());
        assert!(vec_approx_eq(planet, Vec3::new(31.0, 0.0, 0.0)), "got {:?}", planet);
    }

    #[test]
    fn test_multiple_roots() {
        let system = SolarSystem::new("Binary")
            .with_body(Body::root("A", 1.0, [1.0; 4]))
            .with_body(Body::root("B", 2.0, [1.0; 4]));
        let layout = compose_frame(&system, IDENTITY, 0.0).unwrap();
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_self_orbit_reports_cycle() {
        // A body orbiting a root that shares its name finds itself as a child
        let system = SolarSystem::new("Loop")
            .with_body(Body::root("X", 1.0, [1.0; 4]))
            .with_body(Body::orbiting("X", 1.0, 1.0, [1.0; 4], Orbit::new("X", 1.0)));

        let result = compose_frame(&system, IDENTITY, 0.0);
        assert_eq!(result.unwrap_err(), LayoutError::Cycle("X".to_string()));
    }

    #[test]
    fn test_cycle_error_display() {
        let error = LayoutError::Cycle("Moon".to_string());
        assert!(error.to_string().contains("'Moon'"));
    }

    #[test]
    fn test_empty_system() {
        let layout = compose_frame(&SolarSystem::new("Empty"), IDENTITY, 0.0).unwrap();
        assert!(layout.is_empty());
    }
}
