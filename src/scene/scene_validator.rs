//! Body table validation
//!
//! Validates a [`SolarSystem`] before it is used for rendering. The
//! [`SceneValidator`] checks that the hierarchy can be walked parents-first
//! and that every body has a drawable size and color.

use std::collections::HashSet;

use super::solar_system::SolarSystem;

/// Validation error found in a body table
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Table has no bodies
    EmptySystem,
    /// Every body orbits something, so there is nothing to start from
    NoRoot,
    /// Duplicate body name found
    DuplicateName(String),
    /// Body orbits a name that is not in the table
    UnknownParent { body: String, parent: String },
    /// Body is listed before the body it orbits
    ParentAfterChild { body: String, parent: String },
    /// Radius is zero, negative or not finite
    InvalidRadius { body: String, radius: f32 },
    /// Distance is negative or not finite
    InvalidDistance { body: String, distance: f32 },
    /// A color component lies outside [0, 1]
    InvalidColor(String),
    /// An orbit rate is not finite, or a boost is zero, negative or not finite
    InvalidOrbit { body: String, field: &'static str, value: f32 },
    /// Spin axis has zero length
    ZeroSpinAxis(String),
    /// Spin rate is not finite
    InvalidSpinRate { body: String, rate: f32 },
    /// `distance_scale` or `radius_unit` is not positive
    InvalidScale(f32),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySystem => write!(f, "System has no bodies"),
            ValidationError::NoRoot => write!(f, "System has no root body"),
            ValidationError::DuplicateName(name) => write!(f, "Duplicate body name: '{}'", name),
            ValidationError::UnknownParent { body, parent } => {
                write!(f, "Body '{}' orbits unknown body '{}'", body, parent)
            }
            ValidationError::ParentAfterChild { body, parent } => {
                write!(f, "Body '{}' is listed before its parent '{}'", body, parent)
            }
            ValidationError::InvalidRadius { body, radius } => {
                write!(f, "Body '{}' has invalid radius {}", body, radius)
            }
            ValidationError::InvalidDistance { body, distance } => {
                write!(f, "Body '{}' has invalid distance {}", body, distance)
            }
            ValidationError::InvalidColor(name) => {
                write!(f, "Body '{}' has a color component outside [0, 1]", name)
            }
            ValidationError::InvalidOrbit { body, field, value } => {
                write!(f, "Body '{}' has invalid orbit {} {}", body, field, value)
            }
            ValidationError::ZeroSpinAxis(name) => write!(f, "Body '{}' spins about a zero axis", name),
            ValidationError::InvalidSpinRate { body, rate } => {
                write!(f, "Body '{}' has invalid spin rate {}", body, rate)
            }
            ValidationError::InvalidScale(value) => write!(f, "Invalid scale factor: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Body table validator
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&system);
/// for error in &errors {
///     log::warn!("Validation error: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a system, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(system: &SolarSystem) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if system.bodies.is_empty() {
            errors.push(ValidationError::EmptySystem);
            return errors;
        }

        for scale in [system.distance_scale, system.radius_unit] {
            if !is_positive(scale) {
                errors.push(ValidationError::InvalidScale(scale));
            }
        }

        if system.bodies.iter().all(|b| !b.is_root()) {
            errors.push(ValidationError::NoRoot);
        }

        let mut seen = HashSet::new();
        for body in &system.bodies {
            if let Some(parent) = body.parent() {
                if !seen.contains(parent) {
                    let error = if system.get(parent).is_some() {
                        ValidationError::ParentAfterChild {
                            body: body.name.clone(),
                            parent: parent.to_string(),
                        }
                    } else {
                        ValidationError::UnknownParent {
                            body: body.name.clone(),
                            parent: parent.to_string(),
                        }
                    };
                    errors.push(error);
                }
            }

            if !seen.insert(body.name.as_str()) {
                errors.push(ValidationError::DuplicateName(body.name.clone()));
            }

            if !is_positive(body.radius) {
                errors.push(ValidationError::InvalidRadius {
                    body: body.name.clone(),
                    radius: body.radius,
                });
            }

            if !(body.distance.is_finite() && body.distance >= 0.0) {
                errors.push(ValidationError::InvalidDistance {
                    body: body.name.clone(),
                    distance: body.distance,
                });
            }

            if body.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                errors.push(ValidationError::InvalidColor(body.name.clone()));
            }

            if let Some(orbit) = &body.orbit {
                let checks = [
                    ("rate", orbit.rate, orbit.rate.is_finite()),
                    ("distance_boost", orbit.distance_boost, is_positive(orbit.distance_boost)),
                    ("size_boost", orbit.size_boost, is_positive(orbit.size_boost)),
                ];
                for (field, value, ok) in checks {
                    if !ok {
                        errors.push(ValidationError::InvalidOrbit {
                            body: body.name.clone(),
                            field,
                            value,
                        });
                    }
                }
            }

            if let Some(spin) = &body.spin {
                if spin.axis().length_squared() == 0.0 {
                    errors.push(ValidationError::ZeroSpinAxis(body.name.clone()));
                }
                if !spin.rate.is_finite() {
                    errors.push(ValidationError::InvalidSpinRate {
                        body: body.name.clone(),
                        rate: spin.rate,
                    });
                }
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(system: &SolarSystem) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(system);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
