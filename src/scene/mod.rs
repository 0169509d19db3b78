//! Solar system scene
//!
//! The body table ([`SolarSystem`]), its validation, and the per-frame
//! composition of model-view matrices ([`compose_frame`]).

mod body;
mod solar_system;
mod scene_validator;
mod layout;

pub use body::{Body, Orbit, Spin};
pub use solar_system::{SolarSystem, SceneError};
pub use scene_validator::{SceneValidator, ValidationError};
pub use layout::{compose_frame, BodyDraw, FrameLayout, LayoutError};

/// Load the body table at `path`, falling back to [`SolarSystem::standard`]
/// when the file is missing, unreadable or invalid.
pub fn load_or_standard(path: Option<&str>) -> SolarSystem {
    let Some(path) = path else {
        return SolarSystem::standard();
    };

    let system = match SolarSystem::load(path) {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to load scene '{}': {}. Using the built-in solar system.", path, e);
            return SolarSystem::standard();
        }
    };

    match SceneValidator::validate_or_error(&system) {
        Ok(()) => {
            log::info!("Loaded scene '{}' with {} bodies from {}", system.name, system.len(), path);
            system
        }
        Err(errors) => {
            for error in &errors {
                log::warn!("Scene '{}': {}", path, error);
            }
            log::warn!("Scene '{}' is invalid. Using the built-in solar system.", path);
            SolarSystem::standard()
        }
    }
}
