//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SOLAR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use solar_render::ViewCamera;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SOLAR_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration, falling back to [`AppConfig::default`] on failure
    ///
    /// The error is handed back rather than logged so callers can report it
    /// once logging is set up (logging itself is configured from here).
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SOLAR_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SOLAR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
    /// Element id of the canvas to draw into (web only)
    pub canvas_id: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Solar System".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            canvas_id: "webgl-canvas".to_string(),
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Eye distance from the sun; midway between near and far when unset
    pub distance: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 120.0,
            near: 10.0,
            far: 150.0,
            distance: None,
        }
    }
}

impl CameraConfig {
    /// Build the viewing camera described by this config
    pub fn to_camera(&self) -> ViewCamera {
        let camera = ViewCamera::new(self.fov, self.near, self.far);
        match self.distance {
            Some(d) => camera.with_distance(d),
            None => camera,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Amount added to the animation time every frame
    pub time_delta: f32,
    /// Degrees of base orbital angle per unit of animation time
    pub angular_velocity: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_delta: 0.5,
            angular_velocity: std::f32::consts::PI / 10.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Sphere meridian count
    pub sphere_slices: u32,
    /// Sphere latitude band count
    pub sphere_stacks: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            sphere_slices: 18,
            sphere_stacks: 8,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON body table to load; the built-in solar system is used when unset
    pub path: Option<String>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.fov, 120.0);
        assert_eq!(config.camera.near, 10.0);
        assert_eq!(config.camera.far, 150.0);
        assert_eq!(config.animation.time_delta, 0.5);
        assert_eq!(config.rendering.sphere_slices, 18);
        assert_eq!(config.rendering.sphere_stacks, 8);
        assert!(config.scene.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("angular_velocity"));
        assert!(toml.contains("background_color"));
    }

    #[test]
    fn test_camera_distance_defaults_to_mid_depth() {
        let camera = CameraConfig::default().to_camera();
        assert_eq!(camera.distance, 80.0);

        let camera = CameraConfig {
            distance: Some(42.0),
            ..CameraConfig::default()
        }
        .to_camera();
        assert_eq!(camera.distance, 42.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[camera]\nfov = 90.0\n"))
            .extract()
            .unwrap();
        assert_eq!(config.camera.fov, 90.0);
        assert_eq!(config.camera.near, 10.0);
        assert_eq!(config.window.title, "Solar System");
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("/nonexistent/solar/config").unwrap();
        assert_eq!(config.animation.time_delta, 0.5);
    }
}
