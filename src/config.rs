//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DRIVEPATH_SECTION__KEY`)
//!
//! Every field has a default, so the demo runs with no config files at all.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use drivepath_core::{DEMO_PATH, DEFAULT_SNAP_THRESHOLD};
use drivepath_render::{Color, SceneStyle};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Path and driving configuration
    #[serde(default)]
    pub path: PathConfig,
    /// Sprite configuration
    #[serde(default)]
    pub sprite: SpriteConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DRIVEPATH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DRIVEPATH_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("DRIVEPATH_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Reject values the simulation cannot run with
    ///
    /// Path points are checked when the path is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_finite("path.speed", self.path.speed)?;
        positive_finite("path.snap_threshold", self.path.snap_threshold)?;
        positive_finite("sprite.scale", self.sprite.scale)?;
        Ok(())
    }
}

fn positive_finite(key: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value))
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
    /// Enable VSync
    pub vsync: bool,
    /// Frame rate cap (0 disables the cap)
    pub fps_limit: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Drive Path".to_string(),
            width: 1080,
            height: 728,
            vsync: true,
            fps_limit: 60,
        }
    }
}

/// Path and driving configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Waypoints as [x, y] pairs, driven in order and looped
    pub points: Vec<[f32; 2]>,
    /// Driving speed (world units per second)
    pub speed: f32,
    /// Squared distance at which a waypoint counts as reached
    pub snap_threshold: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            points: DEMO_PATH.to_vec(),
            speed: 250.0,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

/// Sprite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Image file, relative to the working directory
    pub texture_path: PathBuf,
    /// Uniform scale applied to the texture size
    pub scale: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            texture_path: PathBuf::from("Assets/car.png"),
            scale: 0.2,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Color of the path, outline and waypoints [r, g, b, a]
    pub path_color: [f32; 4],
    /// Waypoint marker radius (world units)
    pub waypoint_radius: f32,
    /// Triangles per waypoint marker
    pub waypoint_segments: u32,
    /// Sprite outline width (world units, grows outward)
    pub outline_thickness: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: Color::BLUE.to_array(),
            path_color: Color::RED.to_array(),
            waypoint_radius: 15.0,
            waypoint_segments: 30,
            outline_thickness: 3.0,
        }
    }
}

impl RenderingConfig {
    /// Scene decoration style for the renderer
    pub fn scene_style(&self) -> SceneStyle {
        let color = Color::from(self.path_color);
        SceneStyle {
            path_color: color,
            outline_color: color,
            outline_thickness: self.outline_thickness,
            waypoint_color: color,
            waypoint_radius: self.waypoint_radius,
            waypoint_segments: self.waypoint_segments,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(key: &str, value: f32) -> Self {
        ConfigError {
            message: format!("{} must be a positive finite number, got {}", key, value),
        }
    }
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
