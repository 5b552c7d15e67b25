//! Runtime configuration
//!
//! `GameConfig` holds everything the game loop and presentation layer need:
//! the fixed logical resolution, the integer window scale, the simulation
//! rate, and the frame pacing strategy. Defaults match the shipped game
//! (320×180 scaled ×4 at 60 Hz); a TOML file can override any field.

use crate::error::{Result, VolleyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted logical resolution; leaves room for the HUD and the
/// play field's sprites on either axis
pub const MIN_LOGICAL_SIZE: u32 = 32;

/// How the loop paces itself between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramePacing {
    /// Continuous polling with no vsync. Lowest input latency, burns a core.
    Spin,
    /// Presentation throttled to the display's refresh rate.
    Vsync,
}

/// Configuration for the game window and loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Logical framebuffer width in pixels
    pub logical_width: u32,
    /// Logical framebuffer height in pixels
    pub logical_height: u32,
    /// Integer scale factor applied at presentation time
    pub scale: u32,
    /// Fixed simulation rate in Hz
    pub target_fps: u32,
    /// Frame pacing strategy
    pub pacing: FramePacing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Volley".to_string(),
            logical_width: 320,
            logical_height: 180,
            scale: 4,
            target_fps: 60,
            pacing: FramePacing::Spin,
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file. Missing fields fall back to
    /// defaults; out-of-range values are rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric fields are in range.
    ///
    /// User-supplied values flow from here into window creation, texture
    /// sizes, the clock's timestep, and sprite placement, so anything
    /// degenerate fails fast instead of freezing or underflowing later.
    pub fn validate(&self) -> Result<()> {
        if self.logical_width < MIN_LOGICAL_SIZE || self.logical_height < MIN_LOGICAL_SIZE {
            return Err(VolleyError::InvalidConfig(format!(
                "logical resolution {}x{} is below the {}x{} minimum",
                self.logical_width, self.logical_height, MIN_LOGICAL_SIZE, MIN_LOGICAL_SIZE
            )));
        }
        if self.scale == 0 {
            return Err(VolleyError::InvalidConfig("scale must be at least 1".into()));
        }
        if self.target_fps == 0 {
            return Err(VolleyError::InvalidConfig(
                "target_fps must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Window width in physical pixels
    pub fn window_width(&self) -> u32 {
        self.logical_width * self.scale
    }

    /// Window height in physical pixels
    pub fn window_height(&self) -> u32 {
        self.logical_height * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.logical_width, 320);
        assert_eq!(config.logical_height, 180);
        assert_eq!(config.scale, 4);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.pacing, FramePacing::Spin);
        assert_eq!(config.window_width(), 1280);
        assert_eq!(config.window_height(), 720);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GameConfig = toml::from_str("scale = 2\npacing = \"vsync\"").unwrap();
        assert_eq!(config.scale, 2);
        assert_eq!(config.pacing, FramePacing::Vsync);
        // Untouched fields keep their defaults
        assert_eq!(config.logical_width, 320);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_resolution_rejected() {
        let config = GameConfig {
            logical_width: 4,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VolleyError::InvalidConfig(_))
        ));

        let config = GameConfig {
            logical_height: 11,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_scale_rejected() {
        let config = GameConfig {
            scale: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let config = GameConfig {
            target_fps: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
