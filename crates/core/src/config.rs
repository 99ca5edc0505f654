use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_LOGIC_HZ, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_SIDE, MIN_SNAKE_LENGTH};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in tiles
    pub grid_width: usize,
    /// Height of the board in tiles
    pub grid_height: usize,
    /// Game-logic updates per second
    pub logic_hz: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            logic_hz: DEFAULT_LOGIC_HZ,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_logic_hz(mut self, hz: f64) -> Self {
        self.logic_hz = hz;
        self
    }

    /// Parse from TOML. Missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logic_hz.is_finite() || self.logic_hz <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "logic_hz must be a positive number, got {}",
                self.logic_hz
            )));
        }
        if self.grid_width < 3 || self.grid_height < 3 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 3x3, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::Invalid(format!(
                "grid sides are limited to {MAX_GRID_SIDE}, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        // Room for a snake that has reached its resting length plus one fruit.
        if self.grid_width * self.grid_height <= MIN_SNAKE_LENGTH + 1 {
            return Err(ConfigError::Invalid(format!(
                "{}x{} grid is too small for a snake of length {}",
                self.grid_width,
                self.grid_height,
                MIN_SNAKE_LENGTH + 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 27);
        assert_eq!(config.grid_height, 27);
        assert_eq!(config.logic_hz, 9.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("grid_width = 15\n").unwrap();
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 27);
        assert_eq!(config.logic_hz, 9.0);
    }

    #[test]
    fn test_full_toml() {
        let config =
            GameConfig::from_toml_str("grid_width = 10\ngrid_height = 12\nlogic_hz = 15.5\n")
                .unwrap();
        assert_eq!(config, GameConfig::new(10, 12).with_logic_hz(15.5));
    }

    #[test]
    fn test_rejects_bad_frequency() {
        for hz in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GameConfig::default().with_logic_hz(hz).validate();
            assert!(matches!(err, Err(ConfigError::Invalid(_))), "hz={hz}");
        }
    }

    #[test]
    fn test_rejects_tiny_grid() {
        assert!(GameConfig::new(2, 10).validate().is_err());
        assert!(GameConfig::new(3, 2).validate().is_err());
        assert!(GameConfig::new(3, 3).validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(GameConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).validate().is_ok());
        let err = GameConfig::new(40_000, 3).validate();
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
        assert!(GameConfig::new(3, MAX_GRID_SIDE + 1).validate().is_err());
        assert!(GameConfig::from_toml_str("grid_width = 5000\n").is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("grid_width = \"wide\"");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }
}
