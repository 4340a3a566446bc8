//! Game configuration.

use super::address::COLUMN_LETTERS;
use super::types::Color;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Highest supported rank number.
pub const MAX_HEIGHT: usize = 99;

/// Configuration for a corners game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns (letters).
    #[serde(default = "default_width")]
    #[getter(copy)]
    width: usize,

    /// Number of rows (ranks).
    #[serde(default = "default_height")]
    #[getter(copy)]
    height: usize,

    /// Columns covered by each corner zone.
    #[serde(default = "default_zone_width")]
    #[getter(copy)]
    zone_width: usize,

    /// Rows covered by each corner zone.
    #[serde(default = "default_zone_depth")]
    #[getter(copy)]
    zone_depth: usize,

    /// Colour that makes the first move of every game.
    #[serde(default = "default_first_color")]
    #[getter(copy)]
    first_color: Color,

    /// Name of the first player.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the second player.
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_width() -> usize {
    8
}

fn default_height() -> usize {
    8
}

fn default_zone_width() -> usize {
    4
}

fn default_zone_depth() -> usize {
    3
}

fn default_first_color() -> Color {
    Color::White
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            zone_width: default_zone_width(),
            zone_depth: default_zone_depth(),
            first_color: default_first_color(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(width = config.width, height = config.height, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks dimensions and zone placement.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.width, self.height)?;
        if self.zone_width == 0 || self.zone_depth == 0 {
            return Err(ConfigError::new("Zones must cover at least one cell".to_string()));
        }
        if self.zone_width > self.width || self.zone_depth > self.height {
            return Err(ConfigError::new(format!(
                "A {}x{} zone does not fit on a {}x{} board",
                self.zone_width, self.zone_depth, self.width, self.height
            )));
        }
        // Opposite corner blocks are disjoint iff they separate on some axis.
        let columns_apart = self.zone_width * 2 <= self.width;
        let rows_apart = self.zone_depth * 2 <= self.height;
        if !columns_apart && !rows_apart {
            return Err(ConfigError::new(format!(
                "{}x{} zones overlap on a {}x{} board",
                self.zone_width, self.zone_depth, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Returns a copy with different player names.
    pub fn with_players(mut self, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        self.player_one = player_one.into();
        self.player_two = player_two.into();
        self
    }

    /// Returns a copy with different board and zone dimensions.
    pub fn with_dimensions(
        mut self,
        width: usize,
        height: usize,
        zone_width: usize,
        zone_depth: usize,
    ) -> Self {
        self.width = width;
        self.height = height;
        self.zone_width = zone_width;
        self.zone_depth = zone_depth;
        self
    }

    /// Returns a copy where `color` moves first.
    pub fn with_first_color(mut self, color: Color) -> Self {
        self.first_color = color;
        self
    }
}

/// Checks that a board of this size can be addressed.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width == 0 || width > COLUMN_LETTERS.len() {
        return Err(ConfigError::new(format!(
            "Board width must be between 1 and {}, got {}",
            COLUMN_LETTERS.len(),
            width
        )));
    }
    if height == 0 || height > MAX_HEIGHT {
        return Err(ConfigError::new(format!(
            "Board height must be between 1 and {}, got {}",
            MAX_HEIGHT, height
        )));
    }
    Ok(())
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width() * config.height(), 64);
        assert_eq!(config.zone_width() * config.zone_depth(), 12);
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = GameConfig::from_toml("player_one = \"Savva\"\nfirst_color = \"Black\"\n")
            .expect("valid config");
        assert_eq!(config.player_one(), "Savva");
        assert_eq!(config.first_color(), Color::Black);
        assert_eq!(config.width(), 8);
    }

    #[test]
    fn test_rejects_wide_board() {
        let config = GameConfig::default().with_dimensions(27, 8, 4, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_overlapping_zones() {
        let config = GameConfig::default().with_dimensions(6, 5, 4, 3);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("overlap"));
    }

    #[test]
    fn test_rejects_zone_larger_than_board() {
        let config = GameConfig::default().with_dimensions(3, 3, 4, 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(GameConfig::from_toml("width = \"eight\"").is_err());
    }
}
