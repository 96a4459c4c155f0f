//! Game configuration parsed from an optional JSON object.
//!
//! The host page may pass overrides to [`crate::host::start`]; anything it
//! leaves out takes the default below. With no overrides every run starts from
//! the same 10×10 board on a 480×360 screen drawn at 2× scale.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::projection::ScreenSize;

pub const DEFAULT_SCREEN_WIDTH: u32 = 480;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 360;
pub const DEFAULT_SCALE: u32 = 2;
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 10;
pub const DEFAULT_MAX_STACK_HEIGHT: u32 = 5;
pub const DEFAULT_ASSET_BASE_URL: &str = "assets/";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels.
    pub screen_height: u32,
    /// Integer factor between logical pixels and CSS pixels.
    pub scale: u32,
    /// Grid columns.
    pub board_width: usize,
    /// Grid rows.
    pub board_height: usize,
    /// Capacity of each stack in height units (a full block uses two).
    pub max_stack_height: u32,
    /// URL prefix the sprite and font files are served from.
    pub asset_base_url: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            scale: DEFAULT_SCALE,
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl GameConfig {
    /// Build a validated config from optional JSON overrides.
    ///
    /// `None`, an empty string, or whitespace yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed, names an unknown
    /// field, or a value is out of range.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let config = match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => serde_json::from_str(json)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("screen_width", self.screen_width == 0),
            ("screen_height", self.screen_height == 0),
            ("scale", self.scale == 0),
            ("board_width", self.board_width == 0),
            ("board_height", self.board_height == 0),
            ("max_stack_height", self.max_stack_height == 0),
        ];
        if let Some(&(field, _)) = checks.iter().find(|(_, zero)| *zero) {
            return Err(ConfigError::Zero { field });
        }
        self.level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when the name is not a `log::Level`.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Logical screen size used for layout.
    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        ScreenSize::new(f64::from(self.screen_width), f64::from(self.screen_height))
    }
}
