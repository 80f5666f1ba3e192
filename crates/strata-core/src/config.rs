//! Editor configuration.
//!
//! Loaded from a TOML file with `#[serde(default)]` throughout, so missing
//! fields fall back to defaults and old configs stay valid.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,

    /// UI appearance settings
    pub ui: UiConfig,

    /// Keyboard settings
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Self::default()
        })
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("strata").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Open buffers read-only (suppresses the current-line highlight)
    pub read_only: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { read_only: false }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name
    pub theme: String,

    /// Font size in points
    pub font_size: f32,

    /// Line height multiplier
    pub line_height: f32,

    /// Show the line-number gutter
    pub line_numbers: bool,

    /// Highlight the line containing the cursor
    pub highlight_current_line: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: 14.0,
            line_height: 1.3,
            line_numbers: true,
            highlight_current_line: true,
        }
    }
}

/// Keyboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Custom key bindings: key chord string to command name,
    /// e.g. `"ctrl+shift+left" = "selection.wordLeft"`.
    pub bindings: HashMap<String, String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.editor.read_only);
        assert_eq!(config.ui.font_size, 14.0);
        assert!(config.ui.line_numbers);
        assert!(config.ui.highlight_current_line);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.editor.read_only = true;
        config
            .keyboard
            .bindings
            .insert("ctrl+shift+left".to_string(), "selection.wordLeft".to_string());

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.editor.read_only);
        assert_eq!(
            parsed.keyboard.bindings.get("ctrl+shift+left").unwrap(),
            "selection.wordLeft"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[ui]\nfont_size = 18.0\n").unwrap();
        assert_eq!(parsed.ui.font_size, 18.0);
        assert_eq!(parsed.ui.line_height, 1.3);
        assert!(!parsed.editor.read_only);
    }
}
