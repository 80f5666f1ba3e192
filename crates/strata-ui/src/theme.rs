//! Theme system for the editor.

use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Editor theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// Gutter colors
    pub gutter: GutterColors,
}

/// Background colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub selection: Color,
    /// Full-width background of the line containing the cursor.
    pub line_highlight: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForegroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,
}

/// Gutter colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GutterColors {
    pub background: Color,
    pub line_number: Color,
    /// Line number of the line containing the cursor.
    pub active_line_number: Color,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Strata Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.10, 0.10, 0.12),
                secondary: Color::rgb(0.12, 0.12, 0.14),
                selection: Color::rgba(0.3, 0.5, 0.8, 0.4),
                line_highlight: Color::rgba(1.0, 1.0, 1.0, 0.06),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.9, 0.9, 0.9),
                secondary: Color::rgb(0.7, 0.7, 0.7),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.4, 0.6, 1.0),
            },
            gutter: GutterColors {
                background: Color::rgb(0.12, 0.12, 0.14),
                line_number: Color::rgb(0.45, 0.45, 0.50),
                active_line_number: Color::rgb(0.85, 0.85, 0.9),
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "Strata Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
                secondary: Color::rgb(0.96, 0.96, 0.96),
                selection: Color::rgba(0.3, 0.5, 0.8, 0.25),
                line_highlight: Color::rgba(0.0, 0.0, 0.0, 0.045),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.1, 0.1, 0.1),
                secondary: Color::rgb(0.3, 0.3, 0.3),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.2, 0.4, 0.8),
            },
            gutter: GutterColors {
                background: Color::rgb(0.94, 0.94, 0.94),
                line_number: Color::rgb(0.55, 0.55, 0.55),
                active_line_number: Color::rgb(0.15, 0.15, 0.15),
            },
        }
    }

    /// Returns the built-in theme for a name.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolves a configured theme name.
    ///
    /// A user theme file at `<config dir>/strata/themes/<name>.json` takes
    /// priority; otherwise the name selects a built-in. A file that fails to
    /// parse falls back to the built-in with a warning.
    pub fn resolve(name: &str) -> Self {
        let Some(path) = Self::user_theme_path(name) else {
            return Self::by_name(name);
        };
        if !path.exists() {
            return Self::by_name(name);
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme {:?}: {}", path, e);
            Self::by_name(name)
        })
    }

    fn user_theme_path(name: &str) -> Option<std::path::PathBuf> {
        Some(
            dirs::config_dir()?
                .join("strata")
                .join("themes")
                .join(format!("{}.json", name)),
        )
    }

    /// Loads a theme from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert!(Theme::by_name("dark").is_dark);
        assert!(!Theme::by_name("light").is_dark);
        // Unknown names fall back to dark
        assert!(Theme::by_name("solarized").is_dark);
    }

    #[test]
    fn test_theme_roundtrip() {
        let theme = Theme::dark();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, theme.name);
        assert_eq!(parsed.is_dark, theme.is_dark);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join("strata-theme-roundtrip.json");
        let theme = Theme::light();
        theme.save(&path).unwrap();

        let loaded = Theme::load(&path).unwrap();
        assert_eq!(loaded.name, theme.name);
        assert!(!loaded.is_dark);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = std::env::temp_dir().join("strata-theme-malformed.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Theme::load(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        // No user theme file is expected for this name
        let theme = Theme::resolve("no-such-theme-on-disk");
        assert!(theme.is_dark);
    }
}
