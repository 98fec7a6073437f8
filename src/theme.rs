//! Color themes for map rendering
//!
//! A theme maps named color tokens to concrete values. Themes load from
//! TOML files so the map can be restyled without touching layout code; any
//! token a theme omits falls back to the default palette, then to a
//! per-category default, so a partial theme is always usable.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A theme mapping color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color value
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: dark slate canvas with a sky-blue highlight
const DEFAULT_PALETTE: &str = r##"
[colors]
# Canvas
background = "#0f172a"
frame = "#334155"
grid = "#1e293b"

# Station labels
label = "#cbd5e1"
label-high-contrast = "#ffffff"
label-background = "#0f172a"

# Route highlight
highlight-transfer = "#38bdf8"
highlight-fallback = "#ffffff"

# Station markers
marker-stroke = "#0f172a"
marker-stroke-high-contrast = "#000000"

# Legend
legend-text = "#93c5fd"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token defined in this theme
    ///
    /// Returns None if the token is not defined.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback.
    ///
    /// Fallback order:
    /// 1. Check this theme for the exact token
    /// 2. Check the default palette for the exact token
    /// 3. Use the category default (label → #cbd5e1, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("background") {
            return "#0f172a".to_string();
        }
        if token.starts_with("frame") || token.starts_with("grid") {
            return "#1e293b".to_string();
        }
        if token.starts_with("label") {
            return "#cbd5e1".to_string();
        }
        if token.starts_with("highlight") {
            return "#38bdf8".to_string();
        }
        if token.starts_with("marker") {
            return "#0f172a".to_string();
        }
        if token.starts_with("legend") {
            return "#93c5fd".to_string();
        }

        // Unknown category - return the label color
        "#cbd5e1".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
