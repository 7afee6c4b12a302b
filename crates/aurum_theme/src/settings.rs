//! Theme settings (aurum.toml)

use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::tokens::TokenSeed;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Key under which the mode preference is persisted
pub const DEFAULT_STORAGE_KEY: &str = "themeMode";

/// Top-level theme configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Mode used when no valid preference is stored
    #[serde(default)]
    pub default_mode: ThemeMode,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub typography: TypographySettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    /// Derive token tables from a seed instead of the built-in tables
    #[serde(default)]
    pub seed: Option<TokenSeed>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::default(),
            storage_key: default_storage_key(),
            typography: TypographySettings::default(),
            layout: LayoutSettings::default(),
            seed: None,
        }
    }
}

/// Typography configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TypographySettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_monospace_family")]
    pub monospace_family: String,
    /// Root font size in px that rem values are relative to
    #[serde(default = "default_html_font_size")]
    pub html_font_size: f32,
    /// How strongly headings shrink on narrow viewports (> 1)
    #[serde(default = "default_responsive_factor")]
    pub responsive_factor: f32,
}

fn default_font_family() -> String {
    "Inter, system-ui, -apple-system, \"Segoe UI\", sans-serif".to_string()
}

fn default_monospace_family() -> String {
    "\"JetBrains Mono\", ui-monospace, monospace".to_string()
}

fn default_html_font_size() -> f32 {
    16.0
}

fn default_responsive_factor() -> f32 {
    2.0
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            monospace_family: default_monospace_family(),
            html_font_size: default_html_font_size(),
            responsive_factor: default_responsive_factor(),
        }
    }
}

/// Layout configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Base spacing unit in px
    #[serde(default = "default_spacing_unit")]
    pub spacing_unit: f32,
    #[serde(default = "default_border_radius")]
    pub border_radius: f32,
}

fn default_spacing_unit() -> f32 {
    8.0
}

fn default_border_radius() -> f32 {
    12.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing_unit: default_spacing_unit(),
            border_radius: default_border_radius(),
        }
    }
}

impl ThemeSettings {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let settings: ThemeSettings = toml::from_str(src).map_err(ThemeError::Settings)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::InvalidSetting {
                field: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        let typography = &self.typography;
        if !typography.responsive_factor.is_finite() || typography.responsive_factor <= 1.0 {
            return Err(ThemeError::InvalidSetting {
                field: "typography.responsive_factor",
                reason: format!(
                    "must be greater than 1, got {}",
                    typography.responsive_factor
                ),
            });
        }
        if !typography.html_font_size.is_finite() || typography.html_font_size <= 0.0 {
            return Err(ThemeError::InvalidSetting {
                field: "typography.html_font_size",
                reason: format!("must be positive, got {}", typography.html_font_size),
            });
        }
        let layout = &self.layout;
        if !layout.spacing_unit.is_finite() || layout.spacing_unit <= 0.0 {
            return Err(ThemeError::InvalidSetting {
                field: "layout.spacing_unit",
                reason: format!("must be positive, got {}", layout.spacing_unit),
            });
        }
        if !layout.border_radius.is_finite() || layout.border_radius < 0.0 {
            return Err(ThemeError::InvalidSetting {
                field: "layout.border_radius",
                reason: format!("must not be negative, got {}", layout.border_radius),
            });
        }
        Ok(())
    }
}
