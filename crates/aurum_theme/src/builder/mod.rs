//! Theme construction
//!
//! Builds the complete style configuration a component framework consumes:
//! palette, typography, spacing, shape, breakpoints, elevation shadows and
//! component overrides. The configuration is a pure function of the mode,
//! the token set and the settings; nothing is patched after construction.

mod components;
mod palette;
mod typography;

pub use components::{
    component_overrides, ComponentOverrides, StyleRules, STANDARD_EASING, TRANSITION_MS,
};
pub use palette::{ActionColors, BackgroundColors, Palette, PaletteColor, TextColors};
pub use typography::{
    responsive_font_sizes, Breakpoint, ResponsiveOptions, ResponsiveSize, TypeVariant, Typography,
};

use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::settings::ThemeSettings;
use crate::tokens::{get_tokens, ColorTokens};
use aurum_core::format_px;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    /// px
    pub border_radius: f32,
}

/// Elevation shadows, as CSS
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeShadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub financial: String,
}

/// The framework-facing style configuration for one mode
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub typography: Typography,
    /// Base spacing unit in px
    pub spacing: f32,
    pub shape: Shape,
    /// Breakpoint name -> minimum width in px
    pub breakpoints: IndexMap<&'static str, u32>,
    pub shadows: ThemeShadows,
    pub components: ComponentOverrides,
}

impl ThemeConfig {
    pub fn mode(&self) -> ThemeMode {
        self.palette.mode
    }

    /// `factor` spacing units as a CSS length
    pub fn spacing(&self, factor: f32) -> String {
        format_px(self.spacing * factor)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, ThemeError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build the configuration for `mode` from the built-in tokens
pub fn build_theme(mode: ThemeMode, settings: &ThemeSettings) -> ThemeConfig {
    build_theme_from_tokens(mode, get_tokens(mode), settings)
}

pub fn build_theme_from_tokens(
    mode: ThemeMode,
    tokens: &ColorTokens,
    settings: &ThemeSettings,
) -> ThemeConfig {
    let typography = responsive_font_sizes(
        &Typography::new(&settings.typography),
        &ResponsiveOptions {
            factor: settings.typography.responsive_factor,
            ..ResponsiveOptions::default()
        },
    );

    ThemeConfig {
        palette: Palette::new(mode, tokens),
        typography,
        spacing: settings.layout.spacing_unit,
        shape: Shape {
            border_radius: settings.layout.border_radius,
        },
        breakpoints: Breakpoint::ALL
            .into_iter()
            .map(|bp| (bp.as_str(), bp.min_width()))
            .collect(),
        shadows: ThemeShadows {
            sm: tokens.shadow.sm.to_css(),
            md: tokens.shadow.md.to_css(),
            lg: tokens.shadow.lg.to_css(),
            financial: tokens.shadow.financial.to_css(),
        },
        components: component_overrides(mode, tokens, &settings.layout),
    }
}
