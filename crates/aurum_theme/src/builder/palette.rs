//! Palette roles mapped from semantic tokens

use crate::mode::ThemeMode;
use crate::tokens::ColorTokens;
use aurum_core::Oklch;
use serde::Serialize;

/// Lightness step between a role's main color and its light/dark variants
const TONAL_OFFSET: f32 = 0.08;

/// A color role with its tonal variants
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteColor {
    pub main: String,
    pub light: String,
    pub dark: String,
    /// Foreground for text drawn on `main`
    pub contrast_text: String,
}

impl PaletteColor {
    /// Derive variants from `main`, choosing whichever candidate foreground
    /// reads best on it
    pub fn from_main(main: Oklch, foregrounds: [Oklch; 2]) -> Self {
        let [a, b] = foregrounds;
        let contrast_text = if a.contrast_ratio(main) >= b.contrast_ratio(main) {
            a
        } else {
            b
        };
        Self {
            main: main.to_css(),
            light: main.lighten(TONAL_OFFSET).to_css(),
            dark: main.lighten(-TONAL_OFFSET).to_css(),
            contrast_text: contrast_text.to_css(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackgroundColors {
    pub default: String,
    pub paper: String,
    pub elevated: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub disabled: String,
}

/// Overlay colors for interaction states
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionColors {
    pub hover: String,
    pub selected: String,
    pub disabled: String,
    pub focus: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub success: PaletteColor,
    pub warning: PaletteColor,
    pub error: PaletteColor,
    pub info: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: String,
    pub action: ActionColors,
}

impl Palette {
    pub fn new(mode: ThemeMode, tokens: &ColorTokens) -> Self {
        let text = &tokens.text;
        let foregrounds = [text.inverse, text.primary];
        let role = |main| PaletteColor::from_main(main, foregrounds);

        // Selection overlays need more weight on dark surfaces to register.
        let selected_alpha = if mode.is_dark() { 0.2 } else { 0.12 };

        Self {
            mode,
            primary: role(text.brand),
            secondary: role(text.secondary),
            success: role(tokens.financial.positive),
            warning: role(tokens.financial.warning),
            error: role(tokens.financial.negative),
            info: role(tokens.financial.info),
            background: BackgroundColors {
                default: tokens.surface.page.to_css(),
                paper: tokens.surface.primary.to_css(),
                elevated: tokens.surface.elevated.to_css(),
            },
            text: TextColors {
                primary: text.primary.to_css(),
                secondary: text.secondary.to_css(),
                disabled: text.tertiary.with_alpha(0.6).to_css(),
            },
            divider: tokens.border.subtle.to_css(),
            action: ActionColors {
                hover: tokens.surface.interactive.to_css(),
                selected: text.brand.with_alpha(selected_alpha).to_css(),
                disabled: text.tertiary.with_alpha(0.38).to_css(),
                focus: tokens.border.interactive.with_alpha(0.3).to_css(),
            },
        }
    }
}
