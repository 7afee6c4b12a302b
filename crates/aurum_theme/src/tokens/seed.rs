//! Token derivation from seed parameters

use super::{BorderTokens, ColorTokens, FinancialTokens, ShadowTokens, SurfaceTokens, TextTokens};
use crate::mode::ThemeMode;
use aurum_core::Oklch;
use serde::{Deserialize, Serialize};

/// The small parameter set a complete token table derives from
///
/// Lightness is fixed per mode by the ramps below; seeds only choose hue and
/// chroma, so every derived table keeps the same contrast structure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSeed {
    pub brand_hue: f32,
    pub brand_chroma: f32,
    pub neutral_hue: f32,
    pub neutral_chroma: f32,
    pub positive_hue: f32,
    pub negative_hue: f32,
    pub warning_hue: f32,
    pub info_hue: f32,
}

impl Default for TokenSeed {
    fn default() -> Self {
        Self {
            brand_hue: 255.0,
            brand_chroma: 0.16,
            neutral_hue: 255.0,
            neutral_chroma: 0.012,
            positive_hue: 150.0,
            negative_hue: 27.0,
            warning_hue: 70.0,
            info_hue: 240.0,
        }
    }
}

/// Per-mode lightness targets
struct Ramp {
    /// page, primary, secondary, elevated, interactive
    surface: [f32; 5],
    /// primary, secondary, tertiary, inverse
    text: [f32; 4],
    /// subtle, default, strong
    border: [f32; 3],
    brand_l: f32,
    brand_chroma_scale: f32,
    /// positive, negative, warning, info
    financial_l: [f32; 4],
    financial_c: [f32; 4],
    shadow_alpha: f32,
    glow_alpha: f32,
}

const LIGHT_RAMP: Ramp = Ramp {
    surface: [0.97, 0.985, 0.955, 1.0, 0.93],
    text: [0.21, 0.44, 0.54, 0.985],
    border: [0.93, 0.88, 0.74],
    brand_l: 0.5,
    brand_chroma_scale: 1.0,
    financial_l: [0.52, 0.53, 0.6, 0.55],
    financial_c: [0.15, 0.2, 0.15, 0.14],
    shadow_alpha: 0.06,
    glow_alpha: 0.18,
};

const DARK_RAMP: Ramp = Ramp {
    surface: [0.15, 0.19, 0.22, 0.25, 0.29],
    text: [0.96, 0.8, 0.66, 0.19],
    border: [0.26, 0.32, 0.46],
    brand_l: 0.74,
    brand_chroma_scale: 0.8,
    financial_l: [0.76, 0.7, 0.82, 0.74],
    financial_c: [0.17, 0.19, 0.15, 0.12],
    shadow_alpha: 0.35,
    glow_alpha: 0.28,
};

impl TokenSeed {
    /// Seed with a different brand hue, keeping everything else
    pub fn with_brand_hue(self, brand_hue: f32) -> Self {
        Self { brand_hue, ..self }
    }

    pub fn derive(&self, mode: ThemeMode) -> ColorTokens {
        let ramp = match mode {
            ThemeMode::Light => &LIGHT_RAMP,
            ThemeMode::Dark => &DARK_RAMP,
        };

        // Darker neutrals carry slightly more chroma so they do not look dead.
        let neutral = |l: f32| {
            let weight = 1.0 + (0.5 - l).max(0.0);
            Oklch::new(l, self.neutral_chroma * weight, self.neutral_hue)
        };
        let brand = Oklch::new(
            ramp.brand_l,
            self.brand_chroma * ramp.brand_chroma_scale,
            self.brand_hue,
        );
        let hues = [
            self.positive_hue,
            self.negative_hue,
            self.warning_hue,
            self.info_hue,
        ];
        let [positive, negative, warning, info] =
            std::array::from_fn(|i| Oklch::new(ramp.financial_l[i], ramp.financial_c[i], hues[i]));

        let [page, primary, secondary, elevated, interactive] = ramp.surface.map(neutral);
        let [text_primary, text_secondary, text_tertiary, text_inverse] = ramp.text.map(neutral);
        let [subtle, default, strong] = ramp.border.map(neutral);

        ColorTokens {
            surface: SurfaceTokens {
                page,
                primary,
                secondary,
                elevated,
                interactive,
            },
            text: TextTokens {
                primary: text_primary,
                secondary: text_secondary,
                tertiary: text_tertiary,
                inverse: text_inverse,
                brand,
            },
            border: BorderTokens {
                subtle,
                default,
                strong,
                interactive: brand,
            },
            financial: FinancialTokens {
                positive,
                negative,
                warning,
                info,
            },
            shadow: ShadowTokens::elevation(ramp.shadow_alpha, brand.with_alpha(ramp.glow_alpha)),
        }
    }
}
