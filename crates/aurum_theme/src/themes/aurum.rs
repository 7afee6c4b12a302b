//! Default Aurum token tables
//!
//! Both tables share one cool neutral hue (255) so surfaces, borders and text
//! read as a single family. Financial colors keep the usual conventions:
//! green for gains, red for losses, amber for warnings, blue for information.

use crate::tokens::*;

/// Light palette
pub mod day {
    use aurum_core::Oklch;

    // Neutrals
    pub const CANVAS: Oklch = Oklch::new(0.97, 0.004, 255.0);
    pub const PAPER: Oklch = Oklch::new(0.985, 0.003, 255.0);
    pub const MIST: Oklch = Oklch::new(0.955, 0.006, 255.0);
    pub const CLOUD: Oklch = Oklch::new(1.0, 0.0, 0.0);
    pub const HAZE: Oklch = Oklch::new(0.93, 0.01, 255.0);
    pub const LINE: Oklch = Oklch::new(0.93, 0.006, 255.0);
    pub const RULE: Oklch = Oklch::new(0.88, 0.01, 255.0);
    pub const SLATE: Oklch = Oklch::new(0.74, 0.015, 255.0);
    pub const GRAPHITE: Oklch = Oklch::new(0.54, 0.016, 255.0);
    pub const IRON: Oklch = Oklch::new(0.44, 0.02, 255.0);
    pub const INK: Oklch = Oklch::new(0.21, 0.02, 255.0);

    // Accents
    pub const BRAND: Oklch = Oklch::new(0.5, 0.16, 255.0);
    pub const GAIN: Oklch = Oklch::new(0.52, 0.15, 150.0);
    pub const LOSS: Oklch = Oklch::new(0.53, 0.2, 27.0);
    pub const AMBER: Oklch = Oklch::new(0.6, 0.15, 70.0);
    pub const SKY: Oklch = Oklch::new(0.55, 0.14, 240.0);
}

/// Dark palette
pub mod night {
    use aurum_core::Oklch;

    // Neutrals
    pub const ABYSS: Oklch = Oklch::new(0.15, 0.01, 255.0);
    pub const DEEP: Oklch = Oklch::new(0.19, 0.012, 255.0);
    pub const SHELF: Oklch = Oklch::new(0.22, 0.014, 255.0);
    pub const RAISED: Oklch = Oklch::new(0.25, 0.016, 255.0);
    pub const HOVER: Oklch = Oklch::new(0.29, 0.02, 255.0);
    pub const SEAM: Oklch = Oklch::new(0.26, 0.012, 255.0);
    pub const EDGE: Oklch = Oklch::new(0.32, 0.014, 255.0);
    pub const RIDGE: Oklch = Oklch::new(0.46, 0.018, 255.0);
    pub const FOG: Oklch = Oklch::new(0.66, 0.015, 255.0);
    pub const SILVER: Oklch = Oklch::new(0.8, 0.012, 255.0);
    pub const FROST: Oklch = Oklch::new(0.96, 0.005, 255.0);

    // Accents
    pub const BRAND: Oklch = Oklch::new(0.74, 0.13, 255.0);
    pub const GAIN: Oklch = Oklch::new(0.76, 0.17, 150.0);
    pub const LOSS: Oklch = Oklch::new(0.7, 0.19, 25.0);
    pub const AMBER: Oklch = Oklch::new(0.82, 0.15, 80.0);
    pub const SKY: Oklch = Oklch::new(0.74, 0.12, 235.0);
}

/// The default Aurum token pair
pub struct AurumTheme;

impl AurumTheme {
    pub fn light() -> ColorTokens {
        ColorTokens {
            surface: SurfaceTokens {
                page: day::CANVAS,
                primary: day::PAPER,
                secondary: day::MIST,
                elevated: day::CLOUD,
                interactive: day::HAZE,
            },
            text: TextTokens {
                primary: day::INK,
                secondary: day::IRON,
                tertiary: day::GRAPHITE,
                inverse: day::PAPER,
                brand: day::BRAND,
            },
            border: BorderTokens {
                subtle: day::LINE,
                default: day::RULE,
                strong: day::SLATE,
                interactive: day::BRAND,
            },
            financial: FinancialTokens {
                positive: day::GAIN,
                negative: day::LOSS,
                warning: day::AMBER,
                info: day::SKY,
            },
            shadow: ShadowTokens::elevation(0.06, day::BRAND.with_alpha(0.18)),
        }
    }

    pub fn dark() -> ColorTokens {
        ColorTokens {
            surface: SurfaceTokens {
                page: night::ABYSS,
                primary: night::DEEP,
                secondary: night::SHELF,
                elevated: night::RAISED,
                interactive: night::HOVER,
            },
            text: TextTokens {
                primary: night::FROST,
                secondary: night::SILVER,
                tertiary: night::FOG,
                inverse: night::DEEP,
                brand: night::BRAND,
            },
            border: BorderTokens {
                subtle: night::SEAM,
                default: night::EDGE,
                strong: night::RIDGE,
                interactive: night::BRAND,
            },
            financial: FinancialTokens {
                positive: night::GAIN,
                negative: night::LOSS,
                warning: night::AMBER,
                info: night::SKY,
            },
            shadow: ShadowTokens::elevation(0.35, night::BRAND.with_alpha(0.28)),
        }
    }
}
