//! Shadow tokens for theming

use aurum_core::{Oklch, Shadow, ShadowLayer};
use serde::Serialize;

/// Elevation shadows, plus one reserved for financially significant elements
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub financial: Shadow,
}

impl ShadowTokens {
    /// Neutral elevation ramp with a tinted glow for financial highlights
    ///
    /// `base_alpha` controls the ambient darkness of the ramp; dark surfaces
    /// need much denser shadows to read as elevation at all.
    pub fn elevation(base_alpha: f32, glow: Oklch) -> Self {
        let ink = Oklch::BLACK;
        Self {
            sm: Shadow::new(ShadowLayer::new(0.0, 1.0, 2.0, 0.0, ink.with_alpha(base_alpha))),
            md: Shadow::new(ShadowLayer::new(
                0.0,
                4.0,
                8.0,
                -2.0,
                ink.with_alpha(base_alpha * 1.5),
            ))
            .layer(ShadowLayer::new(0.0, 2.0, 4.0, -2.0, ink.with_alpha(base_alpha))),
            lg: Shadow::new(ShadowLayer::new(
                0.0,
                12.0,
                24.0,
                -6.0,
                ink.with_alpha(base_alpha * 2.0),
            ))
            .layer(ShadowLayer::new(0.0, 4.0, 8.0, -4.0, ink.with_alpha(base_alpha))),
            financial: Shadow::new(ShadowLayer::new(0.0, 6.0, 20.0, -4.0, glow))
                .layer(ShadowLayer::new(0.0, 0.0, 0.0, 1.0, glow.with_alpha(glow.alpha * 0.5))),
        }
    }

    pub(crate) fn values(&self) -> [&Shadow; 4] {
        [&self.sm, &self.md, &self.lg, &self.financial]
    }
}
