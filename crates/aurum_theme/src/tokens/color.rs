//! Color token groups

use aurum_core::Oklch;
use serde::Serialize;

/// Surfaces ordered by elevation, from the page background up to the most
/// elevated interactive surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurfaceTokens {
    pub page: Oklch,
    pub primary: Oklch,
    pub secondary: Oklch,
    pub elevated: Oklch,
    pub interactive: Oklch,
}

/// Text roles ordered by contrast
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextTokens {
    pub primary: Oklch,
    pub secondary: Oklch,
    pub tertiary: Oklch,
    pub inverse: Oklch,
    pub brand: Oklch,
}

/// Border intensities
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BorderTokens {
    pub subtle: Oklch,
    pub default: Oklch,
    pub strong: Oklch,
    pub interactive: Oklch,
}

/// State colors for financially significant outcomes
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinancialTokens {
    /// Gains, settled payments
    pub positive: Oklch,
    /// Losses, failed payments
    pub negative: Oklch,
    pub warning: Oklch,
    pub info: Oklch,
}

impl SurfaceTokens {
    pub(crate) fn values(&self) -> [Oklch; 5] {
        [
            self.page,
            self.primary,
            self.secondary,
            self.elevated,
            self.interactive,
        ]
    }
}

impl TextTokens {
    pub(crate) fn values(&self) -> [Oklch; 5] {
        [
            self.primary,
            self.secondary,
            self.tertiary,
            self.inverse,
            self.brand,
        ]
    }
}

impl BorderTokens {
    pub(crate) fn values(&self) -> [Oklch; 4] {
        [self.subtle, self.default, self.strong, self.interactive]
    }
}

impl FinancialTokens {
    pub(crate) fn values(&self) -> [Oklch; 4] {
        [self.positive, self.negative, self.warning, self.info]
    }
}
