//! Typography scale and responsive font sizes

use crate::settings::TypographySettings;
use serde::Serialize;

/// Viewport breakpoints, narrowest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Minimum viewport width in px
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 900,
            Breakpoint::Lg => 1200,
            Breakpoint::Xl => 1536,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// `@media (min-width: ...)` query for this breakpoint
    pub fn media_query(self) -> String {
        format!("@media (min-width:{}px)", self.min_width())
    }
}

/// Font size applied from a breakpoint upwards
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResponsiveSize {
    pub breakpoint: Breakpoint,
    /// rem
    pub font_size: f32,
}

/// One text style
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeVariant {
    /// Base size in rem; the size at the widest responsive breakpoint
    pub font_size: f32,
    pub font_weight: u16,
    /// Unitless multiplier
    pub line_height: f32,
    /// em
    pub letter_spacing: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responsive: Vec<ResponsiveSize>,
}

impl TypeVariant {
    const fn new(font_size: f32, font_weight: u16, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing,
            text_transform: None,
            responsive: Vec::new(),
        }
    }

    fn uppercase(mut self) -> Self {
        self.text_transform = Some("uppercase");
        self
    }

    /// Size in px for a root font size
    pub fn font_size_px(&self, html_font_size: f32) -> f32 {
        self.font_size * html_font_size
    }

    /// Effective size at a viewport width
    pub fn font_size_at(&self, viewport_width: u32) -> f32 {
        self.responsive
            .iter()
            .rev()
            .find(|step| step.breakpoint.min_width() <= viewport_width)
            .map(|step| step.font_size)
            .unwrap_or(self.font_size)
    }
}

/// Type scale of the dashboard
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Typography {
    pub font_family: String,
    pub monospace_family: String,
    /// px
    pub html_font_size: f32,
    pub h1: TypeVariant,
    pub h2: TypeVariant,
    pub h3: TypeVariant,
    pub h4: TypeVariant,
    pub h5: TypeVariant,
    pub h6: TypeVariant,
    pub subtitle1: TypeVariant,
    pub subtitle2: TypeVariant,
    pub body1: TypeVariant,
    pub body2: TypeVariant,
    pub button: TypeVariant,
    pub caption: TypeVariant,
    pub overline: TypeVariant,
}

impl Typography {
    /// The base scale, without responsive sizes
    pub fn new(settings: &TypographySettings) -> Self {
        Self {
            font_family: settings.font_family.clone(),
            monospace_family: settings.monospace_family.clone(),
            html_font_size: settings.html_font_size,
            h1: TypeVariant::new(3.0, 700, 1.15, -0.02),
            h2: TypeVariant::new(2.25, 700, 1.2, -0.015),
            h3: TypeVariant::new(1.75, 600, 1.25, -0.01),
            h4: TypeVariant::new(1.5, 600, 1.3, -0.005),
            h5: TypeVariant::new(1.25, 600, 1.35, 0.0),
            h6: TypeVariant::new(1.125, 600, 1.4, 0.0),
            subtitle1: TypeVariant::new(1.0, 500, 1.5, 0.0),
            subtitle2: TypeVariant::new(0.875, 500, 1.5, 0.005),
            body1: TypeVariant::new(1.0, 400, 1.5, 0.0),
            body2: TypeVariant::new(0.875, 400, 1.45, 0.0),
            button: TypeVariant::new(0.875, 600, 1.75, 0.01),
            caption: TypeVariant::new(0.75, 400, 1.4, 0.01),
            overline: TypeVariant::new(0.75, 600, 2.0, 0.08).uppercase(),
        }
    }

    /// Variants by name, in scale order
    pub fn variants(&self) -> [(&'static str, &TypeVariant); 13] {
        [
            ("h1", &self.h1),
            ("h2", &self.h2),
            ("h3", &self.h3),
            ("h4", &self.h4),
            ("h5", &self.h5),
            ("h6", &self.h6),
            ("subtitle1", &self.subtitle1),
            ("subtitle2", &self.subtitle2),
            ("body1", &self.body1),
            ("body2", &self.body2),
            ("button", &self.button),
            ("caption", &self.caption),
            ("overline", &self.overline),
        ]
    }

    fn variants_mut(&mut self) -> [&mut TypeVariant; 13] {
        [
            &mut self.h1,
            &mut self.h2,
            &mut self.h3,
            &mut self.h4,
            &mut self.h5,
            &mut self.h6,
            &mut self.subtitle1,
            &mut self.subtitle2,
            &mut self.body1,
            &mut self.body2,
            &mut self.button,
            &mut self.caption,
            &mut self.overline,
        ]
    }
}

/// Parameters of [`responsive_font_sizes`]
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveOptions {
    /// How far large sizes shrink on the narrowest viewport (> 1)
    pub factor: f32,
    /// Breakpoints that get an explicit size, narrowest first
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            factor: 2.0,
            breakpoints: vec![Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg],
        }
    }
}

/// Attach per-breakpoint sizes to every variant larger than 1rem
///
/// Sizes are computed from each variant's base size and replace whatever
/// responsive sizes the input already carried, so applying this twice gives
/// the same result as applying it once.
pub fn responsive_font_sizes(typography: &Typography, options: &ResponsiveOptions) -> Typography {
    let mut out = typography.clone();
    for variant in out.variants_mut() {
        variant.responsive = responsive_steps(variant.font_size, options);
    }
    out
}

fn responsive_steps(base: f32, options: &ResponsiveOptions) -> Vec<ResponsiveSize> {
    if base <= 1.0 || options.breakpoints.is_empty() || options.factor <= 1.0 {
        return Vec::new();
    }
    let min = 1.0 + (base - 1.0) / options.factor;
    let steps = options.breakpoints.len() as f32;

    let mut sizes = Vec::with_capacity(options.breakpoints.len() + 1);
    sizes.push(ResponsiveSize {
        breakpoint: Breakpoint::Xs,
        font_size: round_rem(min),
    });
    for (i, breakpoint) in options.breakpoints.iter().enumerate() {
        let t = (i + 1) as f32 / steps;
        sizes.push(ResponsiveSize {
            breakpoint: *breakpoint,
            font_size: round_rem(min + (base - min) * t),
        });
    }
    sizes
}

fn round_rem(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}
