//! OKLCH colors
//!
//! OKLCH is the cylindrical form of OKLab: `l` is perceived lightness in
//! `0.0..=1.0`, `c` is chroma (roughly `0.0..=0.4` inside sRGB) and `h` is the
//! hue angle in degrees. Equal steps in `l` look like equal steps in
//! lightness, which is what the theme ramps rely on.

use crate::error::ParseError;
use crate::number::{format_number, parse_number};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A color in the OKLCH space with straight alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
    pub alpha: f32,
}

/// A color in the OKLab space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklch {
    pub const BLACK: Oklch = Oklch::new(0.0, 0.0, 0.0);
    pub const WHITE: Oklch = Oklch::new(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Oklch = Oklch::new_with_alpha(0.0, 0.0, 0.0, 0.0);

    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    pub const fn new_with_alpha(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Shift lightness by `delta`, clamped to the valid range
    pub fn lighten(self, delta: f32) -> Self {
        Self {
            l: (self.l + delta).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scale chroma by `factor`
    pub fn saturate(self, factor: f32) -> Self {
        Self {
            c: (self.c * factor).max(0.0),
            ..self
        }
    }

    /// Interpolate in OKLab, which avoids hue swings through grey
    pub fn mix(self, other: Oklch, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let from = self.to_oklab();
        let to = other.to_oklab();
        let lab = Oklab {
            l: from.l + (to.l - from.l) * t,
            a: from.a + (to.a - from.a) * t,
            b: from.b + (to.b - from.b) * t,
        };
        let mut mixed = lab.to_oklch();
        // Achromatic endpoints carry no meaningful hue.
        if mixed.c < 1e-4 {
            mixed.h = if self.c >= other.c { self.h } else { other.h };
        }
        mixed.alpha = self.alpha + (other.alpha - self.alpha) * t;
        mixed
    }

    pub fn to_oklab(self) -> Oklab {
        let h = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
        }
    }

    /// Linear-light sRGB components, clamped to the gamut
    pub fn to_linear_srgb(self) -> [f32; 3] {
        let lab = self.to_oklab();

        let l_ = lab.l + 0.396_337_78 * lab.a + 0.215_803_76 * lab.b;
        let m_ = lab.l - 0.105_561_346 * lab.a - 0.063_854_17 * lab.b;
        let s_ = lab.l - 0.089_484_18 * lab.a - 1.291_485_5 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s;
        let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
    }

    /// Gamma-encoded 8-bit sRGB
    pub fn to_srgb8(self) -> [u8; 3] {
        self.to_linear_srgb()
            .map(|channel| (srgb_encode(channel) * 255.0).round() as u8)
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// WCAG relative luminance, ignoring alpha
    pub fn relative_luminance(self) -> f32 {
        let [r, g, b] = self.to_linear_srgb();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG contrast ratio between two opaque colors (`1.0..=21.0`)
    pub fn contrast_ratio(self, other: Oklch) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// CSS Color 4 notation, e.g. `oklch(62% 0.17 150 / 0.5)`
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl Oklab {
    pub fn to_oklch(self) -> Oklch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let mut h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        Oklch::new(self.l, c, h)
    }
}

impl Default for Oklch {
    fn default() -> Self {
        Self::BLACK
    }
}

fn srgb_encode(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {}",
            format_number(self.l * 100.0, 2),
            format_number(self.c, 3),
            format_number(self.h, 2)
        )?;
        if self.alpha < 1.0 {
            write!(f, " / {}", format_number(self.alpha, 3))?;
        }
        f.write_str(")")
    }
}

impl FromStr for Oklch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseError::NotOklch(trimmed.to_string()))?;

        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };

        let parts: Vec<&str> = channels.split_whitespace().collect();
        let [l, c, h] = parts.as_slice() else {
            return Err(ParseError::ChannelCount {
                input: trimmed.to_string(),
                found: parts.len(),
            });
        };

        let l = match l.strip_suffix('%') {
            Some(percent) => parse_number(percent)? / 100.0,
            None => parse_number(l)?,
        };
        let c = parse_number(c)?;
        let h = parse_number(h.trim_end_matches("deg"))?;
        let alpha = match alpha {
            Some(a) => match a.strip_suffix('%') {
                Some(percent) => parse_number(percent)? / 100.0,
                None => parse_number(a)?,
            },
            None => 1.0,
        };

        if !(0.0..=1.0).contains(&l) {
            return Err(ParseError::OutOfRange {
                channel: "lightness",
                value: l,
            });
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ParseError::OutOfRange {
                channel: "alpha",
                value: alpha,
            });
        }

        Ok(Oklch::new_with_alpha(l, c, h, alpha))
    }
}

impl Serialize for Oklch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oklch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OklchVisitor;

        impl Visitor<'_> for OklchVisitor {
            type Value = Oklch;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an `oklch(L C H)` color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Oklch, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(OklchVisitor)
    }
}
