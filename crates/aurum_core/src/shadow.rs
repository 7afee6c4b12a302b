//! Box shadow expressions

use crate::color::Oklch;
use crate::error::ParseError;
use crate::number::{format_px, parse_px};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A single box shadow layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Oklch,
    pub inset: bool,
}

impl ShadowLayer {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Oklch) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub const fn inset(self) -> Self {
        Self {
            inset: true,
            ..self
        }
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {} {} {}",
            format_px(self.offset_x),
            format_px(self.offset_y),
            format_px(self.blur),
            format_px(self.spread),
            self.color
        )
    }
}

/// A stack of shadow layers, painted first-on-top as in CSS
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadow {
    layers: SmallVec<[ShadowLayer; 2]>,
}

impl Shadow {
    pub fn new(layer: ShadowLayer) -> Self {
        let mut layers = SmallVec::new();
        layers.push(layer);
        Self { layers }
    }

    /// The empty shadow (`none`)
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones
    pub fn layer(mut self, layer: ShadowLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

impl FromStr for Shadow {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "none" {
            return Ok(Shadow::none());
        }
        let mut shadow = Shadow::none();
        for part in split_layers(s) {
            shadow.layers.push(parse_layer(part)?);
        }
        Ok(shadow)
    }
}

/// Split on commas that are not inside a color function
fn split_layers(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts
}

fn parse_layer(s: &str) -> Result<ShadowLayer, ParseError> {
    let (inset, rest) = match s.strip_prefix("inset") {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s),
    };
    let color_start = rest
        .find("oklch(")
        .ok_or_else(|| ParseError::ShadowLayer(s.to_string()))?;
    let color: Oklch = rest[color_start..].parse()?;

    let lengths = rest[..color_start]
        .split_whitespace()
        .map(parse_px)
        .collect::<Result<Vec<f32>, _>>()?;

    let (offset_x, offset_y, blur, spread) = match lengths.as_slice() {
        [x, y] => (*x, *y, 0.0, 0.0),
        [x, y, blur] => (*x, *y, *blur, 0.0),
        [x, y, blur, spread] => (*x, *y, *blur, *spread),
        _ => return Err(ParseError::ShadowLayer(s.to_string())),
    };

    Ok(ShadowLayer {
        offset_x,
        offset_y,
        blur,
        spread,
        color,
        inset,
    })
}

impl Serialize for Shadow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Shadow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadowVisitor;

        impl Visitor<'_> for ShadowVisitor {
            type Value = Shadow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a box-shadow string with oklch colors")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Shadow, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ShadowVisitor)
    }
}
