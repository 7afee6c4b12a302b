//! Semantic design tokens
//!
//! A token set is a fixed schema of five groups:
//! - `surface`: page, primary, secondary, elevated, interactive
//! - `text`: primary, secondary, tertiary, inverse, brand
//! - `border`: subtle, default, strong, interactive
//! - `financial`: positive, negative, warning, info
//! - `shadow`: sm, md, lg, financial
//!
//! Both modes populate every key; only the values differ.

mod color;
mod seed;
mod shadow;
mod table;

pub use color::*;
pub use seed::TokenSeed;
pub use shadow::*;
pub use table::{get_tokens, TokenTable};

use crate::error::SchemaError;
use aurum_core::{Oklch, ParseError, Shadow};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The five token groups, in schema order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenGroup {
    Surface,
    Text,
    Border,
    Financial,
    Shadow,
}

const SURFACE_KEYS: &[&str] = &["page", "primary", "secondary", "elevated", "interactive"];
const TEXT_KEYS: &[&str] = &["primary", "secondary", "tertiary", "inverse", "brand"];
const BORDER_KEYS: &[&str] = &["subtle", "default", "strong", "interactive"];
const FINANCIAL_KEYS: &[&str] = &["positive", "negative", "warning", "info"];
const SHADOW_KEYS: &[&str] = &["sm", "md", "lg", "financial"];

/// Total number of keys across all groups
pub const TOKEN_COUNT: usize = 22;

impl TokenGroup {
    pub const ALL: [TokenGroup; 5] = [
        TokenGroup::Surface,
        TokenGroup::Text,
        TokenGroup::Border,
        TokenGroup::Financial,
        TokenGroup::Shadow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenGroup::Surface => "surface",
            TokenGroup::Text => "text",
            TokenGroup::Border => "border",
            TokenGroup::Financial => "financial",
            TokenGroup::Shadow => "shadow",
        }
    }

    /// The fixed key set of this group, in schema order
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            TokenGroup::Surface => SURFACE_KEYS,
            TokenGroup::Text => TEXT_KEYS,
            TokenGroup::Border => BORDER_KEYS,
            TokenGroup::Financial => FINANCIAL_KEYS,
            TokenGroup::Shadow => SHADOW_KEYS,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == name)
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every `(group, key)` pair of the schema, in order
pub fn schema() -> impl Iterator<Item = (TokenGroup, &'static str)> {
    TokenGroup::ALL
        .into_iter()
        .flat_map(|group| group.keys().iter().map(move |key| (group, *key)))
}

/// A token value: a color or a shadow expression
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenValue<'a> {
    Color(Oklch),
    Shadow(&'a Shadow),
}

impl TokenValue<'_> {
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Color(color) => color.to_css(),
            TokenValue::Shadow(shadow) => shadow.to_css(),
        }
    }
}

/// One token of a set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenEntry<'a> {
    pub group: TokenGroup,
    pub key: &'static str,
    pub value: TokenValue<'a>,
}

/// Complete set of semantic tokens for one mode
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    pub surface: SurfaceTokens,
    pub text: TextTokens,
    pub border: BorderTokens,
    pub financial: FinancialTokens,
    pub shadow: ShadowTokens,
}

/// Token groups as found in a TOML document, before schema validation
pub type RawTokenGroups = IndexMap<String, IndexMap<String, String>>;

impl ColorTokens {
    /// All tokens in schema order
    pub fn entries(&self) -> Vec<TokenEntry<'_>> {
        let mut entries = Vec::with_capacity(TOKEN_COUNT);
        let colors = [
            (TokenGroup::Surface, self.surface.values().to_vec()),
            (TokenGroup::Text, self.text.values().to_vec()),
            (TokenGroup::Border, self.border.values().to_vec()),
            (TokenGroup::Financial, self.financial.values().to_vec()),
        ];
        for (group, values) in colors {
            for (key, color) in group.keys().iter().zip(values) {
                entries.push(TokenEntry {
                    group,
                    key: *key,
                    value: TokenValue::Color(color),
                });
            }
        }
        for (key, shadow) in SHADOW_KEYS.iter().zip(self.shadow.values()) {
            entries.push(TokenEntry {
                group: TokenGroup::Shadow,
                key: *key,
                value: TokenValue::Shadow(shadow),
            });
        }
        entries
    }

    /// Look up a single token
    pub fn get(&self, group: TokenGroup, key: &str) -> Option<TokenValue<'_>> {
        use TokenValue::{Color, Shadow};

        let value = match (group, key) {
            (TokenGroup::Surface, "page") => Color(self.surface.page),
            (TokenGroup::Surface, "primary") => Color(self.surface.primary),
            (TokenGroup::Surface, "secondary") => Color(self.surface.secondary),
            (TokenGroup::Surface, "elevated") => Color(self.surface.elevated),
            (TokenGroup::Surface, "interactive") => Color(self.surface.interactive),
            (TokenGroup::Text, "primary") => Color(self.text.primary),
            (TokenGroup::Text, "secondary") => Color(self.text.secondary),
            (TokenGroup::Text, "tertiary") => Color(self.text.tertiary),
            (TokenGroup::Text, "inverse") => Color(self.text.inverse),
            (TokenGroup::Text, "brand") => Color(self.text.brand),
            (TokenGroup::Border, "subtle") => Color(self.border.subtle),
            (TokenGroup::Border, "default") => Color(self.border.default),
            (TokenGroup::Border, "strong") => Color(self.border.strong),
            (TokenGroup::Border, "interactive") => Color(self.border.interactive),
            (TokenGroup::Financial, "positive") => Color(self.financial.positive),
            (TokenGroup::Financial, "negative") => Color(self.financial.negative),
            (TokenGroup::Financial, "warning") => Color(self.financial.warning),
            (TokenGroup::Financial, "info") => Color(self.financial.info),
            (TokenGroup::Shadow, "sm") => Shadow(&self.shadow.sm),
            (TokenGroup::Shadow, "md") => Shadow(&self.shadow.md),
            (TokenGroup::Shadow, "lg") => Shadow(&self.shadow.lg),
            (TokenGroup::Shadow, "financial") => Shadow(&self.shadow.financial),
            _ => return None,
        };
        Some(value)
    }

    /// Build a token set from loosely typed groups, rejecting missing,
    /// unknown or unparseable entries
    pub fn from_raw(table: &'static str, raw: &RawTokenGroups) -> Result<Self, SchemaError> {
        for (group_name, keys) in raw {
            let Some(group) = TokenGroup::parse(group_name) else {
                return Err(SchemaError::UnknownGroup {
                    table,
                    group: group_name.clone(),
                });
            };
            if let Some(key) = keys.keys().find(|key| !group.keys().contains(&key.as_str())) {
                return Err(SchemaError::Unexpected {
                    table,
                    group,
                    key: key.clone(),
                });
            }
        }

        let color = |group, key| parse_entry::<Oklch>(raw, table, group, key);
        let shadow = |key| parse_entry::<Shadow>(raw, table, TokenGroup::Shadow, key);

        use TokenGroup::{Border, Financial, Surface, Text};
        Ok(ColorTokens {
            surface: SurfaceTokens {
                page: color(Surface, "page")?,
                primary: color(Surface, "primary")?,
                secondary: color(Surface, "secondary")?,
                elevated: color(Surface, "elevated")?,
                interactive: color(Surface, "interactive")?,
            },
            text: TextTokens {
                primary: color(Text, "primary")?,
                secondary: color(Text, "secondary")?,
                tertiary: color(Text, "tertiary")?,
                inverse: color(Text, "inverse")?,
                brand: color(Text, "brand")?,
            },
            border: BorderTokens {
                subtle: color(Border, "subtle")?,
                default: color(Border, "default")?,
                strong: color(Border, "strong")?,
                interactive: color(Border, "interactive")?,
            },
            financial: FinancialTokens {
                positive: color(Financial, "positive")?,
                negative: color(Financial, "negative")?,
                warning: color(Financial, "warning")?,
                info: color(Financial, "info")?,
            },
            shadow: ShadowTokens {
                sm: shadow("sm")?,
                md: shadow("md")?,
                lg: shadow("lg")?,
                financial: shadow("financial")?,
            },
        })
    }

    /// Flatten into loosely typed groups of CSS strings
    pub fn to_raw(&self) -> RawTokenGroups {
        let mut raw = RawTokenGroups::new();
        for entry in self.entries() {
            raw.entry(entry.group.as_str().to_string())
                .or_default()
                .insert(entry.key.to_string(), entry.value.to_css());
        }
        raw
    }
}

fn parse_entry<T>(
    raw: &RawTokenGroups,
    table: &'static str,
    group: TokenGroup,
    key: &'static str,
) -> Result<T, SchemaError>
where
    T: FromStr<Err = ParseError>,
{
    let value = raw
        .get(group.as_str())
        .and_then(|keys| keys.get(key))
        .ok_or(SchemaError::Missing { table, group, key })?;
    value.parse().map_err(|err: ParseError| SchemaError::InvalidValue {
        table,
        group,
        key,
        message: err.to_string(),
    })
}
