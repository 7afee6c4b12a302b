//! Light/dark token table

use super::{ColorTokens, RawTokenGroups, TokenSeed};
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::themes::AurumTheme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN: LazyLock<TokenTable> =
    LazyLock::new(|| TokenTable::new(AurumTheme::light(), AurumTheme::dark()));

/// The two canonical token sets, one per mode
///
/// Both sets share the fixed schema, so a table that exists is always safe
/// to project.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenTable {
    light: ColorTokens,
    dark: ColorTokens,
}

/// On-disk form: `[light.surface]`, `[dark.text]`, ...
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TokenFile {
    light: RawTokenGroups,
    dark: RawTokenGroups,
}

impl TokenTable {
    /// Pair two token sets
    ///
    /// Both sets are `ColorTokens`, so they populate the same schema by
    /// construction. Token documents are checked key by key in
    /// [`ColorTokens::from_raw`] before they get here.
    pub fn new(light: ColorTokens, dark: ColorTokens) -> Self {
        debug_assert!(light
            .entries()
            .iter()
            .zip(dark.entries().iter())
            .all(|(l, d)| (l.group, l.key) == (d.group, d.key)));
        Self { light, dark }
    }

    /// The built-in Aurum tables, validated on first use
    pub fn builtin() -> &'static TokenTable {
        &BUILTIN
    }

    /// Derive both tables from seed parameters
    pub fn from_seed(seed: &TokenSeed) -> Self {
        Self::new(seed.derive(ThemeMode::Light), seed.derive(ThemeMode::Dark))
    }

    /// Load both tables from a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let file: TokenFile = toml::from_str(src).map_err(ThemeError::TokenFile)?;
        let light = ColorTokens::from_raw("light", &file.light)?;
        let dark = ColorTokens::from_raw("dark", &file.dark)?;
        Ok(Self::new(light, dark))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&src)?;
        tracing::debug!(path = %path.display(), "loaded token table");
        Ok(table)
    }

    /// Render both tables as a TOML document readable by [`Self::from_toml_str`]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&TokenFile {
            light: self.light.to_raw(),
            dark: self.dark.to_raw(),
        })
    }

    /// Pure O(1) lookup
    pub fn for_mode(&self, mode: ThemeMode) -> &ColorTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &ColorTokens {
        &self.light
    }

    pub fn dark(&self) -> &ColorTokens {
        &self.dark
    }
}

/// Token set of the built-in table for `mode`
pub fn get_tokens(mode: ThemeMode) -> &'static ColorTokens {
    TokenTable::builtin().for_mode(mode)
}
