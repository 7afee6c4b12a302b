//! CSS custom property projection
//!
//! Flattens a token set into `--<group>-<key>` variables. Names depend only
//! on the schema, so a stylesheet written against them keeps working across
//! mode switches; only the values change.

use crate::error::SchemaError;
use crate::mode::ThemeMode;
use crate::tokens::{ColorTokens, TokenGroup, TokenTable, TOKEN_COUNT};
use indexmap::IndexMap;
use std::fmt::Write;

/// Variable name -> CSS value, in schema order
pub type CssVariables = IndexMap<String, String>;

/// Attribute that carries the active mode on the document root
pub const MODE_ATTRIBUTE: &str = "data-theme";

/// `--<group>-<key>`, kebab-cased
pub fn variable_name(group: TokenGroup, key: &str) -> String {
    let mut name = String::with_capacity(4 + group.as_str().len() + key.len());
    name.push_str("--");
    push_kebab(&mut name, group.as_str());
    name.push('-');
    push_kebab(&mut name, key);
    name
}

fn push_kebab(out: &mut String, ident: &str) {
    for (i, ch) in ident.chars().enumerate() {
        match ch {
            '_' | ' ' => out.push('-'),
            c if c.is_ascii_uppercase() => {
                if i > 0 {
                    out.push('-');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
}

/// Project every token into a variable
///
/// Fails instead of returning a partial map if a name collides or the
/// number of variables differs from the schema.
pub fn project(tokens: &ColorTokens) -> Result<CssVariables, SchemaError> {
    let mut vars = CssVariables::with_capacity(TOKEN_COUNT);
    for entry in tokens.entries() {
        let name = variable_name(entry.group, entry.key);
        if vars.contains_key(&name) {
            return Err(SchemaError::DuplicateVariable(name));
        }
        vars.insert(name, entry.value.to_css());
    }
    if vars.len() != TOKEN_COUNT {
        return Err(SchemaError::VariableCount {
            found: vars.len(),
            expected: TOKEN_COUNT,
        });
    }
    Ok(vars)
}

/// Render `selector { --name: value; ... }`
pub fn to_css_block(selector: &str, vars: &CssVariables) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "{selector} {{");
    for (name, value) in vars {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
    css
}

/// Selector matching the document root while `mode` is active
pub fn mode_selector(mode: ThemeMode) -> String {
    format!(":root[{MODE_ATTRIBUTE}=\"{}\"]", mode.as_str())
}

/// A stylesheet with one variable block per mode
///
/// The default mode's block is also bound to a bare `:root`, so documents
/// render correctly before the mode marker is applied.
pub fn stylesheet(table: &TokenTable, default_mode: ThemeMode) -> Result<String, SchemaError> {
    let mut css = to_css_block(":root", &project(table.for_mode(default_mode))?);
    for mode in ThemeMode::ALL {
        css.push('\n');
        css.push_str(&to_css_block(&mode_selector(mode), &project(table.for_mode(mode))?));
    }
    Ok(css)
}
