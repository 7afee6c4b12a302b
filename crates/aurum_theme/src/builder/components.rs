//! Per-component style overrides

use crate::mode::ThemeMode;
use crate::settings::LayoutSettings;
use crate::tokens::ColorTokens;
use aurum_core::format_px;
use indexmap::IndexMap;
use serde::Serialize;

/// Easing shared by every themed transition
pub const STANDARD_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Duration of color transitions on mode switch, in ms
pub const TRANSITION_MS: u32 = 200;

fn transition(properties: &[&str]) -> String {
    properties
        .iter()
        .map(|property| format!("{property} {TRANSITION_MS}ms {STANDARD_EASING}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// CSS declarations for a component plus its interaction states
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleRules {
    pub declarations: IndexMap<String, String>,
    /// Pseudo-class (`hover`, `focus-visible`, ...) -> declarations
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub states: IndexMap<String, IndexMap<String, String>>,
}

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.insert(property.to_string(), value.into());
        self
    }

    pub fn on(mut self, state: &str, property: &str, value: impl Into<String>) -> Self {
        self.states
            .entry(state.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn state(&self, state: &str, property: &str) -> Option<&str> {
        self.states.get(state)?.get(property).map(String::as_str)
    }
}

/// Component name -> style rules
pub type ComponentOverrides = IndexMap<String, StyleRules>;

/// Overrides layered on top of the semantic tokens of one mode
pub fn component_overrides(
    mode: ThemeMode,
    tokens: &ColorTokens,
    layout: &LayoutSettings,
) -> ComponentOverrides {
    let surface = &tokens.surface;
    let text = &tokens.text;
    let border = &tokens.border;
    let shadow = &tokens.shadow;
    let radius = format_px(layout.border_radius);
    let control_radius = format_px((layout.border_radius * 0.67).round());
    let focus_ring = format!("0 0 0 3px {}", border.interactive.with_alpha(0.35));
    let colors = transition(&["background-color", "border-color", "color", "box-shadow"]);

    let mut components = ComponentOverrides::new();

    components.insert(
        "CssBaseline".into(),
        StyleRules::new()
            .set("background-color", surface.page.to_css())
            .set("color", text.primary.to_css())
            .set("color-scheme", mode.as_str())
            .set("transition", transition(&["background-color", "color"])),
    );

    components.insert(
        "Paper".into(),
        StyleRules::new()
            .set("background-color", surface.primary.to_css())
            .set("background-image", "none")
            .set("border", format!("1px solid {}", border.subtle))
            .set("transition", colors.clone()),
    );

    components.insert(
        "Card".into(),
        StyleRules::new()
            .set("background-color", surface.primary.to_css())
            .set("border", format!("1px solid {}", border.subtle))
            .set("border-radius", radius.clone())
            .set("box-shadow", shadow.sm.to_css())
            .set("transition", colors.clone())
            .on("hover", "box-shadow", shadow.md.to_css())
            .on("hover", "border-color", border.default.to_css()),
    );

    components.insert(
        "AppBar".into(),
        StyleRules::new()
            .set("background-color", surface.primary.to_css())
            .set("color", text.primary.to_css())
            .set("border-bottom", format!("1px solid {}", border.subtle))
            .set("box-shadow", "none"),
    );

    components.insert(
        "Drawer".into(),
        StyleRules::new()
            .set("background-color", surface.secondary.to_css())
            .set("border-right", format!("1px solid {}", border.subtle)),
    );

    components.insert(
        "Button".into(),
        StyleRules::new()
            .set("border-radius", control_radius.clone())
            .set("text-transform", "none")
            .set("box-shadow", "none")
            .set("transition", colors.clone())
            .on("hover", "box-shadow", shadow.sm.to_css())
            .on("focus-visible", "box-shadow", focus_ring.clone())
            .on("active", "box-shadow", "none")
            .on("disabled", "color", text.tertiary.with_alpha(0.6).to_css()),
    );

    components.insert(
        "OutlinedInput".into(),
        StyleRules::new()
            .set("background-color", surface.secondary.to_css())
            .set("border-radius", control_radius.clone())
            .set("border", format!("1px solid {}", border.default))
            .set("transition", colors.clone())
            .on("hover", "border-color", border.strong.to_css())
            .on("focus-within", "border-color", border.interactive.to_css())
            .on("focus-within", "box-shadow", focus_ring.clone()),
    );

    components.insert(
        "Chip".into(),
        StyleRules::new()
            .set("background-color", surface.interactive.to_css())
            .set("color", text.secondary.to_css())
            .set("border-radius", control_radius)
            .set("font-variant-numeric", "tabular-nums"),
    );

    components.insert(
        "TableCell".into(),
        StyleRules::new()
            .set("border-bottom", format!("1px solid {}", border.subtle))
            .set("font-variant-numeric", "tabular-nums"),
    );

    components.insert(
        "TableRow".into(),
        StyleRules::new()
            .set("transition", transition(&["background-color"]))
            .on("hover", "background-color", surface.interactive.to_css())
            .on("selected", "background-color", text.brand.with_alpha(0.12).to_css()),
    );

    components.insert(
        "Tooltip".into(),
        StyleRules::new()
            .set("background-color", surface.elevated.to_css())
            .set("color", text.primary.to_css())
            .set("border", format!("1px solid {}", border.default))
            .set("box-shadow", shadow.lg.to_css()),
    );

    components.insert(
        "Divider".into(),
        StyleRules::new().set("border-color", border.subtle.to_css()),
    );

    // Cards that display a balance or P&L figure get the accent glow.
    components.insert(
        "FinancialCard".into(),
        StyleRules::new()
            .set("background-color", surface.elevated.to_css())
            .set("border", format!("1px solid {}", border.default))
            .set("border-radius", radius)
            .set("box-shadow", shadow.financial.to_css())
            .set("font-variant-numeric", "tabular-nums")
            .set("transition", colors)
            .on("hover", "box-shadow", format!("{}, {}", shadow.financial, shadow.md)),
    );

    components
}
