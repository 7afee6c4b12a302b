//! Aurum Theme System
//!
//! Semantic color tokens, CSS variables and a persisted light/dark mode for
//! the Aurum financial dashboard.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: surface, text, border, financial and shadow groups
//!   with a fixed shape shared by both modes
//! - **CSS variables**: one `--<group>-<key>` name per token, stable across
//!   modes
//! - **Theme construction**: palette, typography, spacing and component
//!   overrides for a component framework
//! - **Mode persistence**: the preference survives restarts
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aurum_theme::{FileStorage, ThemeContext, ThemeMode, ThemeSettings};
//!
//! # fn main() -> Result<(), aurum_theme::ThemeError> {
//! // Initialize at app startup
//! let settings = ThemeSettings::from_file("aurum.toml")?;
//! ThemeContext::init(FileStorage::new("prefs.toml"), settings)?;
//!
//! // Read anywhere
//! let theme = ThemeContext::get();
//! let page = theme.variables()["--surface-page"].clone();
//!
//! // React to switches
//! theme.subscribe(|snapshot| println!("now {}", snapshot.mode));
//! theme.set_mode(ThemeMode::Light)?;
//! # let _ = page;
//! # Ok(())
//! # }
//! ```
//!
//! # Tokens
//!
//! - [`get_tokens`]: the built-in token set of a mode
//! - [`TokenTable`]: a validated light/dark pair, built in, loaded from TOML
//!   or derived from a [`TokenSeed`]
//! - [`project`]: flattens a token set into CSS variables
//!
//! The built-in tables are [`AurumTheme`].

pub mod builder;
pub mod error;
pub mod mode;
pub mod settings;
pub mod state;
pub mod storage;
pub mod store;
pub mod themes;
pub mod tokens;
pub mod variables;

// Re-export commonly used types
pub use builder::{build_theme, build_theme_from_tokens, responsive_font_sizes, ThemeConfig};
pub use error::{SchemaError, StorageError, ThemeError};
pub use mode::ThemeMode;
pub use settings::ThemeSettings;
pub use state::{
    root_attribute, root_mode, set_root_marker_callback, ListenerId, ThemeContext, ThemeSnapshot,
};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{ModeChange, ModeStore};
pub use themes::AurumTheme;
pub use tokens::*;
pub use variables::{
    mode_selector, project, stylesheet, to_css_block, variable_name, CssVariables, MODE_ATTRIBUTE,
};
