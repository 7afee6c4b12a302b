//! Aurum Core
//!
//! Color primitives shared by the Aurum theme crates:
//!
//! - **OKLCH colors**: perceptually uniform lightness/chroma/hue with alpha
//! - **Contrast math**: conversion to sRGB, WCAG luminance and contrast ratio
//! - **Shadows**: layered box shadow expressions
//!
//! Every value formats to CSS Color 4 notation and parses back from it.
//!
//! # Example
//!
//! ```rust
//! use aurum_core::{Oklch, Shadow, ShadowLayer};
//!
//! let ink = Oklch::new(0.21, 0.02, 255.0);
//! let paper = Oklch::new(0.985, 0.004, 255.0);
//! assert!(ink.contrast_ratio(paper) > 7.0);
//!
//! let shadow = Shadow::new(ShadowLayer::new(0.0, 1.0, 2.0, 0.0, Oklch::BLACK.with_alpha(0.06)));
//! assert_eq!(shadow.to_css(), "0 1px 2px 0 oklch(0% 0 0 / 0.06)");
//! ```

pub mod color;
pub mod error;
pub mod number;
pub mod shadow;

pub use color::{Oklab, Oklch};
pub use error::ParseError;
pub use number::{format_number, format_px};
pub use shadow::{Shadow, ShadowLayer};
