//! Render configuration.
//!
//! `RenderConfig` carries the optional parameters of a text layout pass:
//! where the text starts, how far apart glyphs and lines are, and which
//! colors lit and unlit glyph cells get. [`Default`] gives black text on
//! white starting at the origin with one pixel of spacing, and
//! [`RenderConfig::builder()`] customizes it with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use pxfont::config::RenderConfig;
//! let cfg = RenderConfig::default();
//! assert_eq!(cfg.char_spacing, 1);
//! assert_eq!(cfg.line_spacing, 1);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use pxfont::config::RenderConfig;
//! use pxfont::render::Color;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = RenderConfig::builder()
//!     .start(10, 10)
//!     .line_spacing(2)
//!     .on_color(Color::from_hex(0x00FF00))
//!     .off_color(Color::BLACK)
//!     .build()?; // returns Result<RenderConfig, RenderConfigError>
//! assert_eq!(cfg.start_y, 10);
//! # Ok(()) }
//! ```
//!
//! ## Load from JSON
//! Missing fields keep their defaults.
//! ```rust
//! use pxfont::config::RenderConfig;
//! let cfg = RenderConfig::from_json_str(r#"{ "start_x": 4, "char_spacing": 0 }"#).unwrap();
//! assert_eq!(cfg.start_x, 4);
//! assert_eq!(cfg.line_spacing, 1);
//! ```
//!
//! # Errors
//!
//! Validation returns [`RenderConfigError`] when a spacing value exceeds
//! [`MAX_SPACING`].

use crate::errors::PxFontError;
use crate::render::{Color, DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted character or line spacing in pixels.
pub const MAX_SPACING: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Left edge of every line, and where soft-wrapped lines restart.
    pub start_x: i32,
    /// Top edge of the first line.
    pub start_y: i32,
    /// Extra pixels between neighbouring glyphs.
    pub char_spacing: u32,
    /// Extra pixels between lines.
    pub line_spacing: u32,
    pub on_color: Color,
    pub off_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            char_spacing: 1,
            line_spacing: 1,
            on_color: DEFAULT_ON_COLOR,
            off_color: DEFAULT_OFF_COLOR,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, PxFontError> {
        let cfg: RenderConfig = serde_json::from_str(json)?;
        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), RenderConfigError> {
        validate(self)
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    inner: RenderConfig,
}

impl RenderConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut RenderConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn start(self, x: i32, y: i32) -> Self { self.map(|c| { c.start_x = x; c.start_y = y; }) }
    pub fn start_x(self, x: i32) -> Self { self.map(|c| c.start_x = x) }
    pub fn start_y(self, y: i32) -> Self { self.map(|c| c.start_y = y) }
    pub fn char_spacing(self, px: u32) -> Self { self.map(|c| c.char_spacing = px) }
    pub fn line_spacing(self, px: u32) -> Self { self.map(|c| c.line_spacing = px) }
    pub fn on_color(self, color: impl Into<Color>) -> Self {
        self.map(|c| c.on_color = color.into())
    }
    pub fn off_color(self, color: impl Into<Color>) -> Self {
        self.map(|c| c.off_color = color.into())
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut RenderConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<RenderConfig, RenderConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderConfigError {
    CharSpacingTooLarge(u32),
    LineSpacingTooLarge(u32),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderConfigError::CharSpacingTooLarge(px) =>
                write!(f, "char_spacing {px} is out of range (expected 0..={MAX_SPACING})"),
            RenderConfigError::LineSpacingTooLarge(px) =>
                write!(f, "line_spacing {px} is out of range (expected 0..={MAX_SPACING})"),
        }
    }
}
impl std::error::Error for RenderConfigError {}

fn validate(c: &RenderConfig) -> Result<(), RenderConfigError> {
    if c.char_spacing > MAX_SPACING {
        return Err(RenderConfigError::CharSpacingTooLarge(c.char_spacing));
    }
    if c.line_spacing > MAX_SPACING {
        return Err(RenderConfigError::LineSpacingTooLarge(c.line_spacing));
    }
    Ok(())
}
