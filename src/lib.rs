//! Fixed-width 5x7 bitmap text for pixel rasters.
//!
//! `pxfont` maps characters to 5x7 monochrome glyphs and blits them into a
//! caller-owned raster, wrapping lines that run off the right edge and
//! stopping cleanly once the bottom edge is reached.

pub mod config;
pub mod errors;
pub mod export;
pub mod font;
pub mod render;

pub use config::{RenderConfig, RenderConfigError};
pub use errors::PxFontError;
pub use font::{lookup_glyph, Glyph, GlyphTable, CHAR_HEIGHT, CHAR_WIDTH};
pub use render::{
    blit_character, render_text, write_text, Color, Framebuffer, RasterBuffer, RenderOutcome,
};
