//! Drawing text into rasters.
//!
//! ```
//! use pxfont::config::RenderConfig;
//! use pxfont::render::{render_text, Color, Framebuffer};
//!
//! let mut fb = Framebuffer::new(64, 16, Color::WHITE);
//! let outcome = render_text(&mut fb, "Hi!", &RenderConfig::default());
//! assert_eq!(outcome.glyphs_drawn, 3);
//! assert!(!outcome.truncated);
//! ```

mod blit;
mod color;
mod cursor;
mod layout;
mod raster;

pub use blit::{blit_character, blit_glyph};
pub use color::{Color, DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};
pub use cursor::Cursor;
pub use layout::{measure_text, render_text, write_text, RenderOutcome};
pub use raster::{Framebuffer, RasterBuffer, RasterSize};
