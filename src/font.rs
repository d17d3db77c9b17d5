//! The built-in 5x7 bitmap font.
//!
//! Every glyph is [`CHAR_WIDTH`] columns by [`CHAR_HEIGHT`] rows. The table
//! covers printable ASCII (minus a handful of symbols) and `æ`; anything else
//! is drawn as a space.
//!
//! ```
//! use pxfont::font::{lookup_glyph, CHAR_WIDTH};
//!
//! let a = lookup_glyph('A');
//! assert!(a.is_on(0, CHAR_WIDTH / 2));
//! assert_eq!(lookup_glyph('#'), lookup_glyph(' '));
//! ```

mod data;
mod glyph;
mod table;

pub use glyph::Glyph;
pub use table::{GlyphTable, FALLBACK_CHAR};

/// Width of every glyph in pixels.
pub const CHAR_WIDTH: usize = 5;
/// Height of every glyph in pixels.
pub const CHAR_HEIGHT: usize = 7;

/// Looks up `ch` in the built-in table, falling back to the space glyph.
pub fn lookup_glyph(ch: char) -> &'static Glyph {
    GlyphTable::builtin().lookup(ch)
}
