//! Layout cursor.
//!
//! A [`Cursor`] is the top-left pixel where the next glyph will be drawn.
//! It only lives for the duration of a single layout pass and moves in two
//! fixed step sizes: one glyph cell plus character spacing to the right, or
//! one glyph row plus line spacing down.
//!
//! ```
//! use pxfont::render::Cursor;
//! use pxfont::font::{CHAR_HEIGHT, CHAR_WIDTH};
//!
//! let mut cursor = Cursor::new(10, 10);
//! cursor.advance_char(1);
//! assert_eq!(cursor.x, 10 + CHAR_WIDTH as i32 + 1);
//!
//! cursor.newline(10, 2);
//! assert_eq!(cursor, Cursor::new(10, 10 + CHAR_HEIGHT as i32 + 2));
//! ```

use crate::font::{CHAR_HEIGHT, CHAR_WIDTH};

/// Position of the next glyph's top-left corner.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Cursor {
    /// Horizontal pixel offset.
    pub x: i32,

    /// Vertical pixel offset.
    pub y: i32,
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cursor {{ x: {}, y: {} }}", self.x, self.y)
    }
}

impl Cursor {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves right past one glyph and `char_spacing` extra pixels.
    pub fn advance_char(&mut self, char_spacing: u32) {
        self.x = self.x.saturating_add(step(CHAR_WIDTH, char_spacing));
    }

    /// Returns to `start_x` and moves down one glyph row plus `line_spacing`.
    pub fn newline(&mut self, start_x: i32, line_spacing: u32) {
        self.x = start_x;
        self.y = self.y.saturating_add(step(CHAR_HEIGHT, line_spacing));
    }

    /// Right edge of a glyph drawn at this cursor (exclusive).
    pub fn glyph_right(&self) -> i64 {
        self.x as i64 + CHAR_WIDTH as i64
    }

    /// Bottom edge of a glyph drawn at this cursor (exclusive).
    pub fn glyph_bottom(&self) -> i64 {
        self.y as i64 + CHAR_HEIGHT as i64
    }
}

fn step(cell: usize, spacing: u32) -> i32 {
    i32::try_from(cell as u64 + spacing as u64).unwrap_or(i32::MAX)
}
