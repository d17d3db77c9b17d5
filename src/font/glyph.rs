use super::{CHAR_HEIGHT, CHAR_WIDTH};
use crate::errors::PxFontError;
use std::fmt;

const ON_CELL: u8 = b'X';
const OFF_CELL: u8 = b'.';

/// A fixed 5x7 monochrome bitmap.
///
/// Each row is stored as a 5-bit mask where bit 4 is the leftmost column.
/// Glyphs are plain values: they are built once (usually at compile time)
/// and never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; CHAR_HEIGHT],
}

impl Glyph {
    /// Builds a glyph from its `X`/`.` notation, one string per row.
    ///
    /// Panics when a row is not exactly [`CHAR_WIDTH`] cells wide or contains
    /// anything but `X` and `.`. Used in a `static` initializer, that panic
    /// becomes a compile error.
    pub const fn from_pattern(pattern: [&str; CHAR_HEIGHT]) -> Self {
        let mut rows = [0u8; CHAR_HEIGHT];
        let mut row = 0;
        while row < CHAR_HEIGHT {
            let cells = pattern[row].as_bytes();
            if cells.len() != CHAR_WIDTH {
                panic!("glyph row must be exactly 5 cells wide");
            }
            let mut mask = 0u8;
            let mut col = 0;
            while col < CHAR_WIDTH {
                mask <<= 1;
                match cells[col] {
                    ON_CELL => mask |= 1,
                    OFF_CELL => {}
                    _ => panic!("glyph cells must be 'X' or '.'"),
                }
                col += 1;
            }
            rows[row] = mask;
            row += 1;
        }
        Self { rows }
    }

    /// Runtime counterpart of [`Glyph::from_pattern`] that reports shape
    /// problems instead of panicking.
    pub fn try_from_rows(pattern: &[&str]) -> Result<Self, PxFontError> {
        if pattern.len() != CHAR_HEIGHT {
            return Err(PxFontError::GlyphShape(format!(
                "expected {} rows, found {}",
                CHAR_HEIGHT,
                pattern.len()
            )));
        }

        let mut rows = [0u8; CHAR_HEIGHT];
        for (idx, line) in pattern.iter().enumerate() {
            let cells = line.as_bytes();
            if cells.len() != CHAR_WIDTH {
                return Err(PxFontError::GlyphShape(format!(
                    "row {} has {} columns, expected {}",
                    idx,
                    cells.len(),
                    CHAR_WIDTH
                )));
            }
            for &cell in cells {
                rows[idx] <<= 1;
                match cell {
                    ON_CELL => rows[idx] |= 1,
                    OFF_CELL => {}
                    other => {
                        return Err(PxFontError::GlyphShape(format!(
                            "row {} contains {:?}, expected 'X' or '.'",
                            idx, other as char
                        )))
                    }
                }
            }
        }

        Ok(Self { rows })
    }

    /// Returns true when the cell at `(row, col)` is lit. Cells outside the
    /// 5x7 grid are never lit.
    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        if row >= CHAR_HEIGHT || col >= CHAR_WIDTH {
            return false;
        }
        (self.rows[row] >> (CHAR_WIDTH - 1 - col)) & 1 != 0
    }

    /// Raw row masks, top row first.
    pub fn rows(&self) -> [u8; CHAR_HEIGHT] {
        self.rows
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    /// Number of lit cells.
    pub fn lit_pixels(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Renders the glyph back into its `X`/`.` notation.
    pub fn to_strings(&self) -> Vec<String> {
        (0..CHAR_HEIGHT)
            .map(|row| {
                (0..CHAR_WIDTH)
                    .map(|col| {
                        if self.is_on(row, col) { ON_CELL as char } else { OFF_CELL as char }
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("rows", &self.to_strings())
            .finish()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: [&str; CHAR_HEIGHT] = [
        "XXXXX", "X...X", "X...X", "X...X", "X...X", "X...X", "XXXXX",
    ];

    #[test]
    fn pattern_is_parsed_left_to_right() {
        let g = Glyph::from_pattern([
            "X....", ".X...", "..X..", "...X.", "....X", ".....", "XXXXX",
        ]);
        assert!(g.is_on(0, 0));
        assert!(!g.is_on(0, 1));
        assert!(g.is_on(4, 4));
        assert!(!g.is_on(5, 2));
        assert_eq!(g.rows()[0], 0b10000);
        assert_eq!(g.rows()[6], 0b11111);
    }

    #[test]
    fn cells_outside_grid_are_off() {
        let g = Glyph::from_pattern(["XXXXX"; CHAR_HEIGHT]);
        assert!(g.is_on(6, 4));
        assert!(!g.is_on(7, 0));
        assert!(!g.is_on(0, 5));
    }

    #[test]
    fn runtime_and_const_parsing_agree() {
        let a = Glyph::from_pattern(BOX);
        let b = Glyph::try_from_rows(&BOX).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lit_pixels(), 5 + 5 + 2 * 5);
        assert_eq!(a.to_strings(), BOX.to_vec());
    }

    #[test]
    fn six_column_row_is_rejected() {
        let rows = [".XXX.", "X...X", "X...X", "X...X", "X.X.X", "X..X.", ".XXX.X"];
        let err = Glyph::try_from_rows(&rows).unwrap_err();
        assert!(matches!(err, PxFontError::GlyphShape(_)));
        assert!(err.to_string().contains("row 6 has 6 columns"));
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let err = Glyph::try_from_rows(&["....."; 6]).unwrap_err();
        assert!(err.to_string().contains("expected 7 rows, found 6"));
    }

    #[test]
    fn unknown_cell_marker_is_rejected() {
        let mut rows = BOX;
        rows[3] = "X.o.X";
        assert!(Glyph::try_from_rows(&rows).is_err());
    }

    #[test]
    fn blank_glyph() {
        let g = Glyph::from_pattern(["....."; CHAR_HEIGHT]);
        assert!(g.is_blank());
        assert_eq!(g.lit_pixels(), 0);
        assert_eq!(format!("{}", g).lines().count(), CHAR_HEIGHT);
    }
}
