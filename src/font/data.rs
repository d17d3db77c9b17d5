//! Built-in 5x7 glyph data.
//!
//! Rows are authored top to bottom with `X` for a lit pixel and `.` for an
//! unlit one. [`Glyph::from_pattern`] is evaluated at compile time, so a row
//! of the wrong width breaks the build instead of rendering garbage.

use super::glyph::Glyph;

/// Every character the built-in font can draw, in code point order.
pub(crate) static BUILTIN_GLYPHS: &[(char, Glyph)] = &[
    (' ', Glyph::from_pattern([
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('!', Glyph::from_pattern([
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        ".....",
        "..X..",
        ".....",
    ])),
    ('"', Glyph::from_pattern([
        "X.X..",
        "X.X..",
        "X.X..",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('(', Glyph::from_pattern([
        "..X..",
        ".X...",
        ".X...",
        ".X...",
        ".X...",
        ".X...",
        "..X..",
    ])),
    (')', Glyph::from_pattern([
        "..X..",
        "...X.",
        "...X.",
        "...X.",
        "...X.",
        "...X.",
        "..X..",
    ])),
    ('*', Glyph::from_pattern([
        "X.X.X",
        ".X.X.",
        "X.X.X",
        ".X.X.",
        "X.X.X",
        ".....",
        ".....",
    ])),
    ('+', Glyph::from_pattern([
        ".....",
        "..X..",
        "..X..",
        "XXXXX",
        "..X..",
        "..X..",
        ".....",
    ])),
    (',', Glyph::from_pattern([
        ".....",
        ".....",
        ".....",
        ".....",
        "..X..",
        "..X..",
        ".X...",
    ])),
    ('-', Glyph::from_pattern([
        ".....",
        ".....",
        "XXXXX",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('.', Glyph::from_pattern([
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
        "..X..",
        ".....",
    ])),
    ('/', Glyph::from_pattern([
        "....X",
        "...X.",
        "..X..",
        ".X...",
        "X....",
        ".....",
        ".....",
    ])),
    ('0', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('1', Glyph::from_pattern([
        "..X..",
        ".XX..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "XXXXX",
    ])),
    ('2', Glyph::from_pattern([
        "XXXX.",
        "....X",
        "XXXX.",
        "X....",
        "X....",
        "X....",
        "XXXXX",
    ])),
    ('3', Glyph::from_pattern([
        "XXXX.",
        "....X",
        "....X",
        "XXXX.",
        "....X",
        "....X",
        "XXXX.",
    ])),
    ('4', Glyph::from_pattern([
        "X....",
        "X....",
        "X.X..",
        "X.X..",
        "XXXXX",
        "....X",
        "....X",
    ])),
    ('5', Glyph::from_pattern([
        "XXXXX",
        "X....",
        "X....",
        "XXXX.",
        "....X",
        "....X",
        "XXXX.",
    ])),
    ('6', Glyph::from_pattern([
        ".XXXX",
        "X....",
        "X....",
        "XXXX.",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('7', Glyph::from_pattern([
        "XXXXX",
        "....X",
        "....X",
        "...X.",
        "..X..",
        "..X..",
        ".X...",
    ])),
    ('8', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        ".XXX.",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('9', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X...X",
        ".XXXX",
        "....X",
        "....X",
        ".XXXX",
    ])),
    (':', Glyph::from_pattern([
        ".....",
        "..X..",
        ".....",
        ".....",
        "..X..",
        ".....",
        ".....",
    ])),
    (';', Glyph::from_pattern([
        ".....",
        "..X..",
        ".....",
        ".....",
        "..X..",
        "..X..",
        ".X...",
    ])),
    ('<', Glyph::from_pattern([
        "....X",
        "...X.",
        "..X..",
        ".X...",
        "..X..",
        "...X.",
        "....X",
    ])),
    ('=', Glyph::from_pattern([
        ".....",
        "XXXXX",
        ".....",
        "XXXXX",
        ".....",
        ".....",
        ".....",
    ])),
    ('>', Glyph::from_pattern([
        "X....",
        ".X...",
        "..X..",
        "...X.",
        "..X..",
        ".X...",
        "X....",
    ])),
    ('?', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "....X",
        "...X.",
        "..X..",
        ".....",
        "..X..",
    ])),
    ('@', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X.XXX",
        "X.X.X",
        "X.XXX",
        "X....",
        ".XXX.",
    ])),
    ('A', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X.X.X",
        "XXXXX",
        "X...X",
        "X...X",
        "X...X",
    ])),
    ('B', Glyph::from_pattern([
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
    ])),
    ('C', Glyph::from_pattern([
        ".XXXX",
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        ".XXXX",
    ])),
    ('D', Glyph::from_pattern([
        "XXXX.",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "XXXX.",
    ])),
    ('E', Glyph::from_pattern([
        "XXXXX",
        "X....",
        "X....",
        "XXXX.",
        "X....",
        "X....",
        "XXXXX",
    ])),
    ('F', Glyph::from_pattern([
        "XXXXX",
        "X....",
        "X....",
        "XXXX.",
        "X....",
        "X....",
        "X....",
    ])),
    ('G', Glyph::from_pattern([
        ".XXXX",
        "X....",
        "X....",
        "X.XXX",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('H', Glyph::from_pattern([
        "X...X",
        "X...X",
        "X...X",
        "XXXXX",
        "X...X",
        "X...X",
        "X...X",
    ])),
    ('I', Glyph::from_pattern([
        "XXXXX",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "XXXXX",
    ])),
    ('J', Glyph::from_pattern([
        "XXXXX",
        "...X.",
        "...X.",
        "...X.",
        "X..X.",
        "X..X.",
        ".XX..",
    ])),
    ('K', Glyph::from_pattern([
        "X...X",
        "X..X.",
        "X.X..",
        "XX...",
        "X.X..",
        "X..X.",
        "X...X",
    ])),
    ('L', Glyph::from_pattern([
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        "XXXXX",
    ])),
    ('M', Glyph::from_pattern([
        "X...X",
        "XX.XX",
        "X.X.X",
        "X.X.X",
        "X...X",
        "X...X",
        "X...X",
    ])),
    ('N', Glyph::from_pattern([
        "X...X",
        "XX..X",
        "X.X.X",
        "X.X.X",
        "X..XX",
        "X...X",
        "X...X",
    ])),
    ('O', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('P', Glyph::from_pattern([
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
        "X....",
        "X....",
        "X....",
    ])),
    ('Q', Glyph::from_pattern([
        ".XXX.",
        "X...X",
        "X...X",
        "X...X",
        "X.X.X",
        "X..X.",
        ".XX.X",
    ])),
    ('R', Glyph::from_pattern([
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
        "X..X.",
        "X...X",
        "X...X",
    ])),
    ('S', Glyph::from_pattern([
        ".XXXX",
        "X....",
        "X....",
        ".XXX.",
        "....X",
        "....X",
        "XXXX.",
    ])),
    ('T', Glyph::from_pattern([
        "XXXXX",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
    ])),
    ('U', Glyph::from_pattern([
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('V', Glyph::from_pattern([
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".X.X.",
        ".X.X.",
        "..X..",
    ])),
    ('W', Glyph::from_pattern([
        "X...X",
        "X...X",
        "X.X.X",
        "X.X.X",
        "X.X.X",
        "XX.XX",
        "X...X",
    ])),
    ('X', Glyph::from_pattern([
        "X...X",
        ".X.X.",
        "..X..",
        ".X.X.",
        "X...X",
        "X...X",
        "X...X",
    ])),
    ('Y', Glyph::from_pattern([
        "X...X",
        ".X.X.",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
    ])),
    ('Z', Glyph::from_pattern([
        "XXXXX",
        "....X",
        "...X.",
        "..X..",
        ".X...",
        "X....",
        "XXXXX",
    ])),
    ('[', Glyph::from_pattern([
        "XXX..",
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        "XXX..",
    ])),
    ('\\', Glyph::from_pattern([
        "X....",
        ".X...",
        "..X..",
        "...X.",
        "....X",
        ".....",
        ".....",
    ])),
    (']', Glyph::from_pattern([
        "..XXX",
        "....X",
        "....X",
        "....X",
        "....X",
        "....X",
        "..XXX",
    ])),
    ('^', Glyph::from_pattern([
        "..X..",
        ".X.X.",
        "X...X",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('_', Glyph::from_pattern([
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
        "XXXXX",
    ])),
    ('`', Glyph::from_pattern([
        "X....",
        ".X...",
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('a', Glyph::from_pattern([
        ".....",
        ".XXX.",
        "X...X",
        ".XXXX",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('b', Glyph::from_pattern([
        "X....",
        "X....",
        "X....",
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
    ])),
    ('c', Glyph::from_pattern([
        ".....",
        ".XXX.",
        "X....",
        "X....",
        "X....",
        "X....",
        ".XXX.",
    ])),
    ('d', Glyph::from_pattern([
        "....X",
        "....X",
        "....X",
        ".XXXX",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('e', Glyph::from_pattern([
        ".....",
        ".XXX.",
        "X...X",
        "XXXX.",
        "X....",
        "X....",
        ".XXX.",
    ])),
    ('f', Glyph::from_pattern([
        "..XX.",
        ".X...",
        ".X...",
        "XXX..",
        ".X...",
        ".X...",
        ".X...",
    ])),
    ('g', Glyph::from_pattern([
        ".....",
        ".XXX.",
        "X...X",
        "X...X",
        ".XXXX",
        "....X",
        ".XX..",
    ])),
    ('h', Glyph::from_pattern([
        "X....",
        "X....",
        "X....",
        "X.X..",
        "X.X.X",
        "X...X",
        "X...X",
    ])),
    ('i', Glyph::from_pattern([
        "..X..",
        ".....",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "XXXXX",
    ])),
    ('j', Glyph::from_pattern([
        "...X.",
        ".....",
        "...X.",
        "...X.",
        "X..X.",
        "X..X.",
        ".XX..",
    ])),
    ('k', Glyph::from_pattern([
        "X....",
        "X....",
        "X.X..",
        "X.X..",
        "X..X.",
        "X...X",
        "X...X",
    ])),
    ('l', Glyph::from_pattern([
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        "X....",
        "XXXXX",
    ])),
    ('m', Glyph::from_pattern([
        ".....",
        "X.X.X",
        "XX.XX",
        "X.X.X",
        "X...X",
        "X...X",
        "X...X",
    ])),
    ('n', Glyph::from_pattern([
        ".....",
        "X....",
        "X....",
        "X.X..",
        "X.X.X",
        "X...X",
        "X...X",
    ])),
    ('o', Glyph::from_pattern([
        ".....",
        ".XXX.",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('p', Glyph::from_pattern([
        ".....",
        "XXXX.",
        "X...X",
        "X...X",
        "XXXX.",
        "X....",
        "X....",
    ])),
    ('q', Glyph::from_pattern([
        ".....",
        ".XXXX",
        "X...X",
        "X...X",
        ".XXXX",
        "....X",
        "....X",
    ])),
    ('r', Glyph::from_pattern([
        ".....",
        "X....",
        "X....",
        "X.X..",
        "X.X.X",
        "X....",
        "X....",
    ])),
    ('s', Glyph::from_pattern([
        ".....",
        ".XXXX",
        "X....",
        ".XXX.",
        "....X",
        "....X",
        "XXXX.",
    ])),
    ('t', Glyph::from_pattern([
        ".X...",
        ".X...",
        "XXXXX",
        ".X...",
        ".X...",
        ".X...",
        ".XX..",
    ])),
    ('u', Glyph::from_pattern([
        ".....",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
    ('v', Glyph::from_pattern([
        ".....",
        "X...X",
        "X...X",
        "X...X",
        "X...X",
        ".X.X.",
        "..X..",
    ])),
    ('w', Glyph::from_pattern([
        ".....",
        "X...X",
        "X...X",
        "X.X.X",
        "X.X.X",
        "XX.XX",
        "X...X",
    ])),
    ('x', Glyph::from_pattern([
        ".....",
        "X...X",
        ".X.X.",
        "..X..",
        ".X.X.",
        "X...X",
        ".....",
    ])),
    ('y', Glyph::from_pattern([
        ".....",
        "X...X",
        "X...X",
        ".X.X.",
        "..X..",
        "..X..",
        ".XX..",
    ])),
    ('z', Glyph::from_pattern([
        ".....",
        "XXXXX",
        "....X",
        "...X.",
        "..X..",
        ".X...",
        "XXXXX",
    ])),
    ('{', Glyph::from_pattern([
        "..X..",
        ".X...",
        ".X...",
        "X....",
        ".X...",
        ".X...",
        "..X..",
    ])),
    ('|', Glyph::from_pattern([
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
        "..X..",
    ])),
    ('}', Glyph::from_pattern([
        "..X..",
        "...X.",
        "...X.",
        "....X",
        "...X.",
        "...X.",
        "..X..",
    ])),
    ('~', Glyph::from_pattern([
        ".....",
        "X.X.X",
        ".X.X.",
        ".....",
        ".....",
        ".....",
        ".....",
    ])),
    ('æ', Glyph::from_pattern([  // U+00E6 latin small letter ae
        ".XXX.",
        "X...X",
        "X.X.X",
        "XXXXX",
        "X...X",
        "X...X",
        ".XXX.",
    ])),
];
