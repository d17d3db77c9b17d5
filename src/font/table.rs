use super::data::BUILTIN_GLYPHS;
use super::glyph::Glyph;
use crate::errors::PxFontError;
use std::collections::HashMap;

/// Character used whenever a lookup misses.
pub const FALLBACK_CHAR: char = ' ';

lazy_static::lazy_static! {
    static ref BUILTIN_TABLE: GlyphTable = {
        match GlyphTable::from_entries(BUILTIN_GLYPHS.iter().copied()) {
            Ok(table) => {
                log::debug!("built-in glyph table ready with {} glyphs", table.len());
                table
            }
            Err(e) => panic!("built-in glyph table is malformed: {}", e),
        }
    };
}

/// Read-only mapping from character to glyph.
///
/// Lookups match code points exactly. There is no case folding, so a table
/// without lowercase letters draws them as blanks.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN_TABLE
    }

    /// Builds a table, rejecting duplicate characters and tables without a
    /// space glyph.
    pub fn from_entries<I>(entries: I) -> Result<Self, PxFontError>
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        let mut glyphs = HashMap::new();
        for (ch, glyph) in entries {
            if glyphs.insert(ch, glyph).is_some() {
                return Err(PxFontError::DuplicateGlyph(ch));
            }
        }

        let fallback = *glyphs.get(&FALLBACK_CHAR).ok_or(PxFontError::MissingFallback)?;
        Ok(Self { glyphs, fallback })
    }

    /// Returns the glyph for `ch`, or the space glyph when `ch` is unknown.
    pub fn lookup(&self, ch: char) -> &Glyph {
        self.glyphs.get(&ch).unwrap_or(&self.fallback)
    }

    /// Exact lookup without the fallback.
    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// All characters in the table, in code point order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}
