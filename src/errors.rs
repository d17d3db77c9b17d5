use crate::config::RenderConfigError;

#[derive(Debug, thiserror::Error)]
pub enum PxFontError {
    #[error("Glyph shape error: {0}")]
    GlyphShape(String),

    #[error("Glyph table has no space glyph to fall back on")]
    MissingFallback,

    #[error("Glyph {0:?} is defined more than once")]
    DuplicateGlyph(char),

    #[error("Invalid render config: {0}")]
    InvalidConfig(#[from] RenderConfigError),

    #[error("Cannot parse render config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Cannot export an empty raster ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },

    #[error("PNG encoding error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
