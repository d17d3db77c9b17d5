use crate::font::{lookup_glyph, Glyph, CHAR_HEIGHT, CHAR_WIDTH};
use crate::render::color::{Color, DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};
use crate::render::raster::{RasterBuffer, RasterSize};

/// Draws `glyph` with its top-left corner at `(x, y)`.
///
/// Both lit and unlit cells are written, so the glyph's full 5x7 cell
/// replaces whatever was underneath. Each pixel is clipped on its own:
/// the parts of the glyph that fall inside the raster are drawn, the rest
/// are skipped, and `set_pixel` is never called out of range. Returns the
/// number of pixels written.
pub fn blit_glyph<R>(
    raster: &mut R,
    glyph: &Glyph,
    x: i32,
    y: i32,
    on: Color,
    off: Color,
) -> usize
where
    R: RasterBuffer + ?Sized,
{
    let bounds = RasterSize::new(raster.width(), raster.height());
    let mut written = 0;
    for row in 0..CHAR_HEIGHT {
        let py = y as i64 + row as i64;
        for col in 0..CHAR_WIDTH {
            let px = x as i64 + col as i64;
            if !bounds.contains(px, py) {
                continue;
            }
            let color = if glyph.is_on(row, col) { on } else { off };
            raster.set_pixel(px as u32, py as u32, color);
            written += 1;
        }
    }
    written
}

/// Looks up `ch` in the built-in font and draws it at `(x, y)`.
///
/// `None` colors mean black on white.
pub fn blit_character<R>(
    raster: &mut R,
    ch: char,
    x: i32,
    y: i32,
    on: Option<Color>,
    off: Option<Color>,
) -> usize
where
    R: RasterBuffer + ?Sized,
{
    blit_glyph(
        raster,
        lookup_glyph(ch),
        x,
        y,
        on.unwrap_or(DEFAULT_ON_COLOR),
        off.unwrap_or(DEFAULT_OFF_COLOR),
    )
}
