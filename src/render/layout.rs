use crate::config::RenderConfig;
use crate::font::{lookup_glyph, CHAR_HEIGHT, CHAR_WIDTH};
use crate::render::blit::blit_glyph;
use crate::render::cursor::Cursor;
use crate::render::raster::{RasterBuffer, RasterSize};

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Where the next glyph would have gone.
    pub cursor: Cursor,
    /// Number of glyphs handed to the blitter.
    pub glyphs_drawn: usize,
    /// True when the text ran out of vertical space and the rest was dropped.
    pub truncated: bool,
}

/// Lays `text` out onto `raster`.
///
/// Lines are broken on `'\n'` only. A glyph that would cross the right edge
/// is moved to a new line starting at `config.start_x`. Once a glyph (or the
/// next explicit line) would cross the bottom edge, rendering stops; the
/// pixels already written stay and the outcome reports `truncated`.
///
/// An empty `text` writes nothing and leaves the cursor at the start.
pub fn render_text<R>(raster: &mut R, text: &str, config: &RenderConfig) -> RenderOutcome
where
    R: RasterBuffer + ?Sized,
{
    let mut outcome = RenderOutcome {
        cursor: Cursor::new(config.start_x, config.start_y),
        glyphs_drawn: 0,
        truncated: false,
    };
    if text.is_empty() {
        return outcome;
    }

    let width = raster.width() as i64;
    let height = raster.height() as i64;
    let cursor = &mut outcome.cursor;

    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        for ch in line.chars() {
            if cursor.glyph_right() > width {
                log::trace!("soft wrap before {:?} at {:?}", ch, cursor);
                cursor.newline(config.start_x, config.line_spacing);
            }
            if cursor.glyph_bottom() > height {
                log::warn!("text exceeds framebuffer height, truncating output");
                outcome.truncated = true;
                return outcome;
            }

            blit_glyph(
                raster,
                lookup_glyph(ch),
                cursor.x,
                cursor.y,
                config.on_color,
                config.off_color,
            );
            outcome.glyphs_drawn += 1;
            cursor.advance_char(config.char_spacing);
        }

        cursor.newline(config.start_x, config.line_spacing);
        if lines.peek().is_some() && cursor.glyph_bottom() > height {
            log::warn!("text exceeds framebuffer height, truncating output");
            outcome.truncated = true;
            return outcome;
        }
    }

    outcome
}

/// Positional form of [`render_text`] with the default black-on-white colors.
pub fn write_text<R>(
    raster: &mut R,
    text: &str,
    start_x: i32,
    start_y: i32,
    char_spacing: u32,
    line_spacing: u32,
) -> RenderOutcome
where
    R: RasterBuffer + ?Sized,
{
    let config = RenderConfig {
        start_x,
        start_y,
        char_spacing,
        line_spacing,
        ..RenderConfig::default()
    };
    render_text(raster, text, &config)
}

/// Size of the block `text` occupies when no soft wrap happens.
///
/// The start offset is not included. Trailing spacing after the last glyph
/// of a line, and after the last line, is not counted either.
pub fn measure_text(text: &str, config: &RenderConfig) -> RasterSize {
    if text.is_empty() {
        return RasterSize::default();
    }

    let mut lines = 0u64;
    let mut widest = 0u64;
    for line in text.split('\n') {
        lines += 1;
        widest = widest.max(line.chars().count() as u64);
    }

    RasterSize::new(
        span(widest, CHAR_WIDTH, config.char_spacing),
        span(lines, CHAR_HEIGHT, config.line_spacing),
    )
}

fn span(count: u64, cell: usize, spacing: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let total = count * cell as u64 + (count - 1) * spacing as u64;
    u32::try_from(total).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Color;
    use crate::render::raster::Framebuffer;

    const W: i32 = CHAR_WIDTH as i32;
    const H: i32 = CHAR_HEIGHT as i32;

    fn cfg(start_x: i32, start_y: i32, char_spacing: u32, line_spacing: u32) -> RenderConfig {
        RenderConfig::builder()
            .start(start_x, start_y)
            .char_spacing(char_spacing)
            .line_spacing(line_spacing)
            .build()
            .unwrap()
    }

    /// Checks the 5x7 cell at `(x, y)` holds `ch`, black on white.
    fn assert_glyph_at(fb: &Framebuffer, ch: char, x: i32, y: i32) {
        let glyph = lookup_glyph(ch);
        for row in 0..CHAR_HEIGHT {
            for col in 0..CHAR_WIDTH {
                let expected = if glyph.is_on(row, col) { Color::BLACK } else { Color::WHITE };
                let px = (x + col as i32) as u32;
                let py = (y + row as i32) as u32;
                assert_eq!(
                    fb.get_pixel(px, py),
                    Some(expected),
                    "{ch:?} at ({x}, {y}) cell ({col}, {row})"
                );
            }
        }
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let mut fb = Framebuffer::new(20, 20, Color::GRAY);
        let before = fb.clone();
        let outcome = render_text(&mut fb, "", &cfg(3, 4, 1, 1));
        assert_eq!(fb, before);
        assert_eq!(outcome.cursor, Cursor::new(3, 4));
        assert_eq!(outcome.glyphs_drawn, 0);
        assert!(!outcome.truncated);
    }

    #[test]
    fn second_char_advances_by_width_plus_spacing() {
        let mut fb = Framebuffer::new(40, 20, Color::GRAY);
        let outcome = render_text(&mut fb, "AB", &cfg(2, 3, 1, 1));
        assert_glyph_at(&fb, 'A', 2, 3);
        assert_glyph_at(&fb, 'B', 2 + W + 1, 3);
        // the spacing column between them is untouched
        assert_eq!(fb.get_pixel((2 + W) as u32, 3), Some(Color::GRAY));
        assert_eq!(outcome.glyphs_drawn, 2);
        assert!(!outcome.truncated);
    }

    #[test]
    fn newline_moves_to_next_row() {
        let mut fb = Framebuffer::new(40, 40, Color::GRAY);
        let outcome = render_text(&mut fb, "A\nB", &cfg(2, 3, 1, 2));
        assert_glyph_at(&fb, 'A', 2, 3);
        assert_glyph_at(&fb, 'B', 2, 3 + H + 2);
        assert_eq!(outcome.cursor, Cursor::new(2, 3 + 2 * (H + 2)));
    }

    #[test]
    fn soft_wrap_when_next_char_does_not_fit() {
        let start_x = 2;
        let mut fb = Framebuffer::new((start_x + W + 2) as u32, 40, Color::GRAY);
        let outcome = render_text(&mut fb, "AB", &cfg(start_x, 1, 1, 3));
        assert_glyph_at(&fb, 'A', start_x, 1);
        assert_glyph_at(&fb, 'B', start_x, 1 + H + 3);
        assert!(!outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 2);
    }

    #[test]
    fn soft_wrap_and_newline_use_the_same_step() {
        let mut wrapped = Framebuffer::new((W + 1) as u32, 40, Color::GRAY);
        let mut explicit = Framebuffer::new((W + 1) as u32, 40, Color::GRAY);
        let a = render_text(&mut wrapped, "AB", &cfg(0, 0, 1, 2));
        let b = render_text(&mut explicit, "A\nB", &cfg(0, 0, 1, 2));
        assert_eq!(wrapped, explicit);
        assert_eq!(a.glyphs_drawn, b.glyphs_drawn);
    }

    #[test]
    fn truncates_when_only_one_line_fits() {
        let start_y = 4;
        let mut fb = Framebuffer::new(30, (start_y + H) as u32, Color::GRAY);
        let outcome = render_text(&mut fb, "A\nB", &cfg(1, start_y, 1, 1));
        assert_glyph_at(&fb, 'A', 1, start_y);
        assert!(outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 1);
        // nothing but A's cell was touched
        assert_eq!(fb.count_pixels(Color::GRAY), 30 * (start_y + H) as usize - 35);
    }

    #[test]
    fn truncates_after_soft_wrap_overflow() {
        let mut fb = Framebuffer::new((W + 1) as u32, H as u32, Color::GRAY);
        let outcome = render_text(&mut fb, "ABC", &cfg(0, 0, 1, 1));
        assert!(outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 1);
        assert_glyph_at(&fb, 'A', 0, 0);
    }

    #[test]
    fn first_line_below_raster_draws_nothing() {
        let mut fb = Framebuffer::new(30, 10, Color::GRAY);
        let before = fb.clone();
        let outcome = render_text(&mut fb, "Hi", &cfg(0, 5, 1, 1));
        assert!(outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 0);
        assert_eq!(fb, before);
    }

    #[test]
    fn last_line_may_end_past_the_bottom() {
        // the trailing newline advance of the final line is not a truncation
        let mut fb = Framebuffer::new(30, H as u32, Color::GRAY);
        let outcome = render_text(&mut fb, "OK", &cfg(0, 0, 1, 1));
        assert!(!outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 2);
    }

    #[test]
    fn blank_lines_still_advance() {
        let mut fb = Framebuffer::new(30, 60, Color::GRAY);
        let outcome = render_text(&mut fb, "\n\nA", &cfg(0, 0, 1, 1));
        assert_glyph_at(&fb, 'A', 0, 2 * (H + 1));
        assert_eq!(outcome.glyphs_drawn, 1);

        let mut fb = Framebuffer::new(30, 60, Color::GRAY);
        let before = fb.clone();
        let outcome = render_text(&mut fb, "\n", &cfg(0, 0, 1, 1));
        assert_eq!(fb, before);
        assert_eq!(outcome.cursor, Cursor::new(0, 2 * (H + 1)));
    }

    #[test]
    fn repeated_lines_are_handled_by_position() {
        // three identical lines, room for two: the third one must be dropped
        let height = (2 * H + 1) as u32;
        let mut fb = Framebuffer::new(30, height, Color::GRAY);
        let outcome = render_text(&mut fb, "X\nX\nX", &cfg(0, 0, 1, 1));
        assert!(outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 2);
    }

    #[test]
    fn write_text_uses_default_colors() {
        let mut fb = Framebuffer::new(30, 30, Color::GRAY);
        let outcome = write_text(&mut fb, "AB", 0, 0, 1, 1);
        assert_glyph_at(&fb, 'A', 0, 0);
        assert_glyph_at(&fb, 'B', W + 1, 0);
        assert_eq!(outcome.cursor, Cursor::new(0, H + 1));
    }

    #[test]
    fn custom_colors_flow_through() {
        let mut fb = Framebuffer::new(5, 7, Color::GRAY);
        let config = RenderConfig::builder()
            .on_color(Color::RED)
            .off_color(Color::BLUE)
            .build()
            .unwrap();
        render_text(&mut fb, "T", &config);
        let lit = lookup_glyph('T').lit_pixels();
        assert_eq!(fb.count_pixels(Color::RED), lit);
        assert_eq!(fb.count_pixels(Color::BLUE), 35 - lit);
    }

    #[test]
    fn negative_start_is_clipped_not_rejected() {
        let mut fb = Framebuffer::new(10, 10, Color::GRAY);
        let outcome = render_text(&mut fb, "A", &cfg(-2, -3, 1, 1));
        assert_eq!(outcome.glyphs_drawn, 1);
        assert_eq!(fb.count_pixels(Color::GRAY), 100 - 3 * 4);
    }

    #[test]
    fn zero_sized_raster_truncates_immediately() {
        let mut fb = Framebuffer::new(0, 0, Color::GRAY);
        let outcome = render_text(&mut fb, "A", &RenderConfig::default());
        assert!(outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, 0);
    }

    #[test]
    fn measure() {
        let config = cfg(50, 50, 1, 2);
        assert_eq!(measure_text("", &config), RasterSize::new(0, 0));
        assert_eq!(measure_text("A", &config), RasterSize::new(5, 7));
        assert_eq!(measure_text("AB\nC", &config), RasterSize::new(11, 16));
        assert_eq!(measure_text("\n", &config), RasterSize::new(0, 16));
    }

    #[test]
    fn measured_block_fits_without_truncation() {
        let text = "Welcome\nto\nPXOS!";
        let config = cfg(0, 0, 1, 2);
        let size = measure_text(text, &config);
        let mut fb = Framebuffer::new(size.width, size.height, Color::WHITE);
        let outcome = render_text(&mut fb, text, &config);
        assert!(!outcome.truncated);
        assert_eq!(outcome.glyphs_drawn, text.chars().filter(|c| *c != '\n').count());
    }
}
