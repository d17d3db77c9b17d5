use crate::render::color::Color;

/// Size of a raster in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true when `(x, y)` addresses a pixel inside this size.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

/// Pixel surface the text engine draws into.
///
/// The engine clips every write itself, so `set_pixel` is only ever called
/// with `x < width()` and `y < height()`. Implementations never need to
/// resize while a render is in progress.
pub trait RasterBuffer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Writes one pixel. Coordinates are guaranteed to be in range.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    fn size(&self) -> RasterSize {
        RasterSize::new(self.width(), self.height())
    }
}

/// In-memory packed RGB8 raster.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

const BYTES_PER_PIXEL: usize = 3;

/// Byte length of a packed `width` x `height` buffer.
///
/// Panics when the length does not fit in `usize`.
fn buffer_len(width: u32, height: u32) -> usize {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .unwrap_or_else(|| panic!("framebuffer dimensions {width}x{height} overflow usize"))
}

impl Framebuffer {
    /// Creates a `width` x `height` framebuffer with every pixel set to `fill`.
    ///
    /// Panics when `width * height * 3` bytes cannot be addressed.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let pixels = fill
            .to_rgb()
            .iter()
            .copied()
            .cycle()
            .take(buffer_len(width, height))
            .collect();

        Self { pixels, width, height }
    }

    /// Wraps existing RGB8 pixel data, row-major with no padding.
    pub fn from_raw(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            pixels.len(),
            buffer_len(width, height),
            "pixel buffer does not match framebuffer dimensions"
        );

        Self { pixels, width, height }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        Some(Color::new(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ))
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&color.to_rgb());
        }
    }

    /// Raw RGB8 bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels currently set to `color`.
    pub fn count_pixels(&self, color: Color) -> usize {
        let rgb = color.to_rgb();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| **px == rgb[..])
            .count()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl RasterBuffer for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Out-of-range writes are dropped.
    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_rgb());
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.pixels.len())
            .finish()
    }
}
