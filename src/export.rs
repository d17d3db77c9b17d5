//! PNG output for [`Framebuffer`]s.
//!
//! The renderer itself never touches files; this is how a rendered
//! framebuffer gets looked at afterwards.

use crate::errors::PxFontError;
use crate::render::{Framebuffer, RasterBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes `fb` as an 8-bit RGB PNG into `out`.
pub fn encode_png<W: Write>(fb: &Framebuffer, out: W) -> Result<(), PxFontError> {
    let size = fb.size();
    if size.is_empty() {
        return Err(PxFontError::EmptyRaster {
            width: size.width,
            height: size.height,
        });
    }

    let mut encoder = png::Encoder::new(out, size.width, size.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(fb.pixels())?;
    writer.finish()?;
    Ok(())
}

/// Writes `fb` to `path` as a PNG file, replacing any existing file.
pub fn save_png<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<(), PxFontError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    encode_png(fb, BufWriter::new(file))?;
    log::debug!("framebuffer {}x{} saved to {}", fb.width(), fb.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::render::{render_text, Color};

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn encoded_png_matches_pixels() {
        let mut fb = Framebuffer::new(20, 9, Color::WHITE);
        render_text(&mut fb, "OK", &RenderConfig::default());

        let mut bytes = Vec::new();
        encode_png(&fb, &mut bytes).unwrap();

        let (info, pixels) = decode(&bytes);
        assert_eq!((info.width, info.height), (20, 9));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(pixels, fb.pixels());
    }

    #[test]
    fn empty_raster_is_rejected() {
        let fb = Framebuffer::new(0, 4, Color::WHITE);
        let err = encode_png(&fb, Vec::new()).unwrap_err();
        assert!(matches!(err, PxFontError::EmptyRaster { width: 0, height: 4 }));
    }

    #[test]
    fn save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let fb = Framebuffer::new(3, 2, Color::RED);
        save_png(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (_, pixels) = decode(&bytes);
        assert_eq!(pixels, fb.pixels());
    }

    #[test]
    fn save_png_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let fb = Framebuffer::new(3, 2, Color::RED);
        let err = save_png(&fb, &path).unwrap_err();
        assert!(matches!(err, PxFontError::Io(_)));
    }
}
