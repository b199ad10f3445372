//! PNG encoding for rendered canvases.
//!
//! Pure Rust PNG encoding using the `png` crate. Stride padding is stripped
//! before the rows are handed to the encoder.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// RGBA8 PNG encoder for [`Framebuffer`]s.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode `fb` into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the header or image data cannot be written.
    pub fn write<W: Write>(fb: &Framebuffer, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }

    /// Write a framebuffer to a PNG file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write(fb, BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), width = fb.width(), height = fb.height(), "png written");
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(fb, &mut buffer)?;
        Ok(buffer)
    }
}
