//! Owned RGBA pixel store.
//!
//! [`Framebuffer`] is the concrete [`Canvas`] the sketch layer draws into.
//! Rows are padded to a 64-byte stride so each row starts on a cache line.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Fixed-size RGBA8 pixel buffer.
///
/// Dimensions are set at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_sketch::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data, including row padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count the pixels currently holding `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|row| row.chunks_exact(4).filter(|px| **px == target).count())
            .sum()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is what PNG encoding expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }
}

impl Canvas for Framebuffer {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(x as u32, y as u32, color);
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
}
