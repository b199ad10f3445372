//! Processing-style drawing context.
//!
//! [`Sketch`] owns a canvas and a current [`PaintState`], validates shape
//! parameters before anything is constructed, and hands each shape to the
//! draw protocol. Rejected input is logged with `tracing::warn!` and
//! returned as an [`Error`]; nothing is drawn in that case.
//!
//! ```
//! use trueno_sketch::prelude::*;
//!
//! let mut sketch = Sketch::new();
//! sketch.create_canvas(64, 64)?;
//! sketch.background(Rgba::gray(220))?;
//! sketch.fill(Rgba::RED);
//! sketch.stroke_weight(2.0)?;
//! sketch.circle(32.0, 32.0, 12.0)?;
//!
//! assert_eq!(sketch.canvas().unwrap().get_pixel(32, 32), Some(Rgba::RED));
//! # Ok::<(), trueno_sketch::Error>(())
//! ```

use std::path::Path;

use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::paint::PaintState;
use crate::render;
use crate::shapes::Shape;

/// Canvas plus current paint state.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    canvas: Option<Framebuffer>,
    paint: PaintState,
    config: RasterConfig,
}

impl Sketch {
    /// Create a sketch with no canvas and the default paint state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sketch with custom rasterization tunables.
    #[must_use]
    pub fn with_config(config: RasterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the canvas with a new transparent one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension; the existing
    /// canvas (if any) is kept.
    pub fn create_canvas(&mut self, width: u32, height: u32) -> Result<()> {
        let fb = Framebuffer::new(width, height).map_err(report)?;
        tracing::debug!(width, height, "canvas created");
        self.canvas = Some(fb);
        Ok(())
    }

    /// Fill the whole canvas with `color`.
    pub fn background(&mut self, color: Rgba) -> Result<()> {
        self.canvas_mut_or_err()?.clear(color);
        Ok(())
    }

    /// Set and enable the fill color.
    pub fn fill(&mut self, color: Rgba) {
        self.paint = self.paint.with_fill(color);
    }

    /// Disable filling.
    pub fn no_fill(&mut self) {
        self.paint = self.paint.no_fill();
    }

    /// Set and enable the stroke color.
    pub fn stroke(&mut self, color: Rgba) {
        self.paint = self.paint.with_stroke(color);
    }

    /// Disable stroking.
    pub fn no_stroke(&mut self) {
        self.paint = self.paint.no_stroke();
    }

    /// Set the stroke weight.
    ///
    /// # Errors
    ///
    /// A negative or non-finite weight is rejected and the weight is reset
    /// to 1.
    pub fn stroke_weight(&mut self, weight: f64) -> Result<()> {
        if !(weight.is_finite() && weight >= 0.0) {
            self.paint = self.paint.with_stroke_weight(1.0);
            return Err(report(Error::InvalidStrokeWeight(weight)));
        }
        self.paint = self.paint.with_stroke_weight(weight);
        Ok(())
    }

    /// Current paint state.
    #[must_use]
    pub const fn paint(&self) -> &PaintState {
        &self.paint
    }

    /// Rasterization tunables in use.
    #[must_use]
    pub const fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Canvas width.
    pub fn width(&self) -> Result<u32> {
        Ok(self.canvas_or_err()?.width())
    }

    /// Canvas height.
    pub fn height(&self) -> Result<u32> {
        Ok(self.canvas_or_err()?.height())
    }

    /// The canvas, if one was created.
    #[must_use]
    pub const fn canvas(&self) -> Option<&Framebuffer> {
        self.canvas.as_ref()
    }

    /// Mutable access to the canvas, if one was created.
    pub fn canvas_mut(&mut self) -> Option<&mut Framebuffer> {
        self.canvas.as_mut()
    }

    /// Consume the sketch, returning its canvas.
    #[must_use]
    pub fn into_canvas(self) -> Option<Framebuffer> {
        self.canvas
    }

    /// Draw `shape` with the current paint state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCanvas`] if no canvas was created.
    pub fn render(&mut self, shape: &Shape) -> Result<()> {
        let paint = self.paint;
        let config = self.config;
        let canvas = self.canvas_mut_or_err()?;
        tracing::trace!(shape = shape.kind(), "render");
        render::draw_with_config(canvas, shape, &paint, &config);
        Ok(())
    }

    /// Draw an ellipse centered at `(x, y)`. Both radii must be positive.
    pub fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64) -> Result<()> {
        if !(rx > 0.0 && ry > 0.0) {
            return Err(invalid(
                "ellipse",
                format!("rx={rx:.2}, ry={ry:.2} - radii must be positive"),
            ));
        }
        self.render(&Shape::ellipse(x, y, rx, ry))
    }

    /// Draw a circle centered at `(x, y)`. The radius must be positive.
    pub fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        if !(radius > 0.0) {
            return Err(invalid(
                "circle",
                format!("radius={radius:.2} - radius must be positive"),
            ));
        }
        self.render(&Shape::circle(x, y, radius))
    }

    /// Draw a rectangle with top-left `(x, y)`. Both sides must be positive.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        if !(w > 0.0 && h > 0.0) {
            return Err(invalid(
                "rectangle",
                format!("w={w:.2}, h={h:.2} - dimensions must be positive"),
            ));
        }
        self.render(&Shape::rect(x, y, w, h))
    }

    /// Draw a square with top-left `(x, y)`. The size must be positive.
    pub fn square(&mut self, x: f64, y: f64, size: f64) -> Result<()> {
        if !(size > 0.0) {
            return Err(invalid(
                "square",
                format!("size={size:.2} - size must be positive"),
            ));
        }
        self.render(&Shape::square(x, y, size))
    }

    /// Draw a line segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.render(&Shape::line(x1, y1, x2, y2))
    }

    /// Draw a point.
    pub fn point(&mut self, x: f64, y: f64) -> Result<()> {
        self.render(&Shape::point(x, y))
    }

    /// Draw a triangle.
    pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<()> {
        self.render(&Shape::triangle(x1, y1, x2, y2, x3, y3))
    }

    /// Write the canvas to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(self.canvas_or_err()?, path)
    }

    fn canvas_or_err(&self) -> Result<&Framebuffer> {
        self.canvas.as_ref().ok_or_else(|| report(Error::NoCanvas))
    }

    fn canvas_mut_or_err(&mut self) -> Result<&mut Framebuffer> {
        self.canvas.as_mut().ok_or_else(|| report(Error::NoCanvas))
    }
}

/// Log a rejected call before handing the error back.
fn report(err: Error) -> Error {
    tracing::warn!(error = %err, "sketch call rejected");
    err
}

fn invalid(shape: &'static str, reason: String) -> Error {
    report(Error::InvalidGeometry { shape, reason })
}
