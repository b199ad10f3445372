//! Scan conversion and the fill-then-stroke draw protocol.
//!
//! Every primitive implements [`Drawable`], a pair of passes that write
//! straight into a [`Canvas`]. [`draw`] sequences them: fill first, stroke
//! second, so outline pixels are never painted over by the interior.
//!
//! # Algorithms
//!
//! - **Rectangle**: direct fill, stroke as `weight` inset rings
//! - **Ellipse**: implicit-inequality fill, parametric stroke sampling
//! - **Line/Point**: Bresenham tracing stamping a disk at each step
//! - **Triangle**: clipped bounding-box scan with an area-sum containment test
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod ellipse;
mod line;
mod rect;
mod triangle;

pub use ellipse::{fill_ellipse, stroke_ellipse};
pub use line::{disk_radius, draw_thick_point, stroke_line};
pub use rect::{fill_rect, stroke_rect};
pub use triangle::{fill_triangle, stroke_triangle, triangle_contains};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::paint::PaintState;
use crate::shapes::Shape;

/// The fill and stroke capabilities of a primitive.
///
/// Each pass checks its own `enabled` flag and writes nothing when it is
/// false.
pub trait Drawable {
    /// Paint the enclosed interior.
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, config: &RasterConfig);

    /// Paint the outline at `weight` pixels.
    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        config: &RasterConfig,
    );
}

/// Draw `shape` with `paint` using the default [`RasterConfig`].
///
/// # Example
///
/// ```
/// use trueno_sketch::prelude::*;
///
/// let mut fb = Framebuffer::new(50, 50).unwrap();
/// let paint = PaintState::default().with_stroke_weight(2.0);
/// render::draw(&mut fb, &Shape::rect(10.0, 10.0, 20.0, 20.0), &paint);
///
/// assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
/// assert_eq!(fb.get_pixel(20, 20), Some(Rgba::WHITE));
/// ```
pub fn draw<D: Drawable + ?Sized>(canvas: &mut dyn Canvas, shape: &D, paint: &PaintState) {
    draw_with_config(canvas, shape, paint, &RasterConfig::default());
}

/// Draw `shape` with `paint`: fill pass, then stroke pass.
pub fn draw_with_config<D: Drawable + ?Sized>(
    canvas: &mut dyn Canvas,
    shape: &D,
    paint: &PaintState,
    config: &RasterConfig,
) {
    tracing::trace!(
        fill = paint.fill_enabled,
        stroke = paint.stroke_enabled,
        weight = paint.stroke_weight,
        "draw"
    );
    shape.fill(canvas, paint.fill_color, paint.fill_enabled, config);
    shape.stroke(
        canvas,
        paint.stroke_color,
        paint.stroke_enabled,
        paint.stroke_weight,
        config,
    );
}

impl Drawable for Shape {
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, config: &RasterConfig) {
        match self {
            Self::Point(p) => p.fill(canvas, color, enabled, config),
            Self::Line(l) => l.fill(canvas, color, enabled, config),
            Self::Rectangle(r) => r.fill(canvas, color, enabled, config),
            Self::Square(s) => s.fill(canvas, color, enabled, config),
            Self::Ellipse(e) => e.fill(canvas, color, enabled, config),
            Self::Triangle(t) => t.fill(canvas, color, enabled, config),
        }
    }

    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        config: &RasterConfig,
    ) {
        match self {
            Self::Point(p) => p.stroke(canvas, color, enabled, weight, config),
            Self::Line(l) => l.stroke(canvas, color, enabled, weight, config),
            Self::Rectangle(r) => r.stroke(canvas, color, enabled, weight, config),
            Self::Square(s) => s.stroke(canvas, color, enabled, weight, config),
            Self::Ellipse(e) => e.stroke(canvas, color, enabled, weight, config),
            Self::Triangle(t) => t.stroke(canvas, color, enabled, weight, config),
        }
    }
}

/// Truncate a world coordinate toward zero onto the pixel grid.
///
/// Saturates at the `i32` range so that deltas and offsets computed in
/// `i64` cannot overflow.
#[inline]
fn grid(v: f64) -> i64 {
    i64::from(v as i32)
}

/// Write one pixel given wide coordinates; anything not representable on
/// the canvas grid is dropped along with out-of-bounds writes.
#[inline]
fn plot(canvas: &mut dyn Canvas, x: i64, y: i64, color: Rgba) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.set(x, y, color);
    }
}
