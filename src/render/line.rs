//! Thick Bresenham lines and points.

use super::{grid, plot, Drawable};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::shapes::{Line, Point};

/// Radius of the disk stamped for a stroke of `weight`: `max(1, round(weight / 2))`.
#[must_use]
pub fn disk_radius(weight: f64) -> i64 {
    i64::from(((weight / 2.0).round() as i32).max(1))
}

/// Stamp a filled disk of radius [`disk_radius`]`(weight)` centered on a pixel.
pub fn draw_thick_point(canvas: &mut dyn Canvas, x: i64, y: i64, color: Rgba, weight: f64) {
    let radius = disk_radius(weight);

    // Nothing of the disk can land on the canvas.
    if x + radius < 0
        || y + radius < 0
        || x - radius >= i64::from(canvas.width())
        || y - radius >= i64::from(canvas.height())
    {
        return;
    }

    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                plot(canvas, x + dx, y + dy, color);
            }
        }
    }
}

/// Trace `line` with Bresenham's algorithm, stamping a disk at every step.
///
/// Endpoints are truncated to the pixel grid first. A zero-length line is a
/// single disk. The walk stops once it has traveled more than twice the
/// nominal delta along either axis, whatever the error term says.
pub fn stroke_line(canvas: &mut dyn Canvas, line: &Line, color: Rgba, weight: f64) {
    let (x0, y0) = (grid(line.x1), grid(line.y1));
    let (x1, y1) = (grid(line.x2), grid(line.y2));

    if x0 == x1 && y0 == y1 {
        tracing::debug!(x = x0, y = y0, "zero-length line drawn as point");
        draw_thick_point(canvas, x0, y0, color, weight);
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        draw_thick_point(canvas, x, y, color, weight);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }

        if (x - x0).abs() > 2 * dx || (y - y0).abs() > 2 * dy {
            tracing::debug!(x, y, "line walk exceeded safety bound");
            break;
        }
    }
}

impl Drawable for Line {
    /// Lines enclose no area.
    fn fill(&self, _canvas: &mut dyn Canvas, _color: Rgba, _enabled: bool, _config: &RasterConfig) {}

    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        _config: &RasterConfig,
    ) {
        if !enabled {
            return;
        }
        stroke_line(canvas, self, color, weight);
    }
}

impl Drawable for Point {
    /// Points enclose no area.
    fn fill(&self, _canvas: &mut dyn Canvas, _color: Rgba, _enabled: bool, _config: &RasterConfig) {}

    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        _config: &RasterConfig,
    ) {
        if !enabled {
            return;
        }
        stroke_line(canvas, &self.as_line(), color, weight);
    }
}
