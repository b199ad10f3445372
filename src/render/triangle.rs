//! Triangle rasterization.

use super::line::{draw_thick_point, stroke_line};
use super::{grid, plot, Drawable};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::geometry::{triangle_area, Vertex};
use crate::shapes::Triangle;

/// Area-sum containment test.
///
/// `p` is inside when the three sub-triangles it forms with each edge sum to
/// `area` within `tolerance × area`. Returns false for a zero-area triangle.
#[must_use]
pub fn triangle_contains(p: Vertex, [a, b, c]: [Vertex; 3], area: f64, tolerance: f64) -> bool {
    if area <= 0.0 {
        return false;
    }
    let s1 = triangle_area(p, b, c);
    let s2 = triangle_area(a, p, c);
    let s3 = triangle_area(a, b, p);
    ((s1 + s2 + s3) - area).abs() < tolerance * area
}

/// Fill the triangle by scanning its bounding box clipped to the canvas.
///
/// Degenerate triangles (area under `config.degenerate_area`) fill nothing.
pub fn fill_triangle(canvas: &mut dyn Canvas, triangle: &Triangle, color: Rgba, config: &RasterConfig) {
    let vertices = triangle.vertices();
    let [a, b, c] = vertices;
    let area = triangle_area(a, b, c);
    if !(area >= config.degenerate_area) {
        tracing::debug!(area, "degenerate triangle, fill skipped");
        return;
    }

    let min_x = a.x.min(b.x).min(c.x);
    let max_x = a.x.max(b.x).max(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_y = a.y.max(b.y).max(c.y);

    let start_x = grid(min_x.max(0.0));
    let end_x = grid(max_x.min(f64::from(canvas.width()) - 1.0));
    let start_y = grid(min_y.max(0.0));
    let end_y = grid(max_y.min(f64::from(canvas.height()) - 1.0));

    for y in start_y..=end_y {
        for x in start_x..=end_x {
            let p = Vertex::new(x as f64, y as f64);
            if triangle_contains(p, vertices, area, config.triangle_tolerance) {
                plot(canvas, x, y, color);
            }
        }
    }
}

/// Stroke the three edges v1→v2, v2→v3, v3→v1 as thick lines.
///
/// A degenerate triangle collapses: if all three vertices coincide (within
/// `config.vertex_tolerance`) it is drawn as one thick point, otherwise only
/// the edges whose endpoints are distinct are drawn.
pub fn stroke_triangle(
    canvas: &mut dyn Canvas,
    triangle: &Triangle,
    color: Rgba,
    weight: f64,
    config: &RasterConfig,
) {
    let [a, b, c] = triangle.vertices();
    let area = triangle_area(a, b, c);

    if !(area >= config.degenerate_area) {
        let tol = config.vertex_tolerance;
        if a.coincides(b, tol) && a.coincides(c, tol) {
            tracing::debug!(x = a.x, y = a.y, "triangle collapsed to a point");
            draw_thick_point(canvas, grid(a.x), grid(a.y), color, weight);
            return;
        }

        tracing::debug!(area, "triangle collapsed to segments");
        for edge in triangle.edges() {
            if !edge.start().coincides(edge.end(), tol) {
                stroke_line(canvas, &edge, color, weight);
            }
        }
        return;
    }

    for edge in triangle.edges() {
        stroke_line(canvas, &edge, color, weight);
    }
}

impl Drawable for Triangle {
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, config: &RasterConfig) {
        if !enabled {
            return;
        }
        fill_triangle(canvas, self, color, config);
    }

    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        config: &RasterConfig,
    ) {
        if !enabled {
            return;
        }
        stroke_triangle(canvas, self, color, weight, config);
    }
}
