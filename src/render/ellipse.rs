//! Ellipse and circle rasterization.

use std::f64::consts::TAU;

use super::{grid, plot, Drawable};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::shapes::Ellipse;

/// Fill every grid offset `(dx, dy)` from the (truncated) center with
/// `dx²/rx² + dy²/ry² ≤ 1`.
///
/// Scans the whole `[-rx, rx] × [-ry, ry]` box. A non-positive radius
/// fills nothing.
pub fn fill_ellipse(canvas: &mut dyn Canvas, ellipse: &Ellipse, color: Rgba) {
    let Ellipse { x, y, rx, ry } = *ellipse;
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }

    let (cx, cy) = (grid(x), grid(y));
    let (rx_px, ry_px) = (grid(rx), grid(ry));
    let (rx2, ry2) = (rx * rx, ry * ry);

    for dx in -rx_px..=rx_px {
        let fx = dx as f64;
        for dy in -ry_px..=ry_px {
            let fy = dy as f64;
            if fx * fx / rx2 + fy * fy / ry2 <= 1.0 {
                plot(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Number of boundary samples for `ellipse`:
/// `round(density · 2π · max(rx, ry))`, about one per pixel of circumference
/// at the default density.
#[must_use]
pub(crate) fn stroke_samples(ellipse: &Ellipse, config: &RasterConfig) -> u64 {
    let steps = (config.ellipse_samples_per_pixel * TAU * ellipse.rx.max(ellipse.ry)).round();
    if steps >= 1.0 {
        steps as u64
    } else {
        0
    }
}

/// Sample the boundary parametrically and stamp a cross at each sample.
///
/// Each sample `(px, py)` paints `(px + s, py)` and `(px, py + s)` for `s` in
/// `-weight/2 ..= weight/2` (truncated). This approximates thickness; it is
/// not an offset curve, so heavy strokes or sparse sampling can leave gaps
/// between the arms of neighbouring crosses.
pub fn stroke_ellipse(
    canvas: &mut dyn Canvas,
    ellipse: &Ellipse,
    color: Rgba,
    weight: f64,
    config: &RasterConfig,
) {
    let steps = stroke_samples(ellipse, config);
    let half = grid(weight / 2.0);

    for i in 0..steps {
        let theta = TAU * (i as f64) / (steps as f64);
        let px = grid(ellipse.x + ellipse.rx * theta.cos());
        let py = grid(ellipse.y + ellipse.ry * theta.sin());

        for s in -half..=half {
            plot(canvas, px + s, py, color);
            plot(canvas, px, py + s, color);
        }
    }
}

impl Drawable for Ellipse {
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, _config: &RasterConfig) {
        if !enabled {
            return;
        }
        fill_ellipse(canvas, self, color);
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
        stroke_ellipse(canvas, self, color, weight, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    fn canvas() -> Framebuffer {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_fill_circle() {
        let mut fb = canvas();
        fill_ellipse(&mut fb, &Ellipse::circle(50.0, 50.0, 20.0), Rgba::BLUE);

        // Center should be filled
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLUE));
        // Extremes of each axis lie exactly on the boundary
        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(30, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 30), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(71, 50), Some(Rgba::WHITE));
        // Bounding box corner is outside
        assert_eq!(fb.get_pixel(69, 69), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_ellipse_respects_inequality() {
        let mut fb = canvas();
        let e = Ellipse::new(40.0, 50.0, 25.0, 10.0);
        fill_ellipse(&mut fb, &e, Rgba::BLUE);

        for y in 0..100u32 {
            for x in 0..100u32 {
                let dx = f64::from(x) - 40.0;
                let dy = f64::from(y) - 50.0;
                let inside = dx * dx / 625.0 + dy * dy / 100.0 <= 1.0;
                let filled = fb.get_pixel(x, y) == Some(Rgba::BLUE);
                assert_eq!(inside, filled, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_small_radius() {
        let mut fb = canvas();
        fill_ellipse(&mut fb, &Ellipse::new(10.0, 10.0, 0.5, 0.5), Rgba::BLUE);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 1);
    }

    #[test]
    fn test_fill_non_positive_radius() {
        let mut fb = canvas();
        fill_ellipse(&mut fb, &Ellipse::new(50.0, 50.0, 0.0, 10.0), Rgba::BLUE);
        fill_ellipse(&mut fb, &Ellipse::new(50.0, 50.0, 10.0, -3.0), Rgba::BLUE);
        fill_ellipse(&mut fb, &Ellipse::new(50.0, 50.0, f64::NAN, 3.0), Rgba::BLUE);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 0);
    }

    #[test]
    fn test_stroke_samples() {
        let config = RasterConfig::default();
        // 2π·10 = 62.83
        assert_eq!(stroke_samples(&Ellipse::circle(0.0, 0.0, 10.0), &config), 63);
        assert_eq!(stroke_samples(&Ellipse::new(0.0, 0.0, 4.0, 10.0), &config), 63);
        assert_eq!(stroke_samples(&Ellipse::circle(0.0, 0.0, 0.0), &config), 0);
        assert_eq!(stroke_samples(&Ellipse::circle(0.0, 0.0, -5.0), &config), 0);

        let dense = RasterConfig {
            ellipse_samples_per_pixel: 2.0,
            ..RasterConfig::default()
        };
        assert_eq!(stroke_samples(&Ellipse::circle(0.0, 0.0, 10.0), &dense), 126);
    }

    #[test]
    fn test_stroke_circle() {
        let mut fb = canvas();
        let config = RasterConfig::default();
        stroke_ellipse(&mut fb, &Ellipse::circle(50.0, 50.0, 20.0), Rgba::GREEN, 1.0, &config);

        // θ = 0 lands exactly on (70, 50)
        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::GREEN));
        // Center should still be white (outline only)
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
        assert!(fb.count_pixels(Rgba::GREEN) > 60);
    }

    #[test]
    fn test_stroke_pixels_stay_near_boundary() {
        let mut fb = canvas();
        let config = RasterConfig::default();
        let weight = 4.0;
        stroke_ellipse(&mut fb, &Ellipse::circle(50.0, 50.0, 30.0), Rgba::GREEN, weight, &config);

        for y in 0..100u32 {
            for x in 0..100u32 {
                if fb.get_pixel(x, y) == Some(Rgba::GREEN) {
                    let d = (f64::from(x) - 50.0).hypot(f64::from(y) - 50.0);
                    // truncation moves a sample up to 1px on each axis
                    assert!((d - 30.0).abs() <= weight / 2.0 + 2.0, "({x}, {y}) at {d}");
                }
            }
        }
    }

    #[test]
    fn test_stroke_cross_arms() {
        let mut fb = canvas();
        let config = RasterConfig::default();
        // A tiny ellipse has few samples, so the crosses are distinguishable
        let e = Ellipse::new(50.0, 50.0, 0.2, 0.2);
        assert_eq!(stroke_samples(&e, &config), 1);

        stroke_ellipse(&mut fb, &e, Rgba::BLACK, 4.0, &config);
        // One cross centered at (50, 50) with arms of length 2
        assert_eq!(fb.count_pixels(Rgba::BLACK), 9);
        assert_eq!(fb.get_pixel(48, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 52), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(51, 51), Some(Rgba::WHITE));
    }

    #[test]
    fn test_ellipse_drawable_disabled() {
        let mut fb = canvas();
        let before = fb.clone();
        let config = RasterConfig::default();
        let e = Ellipse::new(50.0, 50.0, 10.0, 5.0);

        e.fill(&mut fb, Rgba::BLUE, false, &config);
        e.stroke(&mut fb, Rgba::BLACK, false, 2.0, &config);
        assert_eq!(fb, before);
    }
}
