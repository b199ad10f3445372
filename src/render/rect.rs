//! Rectangle and square rasterization.

use super::{grid, plot, Drawable};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::shapes::{Rectangle, Square};

/// Fill every pixel of `[x, x + w) × [y, y + h)` (on the truncated grid).
///
/// Non-positive sizes fill nothing.
pub fn fill_rect(canvas: &mut dyn Canvas, rect: &Rectangle, color: Rgba) {
    let (x, y) = (grid(rect.x), grid(rect.y));
    let (w, h) = (grid(rect.w), grid(rect.h));

    for dx in 0..w {
        for dy in 0..h {
            plot(canvas, x + dx, y + dy, color);
        }
    }
}

/// Draw `weight` (truncated) concentric rings along the inside of the
/// rectangle boundary.
///
/// Ring `i` covers row `y + i`, row `bottom - 1 - i`, column `x + i` and
/// column `right - 1 - i`, where `right`/`bottom` are the truncated far
/// edges. Each row spans the full width and each column the full height.
pub fn stroke_rect(canvas: &mut dyn Canvas, rect: &Rectangle, color: Rgba, weight: f64) {
    let (x, y) = (grid(rect.x), grid(rect.y));
    let (w, h) = (grid(rect.w), grid(rect.h));
    let right = grid(rect.x + rect.w);
    let bottom = grid(rect.y + rect.h);

    for inset in 0..grid(weight) {
        for dx in 0..w {
            plot(canvas, x + dx, y + inset, color);
            plot(canvas, x + dx, bottom - inset - 1, color);
        }
        for dy in 0..h {
            plot(canvas, x + inset, y + dy, color);
            plot(canvas, right - inset - 1, y + dy, color);
        }
    }
}

impl Drawable for Rectangle {
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, _config: &RasterConfig) {
        if !enabled {
            return;
        }
        fill_rect(canvas, self, color);
    }

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
        stroke_rect(canvas, self, color, weight);
    }
}

impl Drawable for Square {
    fn fill(&self, canvas: &mut dyn Canvas, color: Rgba, enabled: bool, config: &RasterConfig) {
        self.as_rectangle().fill(canvas, color, enabled, config);
    }

    fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        color: Rgba,
        enabled: bool,
        weight: f64,
        config: &RasterConfig,
    ) {
        self.as_rectangle()
            .stroke(canvas, color, enabled, weight, config);
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
    fn test_fill_rect() {
        let mut fb = canvas();
        fill_rect(&mut fb, &Rectangle::new(20.0, 20.0, 30.0, 10.0), Rgba::RED);

        assert_eq!(fb.count_pixels(Rgba::RED), 300);
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(49, 29), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(50, 29), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(49, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(19, 20), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_non_positive_size() {
        let mut fb = canvas();
        fill_rect(&mut fb, &Rectangle::new(20.0, 20.0, 0.0, 10.0), Rgba::RED);
        fill_rect(&mut fb, &Rectangle::new(20.0, 20.0, 10.0, -5.0), Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut fb = canvas();
        fill_rect(&mut fb, &Rectangle::new(-5.0, 95.0, 10.0, 10.0), Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 25);
        assert_eq!(fb.get_pixel(0, 99), Some(Rgba::RED));
    }

    #[test]
    fn test_stroke_rect_single_ring() {
        let mut fb = canvas();
        stroke_rect(&mut fb, &Rectangle::new(10.0, 10.0, 5.0, 4.0), Rgba::BLACK, 1.0);

        // Perimeter of a 5x4 box
        assert_eq!(fb.count_pixels(Rgba::BLACK), 2 * 5 + 2 * 4 - 4);
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(14, 13), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(12, 11), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(15, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_stroke_rect_thick() {
        let mut fb = canvas();
        stroke_rect(&mut fb, &Rectangle::new(20.0, 20.0, 30.0, 30.0), Rgba::RED, 2.0);

        // Border should be red
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(21, 35), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(48, 35), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(35, 49), Some(Rgba::RED));
        // Inside should be white
        assert_eq!(fb.get_pixel(22, 35), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::WHITE));
        assert_eq!(fb.count_pixels(Rgba::RED), 30 * 30 - 26 * 26);
    }

    #[test]
    fn test_stroke_rect_weight_truncated() {
        let mut a = canvas();
        let mut b = canvas();
        let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        stroke_rect(&mut a, &rect, Rgba::BLACK, 2.9);
        stroke_rect(&mut b, &rect, Rgba::BLACK, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stroke_rect_zero_weight() {
        let mut fb = canvas();
        stroke_rect(&mut fb, &Rectangle::new(10.0, 10.0, 20.0, 20.0), Rgba::BLACK, 0.5);
        assert_eq!(fb.count_pixels(Rgba::BLACK), 0);
    }

    #[test]
    fn test_square_drawable() {
        let mut fb = canvas();
        let config = RasterConfig::default();
        let square = Square::new(5.0, 5.0, 4.0);

        square.fill(&mut fb, Rgba::BLUE, true, &config);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 16);

        square.stroke(&mut fb, Rgba::BLACK, true, 1.0, &config);
        assert_eq!(fb.count_pixels(Rgba::BLACK), 12);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 4);
    }

    #[test]
    fn test_rectangle_drawable_disabled() {
        let mut fb = canvas();
        let before = fb.clone();
        let config = RasterConfig::default();
        let rect = Rectangle::new(5.0, 5.0, 10.0, 10.0);

        rect.fill(&mut fb, Rgba::BLUE, false, &config);
        rect.stroke(&mut fb, Rgba::BLACK, false, 3.0, &config);
        assert_eq!(fb, before);
    }
}
