//! Addressable pixel surface consumed by the rasterizers.

use crate::color::Rgba;

/// A bounded pixel surface.
///
/// This is the only mutation path the rasterizers use. Implementations must
/// accept any signed coordinate: writes outside `[0, width) × [0, height)`
/// are silently dropped. Rasterizing near an edge produces such writes all
/// the time, so they are never an error.
pub trait Canvas {
    /// Write `color` at `(x, y)` if it lies inside the surface.
    fn set(&mut self, x: i32, y: i32, color: Rgba);

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Whether `(x, y)` addresses a pixel of this surface.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && i64::from(x) < i64::from(self.width())
            && i64::from(y) < i64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bounds(u32, u32);

    impl Canvas for Bounds {
        fn set(&mut self, _x: i32, _y: i32, _color: Rgba) {}

        fn width(&self) -> u32 {
            self.0
        }

        fn height(&self) -> u32 {
            self.1
        }
    }

    #[test]
    fn test_contains() {
        let c = Bounds(10, 5);
        assert!(c.contains(0, 0));
        assert!(c.contains(9, 4));
        assert!(!c.contains(10, 4));
        assert!(!c.contains(9, 5));
        assert!(!c.contains(-1, 0));
        assert!(!c.contains(0, -1));
    }
}
