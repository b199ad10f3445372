//! Planar helpers shared by the rasterizers.

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Vertex {
    /// Origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new vertex.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another vertex.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both coordinates differ by at most `tolerance`.
    #[must_use]
    pub fn coincides(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Truncate to the pixel grid (toward zero).
    #[must_use]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Unsigned area of triangle `abc` (shoelace formula).
#[must_use]
pub fn triangle_area(a: Vertex, b: Vertex, c: Vertex) -> f64 {
    0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
}
