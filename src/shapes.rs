//! The closed set of sketch primitives.
//!
//! Shapes carry only their geometric parameters in floating-point world
//! coordinates. They are cheap `Copy` values: build one per draw call and
//! drop it afterwards. Constructors never validate; the [`Sketch`] layer
//! rejects non-positive sizes before a shape is built.
//!
//! [`Sketch`]: crate::sketch::Sketch

use crate::geometry::Vertex;

/// A single point, rendered as a disk of the stroke weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero-length line this point degenerates to.
    #[must_use]
    pub const fn as_line(&self) -> Line {
        Line::new(self.x, self.y, self.x, self.y)
    }
}

/// A line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start X.
    pub x1: f64,
    /// Start Y.
    pub y1: f64,
    /// End X.
    pub x2: f64,
    /// End Y.
    pub y2: f64,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a line between two vertices.
    #[must_use]
    pub const fn between(start: Vertex, end: Vertex) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Start vertex.
    #[must_use]
    pub const fn start(&self) -> Vertex {
        Vertex::new(self.x1, self.y1)
    }

    /// End vertex.
    #[must_use]
    pub const fn end(&self) -> Vertex {
        Vertex::new(self.x2, self.y2)
    }

    /// Get the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f64,
    /// Y coordinate of the top-left corner.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// A rectangle with equal sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Square {
    /// X coordinate of the top-left corner.
    pub x: f64,
    /// Y coordinate of the top-left corner.
    pub y: f64,
    /// Side length.
    pub size: f64,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    /// The rectangle this square is rasterized as.
    #[must_use]
    pub const fn as_rectangle(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.size, self.size)
    }
}

/// An axis-aligned ellipse given by center and radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    /// Center X.
    pub x: f64,
    /// Center Y.
    pub y: f64,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    #[must_use]
    pub const fn new(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self { x, y, rx, ry }
    }

    /// Create a circle (an ellipse with `rx == ry`).
    #[must_use]
    pub const fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::new(x, y, radius, radius)
    }
}

/// A triangle given by three vertices in any winding order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// First vertex X.
    pub x1: f64,
    /// First vertex Y.
    pub y1: f64,
    /// Second vertex X.
    pub x2: f64,
    /// Second vertex Y.
    pub y2: f64,
    /// Third vertex X.
    pub x3: f64,
    /// Third vertex Y.
    pub y3: f64,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        }
    }

    /// The three vertices in construction order.
    #[must_use]
    pub const fn vertices(&self) -> [Vertex; 3] {
        [
            Vertex::new(self.x1, self.y1),
            Vertex::new(self.x2, self.y2),
            Vertex::new(self.x3, self.y3),
        ]
    }

    /// Edges in stroke order: v1→v2, v2→v3, v3→v1.
    #[must_use]
    pub const fn edges(&self) -> [Line; 3] {
        let [a, b, c] = self.vertices();
        [Line::between(a, b), Line::between(b, c), Line::between(c, a)]
    }
}

/// Any drawable primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A single point.
    Point(Point),
    /// A line segment.
    Line(Line),
    /// An axis-aligned rectangle.
    Rectangle(Rectangle),
    /// A square.
    Square(Square),
    /// An ellipse or circle.
    Ellipse(Ellipse),
    /// A triangle.
    Triangle(Triangle),
}

impl Shape {
    /// Point at `(x, y)`.
    #[must_use]
    pub const fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    /// Line from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub const fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line(Line::new(x1, y1, x2, y2))
    }

    /// Rectangle with top-left `(x, y)` and size `w × h`.
    #[must_use]
    pub const fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::Rectangle(Rectangle::new(x, y, w, h))
    }

    /// Square with top-left `(x, y)`.
    #[must_use]
    pub const fn square(x: f64, y: f64, size: f64) -> Self {
        Self::Square(Square::new(x, y, size))
    }

    /// Ellipse centered at `(x, y)`.
    #[must_use]
    pub const fn ellipse(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self::Ellipse(Ellipse::new(x, y, rx, ry))
    }

    /// Circle centered at `(x, y)`.
    #[must_use]
    pub const fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Ellipse(Ellipse::circle(x, y, radius))
    }

    /// Triangle through three vertices.
    #[must_use]
    pub const fn triangle(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::Triangle(Triangle::new(x1, y1, x2, y2, x3, y3))
    }

    /// Variant name, for logs and error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Rectangle(_) => "rectangle",
            Self::Square(_) => "square",
            Self::Ellipse(_) => "ellipse",
            Self::Triangle(_) => "triangle",
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Point, Line, Rectangle, Square, Ellipse, Triangle);
