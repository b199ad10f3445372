//! # Trueno-Sketch
//!
//! Pure Rust 2D software rasterizer with a Processing-style drawing API.
//!
//! Six primitive shapes (point, line, rectangle, square, ellipse, triangle)
//! are rasterized into any pixel sink implementing [`canvas::Canvas`].
//! Drawing follows a fixed protocol: fill the interior, then stroke the
//! outline, both controlled by an explicit [`paint::PaintState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_sketch::prelude::*;
//!
//! let mut fb = Framebuffer::new(50, 50)?;
//! fb.clear(Rgba::WHITE);
//!
//! let paint = PaintState::default().with_stroke_weight(2.0);
//! render::draw(&mut fb, &Shape::rect(10.0, 10.0, 20.0, 20.0), &paint);
//!
//! assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
//! assert_eq!(fb.get_pixel(20, 20), Some(Rgba::WHITE));
//! # Ok::<(), trueno_sketch::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML loading for [`config::RasterConfig`] and serde derives
//! - `demo`: the `sketch-render` binary
//! - `full`: All features enabled
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1).
//! - Reas, C., & Fry, B. (2007). *Processing: A Programming Handbook for Visual
//!   Designers and Artists*. MIT Press.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_arguments)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel sink abstraction.
pub mod canvas;

/// RGBA color type.
pub mod color;

/// Owned RGBA pixel buffer.
pub mod framebuffer;

/// Vertices and planar helpers.
pub mod geometry;

/// Error types.
pub mod error;

// ============================================================================
// Drawing
// ============================================================================

/// Shape value types and the closed [`shapes::Shape`] set.
pub mod shapes;

/// Fill/stroke paint state.
pub mod paint;

/// Rasterization tunables.
pub mod config;

/// Rasterizers and the fill-then-stroke draw protocol.
pub mod render;

/// Processing-style drawing context.
pub mod sketch;

// ============================================================================
// Output
// ============================================================================

/// Image encoders.
pub mod output;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Vertex;
    pub use crate::output::PngEncoder;
    pub use crate::paint::PaintState;
    pub use crate::render::{self, draw, draw_with_config, Drawable};
    pub use crate::shapes::{Ellipse, Line, Point, Rectangle, Shape, Square, Triangle};
    pub use crate::sketch::Sketch;
}
