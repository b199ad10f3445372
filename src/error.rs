//! Error types for trueno-sketch operations.
//!
//! The rasterization core never fails; these errors come from the layers
//! around it (framebuffer construction, sketch input validation,
//! configuration loading and PNG output).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-sketch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Shape parameters rejected before construction.
    #[error("Invalid {shape}: {reason}")]
    InvalidGeometry {
        /// Shape kind being constructed.
        shape: &'static str,
        /// Why the parameters were rejected.
        reason: String,
    },

    /// Negative or non-finite stroke weight.
    #[error("Invalid stroke weight: {0} (must be non-negative)")]
    InvalidStrokeWeight(f64),

    /// Drawing was requested before a canvas was created.
    #[error("No canvas: call create_canvas first")]
    NoCanvas,

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}
