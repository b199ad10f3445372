//! Rasterization tunables.
//!
//! These are tuned constants rather than derived ones, so they are exposed
//! for callers to adjust. Defaults reproduce the reference output.
//!
//! With the `config` feature a [`RasterConfig`] can be loaded from YAML:
//!
//! ```yaml
//! triangle_tolerance: 0.05
//! ellipse_samples_per_pixel: 2.0
//! ```

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use std::path::Path;

/// Tunables for the rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterConfig {
    /// Relative tolerance of the triangle containment test: a pixel is
    /// inside when the three sub-areas sum to the total area within
    /// `triangle_tolerance × area`.
    #[cfg_attr(feature = "config", serde(default = "default_triangle_tolerance"))]
    pub triangle_tolerance: f64,

    /// Triangles with a smaller area are degenerate: no fill, reduced stroke.
    #[cfg_attr(feature = "config", serde(default = "default_degenerate_area"))]
    pub degenerate_area: f64,

    /// Per-axis distance under which two triangle vertices coincide.
    #[cfg_attr(feature = "config", serde(default = "default_vertex_tolerance"))]
    pub vertex_tolerance: f64,

    /// Ellipse stroke samples per pixel of circumference.
    /// The sample count is `round(density · 2π · max(rx, ry))`.
    #[cfg_attr(feature = "config", serde(default = "default_ellipse_samples_per_pixel"))]
    pub ellipse_samples_per_pixel: f64,
}

const fn default_triangle_tolerance() -> f64 {
    0.1
}
const fn default_degenerate_area() -> f64 {
    0.01
}
const fn default_vertex_tolerance() -> f64 {
    0.1
}
const fn default_ellipse_samples_per_pixel() -> f64 {
    1.0
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            triangle_tolerance: default_triangle_tolerance(),
            degenerate_area: default_degenerate_area(),
            vertex_tolerance: default_vertex_tolerance(),
            ellipse_samples_per_pixel: default_ellipse_samples_per_pixel(),
        }
    }
}

impl RasterConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[cfg(feature = "config")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    #[cfg(feature = "config")]
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[cfg(feature = "config")]
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default raster config");
            Self::default()
        })
    }
}
