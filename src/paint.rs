//! Paint state threaded into every draw call.

use crate::color::Rgba;

/// Fill and stroke settings in effect for one draw call.
///
/// Rasterizers only read this value. Callers that want processing-style
/// "current fill" semantics keep one around and update it between calls,
/// which is what [`Sketch`](crate::sketch::Sketch) does.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PaintState {
    /// Interior color.
    pub fill_color: Rgba,
    /// Outline color.
    pub stroke_color: Rgba,
    /// Whether the fill pass writes anything.
    pub fill_enabled: bool,
    /// Whether the stroke pass writes anything.
    pub stroke_enabled: bool,
    /// Outline thickness in pixels (non-negative).
    pub stroke_weight: f64,
}

impl Default for PaintState {
    /// White fill, black 1px stroke, both enabled.
    fn default() -> Self {
        Self {
            fill_color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            fill_enabled: true,
            stroke_enabled: true,
            stroke_weight: 1.0,
        }
    }
}

impl PaintState {
    /// Create the default paint state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set and enable the fill color.
    #[must_use]
    pub const fn with_fill(mut self, color: Rgba) -> Self {
        self.fill_color = color;
        self.fill_enabled = true;
        self
    }

    /// Disable the fill pass.
    #[must_use]
    pub const fn no_fill(mut self) -> Self {
        self.fill_enabled = false;
        self
    }

    /// Set and enable the stroke color.
    #[must_use]
    pub const fn with_stroke(mut self, color: Rgba) -> Self {
        self.stroke_color = color;
        self.stroke_enabled = true;
        self
    }

    /// Disable the stroke pass.
    #[must_use]
    pub const fn no_stroke(mut self) -> Self {
        self.stroke_enabled = false;
        self
    }

    /// Set the stroke weight.
    #[must_use]
    pub const fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paint() {
        let paint = PaintState::default();
        assert_eq!(paint.fill_color, Rgba::WHITE);
        assert_eq!(paint.stroke_color, Rgba::BLACK);
        assert!(paint.fill_enabled);
        assert!(paint.stroke_enabled);
        assert!((paint.stroke_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builders() {
        let paint = PaintState::new()
            .no_fill()
            .with_stroke(Rgba::RED)
            .with_stroke_weight(3.0);
        assert!(!paint.fill_enabled);
        assert_eq!(paint.stroke_color, Rgba::RED);
        assert!((paint.stroke_weight - 3.0).abs() < f64::EPSILON);

        let paint = paint.with_fill(Rgba::BLUE).no_stroke();
        assert!(paint.fill_enabled);
        assert_eq!(paint.fill_color, Rgba::BLUE);
        assert!(!paint.stroke_enabled);
    }
}
