//! Stroke definitions.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#7a86a0"`, `0.5` |
//! | `width` | `stroke-width` | `0.4` |
//!
//! Plan drawings only use solid strokes. Line weight carries the meaning:
//! walls are heavy, furniture outlines are a fraction of the base line.

use crate::color::Color;

/// A solid stroke for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use floorplan_core::draw::StrokeDefinition;
/// use floorplan_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("#7a86a0").unwrap(), 0.4);
/// assert_eq!(stroke.width(), 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke. Negative or non-finite widths become zero.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width: sanitize_width(width),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this stroke with a different width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = sanitize_width(width);
        self
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use floorplan_core::draw::StrokeDefinition;
/// use floorplan_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = floorplan_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().opaque().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
