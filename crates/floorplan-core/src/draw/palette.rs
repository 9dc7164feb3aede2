//! Colors and line weights shared by every drawing primitive.

use crate::{color::Color, draw::StrokeDefinition};

/// The visual vocabulary of a floor plan drawing.
///
/// A palette is passed by value into the [`Drafter`](crate::primitives::Drafter),
/// so primitives never consult any shared state to decide how they look.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::Palette;
/// # use floorplan_core::color::Color;
/// let palette = Palette::default().with_background(Color::new("white").unwrap());
/// assert_eq!(palette.furniture_line(), 0.55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    wall: Color,
    line: Color,
    furniture: Color,
    background: Color,
    furniture_line: f32,
}

impl Palette {
    /// Fill color of walls and the stroke color of door leaves.
    pub fn wall(&self) -> Color {
        self.wall
    }

    /// Color of thin lines: door swings, window panes, stair treads.
    pub fn line(&self) -> Color {
        self.line
    }

    /// Stroke color of furniture outlines.
    pub fn furniture(&self) -> Color {
        self.furniture
    }

    /// Diagram background; also used for window cut-outs in walls.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Base stroke width for furniture outlines.
    pub fn furniture_line(&self) -> f32 {
        self.furniture_line
    }

    /// Furniture stroke scaled from the base furniture line width.
    pub fn furniture_stroke(&self, factor: f32) -> StrokeDefinition {
        StrokeDefinition::solid(self.furniture, self.furniture_line * factor)
    }

    /// Furniture stroke with an absolute width.
    pub fn furniture_hairline(&self, width: f32) -> StrokeDefinition {
        StrokeDefinition::solid(self.furniture, width)
    }

    /// Thin line stroke with an absolute width.
    pub fn line_stroke(&self, width: f32) -> StrokeDefinition {
        StrokeDefinition::solid(self.line, width)
    }

    /// Wall colored stroke with an absolute width.
    pub fn wall_stroke(&self, width: f32) -> StrokeDefinition {
        StrokeDefinition::solid(self.wall, width)
    }

    pub fn with_wall(mut self, color: Color) -> Self {
        self.wall = color;
        self
    }

    pub fn with_line(mut self, color: Color) -> Self {
        self.line = color;
        self
    }

    pub fn with_furniture(mut self, color: Color) -> Self {
        self.furniture = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Color::new("#c8d0e0").expect("valid wall color"),
            line: Color::new("#7a86a0").expect("valid line color"),
            furniture: Color::new("#6a7690").expect("valid furniture color"),
            background: Color::new("#151d2e").expect("valid background color"),
            furniture_line: 0.55,
        }
    }
}
