//! Color handling for floor plan diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in drawing code and configuration files.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a string is not a valid CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

impl ColorError {
    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Wrapper around the `DynamicColor` type from the color crate
///
/// Deserializes from any CSS color string, so palettes and status styles can be
/// written directly in configuration files.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgba(34, 197, 94, 0.25)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let wall = Color::new("#c8d0e0").unwrap();
    /// let zone = Color::new("rgba(34, 197, 94, 0.25)").unwrap();
    /// assert!((zone.alpha() - 0.25).abs() < 0.001);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// 0.0 is fully transparent and 1.0 fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// The same color fully opaque.
    ///
    /// SVG output writes the opaque color and its alpha as separate
    /// `*-opacity` attributes, so translucency is applied once.
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
