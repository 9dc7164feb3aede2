//! Geometric primitives for floor plan drawing and hit-testing.
//!
//! This module provides the geometric types shared by the drawing primitives,
//! the composer and the interaction layer.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Floor plans use a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The right wing of a floor is produced by reflecting about the vertical line
//! `x = width / 2`, so every type here offers a `reflect_x(width)` operation.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Reflection across the centerline of a 1000 wide diagram
/// let mirrored = p1.reflect_x(1000.0);
/// assert_eq!(mirrored.x(), 990.0);
/// assert_eq!(mirrored.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Reflects the point about the vertical line `x = width / 2`.
    pub fn reflect_x(self, width: f32) -> Self {
        Self {
            x: width - self.x,
            y: self.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a size whose negative or non-finite dimensions are replaced by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use floorplan_core::geometry::Size;
    /// let size = Size::new(-4.0, f32::NAN).non_negative();
    /// assert_eq!(size, Size::new(0.0, 0.0));
    /// ```
    pub fn non_negative(self) -> Self {
        let clamp = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
        }
    }

    /// Returns true if the size encloses no area (either dimension zero,
    /// negative or not a number).
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds from the `x, y, width, height` quadruple used by SVG rectangles
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if the point lies inside the bounds or on its edge.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Reflects the bounds about the vertical line `x = width / 2`.
    ///
    /// A box at `(x, y, w, h)` maps to `(width - x - w, y, w, h)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use floorplan_core::geometry::Bounds;
    /// let zone = Bounds::from_rect(30.0, 15.0, 140.0, 145.0);
    /// let mirrored = zone.reflect_x(1000.0);
    /// assert_eq!(mirrored, Bounds::from_rect(830.0, 15.0, 140.0, 145.0));
    /// ```
    pub fn reflect_x(self, width: f32) -> Self {
        Self {
            min_x: width - self.max_x,
            min_y: self.min_y,
            max_x: width - self.min_x,
            max_y: self.max_y,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
