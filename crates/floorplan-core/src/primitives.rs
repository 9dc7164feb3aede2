//! Drawing primitives for architectural floor plans.
//!
//! Every primitive is a pure function of its numeric parameters and the
//! [`Palette`] held by the [`Drafter`]: the same inputs always produce the same
//! [`Figure`], and nothing is read from or written to shared state. Figures carry
//! no generated keys; callers that need stable identifiers derive them from their
//! own context.
//!
//! Degenerate parameters (zero, negative or non-finite sizes) never panic. The
//! primitive returns [`Figure::empty`] instead, and nested details of small
//! furniture collapse to zero-sized shapes.
//!
//! # Example
//!
//! ```
//! # use floorplan_core::primitives::{Drafter, Orientation, Direction, Hinge};
//! # use floorplan_core::draw::Palette;
//! let drafter = Drafter::new(Palette::default());
//!
//! let wall = drafter.wall(30.0, 15.0, 940.0, 5.0);
//! let door = drafter.door(65.0, 87.0, 14.0, Orientation::Horizontal, Direction::Down, Hinge::Left);
//! assert_eq!(door, drafter.door(65.0, 87.0, 14.0, Orientation::Horizontal, Direction::Down, Hinge::Left));
//! assert!(drafter.wall(0.0, 0.0, 0.0, 10.0).is_empty());
//! # let _ = wall;
//! ```

mod architecture;
mod furniture;

use crate::{
    draw::{Figure, Palette, RectFigure, StrokeDefinition},
    geometry::Size,
};

/// Run direction of a door or window along a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The opening lies in a horizontal wall.
    Horizontal,
    /// The opening lies in a vertical wall.
    Vertical,
}

/// A direction in diagram space.
///
/// Used for door swings, the side a toilet bowl faces and the side a sofa back
/// rests against. A door swing that does not apply to its orientation (such as
/// `Left` on a horizontal door) opens toward negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Side of a door opening the leaf is hinged on.
///
/// For vertical doors `Left` is the top end of the opening and `Right` the bottom end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hinge {
    Left,
    Right,
}

/// Which corner of a bounding box an L-shaped element occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Where the headboard of a bed is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedHead {
    Top,
    Left,
}

/// Produces primitive figures in a fixed [`Palette`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Drafter {
    palette: Palette,
}

impl Drafter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Outline-only rectangle; the shared building block of furniture icons.
    fn outline(&self, x: f32, y: f32, w: f32, h: f32, stroke: StrokeDefinition, rx: f32) -> Figure {
        RectFigure::new(x, y, Size::new(w, h))
            .with_stroke(stroke)
            .with_corner_radius(rx)
            .into()
    }
}

/// Returns true when a box of the given size cannot be drawn.
fn degenerate(w: f32, h: f32) -> bool {
    Size::new(w, h).is_degenerate()
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn drafter() -> Drafter {
        Drafter::new(Palette::default())
    }

    fn any_size() -> impl Strategy<Value = f32> {
        prop_oneof![
            Just(0.0f32),
            Just(-3.0f32),
            Just(f32::NAN),
            -50.0f32..200.0,
        ]
    }

    fn check_primitives_are_deterministic(
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<(), TestCaseError> {
        let d = drafter();
        prop_assert_eq!(d.wall(x, y, w, h), d.wall(x, y, w, h));
        prop_assert_eq!(d.bed(x, y, w, h, BedHead::Top), d.bed(x, y, w, h, BedHead::Top));
        prop_assert_eq!(
            d.kitchen_corner(x, y, w, h, Corner::BottomLeft),
            d.kitchen_corner(x, y, w, h, Corner::BottomLeft)
        );
        prop_assert_eq!(
            d.sofa(x, y, w, h, Direction::Left),
            d.sofa(x, y, w, h, Direction::Left)
        );
        Ok(())
    }

    fn check_primitives_never_panic(x: f32, y: f32, w: f32, h: f32) -> Result<(), TestCaseError> {
        let d = drafter();
        let figures = [
            d.wall(x, y, w, h),
            d.door(x, y, w, Orientation::Vertical, Direction::Right, Hinge::Right),
            d.window_h(x, y, w, h),
            d.window_v(x, y, w, h),
            d.bed(x, y, w, h, BedHead::Left),
            d.bathtub(x, y, w, h),
            d.wc(x, y, Direction::Up),
            d.sink(x, y, w, h),
            d.washer(x, y, w),
            d.kitchen_corner(x, y, w, h, Corner::TopRight),
            d.sofa(x, y, w, h, Direction::Down),
            d.wardrobe(x, y, w, h),
            d.table(x, y, w, h),
            d.star_burst(x, y, w),
            d.balcony(x, y, w, h),
        ];

        for figure in &figures {
            for leaf in figure.flatten() {
                if let Some(bounds) = leaf.bounds() {
                    prop_assert!(bounds.width() >= 0.0 || bounds.width().is_nan());
                    prop_assert!(bounds.height() >= 0.0 || bounds.height().is_nan());
                }
            }
        }

        if degenerate(w, h) {
            prop_assert!(d.wall(x, y, w, h).is_empty());
            prop_assert!(d.bed(x, y, w, h, BedHead::Top).is_empty());
            prop_assert!(d.table(x, y, w, h).is_empty());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn primitives_are_deterministic(x in 0.0f32..1000.0, y in 0.0f32..340.0, w in any_size(), h in any_size()) {
            check_primitives_are_deterministic(x, y, w, h)?;
        }

        #[test]
        fn primitives_never_panic(x in 0.0f32..1000.0, y in 0.0f32..340.0, w in any_size(), h in any_size()) {
            check_primitives_never_panic(x, y, w, h)?;
        }
    }
}
