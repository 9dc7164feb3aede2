//! Geometry Table: the fixed dimensions of the building.
//!
//! Every coordinate the composer uses is derived from the constants here, so
//! moving a wall means editing one value.
//!
//! ```text
//!  L(30)                       CL(460) CR(540)                      R(970)
//!  ┌──────┬─────────┬──────────┬───────┬──────────┬─────────┬──────┐ T(15)
//!  │  l0  │   l1    │    l2    │ stair │    r2    │   r1    │  r0  │
//!  ├──────┴─────────┴──────────┤       ├──────────┴─────────┴──────┤ ROW(160)
//!  │         corridor          │ lifts │         corridor          │
//!  ├────────────┬──────────────┤       ├──────────────┬────────────┤ ROW+12
//!  │     l3     │      l4      │ stair │      r4      │     r3     │
//!  └────────────┴──────────────┴───────┴──────────────┴────────────┘ B(315)
//! ```

use floorplan_core::geometry::Bounds;

/// Width of the drawing coordinate space.
pub const VIEW_WIDTH: f32 = 1000.0;
/// Height of the drawing coordinate space.
pub const VIEW_HEIGHT: f32 = 340.0;

/// Left edge of the building envelope.
pub const LEFT: f32 = 30.0;
/// Right edge of the building envelope.
pub const RIGHT: f32 = 970.0;
/// Top edge of the building envelope.
pub const TOP: f32 = 15.0;
/// Bottom edge of the building envelope.
pub const BOTTOM: f32 = 315.0;

/// Left wall of the circulation core.
pub const CORE_LEFT: f32 = 460.0;
/// Right wall of the circulation core.
pub const CORE_RIGHT: f32 = 540.0;
/// Vertical axis of the core.
pub const CORE_AXIS: f32 = (CORE_LEFT + CORE_RIGHT) / 2.0;

/// Top edge of the corridor band separating the two rows of units.
pub const ROW: f32 = 160.0;
/// Height of the corridor band.
pub const CORRIDOR_HEIGHT: f32 = 12.0;
/// Top edge of the bottom row.
pub const LOWER_ROW: f32 = ROW + CORRIDOR_HEIGHT;

pub const OUTER_WALL: f32 = 5.0;
pub const SHARED_WALL: f32 = 4.0;
pub const INTERIOR_WALL: f32 = 2.0;

/// Widths of the upper-row units of one wing, from the facade inwards.
const UPPER_WIDTHS: [f32; 2] = [140.0, 168.0];
/// Width of the corner unit in the lower row.
const LOWER_CORNER_WIDTH: f32 = 228.0;

/// Number of unit slots in one wing.
pub const ZONES_PER_WING: usize = 5;
/// Number of unit slots on a floor.
pub const ZONES_PER_FLOOR: usize = ZONES_PER_WING * 2;

/// Side of the building a zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Prefix used in zone names.
    pub fn prefix(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }
}

/// A rectangular unit slot of the left wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Zone {
    const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// The five unit slots of the left wing, in binding order.
pub const LEFT_ZONES: [Zone; ZONES_PER_WING] = [
    Zone::new(LEFT, TOP, UPPER_WIDTHS[0], ROW - TOP),
    Zone::new(LEFT + UPPER_WIDTHS[0], TOP, UPPER_WIDTHS[1], ROW - TOP),
    Zone::new(
        LEFT + UPPER_WIDTHS[0] + UPPER_WIDTHS[1],
        TOP,
        CORE_LEFT - LEFT - UPPER_WIDTHS[0] - UPPER_WIDTHS[1],
        ROW - TOP,
    ),
    Zone::new(LEFT, LOWER_ROW, LOWER_CORNER_WIDTH, BOTTOM - LOWER_ROW),
    Zone::new(
        LEFT + LOWER_CORNER_WIDTH,
        LOWER_ROW,
        CORE_LEFT - LEFT - LOWER_CORNER_WIDTH,
        BOTTOM - LOWER_ROW,
    ),
];

/// Partition positions of the left wing, shared with the wing drawing.
pub(crate) mod partitions {
    use super::{LEFT, LOWER_CORNER_WIDTH, UPPER_WIDTHS};

    /// Wall between the corner and middle units of the upper row.
    pub const UPPER_FIRST: f32 = LEFT + UPPER_WIDTHS[0];
    /// Wall between the middle unit and the unit next to the stairs.
    pub const UPPER_SECOND: f32 = LEFT + UPPER_WIDTHS[0] + UPPER_WIDTHS[1];
    /// Wall between the two lower-row units.
    pub const LOWER: f32 = LEFT + LOWER_CORNER_WIDTH;
}

/// Bounds of a zone on the given side, or `None` past [`ZONES_PER_WING`].
///
/// Right-wing zones are the left-wing zones reflected about the vertical
/// center of the view box.
pub fn zone_bounds(side: Side, slot: usize) -> Option<Bounds> {
    let bounds = LEFT_ZONES.get(slot)?.bounds();
    Some(match side {
        Side::Left => bounds,
        Side::Right => bounds.reflect_x(VIEW_WIDTH),
    })
}

/// Bounds of the right-wing zone mirroring left slot `slot`.
pub fn mirror_zone(slot: usize) -> Option<Bounds> {
    zone_bounds(Side::Right, slot)
}

/// Side and slot a floor position binds to.
///
/// Positions 0 to 4 fill the left wing, 5 to 9 the right wing. Later
/// positions have no slot.
pub fn slot_for_position(position: usize) -> Option<(Side, usize)> {
    match position {
        p if p < ZONES_PER_WING => Some((Side::Left, p)),
        p if p < ZONES_PER_FLOOR => Some((Side::Right, p - ZONES_PER_WING)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_left_zones_match_layout() {
        let expected = [
            (30.0, 15.0, 140.0, 145.0),
            (170.0, 15.0, 168.0, 145.0),
            (338.0, 15.0, 122.0, 145.0),
            (30.0, 172.0, 228.0, 143.0),
            (258.0, 172.0, 202.0, 143.0),
        ];
        for (zone, (x, y, w, h)) in LEFT_ZONES.iter().zip(expected) {
            assert_approx_eq!(f32, zone.x, x);
            assert_approx_eq!(f32, zone.y, y);
            assert_approx_eq!(f32, zone.width, w);
            assert_approx_eq!(f32, zone.height, h);
        }
    }

    #[test]
    fn test_zones_tile_each_row_up_to_core() {
        let upper: f32 = LEFT_ZONES[..3].iter().map(|z| z.width).sum();
        let lower: f32 = LEFT_ZONES[3..].iter().map(|z| z.width).sum();
        assert_approx_eq!(f32, LEFT + upper, CORE_LEFT);
        assert_approx_eq!(f32, LEFT + lower, CORE_LEFT);
    }

    #[test]
    fn test_mirror_zone() {
        let right = mirror_zone(0).unwrap();
        assert_approx_eq!(f32, right.min_x(), 830.0);
        assert_approx_eq!(f32, right.max_x(), 970.0);
        assert_approx_eq!(f32, right.min_y(), 15.0);

        let inner = mirror_zone(4).unwrap();
        assert_approx_eq!(f32, inner.min_x(), CORE_RIGHT);
    }

    #[test]
    fn test_zone_bounds_out_of_range() {
        assert_eq!(zone_bounds(Side::Left, ZONES_PER_WING), None);
        assert_eq!(zone_bounds(Side::Right, 7), None);
        assert_eq!(mirror_zone(usize::MAX), None);
        assert_eq!(zone_bounds(Side::Left, 3), Some(LEFT_ZONES[3].bounds()));
    }

    #[test]
    fn test_envelope_is_symmetric_about_core_axis() {
        assert_approx_eq!(f32, CORE_AXIS, VIEW_WIDTH / 2.0);
        assert_approx_eq!(f32, LEFT + RIGHT, VIEW_WIDTH);
    }

    #[test]
    fn test_slot_for_position() {
        assert_eq!(slot_for_position(0), Some((Side::Left, 0)));
        assert_eq!(slot_for_position(4), Some((Side::Left, 4)));
        assert_eq!(slot_for_position(5), Some((Side::Right, 0)));
        assert_eq!(slot_for_position(9), Some((Side::Right, 4)));
        assert_eq!(slot_for_position(10), None);
    }
}
