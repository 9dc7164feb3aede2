//! The authored left wing: partitions, openings and furniture of five units.
//!
//! This is one hand-drawn layout, not a per-unit-type template. The right wing
//! is never drawn from here directly; it is this figure under a mirror transform.

use floorplan_core::{
    draw::Figure,
    primitives::{BedHead, Corner, Direction, Drafter, Hinge, Orientation},
};

use crate::blueprint::{
    BOTTOM, CORE_LEFT, INTERIOR_WALL as IW, LEFT, LOWER_ROW, OUTER_WALL as OW, ROW,
    SHARED_WALL as AW, TOP, partitions,
};

/// Inner face of the top envelope wall.
const T: f32 = TOP + OW;
/// Inner face of the bottom envelope wall.
const BT: f32 = BOTTOM - OW;
/// Inner face of the facade wall.
const L: f32 = LEFT + OW;
/// Wet-room partition line of the upper row.
const UPPER_SPLIT: f32 = 85.0;
/// Wet-room partition line of the lower row.
const LOWER_SPLIT: f32 = 240.0;
/// Corridor side of the wall bounding the core.
const CLE: f32 = CORE_LEFT - AW;
/// Depth of balcony slabs below the facade.
const BALCONY_DEPTH: f32 = 12.0;
/// Radius of the stars separating neighbouring balconies.
const STAR_RADIUS: f32 = 7.0;

const X1: f32 = partitions::UPPER_FIRST;
const X2: f32 = partitions::UPPER_SECOND;
const X3: f32 = partitions::LOWER;

/// Draws the left wing as one figure.
pub(super) fn left_wing(drafter: &Drafter) -> Figure {
    let sketch = Sketch { d: drafter };
    Figure::group(vec![
        sketch.corridor(),
        sketch.corner_studio(),
        sketch.middle_two_room(),
        sketch.stair_studio(),
        sketch.corner_three_room(),
        sketch.lower_two_room(),
    ])
}

struct Sketch<'a> {
    d: &'a Drafter,
}

impl Sketch<'_> {
    fn door(&self, x: f32, y: f32, size: f32, direction: Direction, hinge: Hinge) -> Figure {
        self.d
            .door(x, y, size, Orientation::Horizontal, direction, hinge)
    }

    /// Full-height partition from the upper split line down to the corridor.
    fn upper_partition(&self, x: f32) -> Figure {
        self.d
            .wall(x, UPPER_SPLIT + IW, IW, ROW - UPPER_SPLIT - IW)
    }

    /// Partition from the lower split line down to the facade.
    fn lower_partition(&self, x: f32) -> Figure {
        self.d
            .wall(x, LOWER_SPLIT + IW, IW, BT - LOWER_SPLIT - IW)
    }

    fn balcony(&self, x: f32, w: f32) -> Figure {
        self.d.balcony(x, BOTTOM, w, BALCONY_DEPTH)
    }

    fn star(&self, cx: f32) -> Figure {
        self.d
            .star_burst(cx, BOTTOM + BALCONY_DEPTH / 2.0, STAR_RADIUS)
    }

    /// Corridor walls and the shared walls between units.
    fn corridor(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(L, ROW, CLE - L, AW),
            d.wall(L, LOWER_ROW - AW, CLE - L, AW),
            d.wall(X1 - AW / 2.0, T, AW, ROW - T),
            d.wall(X2 - AW / 2.0, T, AW, ROW - T),
            d.wall(X3 - AW / 2.0, LOWER_ROW, AW, BT - LOWER_ROW),
        ])
    }

    /// Slot 0: one-room corner unit.
    fn corner_studio(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(L, UPPER_SPLIT, X1 - AW / 2.0 - L, IW),
            self.upper_partition(100.0),
            d.window_h(55.0, TOP, 30.0, OW),
            d.window_h(110.0, TOP, 22.0, OW),
            d.window_v(LEFT, 40.0, OW, 28.0),
            d.window_v(LEFT, 90.0, OW, 28.0),
            self.door(65.0, UPPER_SPLIT + IW, 14.0, Direction::Down, Hinge::Left),
            self.door(110.0, UPPER_SPLIT + IW, 11.0, Direction::Down, Hinge::Left),
            self.door(130.0, ROW, 14.0, Direction::Up, Hinge::Right),
            d.bed(44.0, 24.0, 40.0, 48.0, BedHead::Top),
            d.wardrobe(92.0, T + 2.0, 40.0, 7.0),
            d.kitchen_corner(L + 2.0, 90.0, 52.0, ROW - 94.0, Corner::BottomLeft),
            d.table(50.0, ROW - 28.0, 16.0, 12.0),
            d.bathtub(104.0, 90.0, 28.0, 12.0),
            d.sink(108.0, 106.0, 9.0, 6.0),
            d.wc(L + 2.0, 130.0, Direction::Right),
        ])
    }

    /// Slot 1: two-room unit in the middle of the upper row.
    fn middle_two_room(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(X1 + AW / 2.0, UPPER_SPLIT, X2 - X1 - AW, IW),
            d.wall(X1 + 80.0, T, IW, UPPER_SPLIT - T),
            self.upper_partition(X1 + 50.0),
            self.upper_partition(X1 + 110.0),
            d.window_h(X1 + 15.0, TOP, 28.0, OW),
            d.window_h(X1 + 95.0, TOP, 28.0, OW),
            d.window_h(X1 + 140.0, TOP, 20.0, OW),
            self.door(X1 + 15.0, UPPER_SPLIT + IW, 15.0, Direction::Down, Hinge::Left),
            self.door(X1 + 62.0, UPPER_SPLIT + IW, 12.0, Direction::Down, Hinge::Left),
            self.door(X1 + 120.0, UPPER_SPLIT + IW, 11.0, Direction::Down, Hinge::Right),
            self.door(X1 + 140.0, ROW, 14.0, Direction::Up, Hinge::Left),
            d.bed(X1 + 8.0, 24.0, 40.0, 48.0, BedHead::Top),
            d.wardrobe(X1 + 52.0, T + 2.0, 22.0, 7.0),
            d.bed(X1 + 88.0, 24.0, 40.0, 48.0, BedHead::Top),
            d.wardrobe(X1 + 132.0, T + 2.0, 25.0, 7.0),
            d.kitchen_corner(X1 + AW / 2.0 + 2.0, 90.0, 42.0, ROW - 94.0, Corner::BottomLeft),
            d.table(X1 + 22.0, ROW - 28.0, 14.0, 12.0),
            d.bathtub(X1 + 56.0, 90.0, 48.0, 12.0),
            d.sink(X1 + 60.0, 106.0, 9.0, 6.0),
            d.wc(X1 + 114.0, 92.0, Direction::Down),
            d.washer(X1 + 116.0, 118.0, 10.0),
        ])
    }

    /// Slot 2: one-room unit next to the stairs.
    fn stair_studio(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(X2 + AW / 2.0, UPPER_SPLIT, CLE - X2 - AW / 2.0, IW),
            self.upper_partition(X2 + 60.0),
            d.window_h(X2 + 15.0, TOP, 25.0, OW),
            d.window_h(X2 + 62.0, TOP, 25.0, OW),
            self.door(X2 + 15.0, UPPER_SPLIT + IW, 14.0, Direction::Down, Hinge::Left),
            self.door(X2 + 68.0, UPPER_SPLIT + IW, 11.0, Direction::Down, Hinge::Right),
            self.door(X2 + 50.0, ROW, 14.0, Direction::Up, Hinge::Left),
            d.bed(X2 + 8.0, 24.0, 38.0, 48.0, BedHead::Top),
            d.wardrobe(X2 + 50.0, T + 2.0, 38.0, 7.0),
            d.kitchen_corner(X2 + AW / 2.0 + 2.0, 90.0, 50.0, ROW - 94.0, Corner::BottomLeft),
            d.table(X2 + 24.0, ROW - 28.0, 14.0, 12.0),
            d.bathtub(X2 + 66.0, 90.0, 22.0, 12.0),
            d.wc(X2 + 70.0, 108.0, Direction::Down),
        ])
    }

    /// Slot 3: three-room corner unit with balconies.
    fn corner_three_room(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(L, LOWER_SPLIT, X3 - AW / 2.0 - L, IW),
            d.wall(130.0, LOWER_ROW, IW, LOWER_SPLIT - LOWER_ROW),
            d.wall(200.0, LOWER_ROW, IW, LOWER_SPLIT - LOWER_ROW),
            self.lower_partition(100.0),
            self.lower_partition(160.0),
            d.window_h(50.0, BOTTOM - OW, 30.0, OW),
            d.window_h(110.0, BOTTOM - OW, 22.0, OW),
            d.window_h(170.0, BOTTOM - OW, 22.0, OW),
            d.window_v(LEFT, LOWER_ROW + 15.0, OW, 30.0),
            d.window_v(LEFT, 252.0, OW, 28.0),
            self.door(60.0, LOWER_SPLIT, 16.0, Direction::Up, Hinge::Left),
            self.door(140.0, LOWER_SPLIT, 12.0, Direction::Up, Hinge::Left),
            self.door(168.0, LOWER_SPLIT, 10.0, Direction::Up, Hinge::Right),
            self.door(210.0, LOWER_ROW, 14.0, Direction::Down, Hinge::Right),
            d.bed(L + 4.0, LOWER_ROW + 10.0, 48.0, 40.0, BedHead::Left),
            d.wardrobe(L + 4.0, LOWER_ROW + 2.0, 55.0, 7.0),
            d.sofa(L + 4.0, LOWER_SPLIT - 20.0, 50.0, 18.0, Direction::Left),
            d.bed(134.0, LOWER_ROW + 10.0, 44.0, 38.0, BedHead::Left),
            d.wardrobe(134.0, LOWER_ROW + 2.0, 60.0, 7.0),
            d.bed(204.0, LOWER_ROW + 10.0, 44.0, 38.0, BedHead::Left),
            d.sofa(204.0, 210.0, 44.0, 18.0, Direction::Left),
            d.table(210.0, 230.0, 18.0, 8.0),
            d.kitchen_corner(L + 2.0, 248.0, 60.0, BT - 250.0, Corner::BottomLeft),
            d.table(55.0, BT - 32.0, 16.0, 12.0),
            d.bathtub(106.0, 248.0, 46.0, 12.0),
            d.sink(112.0, 264.0, 9.0, 6.0),
            d.wc(166.0, 250.0, Direction::Down),
            d.washer(168.0, 278.0, 10.0),
            d.wardrobe(204.0, 248.0, 7.0, 48.0),
            self.balcony(50.0, 55.0),
            self.star(110.0),
            self.balcony(116.0, 52.0),
            self.star(174.0),
            self.balcony(180.0, 38.0),
        ])
    }

    /// Slot 4: two-room unit in the lower row next to the core.
    fn lower_two_room(&self) -> Figure {
        let d = self.d;
        Figure::group(vec![
            d.wall(X3 + AW / 2.0, LOWER_SPLIT, CLE - X3 - AW / 2.0, IW),
            d.wall(X3 + 100.0, LOWER_ROW, IW, LOWER_SPLIT - LOWER_ROW),
            self.lower_partition(X3 + 55.0),
            self.lower_partition(X3 + 115.0),
            self.lower_partition(X3 + 160.0),
            d.window_h(X3 + 15.0, BOTTOM - OW, 28.0, OW),
            d.window_h(X3 + 70.0, BOTTOM - OW, 25.0, OW),
            d.window_h(X3 + 130.0, BOTTOM - OW, 25.0, OW),
            self.door(X3 + 30.0, LOWER_SPLIT, 16.0, Direction::Up, Hinge::Left),
            self.door(X3 + 65.0, LOWER_SPLIT, 12.0, Direction::Up, Hinge::Left),
            self.door(X3 + 125.0, LOWER_SPLIT, 10.0, Direction::Up, Hinge::Right),
            self.door(X3 + 135.0, LOWER_ROW, 14.0, Direction::Down, Hinge::Right),
            d.bed(X3 + 8.0, LOWER_ROW + 10.0, 48.0, 40.0, BedHead::Left),
            d.wardrobe(X3 + 8.0, LOWER_ROW + 2.0, 85.0, 7.0),
            d.bed(X3 + 106.0, LOWER_ROW + 10.0, 46.0, 38.0, BedHead::Left),
            d.sofa(X3 + 106.0, 210.0, 42.0, 18.0, Direction::Left),
            d.table(X3 + 116.0, 230.0, 16.0, 8.0),
            d.kitchen_corner(X3 + AW / 2.0 + 2.0, 248.0, 46.0, BT - 250.0, Corner::BottomLeft),
            d.table(X3 + 25.0, BT - 32.0, 14.0, 12.0),
            d.bathtub(X3 + 60.0, 248.0, 48.0, 12.0),
            d.sink(X3 + 66.0, 264.0, 9.0, 6.0),
            d.wc(X3 + 120.0, 250.0, Direction::Down),
            d.washer(X3 + 122.0, 278.0, 10.0),
            d.wardrobe(X3 + 164.0, 248.0, 7.0, 48.0),
            self.balcony(X3 + 12.0, 50.0),
            self.star(X3 + 68.0),
            self.balcony(X3 + 74.0, 48.0),
            self.star(X3 + 128.0),
            self.balcony(X3 + 134.0, 50.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::draw::Palette;

    use super::*;
    use crate::blueprint::{CORE_AXIS, LEFT_ZONES};

    fn wing() -> Figure {
        left_wing(&Drafter::new(Palette::default()))
    }

    #[test]
    fn test_wing_stays_left_of_core() {
        for leaf in wing().flatten() {
            let bounds = leaf.bounds().expect("leaves have bounds");
            assert!(bounds.max_x() <= CORE_LEFT, "{leaf:?} crosses into the core");
            assert!(bounds.max_x() < CORE_AXIS);
        }
    }

    #[test]
    fn test_wing_has_no_empty_leaves() {
        let leaves = wing().flatten();
        assert!(leaves.len() > 150);
        assert!(leaves.iter().all(|leaf| !leaf.is_empty()));
    }

    #[test]
    fn test_each_unit_group_sits_in_its_zone() {
        let Figure::Group(group) = wing() else {
            panic!("wing is a group");
        };
        let units = &group.children()[1..];
        assert_eq!(units.len(), LEFT_ZONES.len());

        for (unit, zone) in units.iter().zip(LEFT_ZONES) {
            let center = unit
                .flatten()
                .iter()
                .filter_map(Figure::bounds)
                .filter(|b| b.max_y() <= BOTTOM)
                .reduce(|acc, b| acc.merge(&b))
                .expect("unit has content")
                .center();
            assert!(zone.bounds().contains(center), "{center:?} outside {zone:?}");
        }
    }
}
