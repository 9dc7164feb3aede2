//! Furniture and fixture icons.
//!
//! Icons are outline-only and use the furniture color from the palette. Inner
//! details are laid out with fixed offsets from the outer box, so icons are
//! meant to be drawn at roughly real-world scale (one unit per ~4 cm).

use std::f32::consts::FRAC_PI_4;

use super::{BedHead, Corner, Direction, Drafter, degenerate};
use crate::{
    draw::Figure,
    geometry::{Point, Size},
};

/// Depth of a kitchen counter run.
const COUNTER_DEPTH: f32 = 8.0;
/// Depth of a sofa backrest.
const SOFA_BACK: f32 = 3.5;

impl Drafter {
    /// A double bed with headboard, two pillows and a folded blanket.
    pub fn bed(&self, x: f32, y: f32, w: f32, h: f32, head: BedHead) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let p = &self.palette;
        let frame = self.outline(x, y, w, h, p.furniture_stroke(1.0), 1.5);

        let (headboard, pillows, blanket) = match head {
            BedHead::Top => (
                self.outline(x + 2.0, y + 1.5, w - 4.0, 3.5, p.furniture_stroke(0.7), 1.0),
                [
                    self.outline(x + 3.0, y + 6.5, w / 2.0 - 4.0, 5.0, p.furniture_stroke(0.5), 2.0),
                    self.outline(x + w / 2.0 + 1.0, y + 6.5, w / 2.0 - 4.0, 5.0, p.furniture_stroke(0.5), 2.0),
                ],
                self.outline(x + 3.0, y + 13.0, w - 6.0, h - 16.0, p.furniture_stroke(0.4), 3.0),
            ),
            BedHead::Left => (
                self.outline(x + 1.5, y + 2.0, 3.5, h - 4.0, p.furniture_stroke(0.7), 1.0),
                [
                    self.outline(x + 6.5, y + 3.0, 5.0, h / 2.0 - 4.0, p.furniture_stroke(0.5), 2.0),
                    self.outline(x + 6.5, y + h / 2.0 + 1.0, 5.0, h / 2.0 - 4.0, p.furniture_stroke(0.5), 2.0),
                ],
                self.outline(x + 13.0, y + 3.0, w - 16.0, h - 6.0, p.furniture_stroke(0.4), 3.0),
            ),
        };

        let [left_pillow, right_pillow] = pillows;
        Figure::group(vec![frame, headboard, left_pillow, right_pillow, blanket])
    }

    pub fn bathtub(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let p = &self.palette;
        Figure::group(vec![
            self.outline(x, y, w, h, p.furniture_stroke(1.0).with_width(p.furniture_line() + 0.15), 2.0),
            self.outline(x + 2.0, y + 2.0, w - 4.0, h - 4.0, p.furniture_stroke(0.4), 3.5),
            Figure::circle(Point::new(x + w - 5.0, y + h / 2.0), 1.3, p.furniture_hairline(0.35)),
        ])
    }

    /// A toilet: a 9x6 cistern with the bowl extending toward `facing`.
    pub fn wc(&self, x: f32, y: f32, facing: Direction) -> Figure {
        let stroke = self.palette.furniture_stroke(1.0);
        let (cistern, bowl_center, bowl_radii) = match facing {
            Direction::Down => ((x, y, 9.0, 6.0), (x + 4.5, y + 12.0), Size::new(5.0, 6.0)),
            Direction::Up => ((x, y + 12.0, 9.0, 6.0), (x + 4.5, y + 6.0), Size::new(5.0, 6.0)),
            Direction::Right => ((x, y, 6.0, 9.0), (x + 12.0, y + 4.5), Size::new(6.0, 5.0)),
            Direction::Left => ((x + 12.0, y, 6.0, 9.0), (x + 6.0, y + 4.5), Size::new(6.0, 5.0)),
        };
        let (cx, cy, cw, ch) = cistern;

        Figure::group(vec![
            self.outline(cx, cy, cw, ch, stroke, 1.0),
            Figure::Ellipse {
                center: Point::new(bowl_center.0, bowl_center.1),
                radii: bowl_radii,
                stroke,
            },
        ])
    }

    pub fn sink(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let p = &self.palette;
        Figure::group(vec![
            self.outline(x, y, w, h, p.furniture_stroke(0.7), 1.0),
            Figure::circle(
                Point::new(x + w / 2.0, y + h / 2.0),
                w.min(h) * 0.2,
                p.furniture_hairline(0.3),
            ),
        ])
    }

    /// A square washing machine with its drum.
    pub fn washer(&self, x: f32, y: f32, side: f32) -> Figure {
        if degenerate(side, side) {
            return Figure::empty();
        }
        let p = &self.palette;
        Figure::group(vec![
            self.outline(x, y, side, side, p.furniture_stroke(1.0), 1.0),
            Figure::circle(
                Point::new(x + side / 2.0, y + side / 2.0),
                side * 0.32,
                p.furniture_stroke(0.5),
            ),
        ])
    }

    /// An L-shaped kitchen counter hugging `corner` of the box, with a sink
    /// in the corner and a four-burner hob on the long run.
    pub fn kitchen_corner(&self, x: f32, y: f32, w: f32, h: f32, corner: Corner) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let d = COUNTER_DEPTH;
        let p = &self.palette;

        let coords: [(f32, f32); 6] = match corner {
            Corner::BottomLeft => [
                (x, y),
                (x + d, y),
                (x + d, y + h - d),
                (x + w, y + h - d),
                (x + w, y + h),
                (x, y + h),
            ],
            Corner::BottomRight => [
                (x + w, y),
                (x + w - d, y),
                (x + w - d, y + h - d),
                (x, y + h - d),
                (x, y + h),
                (x + w, y + h),
            ],
            Corner::TopLeft => [
                (x, y + h),
                (x + d, y + h),
                (x + d, y + d),
                (x + w, y + d),
                (x + w, y),
                (x, y),
            ],
            Corner::TopRight => [
                (x + w, y + h),
                (x + w - d, y + h),
                (x + w - d, y + d),
                (x, y + d),
                (x, y),
                (x + w, y),
            ],
        };

        let column_x = if corner.is_left() { x + d / 2.0 } else { x + w - d / 2.0 };
        let sink_y = if corner.is_top() { y + d / 2.0 } else { y + h - d / 2.0 };
        let hob_y = if corner.is_top() {
            y + h - d / 2.0 - 4.0
        } else {
            y + d / 2.0 + 4.0
        };

        let mut children = vec![
            Figure::Polygon {
                points: coords.iter().map(|&(px, py)| Point::new(px, py)).collect(),
                stroke: p.furniture_stroke(1.0).with_width(p.furniture_line() + 0.1),
            },
            Figure::circle(Point::new(column_x, sink_y), 2.5, p.furniture_hairline(0.35)),
        ];
        for (bx, by) in [(-2.0, -2.0), (2.0, -2.0), (-2.0, 2.0), (2.0, 2.0)] {
            children.push(Figure::circle(
                Point::new(column_x + bx, hob_y + by),
                1.3,
                p.furniture_hairline(0.25),
            ));
        }
        Figure::group(children)
    }

    /// A two-seat sofa with its backrest against `back`.
    pub fn sofa(&self, x: f32, y: f32, w: f32, h: f32, back: Direction) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let b = SOFA_BACK;
        let p = &self.palette;
        let rest = p.furniture_stroke(0.6);
        let cushion = p.furniture_hairline(0.25);

        let backrest = match back {
            Direction::Up => self.outline(x + 1.0, y + 1.0, w - 2.0, b, rest, 1.0),
            Direction::Down => self.outline(x + 1.0, y + h - b - 1.0, w - 2.0, b, rest, 1.0),
            Direction::Left => self.outline(x + 1.0, y + 1.0, b, h - 2.0, rest, 1.0),
            Direction::Right => self.outline(x + w - b - 1.0, y + 1.0, b, h - 2.0, rest, 1.0),
        };

        let cushions = match back {
            Direction::Up | Direction::Down => {
                let cy = if back == Direction::Up { y + b + 2.0 } else { y + 2.0 };
                let (cw, ch) = ((w - 6.0) / 2.0, h - b - 4.0);
                [
                    self.outline(x + 2.0, cy, cw, ch, cushion, 2.0),
                    self.outline(x + w / 2.0, cy, cw, ch, cushion, 2.0),
                ]
            }
            Direction::Left | Direction::Right => {
                let cx = if back == Direction::Left { x + b + 2.0 } else { x + 2.0 };
                let (cw, ch) = (w - b - 4.0, (h - 6.0) / 2.0);
                [
                    self.outline(cx, y + 2.0, cw, ch, cushion, 2.0),
                    self.outline(cx, y + h / 2.0, cw, ch, cushion, 2.0),
                ]
            }
        };

        let [first, second] = cushions;
        Figure::group(vec![
            self.outline(x, y, w, h, p.furniture_stroke(1.0), 1.5),
            backrest,
            first,
            second,
        ])
    }

    /// A wardrobe split in two across its longer side.
    pub fn wardrobe(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        let p = &self.palette;
        let divider = if w > h {
            Figure::line(
                Point::new(x + w / 2.0, y),
                Point::new(x + w / 2.0, y + h),
                p.furniture_hairline(0.25),
            )
        } else {
            Figure::line(
                Point::new(x, y + h / 2.0),
                Point::new(x + w, y + h / 2.0),
                p.furniture_hairline(0.25),
            )
        };
        Figure::group(vec![self.outline(x, y, w, h, p.furniture_stroke(1.0), 0.0), divider])
    }

    pub fn table(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        self.outline(x, y, w, h, self.palette.furniture_stroke(0.6), 1.0)
    }

    /// An eight-point star marking the split between two neighbouring balconies.
    ///
    /// Points alternate between radius `r` and `0.4 * r`, starting on the
    /// positive x axis.
    pub fn star_burst(&self, cx: f32, cy: f32, r: f32) -> Figure {
        if degenerate(r, r) {
            return Figure::empty();
        }
        let points = (0..8u8)
            .map(|i| {
                let angle = f32::from(i) * FRAC_PI_4;
                let rad = if i % 2 == 0 { r } else { r * 0.4 };
                Point::new(cx + rad * angle.cos(), cy + rad * angle.sin())
            })
            .collect();
        Figure::Polygon {
            points,
            stroke: self.palette.line_stroke(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::draw::{Palette, RectFigure};

    fn drafter() -> Drafter {
        Drafter::new(Palette::default())
    }

    fn rects(figure: &Figure) -> Vec<RectFigure> {
        figure
            .flatten()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Figure::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_bed_details() {
        let bed = drafter().bed(36.0, 22.0, 30.0, 40.0, BedHead::Top);
        let parts = rects(&bed);
        assert_eq!(parts.len(), 5);

        let headboard = parts[1].bounds();
        assert_eq!(headboard.min_x(), 38.0);
        assert_eq!(headboard.height(), 3.5);

        let blanket = parts[4].bounds();
        assert_eq!(blanket.min_y(), 35.0);
        assert_eq!(blanket.height(), 24.0);
        assert_eq!(parts[4].corner_radius(), 3.0);
    }

    #[test]
    fn test_bed_head_left_transposes_layout() {
        let bed = drafter().bed(0.0, 0.0, 40.0, 30.0, BedHead::Left);
        let parts = rects(&bed);

        let headboard = parts[1].bounds();
        assert_eq!(headboard.width(), 3.5);
        assert_eq!(headboard.height(), 26.0);

        let pillow = parts[2].bounds();
        assert_eq!(pillow.min_x(), 6.5);
        assert_eq!(pillow.height(), 11.0);
    }

    #[test]
    fn test_small_bed_details_collapse_without_panic() {
        let bed = drafter().bed(0.0, 0.0, 6.0, 10.0, BedHead::Top);
        for part in rects(&bed) {
            assert!(part.bounds().width() >= 0.0);
            assert!(part.bounds().height() >= 0.0);
        }
    }

    #[test]
    fn test_bathtub_outline_is_heavier() {
        let tub = drafter().bathtub(0.0, 0.0, 16.0, 30.0);
        let parts = rects(&tub);
        let stroke = parts[0].stroke().expect("outline has a stroke");
        assert!(approx_eq!(f32, stroke.width(), 0.7, epsilon = 1e-6));

        let Figure::Circle { center, radius, .. } = tub.flatten()[2] else {
            panic!("drain is a circle");
        };
        assert_eq!(center, Point::new(11.0, 15.0));
        assert_eq!(radius, 1.3);
    }

    #[test]
    fn test_wc_facing_variants() {
        let d = drafter();
        for (facing, cistern) in [
            (Direction::Down, (0.0, 0.0, 9.0, 6.0)),
            (Direction::Up, (0.0, 12.0, 9.0, 6.0)),
            (Direction::Right, (0.0, 0.0, 6.0, 9.0)),
            (Direction::Left, (12.0, 0.0, 6.0, 9.0)),
        ] {
            let wc = d.wc(0.0, 0.0, facing);
            let bounds = rects(&wc)[0].bounds();
            assert_eq!(
                (bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height()),
                cistern,
                "{facing:?}"
            );
        }
    }

    #[test]
    fn test_sink_and_washer_circles() {
        let d = drafter();
        let Figure::Circle { radius, .. } = d.sink(0.0, 0.0, 10.0, 6.0).flatten()[1] else {
            panic!("basin is a circle");
        };
        assert!(approx_eq!(f32, radius, 1.2, epsilon = 1e-6));

        let Figure::Circle { center, radius, .. } = d.washer(10.0, 10.0, 10.0).flatten()[1] else {
            panic!("drum is a circle");
        };
        assert_eq!(center, Point::new(15.0, 15.0));
        assert!(approx_eq!(f32, radius, 3.2, epsilon = 1e-6));
    }

    #[test]
    fn test_kitchen_corner_hugs_corner() {
        let kitchen = drafter().kitchen_corner(100.0, 50.0, 40.0, 30.0, Corner::BottomLeft);
        let leaves = kitchen.flatten();
        assert_eq!(leaves.len(), 6);

        let Figure::Polygon { points, .. } = &leaves[0] else {
            panic!("counter is a polygon");
        };
        assert_eq!(points.len(), 6);
        assert_eq!(points[3], Point::new(140.0, 72.0));

        let Figure::Circle { center, .. } = leaves[1] else {
            panic!("sink is a circle");
        };
        assert_eq!(center, Point::new(104.0, 76.0));

        // Hob sits on the long run, away from the sink
        let Figure::Circle { center, .. } = leaves[2] else {
            panic!("burner is a circle");
        };
        assert_eq!(center, Point::new(102.0, 56.0));
    }

    #[test]
    fn test_sofa_backrest_side() {
        let d = drafter();
        let sofa = d.sofa(0.0, 0.0, 30.0, 12.0, Direction::Down);
        let backrest = rects(&sofa)[1].bounds();
        assert_eq!(backrest.min_y(), 7.5);
        assert_eq!(backrest.height(), 3.5);

        let sofa = d.sofa(0.0, 0.0, 12.0, 30.0, Direction::Right);
        let parts = rects(&sofa);
        assert_eq!(parts[1].bounds().min_x(), 7.5);
        assert_eq!(parts[2].bounds().min_x(), 2.0);
        assert_eq!(parts[3].bounds().min_y(), 15.0);
    }

    #[test]
    fn test_wardrobe_divider_splits_long_side() {
        let d = drafter();
        let Figure::Line { from, to, .. } = d.wardrobe(0.0, 0.0, 30.0, 8.0).flatten()[1] else {
            panic!("divider is a line");
        };
        assert_eq!(from.x(), to.x());
        assert_eq!(from.x(), 15.0);

        let Figure::Line { from, to, .. } = d.wardrobe(0.0, 0.0, 8.0, 30.0).flatten()[1] else {
            panic!("divider is a line");
        };
        assert_eq!(from.y(), to.y());
    }

    #[test]
    fn test_star_burst_alternates_radius() {
        let star = drafter().star_burst(100.0, 100.0, 5.0);
        let Figure::Polygon { points, .. } = &star else {
            panic!("star is a polygon");
        };
        assert_eq!(points.len(), 8);
        assert!(approx_eq!(f32, points[0].x(), 105.0, epsilon = 1e-4));
        let inner = points[1].sub_point(Point::new(100.0, 100.0));
        assert!(approx_eq!(f32, inner.x().hypot(inner.y()), 2.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, points[2].y(), 105.0, epsilon = 1e-4));
    }

    #[test]
    fn test_degenerate_furniture_is_empty() {
        let d = drafter();
        assert!(d.bathtub(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(d.washer(0.0, 0.0, -2.0).is_empty());
        assert!(d.sofa(0.0, 0.0, 10.0, f32::NAN, Direction::Up).is_empty());
        assert!(d.star_burst(0.0, 0.0, 0.0).is_empty());
        assert!(d.kitchen_corner(0.0, 0.0, 0.0, 0.0, Corner::TopLeft).is_empty());
    }
}
