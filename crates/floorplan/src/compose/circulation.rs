//! The building envelope and the central circulation core.

use floorplan_core::{
    draw::{Figure, RectFigure},
    geometry::{Point, Size},
    primitives::Drafter,
};

use crate::blueprint::{
    BOTTOM, CORE_AXIS as CX, CORE_LEFT, CORE_RIGHT, INTERIOR_WALL as IW, LEFT, LOWER_ROW,
    OUTER_WALL as OW, RIGHT, ROW, SHARED_WALL as AW, TOP,
};

const T: f32 = TOP + OW;
const BT: f32 = BOTTOM - OW;
/// Inner faces of the core walls.
const INNER_LEFT: f32 = CORE_LEFT + OW;
const INNER_RIGHT: f32 = CORE_RIGHT - OW;
const INNER_WIDTH: f32 = INNER_RIGHT - INNER_LEFT;

const TREAD_SPACING: f32 = 5.0;
const UPPER_TREADS: usize = 10;
const LOWER_TREADS: usize = 12;
const SHAFT_WIDTH: f32 = 25.0;
const SHAFT_DEPTH: f32 = 35.0;

/// Perimeter walls plus the two walls bounding the core.
pub(super) fn envelope(d: &Drafter) -> Figure {
    let height = BOTTOM - TOP;
    Figure::group(vec![
        d.wall(LEFT, TOP, RIGHT - LEFT, OW),
        d.wall(LEFT, BOTTOM - OW, RIGHT - LEFT, OW),
        d.wall(LEFT, TOP, OW, height),
        d.wall(RIGHT - OW, TOP, OW, height),
        d.wall(CORE_LEFT - AW, TOP, AW, height),
        d.wall(CORE_RIGHT, TOP, AW, height),
    ])
}

/// Stairwells, elevator shafts, service rooms and the entrance marker.
pub(super) fn core(d: &Drafter) -> Figure {
    let p = d.palette();
    let shaft_top = LOWER_ROW + 4.0;

    let mut parts = vec![
        d.wall(CORE_LEFT, TOP, CORE_RIGHT - CORE_LEFT, BOTTOM - TOP),
        RectFigure::new(INNER_LEFT, T, Size::new(INNER_WIDTH, BT - T))
            .with_fill(p.background())
            .into(),
        stair_flight(d, T + 4.0, UPPER_TREADS),
        Figure::line(Point::new(CX, T + 2.0), Point::new(CX, T + 54.0), p.wall_stroke(0.6)),
        d.wall(INNER_LEFT, T + 58.0, INNER_WIDTH, IW),
        // Service rooms
        d.wall(INNER_LEFT, T + 58.0, IW, ROW - T - 58.0),
        d.wall(INNER_RIGHT - IW, T + 58.0, IW, ROW - T - 58.0),
        Figure::line(Point::new(CX, T + 60.0), Point::new(CX, ROW), p.line_stroke(0.4)),
        // Corridor
        d.wall(CORE_LEFT, ROW, CORE_RIGHT - CORE_LEFT, AW),
        d.wall(CORE_LEFT, LOWER_ROW - AW, CORE_RIGHT - CORE_LEFT, AW),
        elevator_shaft(d, INNER_LEFT + 4.0, shaft_top),
        elevator_shaft(d, INNER_RIGHT - 4.0 - SHAFT_WIDTH, shaft_top),
        d.wall(INNER_LEFT, LOWER_ROW + 44.0, INNER_WIDTH, IW),
        stair_flight(d, LOWER_ROW + 50.0, LOWER_TREADS),
        Figure::line(
            Point::new(CX, LOWER_ROW + 48.0),
            Point::new(CX, BT - 4.0),
            p.wall_stroke(0.6),
        ),
    ];

    parts.push(Figure::Polygon {
        points: vec![
            Point::new(CX, TOP - 8.0),
            Point::new(CX - 3.0, TOP - 1.0),
            Point::new(CX + 3.0, TOP - 1.0),
        ],
        stroke: p.wall_stroke(0.8),
    });

    Figure::group(parts)
}

/// Evenly spaced treads in the two channels either side of the core axis.
fn stair_flight(d: &Drafter, first_y: f32, treads: usize) -> Figure {
    let stroke = d.palette().line_stroke(0.4);
    let channels = [(INNER_LEFT + 4.0, CX - 2.0), (CX + 2.0, INNER_RIGHT - 4.0)];

    let lines = channels
        .into_iter()
        .flat_map(|(from_x, to_x)| {
            (0..treads).map(move |i| {
                let y = first_y + i as f32 * TREAD_SPACING;
                Figure::line(Point::new(from_x, y), Point::new(to_x, y), stroke)
            })
        })
        .collect();
    Figure::group(lines)
}

/// A shaft outline crossed by both diagonals.
fn elevator_shaft(d: &Drafter, x: f32, y: f32) -> Figure {
    let p = d.palette();
    let cross = p.line_stroke(0.4);
    let (right, bottom) = (x + SHAFT_WIDTH, y + SHAFT_DEPTH);

    Figure::group(vec![
        RectFigure::new(x, y, Size::new(SHAFT_WIDTH, SHAFT_DEPTH))
            .with_stroke(p.wall_stroke(1.2))
            .into(),
        Figure::line(Point::new(x, y), Point::new(right, bottom), cross),
        Figure::line(Point::new(right, y), Point::new(x, bottom), cross),
    ])
}
