//! Walls, doors and windows.

use super::{Direction, Drafter, Hinge, Orientation, degenerate};
use crate::{
    draw::{Figure, RectFigure},
    geometry::{Point, Size},
};

/// Share of the door width the open leaf reaches across the swing.
const LEAF_REACH: f32 = 0.7;

impl Drafter {
    /// A solid wall segment.
    pub fn wall(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        RectFigure::new(x, y, Size::new(w, h))
            .with_fill(self.palette.wall())
            .into()
    }

    /// A door leaf with its quarter-circle swing.
    ///
    /// `(x, y)` is the start of the opening along the wall and `size` its width.
    /// Orientation and hinge select the pivot corner, `direction` the side of the
    /// wall the door opens into. The swing arc is always centered on the pivot.
    pub fn door(
        &self,
        x: f32,
        y: f32,
        size: f32,
        orientation: Orientation,
        direction: Direction,
        hinge: Hinge,
    ) -> Figure {
        if degenerate(size, size) {
            return Figure::empty();
        }

        let leaf = self.palette.wall_stroke(1.0);
        let swing = self.palette.line_stroke(0.4);
        let hinge_sign = match hinge {
            Hinge::Left => 1.0,
            Hinge::Right => -1.0,
        };

        match orientation {
            Orientation::Horizontal => {
                let (hinge_x, open_x) = match hinge {
                    Hinge::Left => (x, x + size),
                    Hinge::Right => (x + size, x),
                };
                let dy = if direction == Direction::Down { 1.0 } else { -1.0 };

                Figure::group(vec![
                    Figure::line(
                        Point::new(hinge_x, y),
                        Point::new(open_x, y + dy * size * LEAF_REACH),
                        leaf,
                    ),
                    Figure::Arc {
                        from: Point::new(open_x, y),
                        to: Point::new(hinge_x, y + dy * size),
                        radius: size,
                        sweep: dy * hinge_sign > 0.0,
                        stroke: swing,
                    },
                ])
            }
            Orientation::Vertical => {
                let (hinge_y, open_y) = match hinge {
                    Hinge::Left => (y, y + size),
                    Hinge::Right => (y + size, y),
                };
                let dx = if direction == Direction::Right { 1.0 } else { -1.0 };

                Figure::group(vec![
                    Figure::line(
                        Point::new(x, hinge_y),
                        Point::new(x + dx * size * LEAF_REACH, open_y),
                        leaf,
                    ),
                    Figure::Arc {
                        from: Point::new(x, open_y),
                        to: Point::new(x + dx * size, hinge_y),
                        radius: size,
                        sweep: -dx * hinge_sign > 0.0,
                        stroke: swing,
                    },
                ])
            }
        }
    }

    /// A window in a horizontal wall: a cut-out with two panes running along the wall.
    pub fn window_h(&self, x: f32, y: f32, w: f32, wall_thickness: f32) -> Figure {
        if degenerate(w, wall_thickness) {
            return Figure::empty();
        }
        let pane = self.palette.line_stroke(0.5);
        let cut_out = RectFigure::new(x, y, Size::new(w, wall_thickness))
            .with_fill(self.palette.background());

        let mut children = vec![cut_out.into()];
        for share in [0.33, 0.67] {
            let py = y + wall_thickness * share;
            children.push(Figure::line(
                Point::new(x + 1.0, py),
                Point::new(x + w - 1.0, py),
                pane,
            ));
        }
        Figure::group(children)
    }

    /// A window in a vertical wall.
    pub fn window_v(&self, x: f32, y: f32, wall_thickness: f32, h: f32) -> Figure {
        if degenerate(wall_thickness, h) {
            return Figure::empty();
        }
        let pane = self.palette.line_stroke(0.5);
        let cut_out = RectFigure::new(x, y, Size::new(wall_thickness, h))
            .with_fill(self.palette.background());

        let mut children = vec![cut_out.into()];
        for share in [0.33, 0.67] {
            let px = x + wall_thickness * share;
            children.push(Figure::line(
                Point::new(px, y + 1.0),
                Point::new(px, y + h - 1.0),
                pane,
            ));
        }
        Figure::group(children)
    }

    /// Outline of a balcony slab projecting from the facade.
    pub fn balcony(&self, x: f32, y: f32, w: f32, h: f32) -> Figure {
        if degenerate(w, h) {
            return Figure::empty();
        }
        self.outline(x, y, w, h, self.palette.line_stroke(0.6), 0.0)
    }
}
