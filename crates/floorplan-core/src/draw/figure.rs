//! A typed scene graph of vector fragments.
//!
//! A [`Figure`] is the output of every drawing primitive. Keeping figures typed
//! (instead of emitting SVG nodes straight away) lets callers mirror, flatten
//! and hit-test drawings before exporting them with [`Figure::to_svg`].

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{StrokeDefinition, SvgNode},
    geometry::{Bounds, Point, Size},
};

/// Geometric transform applied to the children of a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Horizontal flip about the line `x = width / 2`.
    MirrorX { width: f32 },
}

impl Transform {
    /// Returns the SVG `transform` attribute value.
    pub fn to_svg_value(self) -> String {
        match self {
            Self::MirrorX { width } => format!("translate({width},0) scale(-1,1)"),
        }
    }

    fn apply(self, figure: Figure) -> Figure {
        match self {
            Self::MirrorX { width } => figure.reflect_x(width),
        }
    }
}

/// A rectangle with optional fill, outline and rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RectFigure {
    bounds: Bounds,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    corner_radius: f32,
    attributes: Vec<(&'static str, String)>,
}

impl RectFigure {
    /// Creates an unfilled, unstroked rectangle. Negative sizes collapse to zero.
    pub fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            bounds: Bounds::new_from_top_left(Point::new(x, y), size.non_negative()),
            fill: None,
            stroke: None,
            corner_radius: 0.0,
            attributes: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Attaches an extra SVG attribute (ids, data attributes, inline styles).
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<StrokeDefinition> {
        self.stroke
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Returns the value of an extra attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn to_svg(&self) -> SvgNode {
        let mut rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height());

        rect = match self.fill {
            Some(fill) => rect
                .set("fill", fill.opaque().to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        if let Some(stroke) = &self.stroke {
            rect = apply_stroke!(rect, stroke);
        }

        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }

        for (name, value) in &self.attributes {
            rect = rect.set(*name, value.as_str());
        }

        Box::new(rect)
    }
}

/// An ordered collection of figures sharing an optional transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    children: Vec<Figure>,
    transform: Option<Transform>,
    attributes: Vec<(&'static str, String)>,
}

impl Group {
    pub fn new(children: Vec<Figure>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn push(&mut self, figure: Figure) {
        self.children.push(figure);
    }

    pub fn children(&self) -> &[Figure] {
        &self.children
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }
}

/// One vector drawing fragment.
///
/// Leaf variants carry absolute coordinates; [`Figure::Group`] nests figures and
/// may carry a [`Transform`]. An empty group is the canonical invisible figure,
/// returned by primitives when their parameters are degenerate.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Rect(RectFigure),
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Circle {
        center: Point,
        radius: f32,
        stroke: StrokeDefinition,
    },
    Ellipse {
        center: Point,
        radii: Size,
        stroke: StrokeDefinition,
    },
    /// Circular arc of the given radius, drawn with the SVG small-arc flag.
    Arc {
        from: Point,
        to: Point,
        radius: f32,
        sweep: bool,
        stroke: StrokeDefinition,
    },
    Polygon {
        points: Vec<Point>,
        stroke: StrokeDefinition,
    },
    Group(Group),
}

impl Figure {
    /// The invisible figure.
    pub fn empty() -> Self {
        Self::Group(Group::default())
    }

    /// Groups figures without a transform.
    pub fn group(children: Vec<Figure>) -> Self {
        Self::Group(Group::new(children))
    }

    pub fn line(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self::Line { from, to, stroke }
    }

    pub fn circle(center: Point, radius: f32, stroke: StrokeDefinition) -> Self {
        Self::Circle {
            center,
            radius: radius.max(0.0),
            stroke,
        }
    }

    /// Returns true for a group that has no visible descendants.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Group(group) => group.children.iter().all(Figure::is_empty),
            _ => false,
        }
    }

    /// Reflects the figure about the vertical line `x = width / 2`.
    ///
    /// Arc sweep directions are inverted so the reflected arc bulges the mirrored way.
    pub fn reflect_x(self, width: f32) -> Self {
        match self {
            Self::Rect(mut rect) => {
                rect.bounds = rect.bounds.reflect_x(width);
                Self::Rect(rect)
            }
            Self::Line { from, to, stroke } => Self::Line {
                from: from.reflect_x(width),
                to: to.reflect_x(width),
                stroke,
            },
            Self::Circle {
                center,
                radius,
                stroke,
            } => Self::Circle {
                center: center.reflect_x(width),
                radius,
                stroke,
            },
            Self::Ellipse {
                center,
                radii,
                stroke,
            } => Self::Ellipse {
                center: center.reflect_x(width),
                radii,
                stroke,
            },
            Self::Arc {
                from,
                to,
                radius,
                sweep,
                stroke,
            } => Self::Arc {
                from: from.reflect_x(width),
                to: to.reflect_x(width),
                radius,
                sweep: !sweep,
                stroke,
            },
            Self::Polygon { points, stroke } => Self::Polygon {
                points: points.into_iter().map(|p| p.reflect_x(width)).collect(),
                stroke,
            },
            Self::Group(group) => Self::Group(Group {
                children: group
                    .children
                    .into_iter()
                    .map(|child| child.reflect_x(width))
                    .collect(),
                transform: group.transform,
                attributes: group.attributes,
            }),
        }
    }

    /// Resolves every group transform and returns the leaf figures in drawing
    /// order, with absolute coordinates.
    pub fn flatten(&self) -> Vec<Figure> {
        let mut leaves = Vec::new();
        self.flatten_into(&mut leaves);
        leaves
    }

    fn flatten_into(&self, leaves: &mut Vec<Figure>) {
        match self {
            Self::Group(group) => {
                let start = leaves.len();
                for child in &group.children {
                    child.flatten_into(leaves);
                }
                if let Some(transform) = group.transform {
                    for leaf in &mut leaves[start..] {
                        let owned = std::mem::replace(leaf, Figure::empty());
                        *leaf = transform.apply(owned);
                    }
                }
            }
            leaf => leaves.push(leaf.clone()),
        }
    }

    /// Axis-aligned bounding box in absolute coordinates, `None` for empty groups.
    pub fn bounds(&self) -> Option<Bounds> {
        let from_points = |points: &[Point]| {
            let first = points.first()?;
            let seed = Bounds::new_from_top_left(*first, Size::default());
            Some(points.iter().skip(1).fold(seed, |acc, p| {
                acc.merge(&Bounds::new_from_top_left(*p, Size::default()))
            }))
        };

        match self {
            Self::Rect(rect) => Some(rect.bounds),
            Self::Line { from, to, .. } | Self::Arc { from, to, .. } => from_points(&[*from, *to]),
            Self::Circle { center, radius, .. } => Some(Bounds::from_rect(
                center.x() - radius,
                center.y() - radius,
                radius * 2.0,
                radius * 2.0,
            )),
            Self::Ellipse { center, radii, .. } => Some(Bounds::from_rect(
                center.x() - radii.width(),
                center.y() - radii.height(),
                radii.width() * 2.0,
                radii.height() * 2.0,
            )),
            Self::Polygon { points, .. } => from_points(points),
            Self::Group(_) => self
                .flatten()
                .iter()
                .filter_map(Figure::bounds)
                .reduce(|acc, b| acc.merge(&b)),
        }
    }

    /// Converts the figure into an SVG node.
    pub fn to_svg(&self) -> SvgNode {
        match self {
            Self::Rect(rect) => rect.to_svg(),
            Self::Line { from, to, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                Box::new(apply_stroke!(line, stroke))
            }
            Self::Circle {
                center,
                radius,
                stroke,
            } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius)
                    .set("fill", "none");
                Box::new(apply_stroke!(circle, stroke))
            }
            Self::Ellipse {
                center,
                radii,
                stroke,
            } => {
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", radii.width())
                    .set("ry", radii.height())
                    .set("fill", "none");
                Box::new(apply_stroke!(ellipse, stroke))
            }
            Self::Arc {
                from,
                to,
                radius,
                sweep,
                stroke,
            } => {
                let data = format!(
                    "M{},{} A{radius},{radius} 0 0,{} {},{}",
                    from.x(),
                    from.y(),
                    u8::from(*sweep),
                    to.x(),
                    to.y()
                );
                let path = svg_element::Path::new().set("d", data).set("fill", "none");
                Box::new(apply_stroke!(path, stroke))
            }
            Self::Polygon { points, stroke } => {
                let points = points
                    .iter()
                    .map(|p| format!("{},{}", p.x(), p.y()))
                    .collect::<Vec<_>>()
                    .join(" ");
                let polygon = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", "none");
                Box::new(apply_stroke!(polygon, stroke))
            }
            Self::Group(group) => {
                let mut node = svg_element::Group::new();
                if let Some(transform) = group.transform {
                    node = node.set("transform", transform.to_svg_value());
                }
                for (name, value) in &group.attributes {
                    node = node.set(*name, value.as_str());
                }
                for child in &group.children {
                    node = node.add(child.to_svg());
                }
                Box::new(node)
            }
        }
    }
}

impl From<RectFigure> for Figure {
    fn from(rect: RectFigure) -> Self {
        Self::Rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> StrokeDefinition {
        StrokeDefinition::solid(Color::default(), 1.0)
    }

    #[test]
    fn test_rect_negative_size_collapses() {
        let rect = RectFigure::new(10.0, 10.0, Size::new(-5.0, 3.0));
        assert_eq!(rect.bounds().width(), 0.0);
        assert_eq!(rect.bounds().height(), 3.0);
    }

    #[test]
    fn test_empty_group_is_empty() {
        assert!(Figure::empty().is_empty());
        assert!(Figure::group(vec![Figure::empty(), Figure::empty()]).is_empty());
        assert!(
            !Figure::group(vec![Figure::line(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                stroke()
            )])
            .is_empty()
        );
        assert_eq!(Figure::empty().bounds(), None);
    }

    #[test]
    fn test_reflect_arc_flips_sweep() {
        let arc = Figure::Arc {
            from: Point::new(100.0, 50.0),
            to: Point::new(90.0, 60.0),
            radius: 10.0,
            sweep: true,
            stroke: stroke(),
        };

        let Figure::Arc {
            from, to, sweep, ..
        } = arc.reflect_x(1000.0)
        else {
            panic!("reflection must keep the variant");
        };
        assert_eq!(from, Point::new(900.0, 50.0));
        assert_eq!(to, Point::new(910.0, 60.0));
        assert!(!sweep);
    }

    #[test]
    fn test_flatten_applies_mirror_transform() {
        let rect: Figure = RectFigure::new(30.0, 15.0, Size::new(140.0, 145.0)).into();
        let group = Figure::Group(
            Group::new(vec![rect]).with_transform(Transform::MirrorX { width: 1000.0 }),
        );

        let leaves = group.flatten();
        assert_eq!(leaves.len(), 1);
        assert_eq!(
            leaves[0].bounds(),
            Some(Bounds::from_rect(830.0, 15.0, 140.0, 145.0))
        );
    }

    #[test]
    fn test_nested_mirrors_cancel_out() {
        let line = Figure::line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), stroke());
        let inner = Figure::Group(
            Group::new(vec![line.clone()]).with_transform(Transform::MirrorX { width: 1000.0 }),
        );
        let outer = Figure::Group(
            Group::new(vec![inner]).with_transform(Transform::MirrorX { width: 1000.0 }),
        );

        assert_eq!(outer.flatten(), vec![line]);
    }

    #[test]
    fn test_group_bounds_merge_children() {
        let group = Figure::group(vec![
            RectFigure::new(0.0, 0.0, Size::new(10.0, 10.0)).into(),
            Figure::circle(Point::new(20.0, 20.0), 5.0, stroke()),
        ]);
        assert_eq!(group.bounds(), Some(Bounds::from_rect(0.0, 0.0, 25.0, 25.0)));
    }

    #[test]
    fn test_to_svg_rect_attributes() {
        let rect = RectFigure::new(1.0, 2.0, Size::new(3.0, 4.0))
            .with_fill(Color::new("red").unwrap())
            .with_corner_radius(2.0)
            .with_attribute("data-unit-id", "7");

        let svg = Figure::from(rect).to_svg().to_string();
        assert!(svg.starts_with("<rect"));
        assert!(svg.contains("data-unit-id=\"7\""));
        assert!(svg.contains("rx=\"2\""));
        assert!(svg.contains("width=\"3\""));
    }

    #[test]
    fn test_to_svg_arc_path() {
        let arc = Figure::Arc {
            from: Point::new(79.0, 87.0),
            to: Point::new(65.0, 101.0),
            radius: 14.0,
            sweep: true,
            stroke: stroke(),
        };
        let svg = arc.to_svg().to_string();
        assert!(svg.contains("d=\"M79,87 A14,14 0 0,1 65,101\""));
    }

    #[test]
    fn test_to_svg_group_transform() {
        let group = Figure::Group(
            Group::new(vec![Figure::empty()]).with_transform(Transform::MirrorX { width: 1000.0 }),
        );
        let svg = group.to_svg().to_string();
        assert!(svg.contains("transform=\"translate(1000,0) scale(-1,1)\""));
    }
}
