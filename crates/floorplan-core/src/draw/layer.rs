//! Layer-based rendering for SVG output.
//!
//! Figures are collected per [`RenderLayer`] in a [`LayeredOutput`] and emitted
//! bottom to top, so interactive overlays end up above the architecture no
//! matter in which order they were produced.
//!
//! # Example
//!
//! ```
//! # use floorplan_core::draw::{Figure, LayeredOutput, RenderLayer, RectFigure};
//! # use floorplan_core::geometry::Size;
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Overlay, RectFigure::new(0.0, 0.0, Size::new(5.0, 5.0)).into());
//! output.add_to_layer(RenderLayer::Architecture, Figure::empty());
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use log::trace;
use svg::node::element as svg_element;

use crate::draw::Figure;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fills behind the building
    Background,
    /// Walls, openings, furniture and the circulation core
    Architecture,
    /// Interactive apartment zones
    Overlay,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Architecture => "architecture",
            Self::Overlay => "overlay",
        }
    }
}

/// Figures grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, Figure)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single figure to the specified layer.
    ///
    /// Figures keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, figure: Figure) {
        self.items.push((layer, figure));
    }

    /// Returns `true` if there are no figures in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the figures of one layer in insertion order.
    pub fn figures(&self, layer: RenderLayer) -> impl Iterator<Item = &Figure> {
        self.items
            .iter()
            .filter(move |(item_layer, _)| *item_layer == layer)
            .map(|(_, figure)| figure)
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);
        trace!(figures = self.items.len(); "Rendering layered output");

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, figure) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(figure.to_svg());
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
