//! Drawable building blocks for floor plan rendering.
//!
//! Everything a floor plan is made of is first expressed as a [`Figure`], a small
//! typed scene graph that can be inspected, mirrored and hit-tested before it is
//! turned into SVG nodes.
//!
//! # Layer-Based Rendering
//!
//! Figures are collected into a [`LayeredOutput`] under a [`RenderLayer`]. Layers are
//! emitted in declaration order during final SVG generation, so interactive overlays
//! always end up above the architecture regardless of insertion order.

mod figure;
mod layer;
mod palette;
mod stroke;

pub use figure::{Figure, Group, RectFigure, Transform};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use palette::Palette;
pub use stroke::StrokeDefinition;
