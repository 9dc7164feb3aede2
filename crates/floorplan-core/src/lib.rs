//! Floorplan Core Types and Definitions
//!
//! This crate provides the foundational types used to draw architectural
//! floor plans as vector diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The [`draw::Figure`] scene graph, strokes, palettes and render layers
//! - **Primitives**: Architectural and furniture drawing primitives ([`primitives::Drafter`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod primitives;
