//! Export functionality for composed floor plans.
//!
//! This module provides the [`Exporter`] trait that turns a [`FloorPlan`] into
//! an output format. It is the last stage of rendering:
//!
//! ```text
//! Units of one floor
//!     ↓ compose
//! FloorPlan (figures + bound zones)
//!     ↓ export (this module)
//! SVG markup
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`FloorPlanError::Export`] at the crate boundary.
//!
//! [`FloorPlanError::Export`]: crate::FloorPlanError::Export

/// SVG export backend.
pub mod svg;

use std::fmt;

use crate::compose::FloorPlan;

/// Abstraction for floor plan export backends.
pub trait Exporter {
    /// Exports one composed floor plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the plan cannot be converted to the
    /// target format.
    fn export_floor_plan(&mut self, plan: FloorPlan) -> Result<(), Error>;
}

/// Errors that can occur during floor plan export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
