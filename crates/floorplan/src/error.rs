//! Error types for floor plan operations.
//!
//! Malformed data and degenerate geometry never produce errors; they degrade
//! to fallbacks. What remains is configuration, I/O and export failures.

use std::io;

use thiserror::Error;

use floorplan_core::color::ColorError;

/// The main error type for floor plan operations.
#[derive(Debug, Error)]
pub enum FloorPlanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ColorError> for FloorPlanError {
    fn from(err: ColorError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<crate::export::Error> for FloorPlanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
