//! Error adapter for converting FloorPlanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use floorplan::FloorPlanError;

/// Adapter for [`FloorPlanError`].
///
/// None of the variants carry source locations, so only the code and a
/// help line are reported.
pub struct ErrorAdapter<'a>(pub &'a FloorPlanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FloorPlanError::Io(_) => "floorplan::io",
            FloorPlanError::Config(_) => "floorplan::config",
            FloorPlanError::Data(_) => "floorplan::data",
            FloorPlanError::Export(_) => "floorplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FloorPlanError::Config(_) => {
                "colors are CSS color strings; status sections are AVAILABLE, PREBOOKED, BOOKED, INSTALLMENT or SOLD"
            }
            FloorPlanError::Data(_) => {
                "the dataset is a JSON object with `buildings` and `units` arrays"
            }
            FloorPlanError::Io(_) | FloorPlanError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let cases = [
            (FloorPlanError::Config("bad".to_string()), "floorplan::config"),
            (FloorPlanError::Data("bad".to_string()), "floorplan::data"),
            (
                FloorPlanError::Io(std::io::Error::other("disk")),
                "floorplan::io",
            ),
        ];

        for (err, expected) in &cases {
            let adapter = ErrorAdapter(err);
            assert_eq!(adapter.code().unwrap().to_string(), *expected);
        }
    }

    #[test]
    fn test_display_matches_error() {
        let err = FloorPlanError::Data("unknown building 7".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.to_string(), "Data error: unknown building 7");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_io_has_no_help() {
        let err = FloorPlanError::Io(std::io::Error::other("disk"));
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
