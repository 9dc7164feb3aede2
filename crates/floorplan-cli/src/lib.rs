//! Floorplan CLI library
//!
//! This module contains the core CLI logic for rendering one floor of a
//! building from a JSON dataset.

pub mod error_adapter;

mod args;
mod config;
mod data;

pub use args::Args;

use std::fs;

use log::{info, warn};

use floorplan::{FloorPlanBuilder, FloorPlanError, compose::ZoneEvents, unit::BuildingId};

/// Run the Floorplan CLI application
///
/// This function loads the dataset, selects the requested building and
/// floor, and writes the rendered SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FloorPlanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed datasets, unknown buildings or unknown hovered units
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FloorPlanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing dataset"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input dataset
    let dataset = data::load_dataset(&args.input)?;

    let builder = FloorPlanBuilder::new(app_config);
    let mut view = builder.view(dataset.units, dataset.buildings);

    if let Some(id) = args.building {
        view.select_building(BuildingId::new(id))?;
    }
    if let Some(floor) = args.floor {
        view.select_floor(floor);
    }

    if !view.available_floors().contains(&view.selected_floor()) {
        warn!(floor = view.selected_floor(); "Selected floor is outside the building's floor list");
    }
    if view.is_floor_empty() {
        info!(floor = view.selected_floor(); "No units on this floor, drawing the building only");
    }

    if let Some(label) = &args.hover {
        let unit = view
            .floor_units()
            .into_iter()
            .find(|unit| unit.label() == label)
            .ok_or_else(|| {
                FloorPlanError::Data(format!(
                    "No unit labelled '{label}' on floor {}",
                    view.selected_floor()
                ))
            })?;
        view.on_hover(Some(&unit));
    }

    let stats = view.stats();
    info!(
        building = view.building_name(),
        floor = view.selected_floor(),
        total = stats.total,
        available = stats.available,
        booked = stats.booked,
        sold = stats.sold;
        "Floor selected"
    );

    let svg = builder.render_svg(&view)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
