//! Example: Rendering a floor plan from a unit list
//!
//! This example demonstrates the basic workflow of:
//! 1. Creating a FloorPlanBuilder with default configuration
//! 2. Building a view over buildings and units
//! 3. Selecting a floor and hovering a unit
//! 4. Rendering the floor to SVG

use floorplan::{
    FloorPlanBuilder,
    compose::ZoneEvents,
    unit::{Building, BuildingId, Unit, UnitId, UnitStatus},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let buildings = vec![Building::new(BuildingId::new(1), "Корпус А", 16)];

    let statuses = [
        UnitStatus::Available,
        UnitStatus::Booked,
        UnitStatus::Sold,
        UnitStatus::Installment,
        UnitStatus::Prebooked,
    ];
    let units: Vec<Unit> = (1..=10u64)
        .map(|n| {
            Unit::new(
                UnitId::new(300 + n),
                BuildingId::new(1),
                3,
                format!("3-{n}"),
                statuses[(n as usize) % statuses.len()],
            )
            .with_rooms((n % 3 + 1) as u32)
            .with_areas(38.5 + n as f64 * 4.0, None, None)
            .with_prices(2_700_000.0 + n as f64 * 150_000.0, 72_000.0)
        })
        .collect();

    // Create a builder with default configuration
    let builder = FloorPlanBuilder::default();
    let mut view = builder.view(units, buildings);

    println!("Floors with units: {:?}", view.available_floors());
    view.select_floor(3);

    let stats = view.stats();
    println!(
        "Floor 3: {} units, {} available, {} booked, {} sold",
        stats.total, stats.available, stats.booked, stats.sold
    );

    // Hover the first unit as a pointer would
    if let Some(unit) = view.floor_units().first() {
        view.on_hover(Some(unit));
    }

    let styles = builder.status_styles()?;
    if let Some(tooltip) = view.tooltip(&styles) {
        println!(
            "Hovered: {} ({}), {}, {}",
            tooltip.label(),
            tooltip.status_label(),
            tooltip.area(),
            tooltip.price()
        );
    }

    // Render the floor to SVG
    println!("\nRendering to SVG...");
    let svg = builder.render_svg(&view)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_units_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
