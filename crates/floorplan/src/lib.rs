//! Floorplan - interactive residential floor plans with live unit status
//!
//! This library draws the typical floor of a two-wing residential building and
//! overlays each apartment with a zone colored by its sales status. It covers
//! the whole path from a unit list to SVG: picking the building and floor,
//! binding units to zones, mirroring the authored wing, hover and detail
//! state, and the booking action.

pub mod blueprint;
pub mod compose;
pub mod config;
mod error;
mod export;
pub mod format;
pub mod session;
pub mod status;
pub mod unit;
pub mod view;

pub use floorplan_core::{color, draw, geometry, primitives};

pub use error::FloorPlanError;

use log::{debug, info};

use compose::FloorPlanComposer;
use config::AppConfig;
use export::{Exporter, svg::SvgBuilder};
use primitives::Drafter;
use status::StatusStyleMap;
use unit::{Building, Unit, UnitId};
use view::FloorPlanView;

/// Builder for rendering floor plans.
///
/// This provides an API for turning unit lists into floor plan views and SVG
/// documents with one configuration.
///
/// # Examples
///
/// ```rust
/// use floorplan::{FloorPlanBuilder, config::AppConfig};
/// use floorplan::unit::{Building, BuildingId, Unit, UnitId, UnitStatus};
///
/// let buildings = vec![Building::new(BuildingId::new(1), "Корпус А", 16)];
/// let units = vec![
///     Unit::new(UnitId::new(10), BuildingId::new(1), 2, "2-1", UnitStatus::Available),
/// ];
///
/// let builder = FloorPlanBuilder::new(AppConfig::default());
/// let view = builder.view(units, buildings);
///
/// let svg = builder.render_svg(&view).expect("Failed to render");
/// assert!(svg.contains("data-zone=\"l0\""));
///
/// // Or use default config
/// let builder = FloorPlanBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct FloorPlanBuilder {
    config: AppConfig,
}

impl FloorPlanBuilder {
    /// Create a new floor plan builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and view settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Drafter using the configured palette.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Config`] for unparsable colors.
    pub fn drafter(&self) -> Result<Drafter, FloorPlanError> {
        Ok(Drafter::new(self.config.style().palette()?))
    }

    /// Status styles with configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Config`] for unknown statuses or unparsable colors.
    pub fn status_styles(&self) -> Result<StatusStyleMap, FloorPlanError> {
        self.config.style().status_styles()
    }

    /// Create an interactive view over the given data.
    ///
    /// The view starts on the first building at the configured default floor.
    pub fn view(&self, units: Vec<Unit>, buildings: Vec<Building>) -> FloorPlanView {
        info!(
            units = units.len(),
            buildings = buildings.len();
            "Creating floor plan view"
        );
        FloorPlanView::new(units, buildings, self.config.view().clone())
    }

    /// Render the current floor of a view to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `FloorPlanError` for invalid style configuration or rendering errors.
    pub fn render_svg(&self, view: &FloorPlanView) -> Result<String, FloorPlanError> {
        let drafter = self.drafter()?;
        let styles = self.status_styles()?;
        let composer = FloorPlanComposer::new(&drafter, &styles);

        info!(floor = view.selected_floor(); "Rendering floor plan");
        let svg = view.render_svg(&composer)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render an already filtered and ordered unit list to an SVG string.
    ///
    /// Units bind to zones by position, exactly as passed.
    ///
    /// # Errors
    ///
    /// Returns `FloorPlanError` for invalid style configuration or rendering errors.
    pub fn render_units_svg(
        &self,
        units: &[Unit],
        hovered: Option<UnitId>,
    ) -> Result<String, FloorPlanError> {
        let drafter = self.drafter()?;
        let styles = self.status_styles()?;
        let plan = FloorPlanComposer::new(&drafter, &styles).compose(units, hovered);
        debug!(zones = plan.zones().len(); "Floor plan composed");

        let mut svg = SvgBuilder::new().with_palette(drafter.palette()).build();
        svg.export_floor_plan(plan)?;
        Ok(svg.into_string())
    }
}
