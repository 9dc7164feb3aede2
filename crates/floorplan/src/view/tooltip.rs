//! Hover tooltip contents.

use floorplan_core::{color::Color, geometry::Point};

use crate::{
    config::ViewConfig,
    format,
    status::StatusStyleMap,
    unit::{Unit, UnitStatus},
};

/// Offset of the tooltip anchor from the pointer.
pub const TOOLTIP_OFFSET: Point = Point::new(16.0, -10.0);

/// Everything a tooltip shows for the hovered unit.
///
/// The tooltip is presentation only. Building one never touches view state.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    anchor: Point,
    label: String,
    status: UnitStatus,
    status_label: String,
    status_fill: Color,
    status_text: Color,
    rooms: u32,
    area: String,
    floor: i32,
    price: String,
    layout_image: Option<String>,
}

impl Tooltip {
    /// Builds the tooltip for `unit` with the pointer at `pointer`.
    pub fn new(unit: &Unit, pointer: Point, styles: &StatusStyleMap, config: &ViewConfig) -> Self {
        let style = styles.resolve(unit.status());
        let layout_image = unit
            .layout_plan_url()
            .or_else(|| config.layout_image(unit.rooms()))
            .map(str::to_string);

        Self {
            anchor: pointer.add_point(TOOLTIP_OFFSET),
            label: unit.label().to_string(),
            status: unit.status(),
            status_label: style.label().to_string(),
            status_fill: style.fill(),
            status_text: style.text(),
            rooms: unit.rooms(),
            area: format::area(unit.area_total()),
            floor: unit.floor(),
            price: format::price(unit.total_price(), config.currency()),
            layout_image,
        }
    }

    /// Top-left corner of the tooltip box, in pointer coordinates.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> UnitStatus {
        self.status
    }

    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    /// Badge background.
    pub fn status_fill(&self) -> Color {
        self.status_fill
    }

    /// Badge text color.
    pub fn status_text(&self) -> Color {
        self.status_text
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn layout_image(&self) -> Option<&str> {
        self.layout_image.as_deref()
    }
}
