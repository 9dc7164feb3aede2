//! Configuration types for floor plan rendering.
//!
//! This module provides configuration structures that control how floor plans
//! are styled and how the interactive view behaves. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and view settings.
//! - [`StyleConfig`] - Drawing colors and per-status zone styles.
//! - [`ViewConfig`] - Default floor, currency and layout image references.
//!
//! # Example
//!
//! ```
//! # use floorplan::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().palette().is_ok());
//! assert_eq!(config.view().default_floor(), 2);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use floorplan_core::{color::Color, draw::Palette};

use crate::{
    error::FloorPlanError,
    status::StatusStyleMap,
    unit::UnitStatus,
};

/// Top-level application configuration combining style and view settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// View configuration section.
    #[serde(default)]
    view: ViewConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, view: ViewConfig) -> Self {
        Self { style, view }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the view configuration.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings. Fields that are not set keep the built-in
/// dark blueprint look.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    wall_color: Option<String>,

    #[serde(default)]
    line_color: Option<String>,

    #[serde(default)]
    furniture_color: Option<String>,

    /// Per-status overrides, keyed by status name such as `SOLD`.
    #[serde(default)]
    status: IndexMap<String, StatusStyleConfig>,
}

/// Partial override of one status style.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StatusStyleConfig {
    #[serde(default)]
    fill: Option<String>,
    #[serde(default)]
    fill_hover: Option<String>,
    #[serde(default)]
    stroke: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

fn parse_color(field: &str, value: &Option<String>) -> Result<Option<Color>, FloorPlanError> {
    value
        .as_deref()
        .map(Color::new)
        .transpose()
        .map_err(|err| FloorPlanError::Config(format!("Invalid {field} in config: {err}")))
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>, style: StatusStyleConfig) -> Self {
        self.status.insert(status.into(), style);
        self
    }

    /// Returns the drawing palette with configured colors applied.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Config`] if a color string cannot be parsed.
    pub fn palette(&self) -> Result<Palette, FloorPlanError> {
        let mut palette = Palette::default();
        if let Some(color) = parse_color("background_color", &self.background_color)? {
            palette = palette.with_background(color);
        }
        if let Some(color) = parse_color("wall_color", &self.wall_color)? {
            palette = palette.with_wall(color);
        }
        if let Some(color) = parse_color("line_color", &self.line_color)? {
            palette = palette.with_line(color);
        }
        if let Some(color) = parse_color("furniture_color", &self.furniture_color)? {
            palette = palette.with_furniture(color);
        }
        Ok(palette)
    }

    /// Returns the status style map with configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Config`] for unknown status names or invalid colors.
    pub fn status_styles(&self) -> Result<StatusStyleMap, FloorPlanError> {
        let mut map = StatusStyleMap::default();

        for (name, overrides) in &self.status {
            let status: UnitStatus = name
                .parse()
                .map_err(|err| FloorPlanError::Config(format!("Invalid status style section: {err}")))?;

            let mut style = map.resolve(status).clone();
            if let Some(color) = parse_color("status fill", &overrides.fill)? {
                style = style.with_fill(color);
            }
            if let Some(color) = parse_color("status fill_hover", &overrides.fill_hover)? {
                style = style.with_fill_hover(color);
            }
            if let Some(color) = parse_color("status stroke", &overrides.stroke)? {
                style = style.with_stroke(color);
            }
            if let Some(color) = parse_color("status text", &overrides.text)? {
                style = style.with_text(color);
            }
            if let Some(label) = &overrides.label {
                style = style.with_label(label.as_str());
            }
            map.set(status, style);
        }

        Ok(map)
    }
}

impl StatusStyleConfig {
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

const DEFAULT_FLOOR: i32 = 2;
const FALLBACK_TOTAL_FLOORS: u32 = 16;
const DEFAULT_CURRENCY: &str = "сом";
const DEFAULT_LOGIN_PATH: &str = "/login";
const LAYOUT_IMAGES: [(u32, &str); 3] = [
    (
        1,
        "https://static.tildacdn.one/tild6530-3966-4461-b963-316165353837/1_.webp",
    ),
    (
        2,
        "https://static.tildacdn.one/tild3435-6636-4230-b463-666661636236/2_.webp",
    ),
    (
        3,
        "https://static.tildacdn.one/tild3739-6435-4035-b466-373138303938/3_.webp",
    ),
];

/// Behavior of the interactive floor plan view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Floor selected initially and after switching buildings.
    default_floor: i32,

    /// Floor count assumed when a building does not report one.
    fallback_total_floors: u32,

    /// Currency suffix for prices.
    currency: String,

    /// Layout preview image per room count. Keys are room counts.
    layout_images: IndexMap<String, String>,

    /// Where anonymous visitors are sent when they try to book.
    login_path: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_floor: DEFAULT_FLOOR,
            fallback_total_floors: FALLBACK_TOTAL_FLOORS,
            currency: DEFAULT_CURRENCY.to_string(),
            layout_images: LAYOUT_IMAGES
                .iter()
                .map(|(rooms, url)| (rooms.to_string(), (*url).to_string()))
                .collect(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl ViewConfig {
    pub fn with_default_floor(mut self, floor: i32) -> Self {
        self.default_floor = floor;
        self
    }

    pub fn with_fallback_total_floors(mut self, floors: u32) -> Self {
        self.fallback_total_floors = floors;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_layout_image(mut self, rooms: u32, url: impl Into<String>) -> Self {
        self.layout_images.insert(rooms.to_string(), url.into());
        self
    }

    pub fn default_floor(&self) -> i32 {
        self.default_floor
    }

    pub fn fallback_total_floors(&self) -> u32 {
        self.fallback_total_floors
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Layout image for a room count, falling back to the one-room image.
    pub fn layout_image(&self, rooms: u32) -> Option<&str> {
        self.layout_images
            .get(&rooms.to_string())
            .or_else(|| self.layout_images.get("1"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_config() {
        let view = ViewConfig::default();
        assert_eq!(view.default_floor(), 2);
        assert_eq!(view.fallback_total_floors(), 16);
        assert_eq!(view.currency(), "сом");
        assert_eq!(view.login_path(), "/login");
        assert!(view.layout_image(2).is_some_and(|url| url.ends_with("2_.webp")));
    }

    #[test]
    fn test_layout_image_falls_back_to_one_room() {
        let view = ViewConfig::default();
        assert_eq!(view.layout_image(5), view.layout_image(1));
        assert_eq!(view.layout_image(0), view.layout_image(1));
    }

    #[test]
    fn test_style_palette_overrides() {
        let style = StyleConfig::default().with_background_color("white");
        let palette = style.palette().expect("valid palette");
        assert_eq!(palette.background(), Color::new("white").unwrap());
        assert_eq!(palette.wall(), Palette::default().wall());
    }

    #[test]
    fn test_style_invalid_color_is_config_error() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        let err = style.palette().unwrap_err();
        assert!(matches!(err, FloorPlanError::Config(_)));
        assert!(err.to_string().contains("background_color"));
    }

    #[test]
    fn test_status_overrides() {
        let style = StyleConfig::default()
            .with_status("sold", StatusStyleConfig::default().with_label("Sold out"));
        let map = style.status_styles().expect("valid styles");

        assert_eq!(map.resolve(UnitStatus::Sold).label(), "Sold out");
        assert_eq!(
            map.resolve(UnitStatus::Sold).fill(),
            StatusStyleMap::default().resolve(UnitStatus::Sold).fill()
        );
    }

    #[test]
    fn test_unknown_status_section_is_rejected() {
        let style = StyleConfig::default().with_status("RESERVED", StatusStyleConfig::default());
        assert!(matches!(
            style.status_styles(),
            Err(FloorPlanError::Config(msg)) if msg.contains("RESERVED")
        ));
    }
}
