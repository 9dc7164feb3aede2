//! SVG document assembly.

use std::fmt::Write as _;

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use floorplan_core::{color::Color, draw::Palette};

use super::{Error, Exporter};
use crate::{
    blueprint::{VIEW_HEIGHT, VIEW_WIDTH},
    compose::FloorPlan,
};

/// Configures an [`Svg`] exporter.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
    title: Option<String>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the palette background for the document.
    pub fn with_palette(mut self, palette: &Palette) -> Self {
        self.background = Some(palette.background());
        self
    }

    /// Sets the document `<title>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            background: self
                .background
                .unwrap_or_else(|| Palette::default().background()),
            title: self.title,
            output: String::new(),
        }
    }
}

/// Renders floor plans into an in-memory SVG string.
#[derive(Debug)]
pub struct Svg {
    background: Color,
    title: Option<String>,
    output: String,
}

impl Svg {
    /// Builds the SVG document for a floor plan.
    ///
    /// The document uses the fixed `0 0 1000 340` view box and scales to the
    /// width of its container.
    pub fn render_floor_plan(&self, plan: FloorPlan) -> Document {
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}"))
            .set("width", "100%")
            .set(
                "style",
                format!("background:{}", self.background.opaque()),
            );

        if let Some(title) = &self.title {
            doc = doc.add(svg_element::Title::new(title.as_str()));
        }

        let layers = plan.into_layers().render();
        trace!(layers = layers.len(); "Adding layers to document");
        for layer in layers {
            doc = doc.add(layer);
        }
        doc
    }

    /// Markup produced by the last export.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Exporter for Svg {
    fn export_floor_plan(&mut self, plan: FloorPlan) -> Result<(), Error> {
        let doc = self.render_floor_plan(plan);
        debug!("SVG document rendered");

        self.output.clear();
        write!(self.output, "{doc}")
            .map_err(|err| Error::Render(format!("failed to serialize SVG document: {err}")))
    }
}
