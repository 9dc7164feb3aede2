//! Status Style Map: how each [`UnitStatus`] is painted.

use indexmap::IndexMap;

use floorplan_core::color::Color;

use crate::unit::UnitStatus;

/// Paint and caption for one status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusStyle {
    fill: Color,
    fill_hover: Color,
    stroke: Color,
    text: Color,
    label: String,
}

impl StatusStyle {
    pub fn new(fill: Color, fill_hover: Color, stroke: Color, text: Color, label: impl Into<String>) -> Self {
        Self {
            fill,
            fill_hover,
            stroke,
            text,
            label: label.into(),
        }
    }

    /// Zone fill at rest.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Zone fill while the pointer is over the zone.
    pub fn fill_hover(&self) -> Color {
        self.fill_hover
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Color for the status caption in tooltips and badges.
    pub fn text(&self) -> Color {
        self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fill for the given hover state.
    pub fn fill_for(&self, hovered: bool) -> Color {
        if hovered { self.fill_hover } else { self.fill }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_fill_hover(mut self, fill_hover: Color) -> Self {
        self.fill_hover = fill_hover;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_text(mut self, text: Color) -> Self {
        self.text = text;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Total mapping from [`UnitStatus`] to [`StatusStyle`].
///
/// Every known status has an entry. Any status without one, including
/// [`UnitStatus::Other`], resolves to the `AVAILABLE` style.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusStyleMap {
    styles: IndexMap<UnitStatus, StatusStyle>,
    fallback: StatusStyle,
}

impl StatusStyleMap {
    /// Style for `status`, falling back to the `AVAILABLE` style.
    pub fn resolve(&self, status: UnitStatus) -> &StatusStyle {
        self.styles.get(&status).unwrap_or(&self.fallback)
    }

    /// Replaces the style of one status.
    pub fn set(&mut self, status: UnitStatus, style: StatusStyle) {
        if status == UnitStatus::Available {
            self.fallback = style.clone();
        }
        if status != UnitStatus::Other {
            self.styles.insert(status, style);
        }
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitStatus, &StatusStyle)> {
        self.styles.iter().map(|(status, style)| (*status, style))
    }
}

impl Default for StatusStyleMap {
    fn default() -> Self {
        let style = |fill: &str, fill_hover: &str, stroke: &str, text: &str, label: &str| {
            StatusStyle::new(
                Color::new(fill).expect("valid status fill"),
                Color::new(fill_hover).expect("valid status hover fill"),
                Color::new(stroke).expect("valid status stroke"),
                Color::new(text).expect("valid status text color"),
                label,
            )
        };

        let available = style(
            "rgba(34, 197, 94, 0.25)",
            "rgba(34, 197, 94, 0.5)",
            "#22c55e",
            "#4ade80",
            "Свободна",
        );
        let reserved = |label| {
            style(
                "rgba(245, 158, 11, 0.3)",
                "rgba(245, 158, 11, 0.55)",
                "#f59e0b",
                "#fbbf24",
                label,
            )
        };

        let styles = IndexMap::from([
            (UnitStatus::Available, available.clone()),
            (UnitStatus::Prebooked, reserved("Предбронь")),
            (UnitStatus::Booked, reserved("Забронирована")),
            (
                UnitStatus::Installment,
                style(
                    "rgba(168, 85, 247, 0.3)",
                    "rgba(168, 85, 247, 0.55)",
                    "#a855f7",
                    "#c084fc",
                    "Рассрочка",
                ),
            ),
            (
                UnitStatus::Sold,
                style(
                    "rgba(239, 68, 68, 0.3)",
                    "rgba(239, 68, 68, 0.55)",
                    "#ef4444",
                    "#f87171",
                    "Продана",
                ),
            ),
        ]);

        Self {
            styles,
            fallback: available,
        }
    }
}
