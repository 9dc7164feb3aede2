//! Floor Plan Composer: assembles primitives and live unit data into one diagram.
//!
//! The composer draws the envelope, the authored left wing, its mirror image,
//! the central core, and finally one interactive zone per bound unit. The
//! result is a [`FloorPlan`], which can be hit-tested, dispatched pointer
//! events against, and handed to the exporter as layered figures.
//!
//! # Example
//!
//! ```
//! # use floorplan::compose::FloorPlanComposer;
//! # use floorplan::status::StatusStyleMap;
//! # use floorplan::unit::{BuildingId, Unit, UnitId, UnitStatus};
//! # use floorplan::{draw::Palette, primitives::Drafter};
//! let drafter = Drafter::new(Palette::default());
//! let styles = StatusStyleMap::default();
//! let units = vec![Unit::new(UnitId::new(1), BuildingId::new(1), 2, "2-1", UnitStatus::Available)];
//!
//! let plan = FloorPlanComposer::new(&drafter, &styles).compose(&units, None);
//! assert_eq!(plan.zones().len(), 1);
//! assert_eq!(plan.zones()[0].name(), "l0");
//! ```

mod circulation;
mod wing;

use log::{debug, trace, warn};

use floorplan_core::{
    draw::{
        Figure, Group, LayeredOutput, Palette, RectFigure, RenderLayer, StrokeDefinition,
        Transform,
    },
    geometry::{Bounds, Point, Size},
    primitives::Drafter,
};

use crate::{
    blueprint::{self, Side, VIEW_HEIGHT, VIEW_WIDTH, ZONES_PER_FLOOR},
    status::StatusStyleMap,
    unit::{Unit, UnitId, UnitStatus},
};

const ZONE_CORNER_RADIUS: f32 = 2.0;
const ZONE_STYLE: &str = "cursor:pointer;transition:fill .2s";

/// Receives the interaction callbacks of a floor plan.
///
/// Both callbacks are synchronous. The composer never acts on them itself;
/// every side effect happens in the implementor.
pub trait ZoneEvents {
    /// Pointer entered a zone (`Some`) or left one (`None`).
    fn on_hover(&mut self, unit: Option<&Unit>);

    /// A zone was clicked.
    fn on_select(&mut self, unit: &Unit);
}

/// A pointer interaction in view box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    /// The pointer left the drawing surface.
    Leave,
    Click(Point),
}

/// An interactive zone bound to a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOverlay {
    side: Side,
    slot: usize,
    bounds: Bounds,
    unit: Unit,
    hovered: bool,
    figure: RectFigure,
}

impl ZoneOverlay {
    pub fn side(&self) -> Side {
        self.side
    }

    /// Index of the zone within its wing.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Zone name such as `l0` or `r4`.
    pub fn name(&self) -> String {
        format!("{}{}", self.side.prefix(), self.slot)
    }

    /// The styled rectangle drawn for this zone.
    pub fn figure(&self) -> &RectFigure {
        &self.figure
    }
}

/// One composed floor: architecture figures plus the bound zones.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    background: Figure,
    envelope: Figure,
    left_wing: Figure,
    right_wing: Figure,
    core: Figure,
    zones: Vec<ZoneOverlay>,
}

impl FloorPlan {
    /// Bound zones in drawing order, left wing first.
    pub fn zones(&self) -> &[ZoneOverlay] {
        &self.zones
    }

    pub fn left_wing(&self) -> &Figure {
        &self.left_wing
    }

    /// The left wing under a mirror transform.
    pub fn right_wing(&self) -> &Figure {
        &self.right_wing
    }

    pub fn core(&self) -> &Figure {
        &self.core
    }

    /// Topmost zone containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<&ZoneOverlay> {
        self.zones.iter().rev().find(|zone| zone.bounds.contains(point))
    }

    /// Zone bound to the unit with the given id.
    pub fn zone_for(&self, unit_id: UnitId) -> Option<&ZoneOverlay> {
        self.zones.iter().find(|zone| zone.unit.id() == unit_id)
    }

    /// Zone drawn in the hovered state, if any.
    pub fn hovered_zone(&self) -> Option<&ZoneOverlay> {
        self.zones.iter().find(|zone| zone.hovered)
    }

    /// Translates a pointer event into zone callbacks.
    ///
    /// The zone hovered when the plan was composed is the one the pointer is
    /// considered to be in. Moving from one zone to another reports a leave
    /// followed by an enter.
    pub fn dispatch(&self, event: PointerEvent, events: &mut impl ZoneEvents) {
        let current = self.hovered_zone();

        match event {
            PointerEvent::Move(point) => {
                let target = self.hit_test(point);
                let unchanged = match (current, target) {
                    (Some(a), Some(b)) => a.unit.id() == b.unit.id(),
                    (None, None) => true,
                    _ => false,
                };
                if unchanged {
                    return;
                }
                if current.is_some() {
                    events.on_hover(None);
                }
                if let Some(zone) = target {
                    events.on_hover(Some(&zone.unit));
                }
            }
            PointerEvent::Leave => {
                if current.is_some() {
                    events.on_hover(None);
                }
            }
            PointerEvent::Click(point) => {
                if let Some(zone) = self.hit_test(point) {
                    events.on_select(&zone.unit);
                }
            }
        }
    }

    /// Consumes the plan into render layers: background, architecture in
    /// drawing order, then the zone overlays.
    pub fn into_layers(self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, self.background);
        for figure in [self.envelope, self.left_wing, self.right_wing, self.core] {
            output.add_to_layer(RenderLayer::Architecture, figure);
        }
        for zone in self.zones {
            output.add_to_layer(RenderLayer::Overlay, zone.figure.into());
        }
        output
    }
}

/// Builds [`FloorPlan`]s from the current floor's units.
#[derive(Debug, Clone, Copy)]
pub struct FloorPlanComposer<'a> {
    drafter: &'a Drafter,
    styles: &'a StatusStyleMap,
}

impl<'a> FloorPlanComposer<'a> {
    pub fn new(drafter: &'a Drafter, styles: &'a StatusStyleMap) -> Self {
        Self { drafter, styles }
    }

    pub fn palette(&self) -> &Palette {
        self.drafter.palette()
    }

    pub fn styles(&self) -> &StatusStyleMap {
        self.styles
    }

    /// Composes one floor.
    ///
    /// `units` must already be filtered to the floor and sorted; the unit at
    /// position `i` binds to zone `i` (`l0..l4`, then `r0..r4`). Zones without
    /// a unit are vacant and draw nothing. Units past the last zone are not
    /// drawn.
    pub fn compose(&self, units: &[Unit], hovered: Option<UnitId>) -> FloorPlan {
        if units.len() > ZONES_PER_FLOOR {
            warn!(
                units = units.len(),
                zones = ZONES_PER_FLOOR;
                "More units than zones on this floor, extra units are not drawn"
            );
        }

        let background = RectFigure::new(0.0, 0.0, Size::new(VIEW_WIDTH, VIEW_HEIGHT))
            .with_fill(self.drafter.palette().background())
            .into();

        let left_wing = wing::left_wing(self.drafter);
        let right_wing = Figure::Group(
            Group::new(vec![left_wing.clone()])
                .with_transform(Transform::MirrorX { width: VIEW_WIDTH }),
        );

        let zones: Vec<ZoneOverlay> = units
            .iter()
            .enumerate()
            .filter_map(|(position, unit)| {
                let (side, slot) = blueprint::slot_for_position(position)?;
                let bounds = blueprint::zone_bounds(side, slot)?;
                Some(self.zone(side, slot, bounds, unit, hovered == Some(unit.id())))
            })
            .collect();

        debug!(
            units = units.len(),
            zones = zones.len(),
            hovered:? = hovered;
            "Composed floor plan"
        );

        FloorPlan {
            background,
            envelope: circulation::envelope(self.drafter),
            left_wing,
            right_wing,
            core: circulation::core(self.drafter),
            zones,
        }
    }

    fn zone(
        &self,
        side: Side,
        slot: usize,
        bounds: Bounds,
        unit: &Unit,
        hovered: bool,
    ) -> ZoneOverlay {
        let style = self.styles.resolve(unit.status());

        let mut figure = RectFigure::new(bounds.min_x(), bounds.min_y(), bounds.to_size())
            .with_fill(style.fill_for(hovered))
            .with_corner_radius(ZONE_CORNER_RADIUS);

        let stroke_width = if hovered {
            2.0
        } else if unit.status() != UnitStatus::Available {
            1.0
        } else {
            0.0
        };
        if stroke_width > 0.0 {
            figure = figure.with_stroke(StrokeDefinition::solid(style.stroke(), stroke_width));
        }

        let name = format!("{}{}", side.prefix(), slot);
        trace!(zone = name.as_str(), unit_id = unit.id().get(); "Bound unit to zone");

        ZoneOverlay {
            side,
            slot,
            bounds,
            unit: unit.clone(),
            hovered,
            figure: figure
                .with_attribute("data-unit-id", unit.id().to_string())
                .with_attribute("data-zone", name)
                .with_attribute("style", ZONE_STYLE),
        }
    }
}
