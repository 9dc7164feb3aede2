//! Floor Plan View: the interaction controller between live data and the composer.
//!
//! A [`FloorPlanView`] owns the selection state of one visitor: which building
//! and floor are shown, which unit is hovered, where the pointer is, which
//! unit's detail is open and how far its booking got. Every derived value
//! (floor units, available floors, stats) is recomputed from the current unit
//! list on demand, so a new list pushed by the data source is picked up on the
//! next render.
//!
//! # Example
//!
//! ```
//! # use floorplan::{config::ViewConfig, view::FloorPlanView};
//! # use floorplan::unit::{Building, BuildingId, Unit, UnitId, UnitStatus};
//! let buildings = vec![Building::new(BuildingId::new(1), "Корпус А", 16)];
//! let units = vec![
//!     Unit::new(UnitId::new(1), BuildingId::new(1), 2, "2-2", UnitStatus::Sold),
//!     Unit::new(UnitId::new(2), BuildingId::new(1), 2, "2-1", UnitStatus::Available),
//! ];
//!
//! let view = FloorPlanView::new(units, buildings, ViewConfig::default());
//! let labels: Vec<_> = view.floor_units().iter().map(|u| u.label().to_string()).collect();
//! assert_eq!(labels, ["2-1", "2-2"]);
//! assert_eq!(view.stats().sold, 1);
//! ```

mod booking;
mod tooltip;

pub use booking::{
    BookingClient, BookingError, BookingRequest, BookingStart, BookingState, BookingTicket,
    submit_booking,
};
pub use tooltip::{TOOLTIP_OFFSET, Tooltip};

use log::{debug, info, warn};

use floorplan_core::geometry::Point;

use crate::{
    compose::{FloorPlan, FloorPlanComposer, PointerEvent, ZoneEvents},
    config::ViewConfig,
    error::FloorPlanError,
    export::{Exporter, svg::SvgBuilder},
    session::SessionContext,
    status::{StatusStyle, StatusStyleMap},
    unit::{Building, BuildingId, Unit, UnitId, UnitStatus},
};

/// Building name shown when no building is selected or the name is empty.
const FALLBACK_BUILDING_NAME: &str = "Корпус А";

/// Unit counts of the current floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloorStats {
    pub total: usize,
    pub available: usize,
    /// Booked and prebooked units.
    pub booked: usize,
    pub sold: usize,
}

impl FloorStats {
    /// Counts units by status.
    pub fn from_units<'a>(units: impl IntoIterator<Item = &'a Unit>) -> Self {
        units.into_iter().fold(Self::default(), |mut stats, unit| {
            stats.total += 1;
            match unit.status() {
                UnitStatus::Available => stats.available += 1,
                UnitStatus::Booked | UnitStatus::Prebooked => stats.booked += 1,
                UnitStatus::Sold => stats.sold += 1,
                UnitStatus::Installment | UnitStatus::Other => {}
            }
            stats
        })
    }
}

/// Interactive state of the floor plan for one visitor.
#[derive(Debug, Clone)]
pub struct FloorPlanView {
    units: Vec<Unit>,
    buildings: Vec<Building>,
    config: ViewConfig,
    selected_building: Option<BuildingId>,
    selected_floor: i32,
    hovered: Option<UnitId>,
    pointer: Point,
    detail: Option<Unit>,
    booking: BookingState,
    /// Bumped whenever a detail session opens or closes.
    generation: u64,
}

impl FloorPlanView {
    /// Creates a view showing the first building at the configured default floor.
    pub fn new(units: Vec<Unit>, buildings: Vec<Building>, config: ViewConfig) -> Self {
        let selected_building = buildings.first().map(Building::id);
        let selected_floor = config.default_floor();
        Self {
            units,
            buildings,
            config,
            selected_building,
            selected_floor,
            hovered: None,
            pointer: Point::default(),
            detail: None,
            booking: BookingState::Idle,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn selected_building(&self) -> Option<&Building> {
        let id = self.selected_building?;
        self.buildings.iter().find(|building| building.id() == id)
    }

    pub fn selected_floor(&self) -> i32 {
        self.selected_floor
    }

    /// Name of the selected building, with a fallback for unnamed buildings.
    pub fn building_name(&self) -> &str {
        self.selected_building()
            .map(Building::name)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_BUILDING_NAME)
    }

    /// Heading for the current floor, e.g. `Корпус А • 2 этаж`.
    pub fn caption(&self) -> String {
        format!("{} • {} этаж", self.building_name(), self.selected_floor)
    }

    /// Switches building.
    ///
    /// The floor returns to the configured default, and hover and detail are
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Data`] if no building has `id`. The view is
    /// left unchanged.
    pub fn select_building(&mut self, id: BuildingId) -> Result<(), FloorPlanError> {
        if !self.buildings.iter().any(|building| building.id() == id) {
            return Err(FloorPlanError::Data(format!("Unknown building id {id}")));
        }

        info!(building_id = id.get(); "Selecting building");
        self.selected_building = Some(id);
        self.selected_floor = self.config.default_floor();
        self.hovered = None;
        if self.detail.is_some() {
            self.close_detail();
        }
        Ok(())
    }

    /// Switches floor and clears hover.
    pub fn select_floor(&mut self, floor: i32) {
        debug!(floor = floor; "Selecting floor");
        self.selected_floor = floor;
        self.hovered = None;
    }

    /// Replaces the unit list with a fresh one from the data source.
    ///
    /// Hover is kept only if the hovered unit is still on the current floor.
    /// An open detail keeps showing the unit as it was when opened.
    pub fn set_units(&mut self, units: Vec<Unit>) {
        debug!(units = units.len(); "Unit list replaced");
        self.units = units;
        if self.hovered.is_some_and(|id| !self.is_on_current_floor(id)) {
            self.hovered = None;
        }
    }

    fn building_units(&self) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |unit| Some(unit.building_id()) == self.selected_building)
    }

    fn is_on_current_floor(&self, id: UnitId) -> bool {
        self.building_units()
            .any(|unit| unit.id() == id && unit.floor() == self.selected_floor)
    }

    /// Units of the selected building and floor, ordered by the number after
    /// the dash in their label. Units with equal keys keep their input order.
    pub fn floor_units(&self) -> Vec<Unit> {
        let mut units: Vec<Unit> = self
            .building_units()
            .filter(|unit| unit.floor() == self.selected_floor)
            .cloned()
            .collect();
        units.sort_by_key(Unit::sort_key);
        debug!(floor = self.selected_floor, units = units.len(); "Filtered floor units");
        units
    }

    /// Floor count of the selected building, or the configured fallback.
    pub fn total_floors(&self) -> u32 {
        self.selected_building()
            .and_then(Building::total_floors)
            .unwrap_or_else(|| self.config.fallback_total_floors())
    }

    /// Floors that have units, ascending.
    ///
    /// Before any unit of the building is known this is `2..=total_floors`,
    /// so the floor selector always has entries.
    pub fn available_floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.building_units().map(Unit::floor).collect();
        floors.sort_unstable();
        floors.dedup();

        if floors.is_empty() {
            let top = i32::try_from(self.total_floors()).unwrap_or(i32::MAX);
            return (2..=top).collect();
        }
        floors
    }

    pub fn stats(&self) -> FloorStats {
        FloorStats::from_units(&self.floor_units())
    }

    /// True when the selected floor has no units. Hosts show a placeholder
    /// ("На этом этаже нет квартир") instead of an empty plan.
    pub fn is_floor_empty(&self) -> bool {
        !self
            .building_units()
            .any(|unit| unit.floor() == self.selected_floor)
    }

    /// Legend entries in style order. `PREBOOKED` shares its look with
    /// `BOOKED` and is left out.
    pub fn legend<'a>(&self, styles: &'a StatusStyleMap) -> Vec<(UnitStatus, &'a StatusStyle)> {
        styles
            .iter()
            .filter(|(status, _)| *status != UnitStatus::Prebooked)
            .collect()
    }

    /// The hovered unit, if it is on the current floor.
    pub fn hovered(&self) -> Option<Unit> {
        let id = self.hovered?;
        self.floor_units().into_iter().find(|unit| unit.id() == id)
    }

    pub fn hovered_id(&self) -> Option<UnitId> {
        self.hovered
    }

    /// Records the latest pointer position.
    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = position;
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Tooltip for the hovered unit at the last pointer position.
    pub fn tooltip(&self, styles: &StatusStyleMap) -> Option<Tooltip> {
        self.hovered()
            .map(|unit| Tooltip::new(&unit, self.pointer, styles, &self.config))
    }

    /// Opens the detail of `unit`, starting a fresh booking session.
    pub fn open_detail(&mut self, unit: &Unit) {
        debug!(unit_id = unit.id().get(); "Opening unit detail");
        self.detail = Some(unit.clone());
        self.booking = BookingState::Idle;
        self.generation += 1;
    }

    /// Closes the detail. A booking still in flight will not be applied.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.booking = BookingState::Idle;
        self.generation += 1;
    }

    pub fn detail(&self) -> Option<&Unit> {
        self.detail.as_ref()
    }

    /// Layout image of the open detail.
    pub fn detail_layout_image(&self) -> Option<&str> {
        let unit = self.detail.as_ref()?;
        unit.layout_plan_url()
            .or_else(|| self.config.layout_image(unit.rooms()))
    }

    pub fn booking_state(&self) -> &BookingState {
        &self.booking
    }

    /// True when the booking control is shown: the open unit is available and
    /// has not been booked in this session.
    pub fn shows_booking_control(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|unit| unit.status().is_available())
            && self.booking != BookingState::Success
    }

    /// Starts booking the open unit.
    ///
    /// Anonymous visitors are sent to sign in. Without a company the request
    /// is dropped silently, as is any request while the control is hidden or
    /// a booking is already loading.
    pub fn request_booking(&mut self, session: &SessionContext) -> BookingStart {
        if !self.shows_booking_control() || self.booking.is_loading() {
            return BookingStart::Ignored;
        }
        let Some(unit_id) = self.detail.as_ref().map(Unit::id) else {
            return BookingStart::Ignored;
        };

        if !session.is_authenticated() {
            info!(return_to = session.location(); "Booking requires login");
            return BookingStart::LoginRequired {
                login_path: self.config.login_path().to_string(),
                return_to: session.location().to_string(),
            };
        }
        let Some(company_id) = session.company_id() else {
            debug!("Booking ignored, session has no company");
            return BookingStart::Ignored;
        };

        self.booking = BookingState::Loading;
        BookingStart::Submit(BookingTicket::new(self.generation, unit_id, company_id))
    }

    /// Applies the outcome of a submitted booking.
    ///
    /// Returns `false` and leaves the view alone when the ticket's detail
    /// session is no longer open.
    pub fn resolve_booking(
        &mut self,
        ticket: &BookingTicket,
        outcome: Result<(), BookingError>,
    ) -> bool {
        let current = self.detail.is_some() && ticket.generation == self.generation;
        if !current || !self.booking.is_loading() {
            warn!(
                unit_id = ticket.unit_id().get();
                "Dropping booking response for a closed detail session"
            );
            return false;
        }

        self.booking = match outcome {
            Ok(()) => {
                info!(unit_id = ticket.unit_id().get(); "Booking accepted");
                BookingState::Success
            }
            Err(err) => {
                warn!(unit_id = ticket.unit_id().get(), err:% = err; "Booking rejected");
                BookingState::Error(err.message().to_string())
            }
        };
        true
    }

    /// Composes the current floor.
    pub fn compose(&self, composer: &FloorPlanComposer<'_>) -> FloorPlan {
        composer.compose(&self.floor_units(), self.hovered)
    }

    /// Records the pointer position and dispatches the event against `plan`.
    pub fn handle_pointer(&mut self, plan: &FloorPlan, event: PointerEvent) {
        if let PointerEvent::Move(point) | PointerEvent::Click(point) = event {
            self.pointer_moved(point);
        }
        plan.dispatch(event, self);
    }

    /// Renders the current floor to SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Export`] if the document cannot be serialized.
    pub fn render_svg(&self, composer: &FloorPlanComposer<'_>) -> Result<String, FloorPlanError> {
        let mut svg = SvgBuilder::new()
            .with_palette(composer.palette())
            .with_title(self.caption())
            .build();
        svg.export_floor_plan(self.compose(composer))?;
        Ok(svg.into_string())
    }
}

impl ZoneEvents for FloorPlanView {
    fn on_hover(&mut self, unit: Option<&Unit>) {
        self.hovered = unit.map(Unit::id);
    }

    fn on_select(&mut self, unit: &Unit) {
        self.open_detail(unit);
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::{draw::Palette, primitives::Drafter};

    use super::*;
    use crate::unit::CompanyId;

    fn unit(id: u64, building: u64, floor: i32, label: &str, status: UnitStatus) -> Unit {
        Unit::new(UnitId::new(id), BuildingId::new(building), floor, label, status)
    }

    fn buildings() -> Vec<Building> {
        vec![
            Building::new(BuildingId::new(1), "Корпус А", 16),
            Building::new(BuildingId::new(2), "", 0),
        ]
    }

    fn units() -> Vec<Unit> {
        vec![
            unit(1, 1, 2, "2-3", UnitStatus::Sold),
            unit(2, 1, 2, "2-1", UnitStatus::Available),
            unit(3, 1, 2, "2-2", UnitStatus::Prebooked),
            unit(4, 1, 2, "2-x", UnitStatus::Booked),
            unit(5, 1, 3, "3-1", UnitStatus::Available),
            unit(6, 1, 7, "7-1", UnitStatus::Installment),
            unit(7, 2, 2, "2-1", UnitStatus::Available),
        ]
    }

    fn view() -> FloorPlanView {
        FloorPlanView::new(units(), buildings(), ViewConfig::default())
    }

    fn signed_in() -> SessionContext {
        SessionContext::anonymous()
            .with_token("token")
            .with_company(CompanyId::new(5))
    }

    fn labels(units: &[Unit]) -> Vec<&str> {
        units.iter().map(Unit::label).collect()
    }

    #[test]
    fn test_defaults_to_first_building_and_floor_two() {
        let view = view();
        assert_eq!(view.selected_building().map(Building::id), Some(BuildingId::new(1)));
        assert_eq!(view.selected_floor(), 2);
        assert_eq!(view.caption(), "Корпус А • 2 этаж");
    }

    #[test]
    fn test_floor_units_sorted_by_suffix() {
        let view = view();
        assert_eq!(labels(&view.floor_units()), ["2-x", "2-1", "2-2", "2-3"]);
    }

    #[test]
    fn test_is_floor_empty() {
        let mut view = view();
        assert!(!view.is_floor_empty());

        view.select_floor(5);
        assert!(view.is_floor_empty());
        assert_eq!(view.stats().total, 0);

        view.select_floor(7);
        assert!(!view.is_floor_empty());

        // Floor 3 only has units in the first building
        view.select_building(BuildingId::new(2)).unwrap();
        view.select_floor(3);
        assert!(view.is_floor_empty());

        view.set_units(vec![unit(8, 2, 3, "3-1", UnitStatus::Available)]);
        assert!(!view.is_floor_empty());
    }

    #[test]
    fn test_stats_count_prebooked_as_booked() {
        let stats = view().stats();
        assert_eq!(
            stats,
            FloorStats {
                total: 4,
                available: 1,
                booked: 2,
                sold: 1,
            }
        );
    }

    #[test]
    fn test_available_floors_from_units() {
        assert_eq!(view().available_floors(), [2, 3, 7]);
    }

    #[test]
    fn test_available_floors_fallback_range() {
        let view = FloorPlanView::new(Vec::new(), buildings(), ViewConfig::default());
        assert_eq!(view.available_floors(), (2..=16).collect::<Vec<_>>());

        let view = FloorPlanView::new(
            Vec::new(),
            buildings(),
            ViewConfig::default().with_fallback_total_floors(5),
        );
        let mut view = view;
        view.select_building(BuildingId::new(2)).unwrap();
        assert_eq!(view.available_floors(), [2, 3, 4, 5]);
    }

    #[test]
    fn test_select_building_resets_floor_and_interaction() {
        let mut view = view();
        view.select_floor(7);
        view.on_hover(Some(&unit(6, 1, 7, "7-1", UnitStatus::Installment)));
        view.open_detail(&unit(6, 1, 7, "7-1", UnitStatus::Installment));

        view.select_building(BuildingId::new(2)).unwrap();

        assert_eq!(view.selected_floor(), 2);
        assert_eq!(view.hovered_id(), None);
        assert!(view.detail().is_none());
        assert_eq!(view.building_name(), "Корпус А");
        assert_eq!(labels(&view.floor_units()), ["2-1"]);
    }

    #[test]
    fn test_select_unknown_building_is_error() {
        let mut view = view();
        view.select_floor(3);
        let err = view.select_building(BuildingId::new(99)).unwrap_err();
        assert!(matches!(err, FloorPlanError::Data(_)));
        assert_eq!(view.selected_floor(), 3);
    }

    #[test]
    fn test_legend_skips_prebooked() {
        let styles = StatusStyleMap::default();
        let legend: Vec<UnitStatus> = view().legend(&styles).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            legend,
            [
                UnitStatus::Available,
                UnitStatus::Booked,
                UnitStatus::Installment,
                UnitStatus::Sold
            ]
        );
    }

    #[test]
    fn test_hover_and_tooltip() {
        let styles = StatusStyleMap::default();
        let mut view = view();
        assert!(view.tooltip(&styles).is_none());

        view.on_hover(Some(&unit(2, 1, 2, "2-1", UnitStatus::Available)));
        view.pointer_moved(Point::new(40.0, 50.0));

        let tooltip = view.tooltip(&styles).expect("hovered unit has a tooltip");
        assert_eq!(tooltip.label(), "2-1");
        assert_eq!(tooltip.anchor(), Point::new(56.0, 40.0));
        assert_eq!(view.booking_state(), &BookingState::Idle);

        view.on_hover(None);
        assert!(view.tooltip(&styles).is_none());
    }

    #[test]
    fn test_set_units_drops_stale_hover() {
        let mut view = view();
        view.on_hover(Some(&unit(2, 1, 2, "2-1", UnitStatus::Available)));

        view.set_units(units());
        assert_eq!(view.hovered_id(), Some(UnitId::new(2)));

        view.set_units(vec![unit(1, 1, 2, "2-3", UnitStatus::Sold)]);
        assert_eq!(view.hovered_id(), None);
        assert_eq!(view.stats().total, 1);
    }

    #[test]
    fn test_booking_success_flow() {
        let mut view = view();
        view.on_select(&unit(2, 1, 2, "2-1", UnitStatus::Available));
        assert!(view.shows_booking_control());

        let BookingStart::Submit(ticket) = view.request_booking(&signed_in()) else {
            panic!("signed in visitor can book");
        };
        assert_eq!(ticket.unit_id(), UnitId::new(2));
        assert_eq!(ticket.company_id(), CompanyId::new(5));
        assert!(view.booking_state().is_loading());
        assert_eq!(view.request_booking(&signed_in()), BookingStart::Ignored);

        assert!(view.resolve_booking(&ticket, Ok(())));
        assert_eq!(view.booking_state(), &BookingState::Success);
        assert!(!view.shows_booking_control());
        assert_eq!(view.request_booking(&signed_in()), BookingStart::Ignored);
    }

    #[test]
    fn test_booking_error_allows_retry() {
        let mut view = view();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));

        let BookingStart::Submit(first) = view.request_booking(&signed_in()) else {
            panic!("signed in visitor can book");
        };
        assert!(view.resolve_booking(&first, Err(BookingError::new("Квартира уже продана"))));
        assert_eq!(
            view.booking_state().error_message(),
            Some("Квартира уже продана")
        );
        assert!(view.shows_booking_control());

        let BookingStart::Submit(retry) = view.request_booking(&signed_in()) else {
            panic!("booking can be retried after an error");
        };
        assert_eq!(view.booking_state(), &BookingState::Loading);
        assert_eq!(view.booking_state().error_message(), None);

        assert!(view.resolve_booking(&retry, Ok(())));
        assert_eq!(view.booking_state(), &BookingState::Success);

        // The earlier attempt was already settled
        assert!(!view.resolve_booking(&first, Err(BookingError::unexplained())));
        assert_eq!(view.booking_state(), &BookingState::Success);
    }

    #[test]
    fn test_booking_error_without_message_uses_fallback() {
        let mut view = view();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));

        let BookingStart::Submit(ticket) = view.request_booking(&signed_in()) else {
            panic!("signed in visitor can book");
        };
        assert!(view.resolve_booking(&ticket, Err(BookingError::unexplained())));
        assert_eq!(
            view.booking_state().error_message(),
            Some("Ошибка бронирования")
        );
    }

    #[test]
    fn test_anonymous_booking_redirects_to_login() {
        let mut view = view();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));

        let start = view.request_booking(&SessionContext::anonymous().with_location("/catalog/1"));
        assert_eq!(
            start,
            BookingStart::LoginRequired {
                login_path: "/login".to_string(),
                return_to: "/catalog/1".to_string(),
            }
        );
        assert_eq!(view.booking_state(), &BookingState::Idle);
    }

    #[test]
    fn test_booking_without_company_is_ignored() {
        let mut view = view();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));

        let session = SessionContext::anonymous().with_token("token");
        assert_eq!(view.request_booking(&session), BookingStart::Ignored);
        assert_eq!(view.booking_state(), &BookingState::Idle);
    }

    #[test]
    fn test_unavailable_unit_cannot_be_booked() {
        let mut view = view();
        view.open_detail(&unit(1, 1, 2, "2-3", UnitStatus::Sold));
        assert!(!view.shows_booking_control());
        assert_eq!(view.request_booking(&signed_in()), BookingStart::Ignored);
    }

    #[test]
    fn test_late_response_after_close_is_dropped() {
        let mut view = view();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));
        let BookingStart::Submit(ticket) = view.request_booking(&signed_in()) else {
            panic!("signed in visitor can book");
        };

        view.close_detail();
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available));

        assert!(!view.resolve_booking(&ticket, Ok(())));
        assert_eq!(view.booking_state(), &BookingState::Idle);
    }

    #[test]
    fn test_detail_layout_image() {
        let mut view = view();
        assert!(view.detail_layout_image().is_none());
        view.open_detail(&unit(2, 1, 2, "2-1", UnitStatus::Available).with_rooms(3));
        assert_eq!(view.detail_layout_image(), view.config().layout_image(3));
    }

    #[test]
    fn test_pointer_events_drive_hover_and_detail() {
        let drafter = Drafter::new(Palette::default());
        let styles = StatusStyleMap::default();
        let composer = FloorPlanComposer::new(&drafter, &styles);
        let mut view = view();

        // First zone holds "2-x", the unit with an unparsable suffix
        let plan = view.compose(&composer);
        view.handle_pointer(&plan, PointerEvent::Move(Point::new(100.0, 80.0)));
        assert_eq!(view.hovered_id(), Some(UnitId::new(4)));
        assert_eq!(view.pointer(), Point::new(100.0, 80.0));

        let plan = view.compose(&composer);
        assert!(plan.zones()[0].is_hovered());
        view.handle_pointer(&plan, PointerEvent::Click(Point::new(100.0, 80.0)));
        assert_eq!(view.detail().map(Unit::id), Some(UnitId::new(4)));

        view.handle_pointer(&plan, PointerEvent::Leave);
        assert_eq!(view.hovered_id(), None);
    }

    #[test]
    fn test_render_svg_has_caption() {
        let drafter = Drafter::new(Palette::default());
        let styles = StatusStyleMap::default();
        let composer = FloorPlanComposer::new(&drafter, &styles);

        let svg = view().render_svg(&composer).unwrap();
        assert!(svg.contains("Корпус А • 2 этаж"));
        assert_eq!(svg.matches("data-zone=").count(), 4);
    }
}
