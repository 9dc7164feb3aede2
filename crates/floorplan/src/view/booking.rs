//! The booking action of the detail view.
//!
//! Booking is split in three steps so the view never blocks:
//!
//! 1. [`FloorPlanView::request_booking`] checks the session and moves the
//!    view into [`BookingState::Loading`], handing out a [`BookingTicket`].
//! 2. [`submit_booking`] awaits the [`BookingClient`].
//! 3. [`FloorPlanView::resolve_booking`] applies the outcome, unless the
//!    detail session the ticket belongs to has been closed meanwhile.
//!
//! [`FloorPlanView::request_booking`]: super::FloorPlanView::request_booking
//! [`FloorPlanView::resolve_booking`]: super::FloorPlanView::resolve_booking

use std::future::Future;

use log::debug;
use thiserror::Error;

use crate::unit::{CompanyId, UnitId};

const DEFAULT_BOOKING_ERROR: &str = "Ошибка бронирования";

/// Progress of the booking action within one detail session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
    #[default]
    Idle,
    /// A request is in flight; the booking control is disabled.
    Loading,
    /// Terminal for the detail session.
    Success,
    /// The request failed with a message for the visitor.
    Error(String),
}

impl BookingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message to show, only in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a booking was started from a particular detail session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingTicket {
    pub(super) generation: u64,
    unit_id: UnitId,
    company_id: CompanyId,
}

impl BookingTicket {
    pub(super) fn new(generation: u64, unit_id: UnitId, company_id: CompanyId) -> Self {
        Self {
            generation,
            unit_id,
            company_id,
        }
    }

    pub fn unit_id(&self) -> UnitId {
        self.unit_id
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// The request to send for this ticket.
    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            company_id: self.company_id,
            unit_id: self.unit_id,
        }
    }
}

/// Outcome of asking the view to start a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStart {
    /// No access token; send the visitor to sign in and come back to `return_to`.
    LoginRequired { login_path: String, return_to: String },
    /// Nothing to do: no detail open, the unit is not bookable, a request is
    /// already running, or the session has no company.
    Ignored,
    /// The view is loading; submit the ticket.
    Submit(BookingTicket),
}

/// Parameters of the external booking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub company_id: CompanyId,
    pub unit_id: UnitId,
}

/// A rejected booking.
///
/// The message comes from the booking service and is shown verbatim. A
/// rejection without one reads "Ошибка бронирования".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct BookingError {
    message: Option<String>,
}

impl BookingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A rejection that carried no message.
    pub fn unexplained() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_BOOKING_ERROR)
    }
}

/// The external service that books units.
pub trait BookingClient {
    /// Books `request.unit_id` on behalf of `request.company_id`.
    fn book(&self, request: BookingRequest) -> impl Future<Output = Result<(), BookingError>>;
}

/// Sends the booking for `ticket` and waits for the answer.
///
/// There is no retry; a failed booking is retried by requesting it again.
pub async fn submit_booking(
    client: &impl BookingClient,
    ticket: &BookingTicket,
) -> Result<(), BookingError> {
    let request = ticket.request();
    debug!(
        unit_id = request.unit_id.get(),
        company_id = request.company_id.get();
        "Submitting booking"
    );
    client.book(request).await
}
