//! Typed client for the booking API, plus the form rules a booking UI follows.
//!
//! The form rules are advisory. The server re-validates everything and owns the
//! one-booking-per-slot guarantee.

pub mod api;
pub mod calendar;
pub mod form;
pub mod session;

pub use api::{BookingApi, BookingDraft};
pub use calendar::BookingWindow;
pub use form::{BookingForm, Confirmation, FormError, SlotState, Stage};
pub use session::BookingSession;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error(transparent)]
    Form(#[from] FormError),
}
