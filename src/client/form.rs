//! Booking form state.
//!
//! Fully-booked status is always derived from the latest availability fetched for
//! the selected date; nothing is remembered across dates.

use chrono::NaiveDate;

use crate::availability::Availability;
use crate::client::api::BookingDraft;
use crate::client::calendar::BookingWindow;
use crate::entities::booking;
use crate::utils::slots;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    DateSelected,
    SlotSelected,
    FieldsFilled,
    Submitted,
    ConfirmingDelete,
    Deleted,
}

/// How a slot button should behave for the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Availability has not been fetched yet
    Unknown,
    Available,
    Selected,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{date} is outside the booking window ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("select a date first")]
    NoDate,

    #[error("all slots are booked for {0}, please choose another date")]
    FullyBooked(NaiveDate),

    #[error("{0} is not a bookable time slot")]
    UnknownSlot(String),

    #[error("the {0} slot is already booked, please choose another")]
    SlotTaken(String),

    #[error("please fill in all fields")]
    Incomplete,

    #[error("number of guests must be a positive whole number")]
    InvalidGuests,

    #[error("a booking is already confirmed, close it before starting another")]
    Locked,

    #[error("there is no confirmed booking")]
    NoBooking,

    #[error("deletion has not been requested")]
    DeleteNotRequested,
}

#[derive(Debug, Clone)]
pub struct BookingForm {
    window: BookingWindow,
    date: Option<NaiveDate>,
    time: Option<String>,
    guests: String,
    name: String,
    contact: String,
    availability: Option<Availability>,
    booking: Option<booking::Model>,
    confirming_delete: bool,
    deleted: bool,
}

impl BookingForm {
    pub fn new(window: BookingWindow) -> Self {
        Self {
            window,
            date: None,
            time: None,
            guests: String::new(),
            name: String::new(),
            contact: String::new(),
            availability: None,
            booking: None,
            confirming_delete: false,
            deleted: false,
        }
    }

    pub fn window(&self) -> BookingWindow {
        self.window
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn availability(&self) -> Option<&Availability> {
        self.availability.as_ref()
    }

    pub fn booking(&self) -> Option<&booking::Model> {
        self.booking.as_ref()
    }

    /// The confirmed booking, formatted for display.
    pub fn confirmation(&self) -> Option<Confirmation> {
        self.booking.as_ref().map(Confirmation::from)
    }

    pub fn stage(&self) -> Stage {
        if self.deleted {
            return Stage::Deleted;
        }
        if self.booking.is_some() {
            return if self.confirming_delete {
                Stage::ConfirmingDelete
            } else {
                Stage::Submitted
            };
        }
        match (self.date, &self.time) {
            (None, _) => Stage::Idle,
            (Some(_), None) => Stage::DateSelected,
            (Some(_), Some(_)) if self.details_filled() => Stage::FieldsFilled,
            (Some(_), Some(_)) => Stage::SlotSelected,
        }
    }

    pub fn is_fully_booked(&self) -> bool {
        self.availability
            .as_ref()
            .is_some_and(|a| a.is_fully_booked)
    }

    /// Pick a date. Clears every other field and any shown booking.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), FormError> {
        if !self.window.contains(date) {
            return Err(FormError::DateOutOfRange {
                date,
                min: self.window.min,
                max: self.window.max,
            });
        }

        *self = Self::new(self.window);
        self.date = Some(date);
        Ok(())
    }

    /// Record availability fetched for `date`. Stale responses for a date that
    /// is no longer selected are ignored; returns whether it was applied.
    pub fn apply_availability(&mut self, date: NaiveDate, availability: Availability) -> bool {
        if self.date != Some(date) {
            return false;
        }

        let taken = self
            .time
            .as_deref()
            .is_some_and(|t| availability.is_booked(t));
        if taken && self.booking.is_none() {
            self.time = None;
        }
        self.availability = Some(availability);
        true
    }

    pub fn slot_state(&self, label: &str) -> SlotState {
        match &self.availability {
            Some(a) if a.is_booked(label) => SlotState::Booked,
            _ if self.time.as_deref() == Some(label) => SlotState::Selected,
            Some(a) if a.available_slots.iter().any(|s| s == label) => SlotState::Available,
            _ => SlotState::Unknown,
        }
    }

    /// Every fixed slot with its current state, in display order.
    pub fn slots(&self) -> Vec<(String, SlotState)> {
        slots::all_labels()
            .into_iter()
            .map(|label| {
                let state = self.slot_state(&label);
                (label, state)
            })
            .collect()
    }

    /// Choose a slot by label (`"2:00 PM"`) or 24-hour time (`"14:00"`).
    pub fn select_slot(&mut self, slot: &str) -> Result<(), FormError> {
        let date = self.editable_date()?;
        let label = slots::parse_slot(slot)
            .map(slots::format_label)
            .ok_or_else(|| FormError::UnknownSlot(slot.to_string()))?;

        if self.is_fully_booked() {
            return Err(FormError::FullyBooked(date));
        }
        if self.slot_state(&label) == SlotState::Booked {
            return Err(FormError::SlotTaken(label));
        }

        self.time = Some(label);
        Ok(())
    }

    pub fn set_guests(&mut self, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_details_editable()?;
        self.guests = value.into();
        Ok(())
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_details_editable()?;
        self.name = value.into();
        Ok(())
    }

    pub fn set_contact(&mut self, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_details_editable()?;
        self.contact = value.into();
        Ok(())
    }

    /// Build the request body, or say why the form cannot be submitted.
    pub fn draft(&self) -> Result<BookingDraft, FormError> {
        if self.is_locked() {
            return Err(FormError::Locked);
        }

        let (Some(date), Some(time)) = (self.date, self.time.as_ref()) else {
            return Err(FormError::Incomplete);
        };
        if !self.details_filled() {
            return Err(FormError::Incomplete);
        }
        if self.slot_state(time) == SlotState::Booked {
            return Err(FormError::SlotTaken(time.clone()));
        }

        let guests = self
            .guests
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(FormError::InvalidGuests)?;

        Ok(BookingDraft {
            date,
            time: time.clone(),
            guests,
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
        })
    }

    /// Show the booking the server accepted.
    pub fn confirm(&mut self, booking: booking::Model) {
        self.booking = Some(booking);
        self.confirming_delete = false;
    }

    /// First step of deletion: ask the customer to confirm.
    pub fn request_delete(&mut self) -> Result<(), FormError> {
        if self.booking.is_none() {
            return Err(FormError::NoBooking);
        }
        self.confirming_delete = true;
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Id to delete, once deletion has been requested.
    pub fn delete_target(&self) -> Result<i32, FormError> {
        let booking = self.booking.as_ref().ok_or(FormError::NoBooking)?;
        if !self.confirming_delete {
            return Err(FormError::DeleteNotRequested);
        }
        Ok(booking.id)
    }

    pub fn mark_deleted(&mut self) {
        self.booking = None;
        self.confirming_delete = false;
        self.deleted = true;
    }

    /// Close the confirmation and start over.
    pub fn reset(&mut self) {
        *self = Self::new(self.window);
    }

    fn details_filled(&self) -> bool {
        [&self.guests, &self.name, &self.contact]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    /// A confirmed or deleted booking freezes the form until a new date or reset.
    fn is_locked(&self) -> bool {
        self.booking.is_some() || self.deleted
    }

    fn editable_date(&self) -> Result<NaiveDate, FormError> {
        if self.is_locked() {
            return Err(FormError::Locked);
        }
        self.date.ok_or(FormError::NoDate)
    }

    fn ensure_details_editable(&self) -> Result<(), FormError> {
        let date = self.editable_date()?;
        if self.is_fully_booked() {
            return Err(FormError::FullyBooked(date));
        }
        Ok(())
    }
}

/// Booking details formatted for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub name: String,
    pub contact: String,
}

impl From<&booking::Model> for Confirmation {
    fn from(booking: &booking::Model) -> Self {
        Self {
            date: booking.date.format("%d-%m-%Y").to_string(),
            time: slots::format_label(booking.time),
            guests: booking.guests,
            name: booking.name.clone(),
            contact: booking.contact.clone(),
        }
    }
}
