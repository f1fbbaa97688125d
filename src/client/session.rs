use chrono::NaiveDate;

use crate::availability::Availability;
use crate::client::api::BookingApi;
use crate::client::calendar::BookingWindow;
use crate::client::form::BookingForm;
use crate::client::ClientResult;
use crate::entities::booking;

/// Drives a [`BookingForm`] against the API.
#[derive(Debug, Clone)]
pub struct BookingSession {
    api: BookingApi,
    form: BookingForm,
}

impl BookingSession {
    pub fn new(api: BookingApi, window: BookingWindow) -> Self {
        Self {
            api,
            form: BookingForm::new(window),
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    /// Select a date and fetch its availability.
    pub async fn choose_date(&mut self, date: NaiveDate) -> ClientResult<Availability> {
        self.form.select_date(date)?;
        let availability = self.api.availability(date).await?;
        self.form.apply_availability(date, availability.clone());
        Ok(availability)
    }

    /// Submit the form. On success the booking is shown and availability for its
    /// date is refreshed.
    pub async fn submit(&mut self) -> ClientResult<booking::Model> {
        let draft = self.form.draft()?;
        let booking = self.api.create_booking(&draft).await?;
        self.form.confirm(booking.clone());

        match self.api.availability(draft.date).await {
            Ok(availability) => {
                self.form.apply_availability(draft.date, availability);
            }
            Err(e) => {
                tracing::warn!(error = %e, date = %draft.date, "Failed to refresh availability");
            }
        }

        Ok(booking)
    }

    pub fn request_delete(&mut self) -> ClientResult<()> {
        Ok(self.form.request_delete()?)
    }

    pub fn cancel_delete(&mut self) {
        self.form.cancel_delete();
    }

    /// Delete the shown booking after the customer confirmed.
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let id = self.form.delete_target()?;
        self.api.delete_booking(id).await?;
        self.form.mark_deleted();
        Ok(())
    }

    pub fn close(&mut self) {
        self.form.reset();
    }
}
