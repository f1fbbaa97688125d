use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use migration::BOOKING_TEXT_MAX_LEN;
use serde::{Deserialize, Serialize};

use crate::db::{self, bookings::NewBooking};
use crate::entities::booking;
use crate::error::{AppError, AppResult};
use crate::handlers::parse_date;
use crate::utils::slots;
use crate::AppState;

/// Guest count as sent by API clients (number) or HTML forms (string).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GuestCount {
    Number(i64),
    Text(String),
}

impl GuestCount {
    fn is_blank(&self) -> bool {
        matches!(self, GuestCount::Text(s) if s.trim().is_empty())
    }

    fn to_positive(&self) -> Option<i32> {
        let n = match self {
            GuestCount::Number(n) => *n,
            GuestCount::Text(s) => s.trim().parse().ok()?,
        };
        i32::try_from(n).ok().filter(|n| *n > 0)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateBookingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<GuestCount>,
    pub name: Option<String>,
    pub contact: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn within_column(label: &str, value: &str) -> AppResult<()> {
    if value.chars().count() > BOOKING_TEXT_MAX_LEN as usize {
        return Err(AppError::BadRequest(format!(
            "{label} must be at most {BOOKING_TEXT_MAX_LEN} characters."
        )));
    }
    Ok(())
}

impl CreateBookingRequest {
    pub fn validate(&self) -> AppResult<NewBooking> {
        let missing = || AppError::BadRequest("All fields are required.".to_string());

        let date = present(&self.date).ok_or_else(missing)?;
        let time = present(&self.time).ok_or_else(missing)?;
        let guests = self.guests.as_ref().filter(|g| !g.is_blank()).ok_or_else(missing)?;
        let name = present(&self.name).ok_or_else(missing)?;
        let contact = present(&self.contact).ok_or_else(missing)?;

        let date = parse_date(date)?;
        let time = slots::parse_slot(time).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid time slot, expected one of: {}.",
                slots::all_labels().join(", ")
            ))
        })?;
        let guests = guests.to_positive().ok_or_else(|| {
            AppError::BadRequest("Guests must be a positive whole number.".to_string())
        })?;
        within_column("Name", name)?;
        within_column("Contact", contact)?;

        Ok(NewBooking {
            date,
            time,
            guests,
            name: name.to_string(),
            contact: contact.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking: booking::Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all bookings
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<booking::Model>>> {
    let bookings = db::bookings::list(&state.db).await?;
    Ok(Json(bookings))
}

/// Create a booking if its slot is still free
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    let Json(payload) = payload?;
    let new_booking = payload.validate()?;

    let booking = db::bookings::insert_if_free(&state.db, new_booking).await?;

    tracing::info!(
        booking_id = booking.id,
        date = %booking.date,
        time = %booking.time,
        "Booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Booking created successfully!".to_string(),
            booking,
        }),
    ))
}

/// Delete a booking by id
pub async fn delete_booking(
    State(state): State<AppState>,
    booking_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(booking_id) = booking_id?;

    if !db::bookings::delete(&state.db, booking_id).await? {
        return Err(AppError::NotFound("Booking not found.".to_string()));
    }

    tracing::info!(booking_id, "Booking deleted");

    Ok(Json(MessageResponse {
        message: "Booking deleted successfully.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn full_request() -> CreateBookingRequest {
        CreateBookingRequest {
            date: Some("2026-10-20".to_string()),
            time: Some("2:00 PM".to_string()),
            guests: Some(GuestCount::Number(4)),
            name: Some("Grace".to_string()),
            contact: Some("555-0199".to_string()),
        }
    }

    fn bad_request_message(req: &CreateBookingRequest) -> String {
        match req.validate() {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let booking = full_request().validate().unwrap();
        assert_eq!(booking.date.to_string(), "2026-10-20");
        assert_eq!(booking.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(booking.guests, 4);
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let strip: [fn(&mut CreateBookingRequest); 5] = [
            |r| r.date = None,
            |r| r.time = Some("   ".to_string()),
            |r| r.guests = Some(GuestCount::Text(String::new())),
            |r| r.name = None,
            |r| r.contact = Some(String::new()),
        ];
        for strip_field in strip {
            let mut req = full_request();
            strip_field(&mut req);
            assert_eq!(bad_request_message(&req), "All fields are required.");
        }
    }

    #[test]
    fn test_guests_from_form_string() {
        let mut req = full_request();
        req.guests = Some(GuestCount::Text(" 3 ".to_string()));
        assert_eq!(req.validate().unwrap().guests, 3);

        req.guests = Some(GuestCount::Number(0));
        assert!(bad_request_message(&req).starts_with("Guests"));

        req.guests = Some(GuestCount::Text("many".to_string()));
        assert!(bad_request_message(&req).starts_with("Guests"));
    }

    #[test]
    fn test_time_must_be_a_slot() {
        let mut req = full_request();
        req.time = Some("14:00:00".to_string());
        assert!(req.validate().is_ok());

        req.time = Some("9:00 PM".to_string());
        assert!(bad_request_message(&req).starts_with("Invalid time slot"));
    }

    #[test]
    fn test_name_and_contact_fit_their_columns() {
        let mut req = full_request();
        req.name = Some("é".repeat(100));
        req.contact = Some("5".repeat(100));
        assert!(req.validate().is_ok());

        req.name = Some("a".repeat(101));
        assert_eq!(bad_request_message(&req), "Name must be at most 100 characters.");

        let mut req = full_request();
        req.contact = Some("5".repeat(101));
        assert_eq!(bad_request_message(&req), "Contact must be at most 100 characters.");
    }

    #[test]
    fn test_date_format() {
        let mut req = full_request();
        req.date = Some("20-10-2026".to_string());
        assert!(bad_request_message(&req).starts_with("Invalid date"));
    }

    #[test]
    fn test_guest_count_deserializes_both_shapes() {
        let req: CreateBookingRequest =
            serde_json::from_str(r#"{"guests": 2, "name": "A"}"#).unwrap();
        assert_eq!(req.guests, Some(GuestCount::Number(2)));

        let req: CreateBookingRequest = serde_json::from_str(r#"{"guests": "2"}"#).unwrap();
        assert_eq!(req.guests, Some(GuestCount::Text("2".to_string())));
    }
}
