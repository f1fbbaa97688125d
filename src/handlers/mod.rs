pub mod availability;
pub mod bookings;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date, expected YYYY-MM-DD.".to_string()))
}
