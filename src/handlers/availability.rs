use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::availability::Availability;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::handlers::parse_date;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// Booked and free slots for one date
pub async fn availability(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> AppResult<Json<Availability>> {
    let Query(query) = query?;

    let date = query
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Date is required.".to_string()))?;
    let date = parse_date(date)?;

    let booked = db::bookings::times_on(&state.db, date).await?;

    Ok(Json(Availability::from_booked_times(booked)))
}
