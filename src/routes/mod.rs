use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{availability, bookings};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let booking_routes = Router::new()
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/{id}", delete(bookings::delete_booking))
        .route("/availability", get(availability::availability));

    Router::new()
        .nest("/api", booking_routes)
        .with_state(state)
}
