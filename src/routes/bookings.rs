//! Booking route definitions
//!
//! Fixed segments (`/my`, `/save`, ...) are registered alongside `/:id`;
//! the router matches literal segments before the capture.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/my", get(my_bookings))
        .route("/api/bookings/saved", get(saved_bookings))
        .route("/api/bookings/save", post(save_destination))
        .route("/api/bookings/book", post(book_now))
        .route("/api/bookings/book-and-pay", post(book_and_pay))
        .route("/api/bookings/save-flight", post(save_flight))
        .route("/api/bookings/pay", post(pay))
        .route(
            "/api/bookings/:id",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/api/bookings/:id/payment", post(pay_for_booking))
}
