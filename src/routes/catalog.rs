//! Catalog route definitions

use axum::{routing::get, Router};

use crate::handlers::catalog;
use crate::state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/destinations", get(catalog::list_destinations))
        .route("/api/destinations/:id", get(catalog::get_destination))
        .route("/api/hotels", get(catalog::list_hotels))
        .route(
            "/api/hotels/destination/:destination",
            get(catalog::hotels_by_destination),
        )
        .route("/api/hotels/:id", get(catalog::get_hotel))
        .route("/api/flights", get(catalog::list_flights))
        .route(
            "/api/flights/search/:departure/:arrival",
            get(catalog::search_flights),
        )
        .route("/api/flights/:id", get(catalog::get_flight))
}
