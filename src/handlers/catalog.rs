//! Catalog HTTP handlers for the static destination, hotel, and flight data

use axum::{extract::Path, Json};

use crate::catalog::{self, Destination, Flight, Hotel};
use crate::error::ApiError;
use crate::models::ApiResponse;

/// GET /destinations
pub async fn list_destinations() -> Json<ApiResponse<Vec<Destination>>> {
    Json(ApiResponse::list(catalog::DESTINATIONS.to_vec()))
}

/// GET /destinations/:id
pub async fn get_destination(
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<Destination>>, ApiError> {
    let destination = catalog::destination_by_id(id)
        .ok_or_else(|| ApiError::NotFound("Destination not found".to_string()))?;

    Ok(Json(ApiResponse::data(destination.clone())))
}

/// GET /hotels
pub async fn list_hotels() -> Json<ApiResponse<Vec<Hotel>>> {
    Json(ApiResponse::list(catalog::HOTELS.to_vec()))
}

/// GET /hotels/:id
pub async fn get_hotel(Path(id): Path<u32>) -> Result<Json<ApiResponse<Hotel>>, ApiError> {
    let hotel = catalog::hotel_by_id(id)
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    Ok(Json(ApiResponse::data(hotel.clone())))
}

/// GET /hotels/destination/:destination
pub async fn hotels_by_destination(
    Path(destination): Path<String>,
) -> Json<ApiResponse<Vec<Hotel>>> {
    let hotels: Vec<Hotel> = catalog::hotels_by_destination(&destination)
        .into_iter()
        .cloned()
        .collect();

    Json(ApiResponse::list(hotels))
}

/// GET /flights
pub async fn list_flights() -> Json<ApiResponse<Vec<Flight>>> {
    Json(ApiResponse::list(catalog::FLIGHTS.to_vec()))
}

/// GET /flights/:id
pub async fn get_flight(Path(id): Path<u32>) -> Result<Json<ApiResponse<Flight>>, ApiError> {
    let flight = catalog::flight_by_id(id)
        .ok_or_else(|| ApiError::NotFound("Flight not found".to_string()))?;

    Ok(Json(ApiResponse::data(flight.clone())))
}

/// GET /flights/search/:departure/:arrival
pub async fn search_flights(
    Path((departure, arrival)): Path<(String, String)>,
) -> Json<ApiResponse<Vec<Flight>>> {
    let flights: Vec<Flight> = catalog::flights_by_route(&departure, &arrival)
        .into_iter()
        .cloned()
        .collect();

    Json(ApiResponse::list(flights))
}
