//! Booking HTTP handlers
//!
//! Thin layer over `BookingService`: request parsing, ownership comes from
//! the authenticated token, and contract flags (`alreadySaved`, `isUpdate`,
//! `alreadyExists`) are set here from the service outcome.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::booking::{
    BookAndPayRequest, BookNowRequest, BookOutcome, BookingActionResponse, BookingResponse,
    CreateBookingRequest, PaymentMethod, PaymentRequest, PayRequest, SaveDestinationRequest,
    SaveFlightRequest, SaveOutcome, UpdateBookingRequest,
};
use crate::error::ApiError;
use crate::middleware::{AuthenticatedJson, AuthenticatedUser};
use crate::models::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub user_id: Option<Uuid>,
}

/// GET /bookings/my - The authenticated user's bookings, newest first
pub async fn my_bookings(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, ApiError> {
    let bookings = state.booking_service.list_for_user(user.user_id).await?;
    let data: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(data)))
}

/// GET /bookings/saved - The authenticated user's saved destinations
pub async fn saved_bookings(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, ApiError> {
    let bookings = state.booking_service.list_saved(user.user_id).await?;
    let data: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(data)))
}

/// GET /bookings - Compatibility listing, optionally filtered by userId
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, ApiError> {
    let bookings = state.booking_service.list_all(query.user_id).await?;
    let data: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::list(data)))
}

/// GET /bookings/:id - Fetch one booking
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state
        .booking_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    Ok(Json(ApiResponse::data(booking.into())))
}

/// POST /bookings - Full-detail booking create
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthenticatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingActionResponse>), ApiError> {
    let booking = state
        .booking_service
        .create_booking(auth.user.user_id, auth.payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingActionResponse::new(
            "Booking created successfully",
            booking,
        )),
    ))
}

/// POST /bookings/save - Save a destination (idempotent per user+destination)
pub async fn save_destination(
    State(state): State<AppState>,
    auth: AuthenticatedJson<SaveDestinationRequest>,
) -> Result<(StatusCode, Json<BookingActionResponse>), ApiError> {
    let long_form = auth.payload.start_date.is_some();

    match state
        .booking_service
        .save_destination(auth.user.user_id, auth.payload)
        .await?
    {
        SaveOutcome::AlreadySaved(booking) => {
            let mut body = BookingActionResponse::new("Destination already saved", booking);
            body.already_saved = Some(true);
            Ok((StatusCode::OK, Json(body)))
        }
        SaveOutcome::Created(booking) => {
            let (message, booking_id) = if long_form {
                ("Booking saved successfully", Some(booking.id))
            } else {
                ("Destination saved successfully", None)
            };
            let mut body = BookingActionResponse::new(message, booking);
            body.booking_id = booking_id;
            Ok((StatusCode::CREATED, Json(body)))
        }
    }
}

/// POST /bookings/book - Book now; promotes a saved row or creates a pending one
pub async fn book_now(
    State(state): State<AppState>,
    auth: AuthenticatedJson<BookNowRequest>,
) -> Result<(StatusCode, Json<BookingActionResponse>), ApiError> {
    let req = auth.payload;

    match state
        .booking_service
        .book_now(
            auth.user.user_id,
            &req.destination_id,
            &req.destination_name,
            &req.country,
        )
        .await?
    {
        BookOutcome::Promoted(booking) => {
            let mut body = BookingActionResponse::new("Booking updated to pending", booking);
            body.is_update = Some(true);
            Ok((StatusCode::OK, Json(body)))
        }
        BookOutcome::AlreadyExists(booking) => {
            let mut body = BookingActionResponse::new("Booking already exists", booking);
            body.already_exists = Some(true);
            Ok((StatusCode::OK, Json(body)))
        }
        BookOutcome::Created(booking) => Ok((
            StatusCode::CREATED,
            Json(BookingActionResponse::new(
                "Booking created successfully",
                booking,
            )),
        )),
    }
}

/// POST /bookings/book-and-pay - Create a pending booking ready for payment
pub async fn book_and_pay(
    State(state): State<AppState>,
    auth: AuthenticatedJson<BookAndPayRequest>,
) -> Result<(StatusCode, Json<BookingActionResponse>), ApiError> {
    let booking = state
        .booking_service
        .book_and_pay(auth.user.user_id, auth.payload)
        .await?;

    let mut body = BookingActionResponse::new("Booking created. Proceed to payment.", booking);
    body.booking_id = Some(body.data.id);

    Ok((StatusCode::CREATED, Json(body)))
}

/// POST /bookings/save-flight - Save a flight as a booking
pub async fn save_flight(
    State(state): State<AppState>,
    auth: AuthenticatedJson<SaveFlightRequest>,
) -> Result<(StatusCode, Json<BookingActionResponse>), ApiError> {
    let booking = state
        .booking_service
        .save_flight(auth.user.user_id, auth.payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingActionResponse::new(
            "Flight booking saved successfully",
            booking,
        )),
    ))
}

/// POST /bookings/pay - Pay for a booking by id
pub async fn pay(
    State(state): State<AppState>,
    auth: AuthenticatedJson<PayRequest>,
) -> Result<Json<BookingActionResponse>, ApiError> {
    let booking = state
        .booking_service
        .pay(auth.user.user_id, auth.payload.booking_id, None)
        .await?;

    Ok(Json(BookingActionResponse::new(
        "Payment processed successfully",
        booking,
    )))
}

/// POST /bookings/:id/payment - Legacy payment route with an explicit method
pub async fn pay_for_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthenticatedJson<PaymentRequest>,
) -> Result<Json<BookingActionResponse>, ApiError> {
    let method = match auth.payload.payment_method.as_deref() {
        Some("card") => PaymentMethod::Card,
        Some("upi") => PaymentMethod::Upi,
        Some("netbanking") => PaymentMethod::Netbanking,
        _ => return Err(ApiError::BadRequest("Invalid payment method".to_string())),
    };

    let booking = state
        .booking_service
        .pay(auth.user.user_id, id, Some(method))
        .await?;

    Ok(Json(BookingActionResponse::new(
        "Payment processed successfully",
        booking,
    )))
}

/// PUT /bookings/:id - Status-only update, owner only
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthenticatedJson<UpdateBookingRequest>,
) -> Result<Json<BookingActionResponse>, ApiError> {
    let booking = state
        .booking_service
        .update_status(auth.user.user_id, id, auth.payload)
        .await?;

    Ok(Json(BookingActionResponse::new(
        "Booking updated successfully",
        booking,
    )))
}

/// DELETE /bookings/:id - Hard delete, owner only
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.booking_service.delete(user.user_id, id).await?;

    Ok(Json(ApiResponse::message("Booking deleted successfully")))
}
