//! Booking models and data structures
//!
//! The booking row carries canonical status vocabularies only. The legacy
//! mirror fields the old web client still reads (`bookingStatus`,
//! `paymentStatusLegacy`) are derived in [`BookingResponse`] at the
//! serialization boundary and exist nowhere else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

/// Primary booking lifecycle state
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Saved,     // Destination bookmarked, no commitment yet
    Pending,   // Booked, awaiting payment
    Confirmed, // Paid or otherwise finalized
    Cancelled, // Terminal
}

impl BookingStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Cancelled)
    }

    /// Map a legacy `bookingStatus` update value onto the canonical pair.
    ///
    /// `PAID` implies a payment-status change as well; the other values touch
    /// only the lifecycle state.
    pub fn from_legacy(value: &str) -> Option<(BookingStatus, Option<PaymentStatus>)> {
        match value {
            "PENDING_PAYMENT" => Some((BookingStatus::Pending, None)),
            "CONFIRMED" => Some((BookingStatus::Confirmed, None)),
            "PAID" => Some((BookingStatus::Confirmed, Some(PaymentStatus::Paid))),
            "Cancelled" => Some((BookingStatus::Cancelled, None)),
            _ => None,
        }
    }
}

/// Payment state, independent of the lifecycle state
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotPaid,
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    /// Legacy `paymentStatusLegacy` vocabulary
    pub fn legacy_label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::NotPaid | PaymentStatus::Pending => "PENDING_PAYMENT",
        }
    }
}

/// Derive the legacy `bookingStatus` mirror from the canonical pair
pub fn legacy_booking_status(status: BookingStatus, payment: PaymentStatus) -> &'static str {
    match (status, payment) {
        (BookingStatus::Cancelled, _) => "Cancelled",
        (_, PaymentStatus::Paid) => "PAID",
        (BookingStatus::Confirmed, _) => "CONFIRMED",
        _ => "PENDING_PAYMENT",
    }
}

/// Supported payment methods
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "payment_method", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Netbanking,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card
    }
}

/// Hotel room categories
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "room_type")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

/// Optional priced extra attached to a booking
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AddOn {
    pub id: String,
    pub label: String,
    pub price: i64,
}

/// Stable de-duplication key for a booking's destination.
///
/// The old client synthesized destination ids ad hoc per call site
/// (`"flight-" + id`, timestamps); every id is now rendered through this one
/// type so the (user, destination) idempotence contract holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationRef {
    Catalog(u32),
    Flight(u32),
}

impl DestinationRef {
    pub fn key(&self) -> String {
        match self {
            DestinationRef::Catalog(id) => id.to_string(),
            DestinationRef::Flight(id) => format!("flight-{}", id),
        }
    }
}

/// Booking row, the sole persisted travel entity
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,

    pub destination_id: String,
    pub destination_name: String,
    pub country: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub adults: i32,
    pub children: i32,
    pub total_travelers: i32,
    pub duration: Option<i32>,

    pub hotel_name: Option<String>,
    pub hotel_price: i64,
    pub room_type: Option<RoomType>,

    pub flight_number: Option<String>,
    pub flight_price: i64,
    pub flight_duration: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,

    pub price_per_person: i64,
    pub base_price: i64,
    pub add_ons: Json<Vec<AddOn>>,
    pub add_ons_total: i64,
    pub total_amount: i64,

    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking as the API serializes it, legacy mirrors included
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adults: i32,
    pub children: i32,
    pub total_travelers: i32,
    pub duration: Option<i32>,
    pub hotel_name: Option<String>,
    pub hotel_price: i64,
    pub room_type: Option<RoomType>,
    pub flight_number: Option<String>,
    pub flight_price: i64,
    pub flight_duration: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub price_per_person: i64,
    pub base_price: i64,
    pub add_ons: Vec<AddOn>,
    pub add_ons_total: i64,
    pub total_amount: i64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    /// Legacy mirror of `status` + `payment_status`
    pub booking_status: &'static str,
    /// Legacy mirror of `payment_status`
    pub payment_status_legacy: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        let booking_status = legacy_booking_status(b.status, b.payment_status);
        let payment_status_legacy = b.payment_status.legacy_label();
        Self {
            id: b.id,
            user_id: b.user_id,
            destination_id: b.destination_id,
            destination_name: b.destination_name,
            country: b.country,
            start_date: b.start_date,
            end_date: b.end_date,
            adults: b.adults,
            children: b.children,
            total_travelers: b.total_travelers,
            duration: b.duration,
            hotel_name: b.hotel_name,
            hotel_price: b.hotel_price,
            room_type: b.room_type,
            flight_number: b.flight_number,
            flight_price: b.flight_price,
            flight_duration: b.flight_duration,
            departure_time: b.departure_time,
            arrival_time: b.arrival_time,
            price_per_person: b.price_per_person,
            base_price: b.base_price,
            add_ons: b.add_ons.0,
            add_ons_total: b.add_ons_total,
            total_amount: b.total_amount,
            status: b.status,
            payment_status: b.payment_status,
            payment_method: b.payment_method,
            booking_status,
            payment_status_legacy,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Full-detail booking create (`POST /bookings`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub price_per_person: Option<i64>,
    pub base_price: Option<i64>,
    pub hotel_name: Option<String>,
    pub hotel_price: Option<i64>,
    pub room_type: Option<RoomType>,
    pub flight_number: Option<String>,
    pub flight_price: Option<i64>,
    pub flight_duration: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    pub add_ons_total: Option<i64>,
    pub total_amount: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
}

/// Destination bookmark (`POST /bookings/save`, short form)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SaveDestinationRequest {
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
    // Long-form save carries trip details as well
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub total_travelers: Option<i32>,
    pub price_per_person: Option<i64>,
    pub total_amount: Option<i64>,
    pub duration: Option<i32>,
}

/// Book-now (`POST /bookings/book`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookNowRequest {
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
}

/// Book-and-pay (`POST /bookings/book-and-pay`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookAndPayRequest {
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub total_travelers: Option<i32>,
    pub price_per_person: Option<i64>,
    pub total_amount: Option<i64>,
    pub duration: Option<i32>,
}

/// Flight save (`POST /bookings/save-flight`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SaveFlightRequest {
    pub flight_id: u32,
    pub airline: String,
    pub departure: String,
    pub arrival: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub flight_price: i64,
    pub available_seats: i32,
    pub adults: Option<i32>,
    pub children: Option<i32>,
}

/// Pay by booking id (`POST /bookings/pay`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub booking_id: Uuid,
}

/// Legacy payment route body (`POST /bookings/:id/payment`)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_method: Option<String>,
    // Card details are accepted but never stored; payment is simulated
    #[serde(default)]
    pub card_data: Option<serde_json::Value>,
}

/// Status-only update (`PUT /bookings/:id`)
///
/// Accepts the canonical `status` or the legacy `bookingStatus` vocabulary;
/// every other field is ignored by contract.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub booking_status: Option<String>,
}

// ============================================================================
// Response envelopes with contract flags
// ============================================================================

/// Envelope for save/book actions that may hit an existing record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Uuid>,
    pub data: BookingResponse,
}

impl BookingActionResponse {
    pub fn new(message: &str, booking: Booking) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            already_saved: None,
            already_exists: None,
            is_update: None,
            booking_id: None,
            data: booking.into(),
        }
    }
}
