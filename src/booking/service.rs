//! Booking service layer - lifecycle, de-duplication, and payment logic
//!
//! Every mutation is a single-row read-modify-write. The pay path uses a
//! conditional UPDATE so two racing payment calls cannot both transition the
//! row; the loser observes zero affected rows and reports a conflict.

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use super::model::{
    AddOn, BookAndPayRequest, Booking, BookingStatus, CreateBookingRequest, DestinationRef,
    PaymentMethod, PaymentStatus, SaveDestinationRequest, SaveFlightRequest,
    UpdateBookingRequest,
};
use super::pricing::{self, PricingInput};
use super::validation;
use crate::error::ApiError;

/// Booking service errors
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("This booking has already been paid")]
    AlreadyPaid,

    #[error("Cannot pay for a cancelled booking")]
    BookingCancelled,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for BookingError {
    fn from(e: sqlx::Error) -> Self {
        BookingError::DatabaseError(e.to_string())
    }
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::NotFound => ApiError::NotFound(e.to_string()),
            BookingError::Forbidden(msg) => ApiError::Forbidden(msg),
            BookingError::AlreadyPaid | BookingError::BookingCancelled => {
                ApiError::Conflict(e.to_string())
            }
            BookingError::Validation(msg) => {
                ApiError::ValidationError(format!("Validation failed: {}", msg))
            }
            BookingError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

/// Outcome of the idempotent destination save
pub enum SaveOutcome {
    Created(Booking),
    AlreadySaved(Booking),
}

/// Branch taken by the idempotent destination save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveDecision {
    Create,
    AlreadySaved,
}

fn save_decision(existing_saved: Option<&Booking>) -> SaveDecision {
    match existing_saved {
        Some(_) => SaveDecision::AlreadySaved,
        None => SaveDecision::Create,
    }
}

/// Branch taken by book-now against any existing (user, destination) row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookDecision {
    Create,
    Promote,
    AlreadyExists,
}

fn book_now_decision(existing: Option<&Booking>) -> BookDecision {
    match existing {
        None => BookDecision::Create,
        Some(b) if b.status == BookingStatus::Saved => BookDecision::Promote,
        Some(_) => BookDecision::AlreadyExists,
    }
}

fn ensure_owner(booking: &Booking, user_id: Uuid, action: &str) -> Result<(), BookingError> {
    if booking.user_id != user_id {
        return Err(BookingError::Forbidden(format!(
            "You are not authorized to {} this booking",
            action
        )));
    }
    Ok(())
}

/// Payment precondition: owner-only, not cancelled, not already paid.
/// The conditional UPDATE in `pay` re-checks the state transition; this is
/// the decision the row must pass first.
fn pay_precondition(booking: &Booking, user_id: Uuid) -> Result<(), BookingError> {
    ensure_owner(booking, user_id, "pay for")?;
    if booking.status == BookingStatus::Cancelled {
        return Err(BookingError::BookingCancelled);
    }
    if booking.payment_status == PaymentStatus::Paid {
        return Err(BookingError::AlreadyPaid);
    }
    Ok(())
}

/// Outcome of book-now against the (user, destination) pair
pub enum BookOutcome {
    Created(Booking),
    /// An existing saved row was promoted to pending in place
    Promoted(Booking),
    /// A non-saved booking already exists; nothing changed
    AlreadyExists(Booking),
}

/// Booking service owning all persistence for the booking lifecycle
#[derive(Clone)]
pub struct BookingService {
    db_pool: PgPool,
}

impl BookingService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Get a single booking by id
    pub async fn get(&self, id: Uuid) -> Result<Option<Booking>, BookingError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(booking)
    }

    /// All bookings for a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(bookings)
    }

    /// Legacy compatibility list: everything, optionally filtered by user
    pub async fn list_all(&self, user_id: Option<Uuid>) -> Result<Vec<Booking>, BookingError> {
        let bookings = match user_id {
            Some(uid) => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
                )
                .bind(uid)
                .fetch_all(&self.db_pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                    .fetch_all(&self.db_pool)
                    .await?
            }
        };

        Ok(bookings)
    }

    /// Saved destinations for a user, newest first
    pub async fn list_saved(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 AND status = 'saved' ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(bookings)
    }

    // ========================================================================
    // Entry actions
    // ========================================================================

    /// Full-detail booking create; lands in `pending` awaiting payment
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<Booking, BookingError> {
        let mut booking = base_row(
            user_id,
            &request.destination_id,
            &request.destination_name,
            &request.country,
        );

        booking.status = BookingStatus::Pending;
        booking.payment_status = PaymentStatus::Pending;
        booking.start_date = request.start_date;
        booking.end_date = request.end_date;
        booking.adults = request.adults.unwrap_or(1);
        booking.children = request.children.unwrap_or(0);
        booking.total_travelers = booking.adults + booking.children;
        booking.price_per_person = request.price_per_person.unwrap_or(0);
        booking.base_price = request.base_price.unwrap_or(0);
        booking.hotel_name = request.hotel_name;
        booking.hotel_price = request.hotel_price.unwrap_or(0);
        booking.room_type = request.room_type;
        booking.flight_number = request.flight_number;
        booking.flight_price = request.flight_price.unwrap_or(0);
        booking.flight_duration = request.flight_duration;
        booking.departure_time = request.departure_time;
        booking.arrival_time = request.arrival_time;
        // The add-on total is always recomputed from the list; the
        // client-submitted figure is only a hint
        booking.add_ons_total = request.add_ons.iter().map(|a| a.price).sum();
        booking.add_ons = Json(request.add_ons);
        booking.total_amount = request.total_amount.unwrap_or(0);
        booking.payment_method = request.payment_method.unwrap_or_default();

        validation::validate(&booking)
            .map_err(|errors| BookingError::Validation(validation::joined(&errors)))?;

        let created = self.insert(booking).await?;
        tracing::info!(booking_id = %created.id, user_id = %user_id, "Booking created");

        Ok(created)
    }

    /// Idempotent destination save.
    ///
    /// At most one `saved` booking exists per (user, destination); a repeat
    /// call returns the existing record untouched.
    pub async fn save_destination(
        &self,
        user_id: Uuid,
        request: SaveDestinationRequest,
    ) -> Result<SaveOutcome, BookingError> {
        let existing = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 AND destination_id = $2 AND status = 'saved'",
        )
        .bind(user_id)
        .bind(&request.destination_id)
        .fetch_optional(&self.db_pool)
        .await?;

        if save_decision(existing.as_ref()) == SaveDecision::AlreadySaved {
            let booking = existing.ok_or(BookingError::NotFound)?;
            return Ok(SaveOutcome::AlreadySaved(booking));
        }

        let mut booking = base_row(
            user_id,
            &request.destination_id,
            &request.destination_name,
            &request.country,
        );

        // Long-form saves carry trip details; for those, base price equals
        // the quoted total
        if request.start_date.is_some() {
            booking.start_date = request.start_date;
            booking.end_date = request.end_date;
            booking.adults = request.adults.unwrap_or(1);
            booking.children = request.children.unwrap_or(0);
            booking.total_travelers = request
                .total_travelers
                .unwrap_or(booking.adults + booking.children);
            booking.price_per_person = request.price_per_person.unwrap_or(0);
            booking.total_amount = request.total_amount.unwrap_or(0);
            booking.base_price = booking.total_amount;
            booking.duration = request.duration;

            if booking.adults < 1 {
                return Err(BookingError::Validation(
                    "At least 1 adult is required".to_string(),
                ));
            }
        }

        validation::validate(&booking)
            .map_err(|errors| BookingError::Validation(validation::joined(&errors)))?;

        let created = self.insert(booking).await?;
        tracing::info!(booking_id = %created.id, user_id = %user_id, "Destination saved");

        Ok(SaveOutcome::Created(created))
    }

    /// Book-now: promote an existing saved booking in place, or create a
    /// fresh pending one. Non-saved bookings are left untouched.
    pub async fn book_now(
        &self,
        user_id: Uuid,
        destination_id: &str,
        destination_name: &str,
        country: &str,
    ) -> Result<BookOutcome, BookingError> {
        let existing = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 AND destination_id = $2",
        )
        .bind(user_id)
        .bind(destination_id)
        .fetch_optional(&self.db_pool)
        .await?;

        match book_now_decision(existing.as_ref()) {
            BookDecision::Promote => {
                let booking = existing.ok_or(BookingError::NotFound)?;

                // Flip in place; the status guard makes the promotion a no-op
                // if a concurrent call got there first
                let promoted = sqlx::query_as::<_, Booking>(
                    r#"
                    UPDATE bookings
                    SET status = 'pending', payment_status = 'not_paid', updated_at = NOW()
                    WHERE id = $1 AND status = 'saved'
                    RETURNING *
                    "#,
                )
                .bind(booking.id)
                .fetch_optional(&self.db_pool)
                .await?;

                return match promoted {
                    Some(b) => {
                        tracing::info!(booking_id = %b.id, "Saved booking promoted to pending");
                        Ok(BookOutcome::Promoted(b))
                    }
                    None => {
                        let current =
                            self.get(booking.id).await?.ok_or(BookingError::NotFound)?;
                        Ok(BookOutcome::AlreadyExists(current))
                    }
                };
            }
            BookDecision::AlreadyExists => {
                let booking = existing.ok_or(BookingError::NotFound)?;
                return Ok(BookOutcome::AlreadyExists(booking));
            }
            BookDecision::Create => {}
        }

        // Fresh pending booking with no trip details yet; pricing arrives
        // later through the full-detail flow
        let mut booking = base_row(user_id, destination_id, destination_name, country);
        booking.status = BookingStatus::Pending;

        let created = self.insert(booking).await?;
        tracing::info!(booking_id = %created.id, user_id = %user_id, "Pending booking created");

        Ok(BookOutcome::Created(created))
    }

    /// Book-and-pay: create a pending booking carrying full trip details,
    /// ready for the payment step
    pub async fn book_and_pay(
        &self,
        user_id: Uuid,
        request: BookAndPayRequest,
    ) -> Result<Booking, BookingError> {
        let (start, end) = match (request.start_date, request.end_date) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                return Err(BookingError::Validation(
                    "Both start and end dates are required for booking".to_string(),
                ))
            }
        };
        if start >= end {
            return Err(BookingError::Validation(
                "End date must be after start date".to_string(),
            ));
        }

        let mut booking = base_row(
            user_id,
            &request.destination_id,
            &request.destination_name,
            &request.country,
        );

        booking.status = BookingStatus::Pending;
        booking.payment_status = PaymentStatus::Pending;
        booking.start_date = Some(start);
        booking.end_date = Some(end);
        booking.adults = request.adults.unwrap_or(1);
        booking.children = request.children.unwrap_or(0);
        booking.total_travelers = request
            .total_travelers
            .unwrap_or(booking.adults + booking.children);
        booking.price_per_person = request.price_per_person.unwrap_or(0);
        booking.total_amount = request.total_amount.unwrap_or(0);
        booking.base_price = booking.total_amount;
        booking.duration = request.duration;

        validation::validate(&booking)
            .map_err(|errors| BookingError::Validation(validation::joined(&errors)))?;

        let created = self.insert(booking).await?;
        tracing::info!(booking_id = %created.id, user_id = %user_id, "Booking created, awaiting payment");

        Ok(created)
    }

    /// Save a flight as a booking; totals are recomputed server-side from the
    /// per-person fare
    pub async fn save_flight(
        &self,
        user_id: Uuid,
        request: SaveFlightRequest,
    ) -> Result<Booking, BookingError> {
        if request.flight_price <= 0 {
            return Err(BookingError::Validation(
                "Valid flight price is required".to_string(),
            ));
        }
        if request.available_seats < 1 {
            return Err(BookingError::Validation(
                "Available seats must be at least 1".to_string(),
            ));
        }

        let adults = request.adults.unwrap_or(1).max(1);
        let children = request.children.unwrap_or(0).max(0);

        let breakdown = pricing::compute(&PricingInput {
            price_per_person: request.flight_price,
            adults,
            children,
            ..Default::default()
        });

        let destination_id = DestinationRef::Flight(request.flight_id).key();
        let destination_name = format!("{} → {}", request.departure, request.arrival);

        let mut booking = base_row(user_id, &destination_id, &destination_name, "International");
        booking.payment_status = PaymentStatus::Pending;
        booking.start_date = Some(Utc::now().date_naive());
        booking.end_date = Some(Utc::now().date_naive() + Duration::days(1));
        booking.adults = adults;
        booking.children = children;
        booking.total_travelers = breakdown.total_travelers;
        booking.flight_number = Some(format!("{} #{}", request.airline, request.flight_id));
        booking.flight_price = request.flight_price;
        booking.flight_duration = request.duration;
        booking.departure_time = request.departure_time;
        booking.arrival_time = request.arrival_time;
        booking.price_per_person = request.flight_price;
        booking.base_price = breakdown.base_price;
        booking.total_amount = breakdown.total_amount;

        validation::validate(&booking)
            .map_err(|errors| BookingError::Validation(validation::joined(&errors)))?;

        let created = self.insert(booking).await?;
        tracing::info!(
            booking_id = %created.id,
            travelers = breakdown.total_travelers,
            total = breakdown.total_amount,
            "Flight booking saved"
        );

        Ok(created)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Process (simulated) payment: confirm the booking and mark it paid.
    ///
    /// Owner-only. The WHERE guard rejects already-paid and cancelled rows in
    /// the same statement that flips the state, so concurrent calls cannot
    /// both succeed.
    pub async fn pay(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        payment_method: Option<PaymentMethod>,
    ) -> Result<Booking, BookingError> {
        let booking = self.get(booking_id).await?.ok_or(BookingError::NotFound)?;

        pay_precondition(&booking, user_id)?;

        // Simulated gateway; a real integration would go here
        let reference = payment_reference();
        tracing::info!(booking_id = %booking_id, reference = %reference, "Processing simulated payment");

        let method = payment_method.unwrap_or(booking.payment_method);

        let paid = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = 'confirmed', payment_status = 'paid', payment_method = $3,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
              AND payment_status <> 'paid' AND status <> 'cancelled'
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(user_id)
        .bind(method)
        .fetch_optional(&self.db_pool)
        .await?
        // A concurrent payment won the race between our check and the update
        .ok_or(BookingError::AlreadyPaid)?;

        tracing::info!(booking_id = %booking_id, reference = %reference, "Payment processed successfully");

        Ok(paid)
    }

    /// Status-only update; every other field in the request is ignored.
    ///
    /// Accepts the canonical vocabulary or the legacy `bookingStatus` one.
    pub async fn update_status(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<Booking, BookingError> {
        let booking = self.get(booking_id).await?.ok_or(BookingError::NotFound)?;

        ensure_owner(&booking, user_id, "update")?;

        let (status, payment) = match (&request.status, &request.booking_status) {
            (Some(status), _) => (Some(*status), None),
            (None, Some(legacy)) => match BookingStatus::from_legacy(legacy) {
                Some((status, payment)) => (Some(status), payment),
                None => {
                    return Err(BookingError::Validation(format!(
                        "Invalid booking status: {}",
                        legacy
                    )))
                }
            },
            // Nothing updatable was supplied; only the timestamp moves
            (None, None) => (None, None),
        };

        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = COALESCE($3, status),
                payment_status = COALESCE($4, payment_status),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(user_id)
        .bind(status)
        .bind(payment)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(booking_id = %booking_id, status = ?updated.status, "Booking updated");

        Ok(updated)
    }

    /// Hard delete, owner-only
    pub async fn delete(&self, user_id: Uuid, booking_id: Uuid) -> Result<(), BookingError> {
        let booking = self.get(booking_id).await?.ok_or(BookingError::NotFound)?;

        ensure_owner(&booking, user_id, "delete")?;

        sqlx::query("DELETE FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(booking_id)
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;

        tracing::info!(booking_id = %booking_id, "Booking deleted");

        Ok(())
    }

    // ========================================================================
    // Internal
    // ========================================================================

    async fn insert(&self, booking: Booking) -> Result<Booking, BookingError> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, user_id, destination_id, destination_name, country,
                start_date, end_date, adults, children, total_travelers, duration,
                hotel_name, hotel_price, room_type,
                flight_number, flight_price, flight_duration, departure_time, arrival_time,
                price_per_person, base_price, add_ons, add_ons_total, total_amount,
                status, payment_status, payment_method,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10, $11,
                $12, $13, $14,
                $15, $16, $17, $18, $19,
                $20, $21, $22, $23, $24,
                $25, $26, $27,
                NOW(), NOW()
            )
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(&booking.destination_id)
        .bind(&booking.destination_name)
        .bind(&booking.country)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.adults)
        .bind(booking.children)
        .bind(booking.total_travelers)
        .bind(booking.duration)
        .bind(&booking.hotel_name)
        .bind(booking.hotel_price)
        .bind(booking.room_type)
        .bind(&booking.flight_number)
        .bind(booking.flight_price)
        .bind(&booking.flight_duration)
        .bind(&booking.departure_time)
        .bind(&booking.arrival_time)
        .bind(booking.price_per_person)
        .bind(booking.base_price)
        .bind(&booking.add_ons)
        .bind(booking.add_ons_total)
        .bind(booking.total_amount)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(booking.payment_method)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(created)
    }
}

/// New row with destination identity set and everything else at its default
fn base_row(user_id: Uuid, destination_id: &str, destination_name: &str, country: &str) -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        user_id,
        destination_id: destination_id.to_string(),
        destination_name: destination_name.to_string(),
        country: country.to_string(),
        start_date: None,
        end_date: None,
        adults: 1,
        children: 0,
        total_travelers: 1,
        duration: None,
        hotel_name: None,
        hotel_price: 0,
        room_type: None,
        flight_number: None,
        flight_price: 0,
        flight_duration: None,
        departure_time: None,
        arrival_time: None,
        price_per_person: 0,
        base_price: 0,
        add_ons: Json(Vec::<AddOn>::new()),
        add_ons_total: 0,
        total_amount: 0,
        status: BookingStatus::Saved,
        payment_status: PaymentStatus::NotPaid,
        payment_method: PaymentMethod::Card,
        created_at: now,
        updated_at: now,
    }
}

/// Opaque reference for the simulated payment gateway
fn payment_reference() -> String {
    let n: u64 = rand::thread_rng().gen_range(0..10_000_000_000);
    format!("PAY-{:010}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_row_defaults() {
        let user_id = Uuid::new_v4();
        let row = base_row(user_id, "1", "Paris", "France");

        assert_eq!(row.user_id, user_id);
        assert_eq!(row.status, BookingStatus::Saved);
        assert_eq!(row.payment_status, PaymentStatus::NotPaid);
        assert_eq!(row.adults, 1);
        assert_eq!(row.children, 0);
        assert_eq!(row.total_amount, 0);
        assert!(row.add_ons.0.is_empty());
    }

    #[test]
    fn test_payment_reference_shape() {
        let reference = payment_reference();
        assert!(reference.starts_with("PAY-"));
        assert_eq!(reference.len(), 14);
    }

    #[test]
    fn test_save_decision_is_idempotent_on_presence() {
        let row = base_row(Uuid::new_v4(), "1", "Paris", "France");

        assert_eq!(save_decision(None), SaveDecision::Create);
        assert_eq!(save_decision(Some(&row)), SaveDecision::AlreadySaved);
    }

    #[test]
    fn test_book_now_decision_branches() {
        let mut row = base_row(Uuid::new_v4(), "1", "Paris", "France");

        assert_eq!(book_now_decision(None), BookDecision::Create);

        row.status = BookingStatus::Saved;
        assert_eq!(book_now_decision(Some(&row)), BookDecision::Promote);

        row.status = BookingStatus::Pending;
        assert_eq!(book_now_decision(Some(&row)), BookDecision::AlreadyExists);

        row.status = BookingStatus::Confirmed;
        assert_eq!(book_now_decision(Some(&row)), BookDecision::AlreadyExists);
    }

    #[test]
    fn test_pay_precondition_rejects_non_owner() {
        let owner = Uuid::new_v4();
        let mut row = base_row(owner, "1", "Paris", "France");
        row.status = BookingStatus::Pending;

        let result = pay_precondition(&row, Uuid::new_v4());
        assert!(matches!(result, Err(BookingError::Forbidden(_))));
    }

    #[test]
    fn test_pay_precondition_rejects_cancelled() {
        let owner = Uuid::new_v4();
        let mut row = base_row(owner, "1", "Paris", "France");
        row.status = BookingStatus::Cancelled;

        let result = pay_precondition(&row, owner);
        assert!(matches!(result, Err(BookingError::BookingCancelled)));
    }

    #[test]
    fn test_pay_precondition_rejects_already_paid() {
        let owner = Uuid::new_v4();
        let mut row = base_row(owner, "1", "Paris", "France");
        row.status = BookingStatus::Confirmed;
        row.payment_status = PaymentStatus::Paid;

        let result = pay_precondition(&row, owner);
        assert!(matches!(result, Err(BookingError::AlreadyPaid)));
    }

    #[test]
    fn test_pay_precondition_accepts_owned_pending() {
        let owner = Uuid::new_v4();
        let mut row = base_row(owner, "1", "Paris", "France");
        row.status = BookingStatus::Pending;
        row.payment_status = PaymentStatus::Pending;

        assert!(pay_precondition(&row, owner).is_ok());
    }

    #[test]
    fn test_ensure_owner_names_the_action() {
        let owner = Uuid::new_v4();
        let row = base_row(owner, "1", "Paris", "France");

        assert!(ensure_owner(&row, owner, "update").is_ok());

        let err = ensure_owner(&row, Uuid::new_v4(), "delete").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You are not authorized to delete this booking"
        );
    }

    #[test]
    fn test_booking_error_to_api_error_status() {
        use axum::http::StatusCode;

        let err: ApiError = BookingError::NotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = BookingError::Forbidden("nope".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err: ApiError = BookingError::AlreadyPaid.into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err: ApiError = BookingError::Validation("bad".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
