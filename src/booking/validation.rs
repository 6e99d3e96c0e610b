//! Booking invariant checks
//!
//! Status-gated write-time validation. A `saved` booking only needs its
//! destination identity; once the status moves to `pending` or `confirmed`
//! the dates, travelers, and pricing must all hold. Every violated rule
//! produces its own message; callers join them for the 400 body.

use super::model::{Booking, BookingStatus};

/// Upper bound for any single unit price. Keeps the downstream
/// price arithmetic far away from i64 overflow.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// Validate a candidate booking record.
///
/// Rules are evaluated in a fixed order: destination fields, then (when the
/// status requires it) dates, travelers, pricing, and cross-field
/// consistency. All violations are collected, not just the first.
pub fn validate(booking: &Booking) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Destination identity, required for every status
    if booking.destination_id.trim().is_empty()
        || booking.destination_name.trim().is_empty()
        || booking.country.trim().is_empty()
    {
        errors.push("Destination ID, name, and country are required".to_string());
    }

    // Unit prices stay within [0, MAX_UNIT_PRICE], regardless of status
    if booking.hotel_price < 0 {
        errors.push("Hotel price cannot be negative".to_string());
    }
    if booking.flight_price < 0 {
        errors.push("Flight price cannot be negative".to_string());
    }
    if booking.add_ons.0.iter().any(|a| a.price < 0) {
        errors.push("Add-on prices cannot be negative".to_string());
    }
    if booking.add_ons_total < 0 {
        errors.push("Add-ons total cannot be negative".to_string());
    }
    if booking.price_per_person > MAX_UNIT_PRICE {
        errors.push("Price per person exceeds the maximum allowed".to_string());
    }
    if booking.hotel_price > MAX_UNIT_PRICE {
        errors.push("Hotel price exceeds the maximum allowed".to_string());
    }
    if booking.flight_price > MAX_UNIT_PRICE {
        errors.push("Flight price exceeds the maximum allowed".to_string());
    }
    if booking.add_ons.0.iter().any(|a| a.price > MAX_UNIT_PRICE) {
        errors.push("Add-on prices exceed the maximum allowed".to_string());
    }

    // Saved bookings carry no further obligations
    if booking.status == BookingStatus::Saved {
        return if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        };
    }

    if matches!(
        booking.status,
        BookingStatus::Pending | BookingStatus::Confirmed
    ) {
        // Dates
        match (booking.start_date, booking.end_date) {
            (Some(start), Some(end)) => {
                if start >= end {
                    errors.push("End date must be after start date".to_string());
                }
            }
            _ => {
                errors.push("Both start and end dates are required for booking".to_string());
            }
        }

        // Travelers
        if booking.adults < 1 {
            errors.push("At least 1 adult is required".to_string());
        }
        if booking.children < 0 {
            errors.push("Children count cannot be negative".to_string());
        }

        // Pricing, strict greater-than-zero
        if booking.price_per_person <= 0 {
            errors.push("Price per person must be greater than 0".to_string());
        }
        if booking.base_price <= 0 {
            errors.push("Base price must be greater than 0".to_string());
        }
        if booking.total_amount <= 0 {
            errors.push("Total amount must be greater than 0".to_string());
        }

        // Cross-field consistency
        if booking.total_amount < booking.base_price {
            errors.push("Total amount must be at least equal to base price".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Join violation messages for client display
pub fn joined(errors: &[String]) -> String {
    errors.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::model::{PaymentMethod, PaymentStatus};
    use chrono::NaiveDate;
    use sqlx::types::chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn saved_booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            destination_id: "1".to_string(),
            destination_name: "Paris".to_string(),
            country: "France".to_string(),
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
            add_ons: Json(vec![]),
            add_ons_total: 0,
            total_amount: 0,
            status: BookingStatus::Saved,
            payment_status: PaymentStatus::NotPaid,
            payment_method: PaymentMethod::Card,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn pending_booking() -> Booking {
        let mut b = saved_booking();
        b.status = BookingStatus::Pending;
        b.start_date = Some(date("2026-09-01"));
        b.end_date = Some(date("2026-09-05"));
        b.adults = 2;
        b.children = 1;
        b.price_per_person = 50_000;
        b.base_price = 150_000;
        b.total_amount = 150_000;
        b
    }

    #[test]
    fn test_saved_booking_needs_only_destination() {
        // No dates, no travelers, no pricing
        assert!(validate(&saved_booking()).is_ok());
    }

    #[test]
    fn test_destination_always_required() {
        let mut b = saved_booking();
        b.country = String::new();

        let errors = validate(&b).unwrap_err();
        assert_eq!(
            errors,
            vec!["Destination ID, name, and country are required".to_string()]
        );
    }

    #[test]
    fn test_pending_requires_dates_and_pricing() {
        let mut b = saved_booking();
        b.status = BookingStatus::Pending;

        let errors = validate(&b).unwrap_err();
        let joined = joined(&errors);
        assert!(joined.contains("Both start and end dates are required"));
        assert!(joined.contains("Price per person must be greater than 0"));
        assert!(joined.contains("Base price must be greater than 0"));
        assert!(joined.contains("Total amount must be greater than 0"));
    }

    #[test]
    fn test_valid_pending_booking_passes() {
        assert!(validate(&pending_booking()).is_ok());
    }

    #[test]
    fn test_end_date_must_follow_start_date() {
        let mut b = pending_booking();
        b.end_date = b.start_date;

        let errors = validate(&b).unwrap_err();
        assert!(errors.contains(&"End date must be after start date".to_string()));

        // One day later is enough
        b.end_date = Some(date("2026-09-02"));
        assert!(validate(&b).is_ok());
    }

    #[test]
    fn test_adults_minimum() {
        let mut b = pending_booking();
        b.adults = 0;

        let errors = validate(&b).unwrap_err();
        assert!(errors.contains(&"At least 1 adult is required".to_string()));
    }

    #[test]
    fn test_total_must_cover_base() {
        let mut b = pending_booking();
        b.total_amount = b.base_price - 1;

        let errors = validate(&b).unwrap_err();
        assert!(errors.contains(&"Total amount must be at least equal to base price".to_string()));
    }

    #[test]
    fn test_negative_unit_prices_rejected_even_when_saved() {
        let mut b = saved_booking();
        b.hotel_price = -1;

        let errors = validate(&b).unwrap_err();
        assert!(errors.contains(&"Hotel price cannot be negative".to_string()));
    }

    #[test]
    fn test_unit_prices_are_capped_even_when_saved() {
        let mut b = saved_booking();
        b.flight_price = MAX_UNIT_PRICE + 1;
        b.price_per_person = i64::MAX;

        let errors = validate(&b).unwrap_err();
        assert!(errors.contains(&"Flight price exceeds the maximum allowed".to_string()));
        assert!(errors.contains(&"Price per person exceeds the maximum allowed".to_string()));

        // Exactly at the cap is accepted
        let mut b = saved_booking();
        b.flight_price = MAX_UNIT_PRICE;
        b.price_per_person = MAX_UNIT_PRICE;
        assert!(validate(&b).is_ok());
    }

    #[test]
    fn test_confirmed_is_gated_like_pending() {
        let mut b = saved_booking();
        b.status = BookingStatus::Confirmed;
        assert!(validate(&b).is_err());

        let mut b = pending_booking();
        b.status = BookingStatus::Confirmed;
        assert!(validate(&b).is_ok());
    }
}
