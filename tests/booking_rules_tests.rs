//! Booking lifecycle and validation rule tests

#[cfg(test)]
mod tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use tripnest_server::booking::{
        BookNowRequest, BookOutcome, BookingService, BookingStatus, PaymentStatus,
        SaveDestinationRequest, SaveOutcome, UpdateBookingRequest,
    };
    use tripnest_server::booking::model::legacy_booking_status;

    /// Helper to create a test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/tripnest_test".to_string());

        sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database")
    }

    async fn create_test_user(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
             VALUES ($1, 'Test User', $2, 'hash', NOW(), NOW())",
        )
        .bind(id)
        .bind(format!("{}@example.com", id))
        .execute(pool)
        .await
        .expect("Failed to create test user");
        id
    }

    fn save_request(destination_id: &str) -> SaveDestinationRequest {
        SaveDestinationRequest {
            destination_id: destination_id.to_string(),
            destination_name: "Paris".to_string(),
            country: "France".to_string(),
            start_date: None,
            end_date: None,
            adults: None,
            children: None,
            total_travelers: None,
            price_per_person: None,
            total_amount: None,
            duration: None,
        }
    }

    #[test]
    fn test_legacy_status_mirror() {
        assert_eq!(
            legacy_booking_status(BookingStatus::Saved, PaymentStatus::NotPaid),
            "PENDING_PAYMENT"
        );
        assert_eq!(
            legacy_booking_status(BookingStatus::Pending, PaymentStatus::Pending),
            "PENDING_PAYMENT"
        );
        assert_eq!(
            legacy_booking_status(BookingStatus::Confirmed, PaymentStatus::Paid),
            "PAID"
        );
        assert_eq!(
            legacy_booking_status(BookingStatus::Confirmed, PaymentStatus::Pending),
            "CONFIRMED"
        );
        assert_eq!(
            legacy_booking_status(BookingStatus::Cancelled, PaymentStatus::Paid),
            "Cancelled"
        );
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_save_is_idempotent_per_destination() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let user_id = create_test_user(&pool).await;

        let first = match service
            .save_destination(user_id, save_request("1"))
            .await
            .expect("first save should succeed")
        {
            SaveOutcome::Created(b) => b,
            SaveOutcome::AlreadySaved(_) => panic!("fresh user should have no saved rows"),
        };

        let second = service
            .save_destination(user_id, save_request("1"))
            .await
            .expect("second save should succeed");

        match second {
            SaveOutcome::AlreadySaved(b) => {
                assert_eq!(first.id, b.id, "repeat save must return the same record");
            }
            SaveOutcome::Created(_) => panic!("repeat save must not create a new row"),
        }
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_book_now_promotes_saved_in_place() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let user_id = create_test_user(&pool).await;

        let saved = match service
            .save_destination(user_id, save_request("2"))
            .await
            .unwrap()
        {
            SaveOutcome::Created(b) => b,
            SaveOutcome::AlreadySaved(_) => panic!("fresh user should have no saved rows"),
        };

        let outcome = service
            .book_now(user_id, "2", "Rome", "Italy")
            .await
            .expect("book now should succeed");

        match outcome {
            BookOutcome::Promoted(b) => {
                assert_eq!(b.id, saved.id, "promotion must reuse the saved row");
                assert_eq!(b.status, BookingStatus::Pending);
                assert_eq!(b.payment_status, PaymentStatus::NotPaid);
            }
            _ => panic!("expected the saved row to be promoted"),
        }

        // A second book-now finds the pending row and leaves it alone
        let repeat = service.book_now(user_id, "2", "Rome", "Italy").await.unwrap();
        assert!(matches!(repeat, BookOutcome::AlreadyExists(_)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_payment_cannot_double_apply() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let user_id = create_test_user(&pool).await;

        let booking = match service
            .book_now(user_id, "3", "Tokyo", "Japan")
            .await
            .unwrap()
        {
            BookOutcome::Created(b) => b,
            _ => panic!("expected a fresh pending booking"),
        };

        let paid = service
            .pay(user_id, booking.id, None)
            .await
            .expect("first payment should succeed");
        assert_eq!(paid.status, BookingStatus::Confirmed);
        assert_eq!(paid.payment_status, PaymentStatus::Paid);

        let second = service.pay(user_id, booking.id, None).await;
        assert!(second.is_err(), "second payment must be rejected");
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_ownership_is_enforced_on_pay() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let owner = create_test_user(&pool).await;
        let stranger = create_test_user(&pool).await;

        let booking = match service
            .book_now(owner, "4", "New York", "USA")
            .await
            .unwrap()
        {
            BookOutcome::Created(b) => b,
            _ => panic!("expected a fresh pending booking"),
        };

        let result = service.pay(stranger, booking.id, None).await;
        assert!(result.is_err(), "strangers cannot pay for the booking");

        // The row is untouched
        let unchanged = service.get(booking.id).await.unwrap().unwrap();
        assert_eq!(unchanged.payment_status, PaymentStatus::NotPaid);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_ownership_is_enforced_on_update() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let owner = create_test_user(&pool).await;
        let stranger = create_test_user(&pool).await;

        let booking = match service
            .book_now(owner, "5", "Sydney", "Australia")
            .await
            .unwrap()
        {
            BookOutcome::Created(b) => b,
            _ => panic!("expected a fresh pending booking"),
        };

        let request = UpdateBookingRequest {
            status: Some(BookingStatus::Cancelled),
            booking_status: None,
        };
        let result = service.update_status(stranger, booking.id, request).await;
        assert!(result.is_err(), "strangers cannot update the booking");

        let unchanged = service.get(booking.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, BookingStatus::Pending);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_ownership_is_enforced_on_delete() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let owner = create_test_user(&pool).await;
        let stranger = create_test_user(&pool).await;

        let booking = match service
            .book_now(owner, "6", "Los Angeles", "USA")
            .await
            .unwrap()
        {
            BookOutcome::Created(b) => b,
            _ => panic!("expected a fresh pending booking"),
        };

        let result = service.delete(stranger, booking.id).await;
        assert!(result.is_err(), "strangers cannot delete the booking");

        let still_there = service.get(booking.id).await.unwrap();
        assert!(still_there.is_some(), "the row must survive the attempt");
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_pay_rejected_after_cancellation() {
        let pool = setup_test_db().await;
        let service = BookingService::new(pool.clone());
        let owner = create_test_user(&pool).await;

        let booking = match service
            .book_now(owner, "7", "Berlin", "Germany")
            .await
            .unwrap()
        {
            BookOutcome::Created(b) => b,
            _ => panic!("expected a fresh pending booking"),
        };

        let request = UpdateBookingRequest {
            status: Some(BookingStatus::Cancelled),
            booking_status: None,
        };
        let cancelled = service
            .update_status(owner, booking.id, request)
            .await
            .expect("owner can cancel");
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let result = service.pay(owner, booking.id, None).await;
        assert!(result.is_err(), "cancelled bookings cannot be paid");

        let unchanged = service.get(booking.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, BookingStatus::Cancelled);
        assert_ne!(unchanged.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_book_now_request_shape() {
        let json = r#"{"destinationId":"5","destinationName":"Sydney","country":"Australia"}"#;
        let req: BookNowRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.destination_id, "5");
        assert_eq!(req.country, "Australia");
    }
}
