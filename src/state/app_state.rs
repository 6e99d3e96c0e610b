//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::AuthService;
use crate::booking::BookingService;

use axum::extract::FromRef;
use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub booking_service: Arc<BookingService>,
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        booking_service: Arc<BookingService>,
        db_pool: PgPool,
    ) -> Self {
        Self {
            auth_service,
            booking_service,
            db_pool,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<BookingService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.booking_service.clone()
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
