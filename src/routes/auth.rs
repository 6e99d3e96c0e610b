//! Auth route definitions

use axum::{routing::get, routing::post, Router};

use crate::handlers::{login, logout, signup, verify};
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/verify", get(verify))
}
