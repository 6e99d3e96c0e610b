//! Authentication HTTP handlers
//!
//! Email/password signup and login issuing 7-day JWTs. The token travels
//! back to clients as `sessionId` for compatibility with existing consumers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::AuthError;
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::UserResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session envelope; `session_id` carries the JWT
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    pub message: String,
    pub session_id: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: UserResponse,
}

fn map_auth_error(e: AuthError) -> ApiError {
    match e {
        AuthError::EmailTaken => ApiError::BadRequest(e.to_string()),
        AuthError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
        AuthError::UserNotFound => ApiError::NotFound(e.to_string()),
        AuthError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        other => ApiError::InternalError(other.to_string()),
    }
}

/// POST /auth/signup - Register and start a session
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    req.validate()?;

    let session = state
        .auth_service
        .signup(&req.name, &req.email, &req.password)
        .await
        .map_err(map_auth_error)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            success: true,
            message: "Signup successful".to_string(),
            session_id: session.token,
            user: session.user,
        }),
    ))
}

/// POST /auth/login - Authenticate and start a session
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let session = state
        .auth_service
        .login(&req.email, &req.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse {
        success: true,
        message: "Login successful".to_string(),
        session_id: session.token,
        user: session.user,
    }))
}

/// POST /auth/logout - Stateless acknowledgement; clients discard the token
pub async fn logout() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Logout successful"
    }))
}

/// GET /auth/verify - Resolve the bearer token back to its user
pub async fn verify(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<VerifyResponse>, ApiError> {
    let user = state
        .auth_service
        .get_user_by_id(user.user_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(VerifyResponse {
        success: true,
        user: user.into(),
    }))
}
