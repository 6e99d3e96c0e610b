//! Authentication middleware
//!
//! Extractors for JWT verification and caller identity. Two forms exist
//! because the legacy web client sends the token either as an
//! `Authorization: Bearer` header or as a `token` field inside the JSON
//! body; the body fallback only applies to endpoints that carry a body.

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{user_id_from_claims, verify_token, AuthService, JwtError};
use crate::error::ApiError;

const BODY_LIMIT: usize = 1024 * 1024;

/// Authenticated caller extracted from a verified session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

fn authenticate(token: &str, auth_service: &AuthService) -> Result<AuthenticatedUser, ApiError> {
    // Expired and malformed tokens get the same client-facing message
    let claims = verify_token(token, auth_service.jwt_secret())
        .map_err(|_: JwtError| ApiError::Unauthorized("Invalid or expired token".to_string()))?;
    let user_id = user_id_from_claims(&claims)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized("No token provided".to_string()))?;

        let auth_service = Arc::<AuthService>::from_ref(state);
        authenticate(bearer.token(), &auth_service)
    }
}

/// Authenticated JSON body extractor
///
/// Verifies the caller from the bearer header, falling back to a `token`
/// field embedded in the JSON body, then deserializes the body into `T`.
#[derive(Debug)]
pub struct AuthenticatedJson<T> {
    pub user: AuthenticatedUser,
    pub payload: T,
}

#[async_trait]
impl<S, T> FromRequest<S> for AuthenticatedJson<T>
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let header_token = TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        let bytes = axum::body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read request body: {}", e)))?;

        let value: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_slice(&bytes)?
        };

        let token = header_token
            .or_else(|| {
                value
                    .get("token")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

        let auth_service = Arc::<AuthService>::from_ref(state);
        let user = authenticate(&token, &auth_service)?;

        let payload: T = serde_json::from_value(value)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

        Ok(AuthenticatedJson { user, payload })
    }
}
