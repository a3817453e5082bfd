use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::credentials::decode_basic_auth;
use crate::auth::TokenResponse;
use crate::error::{AppError, AuthError};
use crate::AppState;

/// `GET /api/auth/token` — exchanges a Basic credential for a bearer
/// token. There is no user database; any non-empty email and password are
/// accepted, and the token is opaque material with a configured lifetime.
pub async fn token_exchange(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let (email, password) = decode_basic_auth(header).map_err(|e| {
        warn!("Rejected token exchange with malformed credentials: {}", e);
        e
    })?;

    if email.is_empty() || password.is_empty() {
        warn!("Rejected token exchange with empty email or password");
        return Err(AuthError::InvalidCredentials.into());
    }

    let ttl = Duration::hours(state.config.auth.token_ttl_hours);
    let response = TokenResponse {
        token: Uuid::new_v4().simple().to_string(),
        token_expiration: (Utc::now() + ttl).timestamp(),
    };

    info!("Issued auth token for email: {}", email);
    Ok(HttpResponse::Ok().json(response))
}
