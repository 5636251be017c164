//! Bearer-token enforcement for every route except login.
//!
//! The check is active only when the server runs in production; every other
//! environment bypasses it entirely so the dashboard and its API work with
//! zero configuration.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use taskflow_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Paths reachable without a token even in production.
const PUBLIC_PATHS: [&str; 1] = ["/auth/login"];

/// Router-level middleware validating the `Authorization: Bearer` header.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.config.environment.is_production() {
        return Ok(next.run(request).await);
    }
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })?;

    validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid token".into())))?;

    Ok(next.run(request).await)
}
