//! Handler for `POST /auth/login`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskflow_core::error::CoreError;

use crate::auth::jwt::generate_token;
use crate::auth::users::PublicUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
///
/// Fields are optional so missing keys surface as a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: PublicUser,
    pub token: String,
}

/// POST /auth/login
///
/// Check credentials against the demo-user directory and issue a
/// time-boxed access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        input.email.filter(|e| !e.is_empty()),
        input.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let user = state.users.verify(&email, &password).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Invalid credentials".to_string()))
    })?;

    let token = generate_token(&user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(Json(LoginResponse {
        user: user.public(),
        token,
    }))
}
