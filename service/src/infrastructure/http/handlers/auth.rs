use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::AppState;
use crate::domain::auth::AuthGate;
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::bearer_token;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ManagerTokenResponse {
    pub token: String,
    pub manager: String,
}

pub async fn login<S: AppState>(
    State(state): State<S>,
    Json(payload): Json<LoginPayload>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let token = state
        .gate()
        .admin_login(
            payload.username.as_deref().unwrap_or(""),
            payload.password.as_deref().unwrap_or(""),
        )
        .ok_or(ApiError::Unauthorized)?;

    Ok(ApiSuccess::new(StatusCode::OK, TokenResponse { token }))
}

/// Managers authenticate with their configured token; the response echoes
/// the roster name so the client can display who is reviewing.
pub async fn manager_login<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ManagerTokenResponse>, ApiError> {
    let token = bearer_token(&headers);
    let manager_id = state.gate().manager_id(token).ok_or(ApiError::Unauthorized)?;
    let manager = state
        .roster()
        .name_of(&manager_id)
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ManagerTokenResponse {
            token: token.to_string(),
            manager,
        },
    ))
}

pub async fn verify<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let token = bearer_token(&headers);
    if !state.gate().is_admin(token) && state.gate().manager_id(token).is_none() {
        return Err(ApiError::Unauthorized);
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponse {
            token: token.to_string(),
        },
    ))
}
