use antenne_common::InfoBlock;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::AppState;
use crate::domain::DomainError;
use crate::domain::repository::InfoRepository;
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::{is_admin, require_admin};

#[derive(Debug, Default, Deserialize)]
pub struct InfoPayload {
    pub html: Option<String>,
    pub css: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub info: Vec<InfoBlock>,
}

/// Visitors get the enabled banners; the newsroom sees everything.
pub async fn list_info<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<InfoResponse>, ApiError> {
    let info = state.info().list(is_admin(&state, &headers)).await?;
    Ok(ApiSuccess::new(StatusCode::OK, InfoResponse { info }))
}

pub async fn create_info<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<InfoPayload>,
) -> Result<ApiSuccess<InfoResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let html = match payload.html {
        Some(html) if !html.is_empty() => html,
        _ => return Err(DomainError::missing_parameters().into()),
    };
    state
        .info()
        .create(html, payload.css.unwrap_or_default())
        .await?;

    let info = state.info().list(true).await?;
    Ok(ApiSuccess::new(StatusCode::OK, InfoResponse { info }))
}

pub async fn update_info<S: AppState>(
    Path(info_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<InfoPayload>,
) -> Result<ApiSuccess<InfoResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let current = state
        .info()
        .list(true)
        .await?
        .into_iter()
        .find(|block| block.id == info_id)
        .ok_or_else(|| ApiError::NotFound("Info not found".to_string()))?;

    let updated = InfoBlock {
        id: current.id,
        html: payload.html.unwrap_or(current.html),
        css: payload.css.unwrap_or(current.css),
        enabled: payload.enabled.unwrap_or(current.enabled),
    };
    state.info().update(&updated).await?;

    let info = state.info().list(true).await?;
    Ok(ApiSuccess::new(StatusCode::OK, InfoResponse { info }))
}

pub async fn delete_info<S: AppState>(
    Path(info_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<InfoResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state.info().delete(info_id).await?;

    let info = state.info().list(true).await?;
    Ok(ApiSuccess::new(StatusCode::OK, InfoResponse { info }))
}
