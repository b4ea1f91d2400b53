use antenne_common::{AgendaEvent, EventColor, NewEvent};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::AppState;
use crate::domain::DomainError;
use crate::domain::repository::AgendaRepository;
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::require_admin;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub color: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AgendaResponse {
    pub agenda: Vec<AgendaEvent>,
}

fn parse_color(value: &str) -> Result<EventColor, DomainError> {
    EventColor::try_new(value).map_err(|_| DomainError::invalid_parameters())
}

pub async fn list_agenda<S: AppState>(
    State(state): State<S>,
) -> Result<ApiSuccess<AgendaResponse>, ApiError> {
    let agenda = state.agenda().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, AgendaResponse { agenda }))
}

pub async fn create_event<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<EventPayload>,
) -> Result<ApiSuccess<AgendaResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let color = payload
        .color
        .as_deref()
        .ok_or_else(DomainError::missing_parameters)
        .and_then(parse_color)?;

    let new = match (payload.title, payload.content, payload.thumbnail, payload.date) {
        (Some(title), Some(content), Some(thumbnail), Some(date)) if !title.is_empty() => {
            NewEvent {
                title,
                content,
                thumbnail,
                color,
                date,
            }
        }
        _ => return Err(DomainError::missing_parameters().into()),
    };
    state.agenda().create(new).await?;

    let agenda = state.agenda().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, AgendaResponse { agenda }))
}

pub async fn update_event<S: AppState>(
    Path(event_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<EventPayload>,
) -> Result<ApiSuccess<AgendaResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let current = state
        .agenda()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let color = match payload.color.as_deref() {
        Some(value) => parse_color(value)?.into_inner(),
        None => current.color.clone(),
    };

    let updated = AgendaEvent {
        id: current.id,
        title: payload.title.unwrap_or(current.title),
        content: payload.content.unwrap_or(current.content),
        thumbnail: payload.thumbnail.unwrap_or(current.thumbnail),
        color,
        date: payload.date.unwrap_or(current.date),
    };
    state.agenda().update(&updated).await?;

    let agenda = state.agenda().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, AgendaResponse { agenda }))
}

pub async fn delete_event<S: AppState>(
    Path(event_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<AgendaResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state
        .agenda()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    state.agenda().delete(event_id).await?;

    let agenda = state.agenda().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, AgendaResponse { agenda }))
}
