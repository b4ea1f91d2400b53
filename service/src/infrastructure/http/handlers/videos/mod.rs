use antenne_common::{ElementType, VideoStatus};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;

use crate::domain::AppState;
use crate::domain::lifecycle::apply_video_update;
use crate::domain::repository::{AuthorizationRepository, ContentFilter, VideoRepository};
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::{require_admin, require_staff};
use crate::infrastructure::http::querystring::QueryString;

use dto::{
    ListParams, VideoPayload, VideoResponse, VideosResponse, VideosWithIdResponse,
    parse_category_filter,
};

pub mod dto;

pub async fn published_videos<S: AppState>(
    QueryString(params): QueryString<ListParams>,
    State(state): State<S>,
) -> Result<ApiSuccess<VideosResponse>, ApiError> {
    let category = parse_category_filter(params.category)?;
    let videos = state
        .videos()
        .list(ContentFilter {
            only_published: true,
            category,
        })
        .await?;
    Ok(ApiSuccess::new(StatusCode::OK, VideosResponse { videos }))
}

pub async fn all_videos<S: AppState>(
    QueryString(params): QueryString<ListParams>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<VideosResponse>, ApiError> {
    require_staff(&state, &headers)?;

    let category = parse_category_filter(params.category)?;
    let videos = state
        .videos()
        .list(ContentFilter {
            only_published: false,
            category,
        })
        .await?;
    Ok(ApiSuccess::new(StatusCode::OK, VideosResponse { videos }))
}

pub async fn get_video<S: AppState>(
    Path(video_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<VideoResponse>, ApiError> {
    let video = state
        .videos()
        .find_by_id(video_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

    if video.status == VideoStatus::Draft {
        require_staff(&state, &headers)?;
    }

    Ok(ApiSuccess::new(StatusCode::OK, VideoResponse { video }))
}

pub async fn create_video<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<VideoPayload>,
) -> Result<ApiSuccess<VideosWithIdResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let new = payload.into_new()?;
    let id = state.videos().create(new).await?;

    let videos = state.videos().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(StatusCode::OK, VideosWithIdResponse { videos, id }))
}

pub async fn update_video<S: AppState>(
    Path(video_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<VideoPayload>,
) -> Result<ApiSuccess<VideosWithIdResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let current = state
        .videos()
        .find_by_id(video_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

    let update = payload.into_update()?;
    let updated = apply_video_update(&current, update, Utc::now());
    state.videos().update(&updated).await?;

    let videos = state.videos().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(
        StatusCode::OK,
        VideosWithIdResponse { videos, id: video_id },
    ))
}

pub async fn delete_video<S: AppState>(
    Path(video_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<VideosResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state
        .videos()
        .find_by_id(video_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

    state.videos().delete(video_id).await?;
    state
        .authorizations()
        .delete_for_element(ElementType::Video.as_str(), video_id)
        .await?;

    let videos = state.videos().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(StatusCode::OK, VideosResponse { videos }))
}
