use antenne_common::{ArticleStatus, ElementType};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;

use crate::domain::AppState;
use crate::domain::lifecycle::apply_article_update;
use crate::domain::repository::{ArticleRepository, AuthorizationRepository, ContentFilter};
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::{require_admin, require_staff};
use crate::infrastructure::http::querystring::QueryString;

use dto::{ArticlePayload, ArticleResponse, ArticlesResponse, ListParams, parse_category_filter};

pub mod dto;

pub async fn published_articles<S: AppState>(
    QueryString(params): QueryString<ListParams>,
    State(state): State<S>,
) -> Result<ApiSuccess<ArticlesResponse>, ApiError> {
    let category = parse_category_filter(params.category)?;
    let articles = state
        .articles()
        .list(ContentFilter {
            only_published: true,
            category,
        })
        .await?;
    Ok(ApiSuccess::new(StatusCode::OK, ArticlesResponse { articles }))
}

pub async fn all_articles<S: AppState>(
    QueryString(params): QueryString<ListParams>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ArticlesResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let category = parse_category_filter(params.category)?;
    let articles = state
        .articles()
        .list(ContentFilter {
            only_published: false,
            category,
        })
        .await?;
    Ok(ApiSuccess::new(StatusCode::OK, ArticlesResponse { articles }))
}

pub async fn get_article<S: AppState>(
    Path(article_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ArticleResponse>, ApiError> {
    let article = state
        .articles()
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    // drafts stay behind the staff door; pending items are readable so a
    // manager can follow a review link
    if article.status == ArticleStatus::Draft {
        require_staff(&state, &headers)?;
    }

    state.articles().record_view(article_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, ArticleResponse { article }))
}

pub async fn create_article<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<ArticlePayload>,
) -> Result<ApiSuccess<ArticlesResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let new = payload.into_new()?;
    state.articles().create(new).await?;

    let articles = state.articles().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(StatusCode::OK, ArticlesResponse { articles }))
}

pub async fn update_article<S: AppState>(
    Path(article_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<ArticlePayload>,
) -> Result<ApiSuccess<ArticlesResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let current = state
        .articles()
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    let update = payload.into_update()?;
    let updated = apply_article_update(&current, update, Utc::now());
    state.articles().update(&updated).await?;

    let articles = state.articles().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(StatusCode::OK, ArticlesResponse { articles }))
}

pub async fn delete_article<S: AppState>(
    Path(article_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ArticlesResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state
        .articles()
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    state.articles().delete(article_id).await?;
    state
        .authorizations()
        .delete_for_element(ElementType::Article.as_str(), article_id)
        .await?;

    let articles = state.articles().list(ContentFilter::default()).await?;
    Ok(ApiSuccess::new(StatusCode::OK, ArticlesResponse { articles }))
}
