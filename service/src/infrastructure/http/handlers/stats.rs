use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::domain::AppState;
use crate::domain::repository::{
    ArticleRepository, ShowRepository, ShowStatusCounts, VideoRepository,
};
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::require_admin;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub shows: ShowStatusCounts,
    pub videos: VideoStats,
    pub articles: ArticleStats,
}

#[derive(Debug, Serialize)]
pub struct VideoStats {
    pub total: i64,
    pub category: BTreeMap<String, i64>,
    pub platform: BTreeMap<String, i64>,
}

#[derive(Debug, Serialize)]
pub struct ArticleStats {
    pub total: i64,
    pub category: BTreeMap<String, i64>,
}

fn into_map(counts: Vec<(String, i64)>) -> BTreeMap<String, i64> {
    counts.into_iter().collect()
}

/// Newsroom dashboard numbers.
pub async fn get_stats<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<StatsResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let shows = state.shows().status_counts().await?;

    let video_categories = into_map(state.videos().category_counts().await?);
    let video_platforms = into_map(state.videos().platform_counts().await?);
    let videos = VideoStats {
        total: video_platforms.values().sum(),
        category: video_categories,
        platform: video_platforms,
    };

    let article_categories = into_map(state.articles().category_counts().await?);
    let articles = ArticleStats {
        total: article_categories.values().sum(),
        category: article_categories,
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        StatsResponse {
            shows,
            videos,
            articles,
        },
    ))
}
