use antenne_common::{
    ElementType, NewQuestion, QuestionText, ShowStatus, StreamVariant, WebradioShow,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};

use crate::domain::AppState;
use crate::domain::events::{LiveEvent, LiveEvents};
use crate::domain::lifecycle::{apply_show_update, check_show_stream, entered_live, left_live};
use crate::domain::repository::{AuthorizationRepository, QuestionRepository, ShowRepository};
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::{is_admin, require_admin, require_staff};

use dto::{
    QuestionPayload, QuestionsResponse, ShowPayload, ShowResponse, ShowsResponse,
    ShowsWithIdResponse,
};

pub mod dto;

pub async fn published_shows<S: AppState>(
    State(state): State<S>,
) -> Result<ApiSuccess<ShowsResponse>, ApiError> {
    let shows = state
        .shows()
        .published()
        .await?
        .into_iter()
        .map(WebradioShow::without_prompter)
        .collect();
    Ok(ApiSuccess::new(StatusCode::OK, ShowsResponse { shows }))
}

pub async fn current_show<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<Option<ShowResponse>>, ApiError> {
    let Some(mut show) = state.shows().current().await? else {
        return Ok(ApiSuccess::with_message(StatusCode::OK, "No show", None));
    };

    if !is_admin(&state, &headers) {
        show = show.without_prompter();
    }

    Ok(ApiSuccess::new(StatusCode::OK, Some(ShowResponse { show })))
}

pub async fn all_shows<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ShowsResponse>, ApiError> {
    require_staff(&state, &headers)?;

    let shows = state.shows().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, ShowsResponse { shows }))
}

pub async fn get_show<S: AppState>(
    Path(show_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ShowResponse>, ApiError> {
    let mut show = state
        .shows()
        .find_by_id(show_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Show not found".to_string()))?;

    // listeners only ever see the primary-stream schedule and the archive
    let public = matches!(
        show.status,
        ShowStatus::Waiting(StreamVariant::Primary)
            | ShowStatus::Live(StreamVariant::Primary)
            | ShowStatus::Published
    );
    if !public {
        require_staff(&state, &headers)?;
    }

    if !is_admin(&state, &headers) {
        show = show.without_prompter();
    }

    Ok(ApiSuccess::new(StatusCode::OK, ShowResponse { show }))
}

pub async fn create_show<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<ShowPayload>,
) -> Result<ApiSuccess<ShowsWithIdResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let new = payload.into_new()?;
    check_show_stream(new.status, new.stream_id.as_deref())?;

    let id = state.shows().create(new).await?;

    if let Some(show) = state.shows().find_by_id(id).await? {
        if show.status.is_live() {
            state
                .events()
                .publish(LiveEvent::ShowLive(show.without_prompter()));
        }
    }

    let shows = state.shows().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, ShowsWithIdResponse { shows, id }))
}

pub async fn update_show<S: AppState>(
    Path(show_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<ShowPayload>,
) -> Result<ApiSuccess<ShowsWithIdResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let current = state
        .shows()
        .find_by_id(show_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Show not found".to_string()))?;

    let update = payload.into_update()?;
    let updated = apply_show_update(&current, update)?;
    state.shows().update(&updated).await?;

    // fire the realtime feed on the crossing, not on every save
    if entered_live(current.status, updated.status) {
        state
            .events()
            .publish(LiveEvent::ShowLive(updated.clone().without_prompter()));
    } else if left_live(current.status, updated.status) {
        state.events().publish(LiveEvent::ShowStopped);
    }

    let shows = state.shows().list().await?;
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ShowsWithIdResponse { shows, id: show_id },
    ))
}

pub async fn delete_show<S: AppState>(
    Path(show_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<ShowsResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state
        .shows()
        .find_by_id(show_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Show not found".to_string()))?;

    state.shows().delete(show_id).await?;
    state
        .authorizations()
        .delete_for_element(ElementType::Show.as_str(), show_id)
        .await?;

    let shows = state.shows().list().await?;
    Ok(ApiSuccess::new(StatusCode::OK, ShowsResponse { shows }))
}

pub async fn current_questions<S: AppState>(
    State(state): State<S>,
) -> Result<ApiSuccess<QuestionsResponse>, ApiError> {
    let Some(show) = state.shows().current().await? else {
        return Ok(ApiSuccess::with_message(
            StatusCode::OK,
            "No show",
            QuestionsResponse { questions: vec![] },
        ));
    };

    let questions = state.questions().for_show(show.id).await?;
    Ok(ApiSuccess::new(StatusCode::OK, QuestionsResponse { questions }))
}

pub async fn post_question<S: AppState>(
    State(state): State<S>,
    Json(payload): Json<QuestionPayload>,
) -> Result<ApiSuccess<QuestionsResponse>, ApiError> {
    let question = payload
        .question
        .as_deref()
        .and_then(|q| QuestionText::try_new(q).ok())
        .ok_or_else(|| ApiError::UnprocessableEntity("Invalid parameters".to_string()))?;

    let Some(show) = state.shows().current().await? else {
        return Ok(ApiSuccess::with_message(
            StatusCode::OK,
            "No show",
            QuestionsResponse { questions: vec![] },
        ));
    };

    state
        .questions()
        .create(NewQuestion {
            show_id: show.id,
            question,
        })
        .await?;
    state.events().publish(LiveEvent::QuestionsUpdated);

    let questions = state.questions().for_show(show.id).await?;
    Ok(ApiSuccess::new(StatusCode::OK, QuestionsResponse { questions }))
}

pub async fn delete_question<S: AppState>(
    Path(question_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<QuestionsResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state.questions().delete(question_id).await?;
    state.events().publish(LiveEvent::QuestionsUpdated);

    let questions = match state.shows().current().await? {
        Some(show) => state.questions().for_show(show.id).await?,
        None => vec![],
    };
    Ok(ApiSuccess::new(StatusCode::OK, QuestionsResponse { questions }))
}
