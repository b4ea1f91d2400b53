use antenne_common::{
    ArticleStatus, Authorization, AuthorizationStatus, ElementType, NewAuthorization, VideoStatus,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;

use crate::domain::AppState;
use crate::domain::authorizations::{
    OwnerUpdate, PreparedSubmission, SignedDecision, apply_owner_update, decide,
    prepare_submission,
};
use crate::domain::lifecycle::{ArticleUpdate, VideoUpdate, apply_article_update, apply_video_update};
use crate::domain::notify::{Notifier, decision_card, review_card};
use crate::domain::repository::{
    ArticleRepository, AuthorizationRepository, ShowRepository, VideoRepository,
};
use crate::domain::signature::DecisionSigner;
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::{Staff, require_admin, require_staff};

use dto::{AuthorizationPayload, AuthorizationResponse, AuthorizationsResponse};

pub mod dto;

/// The content item an authorization points at, reduced to what the
/// workflow needs: the resolved id and the card fields.
struct ElementRef {
    id: i64,
    title: String,
    thumbnail: String,
}

/// Resolve the referenced element; id 0 (or none) means the most recently
/// created item of that type. The resolved id is what gets stored.
async fn resolve_element<S: AppState>(
    state: &S,
    element_type: ElementType,
    requested_id: i64,
) -> Result<ElementRef, ApiError> {
    match element_type {
        ElementType::Show => {
            let show = if requested_id == 0 {
                state.shows().find_latest().await?
            } else {
                state.shows().find_by_id(requested_id).await?
            };
            show.map(|s| ElementRef {
                id: s.id,
                title: s.title,
                thumbnail: s.thumbnail,
            })
            .ok_or_else(|| ApiError::NotFound("Show not found".to_string()))
        }
        ElementType::Video => {
            let video = if requested_id == 0 {
                state.videos().find_latest().await?
            } else {
                state.videos().find_by_id(requested_id).await?
            };
            video
                .map(|v| ElementRef {
                    id: v.id,
                    title: v.title,
                    thumbnail: v.thumbnail,
                })
                .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))
        }
        ElementType::Article => {
            let article = if requested_id == 0 {
                state.articles().find_latest().await?
            } else {
                state.articles().find_by_id(requested_id).await?
            };
            article
                .map(|a| ElementRef {
                    id: a.id,
                    title: a.title,
                    thumbnail: a.thumbnail,
                })
                .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))
        }
    }
}

async fn refreshed_list<S: AppState>(
    state: &S,
) -> Result<AuthorizationsResponse, ApiError> {
    let authorizations = state.authorizations().list().await?;
    Ok(AuthorizationsResponse { authorizations })
}

pub async fn list_authorizations<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    require_staff(&state, &headers)?;
    Ok(ApiSuccess::new(StatusCode::OK, refreshed_list(&state).await?))
}

pub async fn get_authorization<S: AppState>(
    Path(authorization_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<AuthorizationResponse>, ApiError> {
    require_staff(&state, &headers)?;

    let authorization = state
        .authorizations()
        .find_by_id(authorization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Authorization not found".to_string()))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthorizationResponse { authorization },
    ))
}

/// Shared by submit and resubmit: resolve, insert, notify when submitted.
async fn insert_submission<S: AppState>(
    state: &S,
    prepared: PreparedSubmission,
) -> Result<(), ApiError> {
    let element = resolve_element(state, prepared.element_type, prepared.requested_id).await?;

    let id = state
        .authorizations()
        .create(NewAuthorization {
            element_type: prepared.element_type,
            element_id: element.id,
            content: prepared.content,
            status: prepared.status,
            submit_date: Utc::now(),
        })
        .await?;

    // the record is committed; messaging failures stay in the logs
    if prepared.status == AuthorizationStatus::Submitted {
        if let Some(authorization) = state.authorizations().find_by_id(id).await? {
            state.notifier().review_requested(review_card(
                prepared.element_type,
                &element.title,
                &element.thumbnail,
                &authorization,
            ));
        }
    }
    Ok(())
}

pub async fn create_authorization<S: AppState>(
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<AuthorizationPayload>,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    require_admin(&state, &headers)?;

    let prepared = prepare_submission(&payload.submission())?;
    insert_submission(&state, prepared).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        refreshed_list(&state).await?,
    ))
}

pub async fn update_authorization<S: AppState>(
    Path(authorization_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
    Json(payload): Json<AuthorizationPayload>,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    match require_staff(&state, &headers)? {
        Staff::Admin => owner_update(&state, authorization_id, payload).await,
        Staff::Manager(manager_id) => {
            manager_respond(&state, authorization_id, payload, &manager_id).await
        }
    }
}

async fn owner_update<S: AppState>(
    state: &S,
    authorization_id: i64,
    payload: AuthorizationPayload,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    let current = state
        .authorizations()
        .find_by_id(authorization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Authorization not found".to_string()))?;

    let request = payload.submission();
    match apply_owner_update(&current, &request)? {
        OwnerUpdate::Resubmit => {
            // a rejected request starts over as a fresh record
            let prepared = prepare_submission(&request)?;
            insert_submission(state, prepared).await?;
        }
        OwnerUpdate::Updated(prepared) => {
            let element =
                resolve_element(state, prepared.element_type, prepared.requested_id).await?;

            let updated = Authorization {
                element_type: prepared.element_type.as_str().to_string(),
                element_id: element.id,
                content: prepared.content,
                status: prepared.status,
                submit_date: Utc::now(),
                ..current
            };
            state.authorizations().update_submission(&updated).await?;

            if updated.status == AuthorizationStatus::Submitted {
                state.notifier().review_requested(review_card(
                    prepared.element_type,
                    &element.title,
                    &element.thumbnail,
                    &updated,
                ));
            }
        }
    }

    Ok(ApiSuccess::new(StatusCode::OK, refreshed_list(state).await?))
}

async fn manager_respond<S: AppState>(
    state: &S,
    authorization_id: i64,
    payload: AuthorizationPayload,
    manager_id: &str,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    // an identity outside the roster cannot stamp records
    let manager_name = state
        .roster()
        .name_of(manager_id)
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    let current = state
        .authorizations()
        .find_by_id(authorization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Authorization not found".to_string()))?;

    let element_type = ElementType::parse(&current.element_type)
        .ok_or_else(|| ApiError::UnprocessableEntity("Invalid parameters".to_string()))?;
    let element = resolve_element(state, element_type, current.element_id).await?;

    let decision = decide(
        &current,
        payload.status,
        payload.comments,
        &manager_name,
        Utc::now(),
    )?;
    let signature = state.signer().sign(&decision.statement);
    let approved = decision.status == AuthorizationStatus::Approved;

    state
        .authorizations()
        .respond(authorization_id, &SignedDecision { decision, signature })
        .await?;

    if approved {
        publish_element(state, element_type, element.id).await?;
    }

    if let Some(resolved) = state.authorizations().find_by_id(authorization_id).await? {
        state
            .notifier()
            .decision_delivered(decision_card(&element.title, &resolved));
    }

    Ok(ApiSuccess::new(StatusCode::OK, refreshed_list(state).await?))
}

/// Approval publishes the referenced item through the normal transition
/// rules, so the pending→published date re-stamp applies. Shows are not
/// forced anywhere: going on air still has to pass the stream and
/// mutual-exclusion checks on its own update.
async fn publish_element<S: AppState>(
    state: &S,
    element_type: ElementType,
    element_id: i64,
) -> Result<(), ApiError> {
    match element_type {
        ElementType::Article => {
            if let Some(article) = state.articles().find_by_id(element_id).await? {
                if article.status != ArticleStatus::Published {
                    let published = apply_article_update(
                        &article,
                        ArticleUpdate {
                            status: Some(ArticleStatus::Published),
                            ..Default::default()
                        },
                        Utc::now(),
                    );
                    state.articles().update(&published).await?;
                }
            }
        }
        ElementType::Video => {
            if let Some(video) = state.videos().find_by_id(element_id).await? {
                if video.status != VideoStatus::Published {
                    let published = apply_video_update(
                        &video,
                        VideoUpdate {
                            status: Some(VideoStatus::Published),
                            ..Default::default()
                        },
                        Utc::now(),
                    );
                    state.videos().update(&published).await?;
                }
            }
        }
        ElementType::Show => {}
    }
    Ok(())
}

pub async fn delete_authorization<S: AppState>(
    Path(authorization_id): Path<i64>,
    headers: HeaderMap,
    State(state): State<S>,
) -> Result<ApiSuccess<AuthorizationsResponse>, ApiError> {
    require_admin(&state, &headers)?;

    state
        .authorizations()
        .find_by_id(authorization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Authorization not found".to_string()))?;

    state.authorizations().delete(authorization_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, refreshed_list(&state).await?))
}
