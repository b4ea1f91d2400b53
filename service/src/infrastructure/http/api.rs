use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::DomainError;
use crate::domain::repository::RepositoryError;

// ApiSuccess is a wrapper around a response that includes a status code.

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub(crate) fn new(status: StatusCode, data: T) -> Self {
        Self::with_message(status, "Success", data)
    }

    pub(crate) fn with_message(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                code: status.as_u16(),
                message: message.to_string(),
                data,
            }),
        )
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

// ApiError is a wrapper around a response that includes a status code.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    ConflictWithServerState(String),
    Unauthorized,
    NotFound(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound("Not found".to_string()),
            RepositoryError::ValidationFailed(cause) => Self::UnprocessableEntity(cause),
            RepositoryError::UniqueViolation(cause) => Self::ConflictWithServerState(cause),
            RepositoryError::DatabaseError(cause) => {
                tracing::error!("{:?}", cause);
                Self::InternalServerError("Database server error".to_string())
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(message) => Self::UnprocessableEntity(message),
            DomainError::Conflict(message) => Self::ConflictWithServerState(message),
            DomainError::NotFound(message) => Self::NotFound(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            InternalServerError(e) => {
                tracing::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )),
                )
                    .into_response()
            }
            UnprocessableEntity(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiErrorBody::new(StatusCode::UNPROCESSABLE_ENTITY, message)),
            )
                .into_response(),
            ConflictWithServerState(message) => (
                StatusCode::CONFLICT,
                Json(ApiErrorBody::new(StatusCode::CONFLICT, message)),
            )
                .into_response(),
            Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorBody::new(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized".to_string(),
                )),
            )
                .into_response(),
            NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ApiErrorBody::new(StatusCode::NOT_FOUND, message)),
            )
                .into_response(),
        }
    }
}

// Generic response structure shared by all API responses.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

/// The response format for all error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiErrorBody {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            code: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_the_http_taxonomy() {
        assert_eq!(
            ApiError::from(RepositoryError::UniqueViolation(
                "Authorization already exists".into()
            )),
            ApiError::ConflictWithServerState("Authorization already exists".into())
        );
        assert_eq!(
            ApiError::from(RepositoryError::ValidationFailed("Invalid parameters".into())),
            ApiError::UnprocessableEntity("Invalid parameters".into())
        );
        assert!(matches!(
            ApiError::from(RepositoryError::DatabaseError("connection reset".into())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn domain_errors_map_to_the_http_taxonomy() {
        assert_eq!(
            ApiError::from(DomainError::Conflict("A show is already live".into())),
            ApiError::ConflictWithServerState("A show is already live".into())
        );
        assert_eq!(
            ApiError::from(DomainError::NotFound("Show not found".into())),
            ApiError::NotFound("Show not found".into())
        );
    }
}
