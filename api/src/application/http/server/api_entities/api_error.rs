use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use menuforge_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    TooManyRequests(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Conflict(_) => "E_CONFLICT",
            ApiError::UnprocessableEntity(_) => "E_VALIDATION",
            ApiError::TooManyRequests(_) => "E_RATE_LIMITED",
            ApiError::BadGateway(_) => "E_AI_GENERATION",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::NotFound(_) => ApiError::NotFound(message),
            CoreError::Forbidden(_) => ApiError::Forbidden(message),
            CoreError::InvalidInput(_) => ApiError::BadRequest(message),
            CoreError::Conflict(_) => ApiError::Conflict(message),
            CoreError::RateLimited(_) => ApiError::TooManyRequests(message),
            CoreError::InvalidAiResponse
            | CoreError::ExternalServiceError(_)
            | CoreError::GenerationExhausted { .. } => {
                tracing::error!("Menu generation failed: {}", message);
                ApiError::BadGateway(message)
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotFound("Menu".to_string()), StatusCode::NOT_FOUND),
            (CoreError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (CoreError::InvalidInput("bad".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::Conflict("draft".to_string()), StatusCode::CONFLICT),
            (
                CoreError::RateLimited("Alternatives".to_string()),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (CoreError::InvalidAiResponse, StatusCode::BAD_GATEWAY),
            (
                CoreError::ExternalServiceError("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::GenerationExhausted {
                    operation: "menu".to_string(),
                    attempts: 3,
                    last_error: "Meal count errors: Day 1".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status_code(), status);
        }
    }

    #[test]
    fn test_messages_are_preserved() {
        assert_eq!(
            ApiError::from(CoreError::NotFound("Menu".to_string())),
            ApiError::NotFound("Menu not found".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::RateLimited("Menu generation".to_string())),
            ApiError::TooManyRequests("Menu generation rate limit exceeded".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::GenerationExhausted {
                operation: "alternatives".to_string(),
                attempts: 2,
                last_error: "Schema validation failed: x".to_string(),
            })
            .to_string(),
            "AI alternatives generation failed after 2 attempts: Schema validation failed: x"
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::Conflict("Can only modify draft menus".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
