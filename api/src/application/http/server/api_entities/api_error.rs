use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ingredient_scanner_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
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
    UnprocessableEntity(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    ServiceUnavailable(String),
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
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::UnprocessableEntity(_) => "E_UNPROCESSABLE_ENTITY",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::InvalidOtp | CoreError::InvalidToken | CoreError::TokenExpired => {
                ApiError::Unauthorized(error.to_string())
            }
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::ExternalServiceError(_) | CoreError::ObjectStorageError(_) => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

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
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Invalid("bad".into()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidOtp, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (CoreError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (
                CoreError::ExternalServiceError("ocr down".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ObjectStorageError("bucket".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, expected) in cases {
            assert_eq!(ApiError::from(core).status_code(), expected);
        }
    }

    #[test]
    fn invalid_input_keeps_its_message() {
        assert_eq!(
            ApiError::from(CoreError::Invalid("mobile is required".into())),
            ApiError::BadRequest("mobile is required".into())
        );
    }

    #[test]
    fn response_carries_status_code() {
        let response = ApiError::Unauthorized("Invalid OTP".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
