use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealbook_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Error envelope returned on every failed request.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "search term (query) is required")]
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    /// Upstream failures are reported as 400 alongside invalid requests: callers
    /// only distinguish success from failure and read the message.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::UpstreamFailure(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidRequest(message) => ApiError::BadRequest(message),
            CoreError::UpstreamUnavailable(_) | CoreError::MalformedUpstreamPayload(_) => {
                ApiError::UpstreamFailure(error.to_string())
            }
            CoreError::InvalidConfiguration(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!(status = %status, "request rejected: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON body extractor that runs `validator` rules and rejects with [`ApiError`].
///
/// The body is decoded regardless of `Content-Type`: browsers post `text/plain`
/// to skip the CORS pre-flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&body)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
