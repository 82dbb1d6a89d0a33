//! Error types for the Subscriptions API service.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use subtrack_core::SubscriptionError;
use subtrack_types::ValidationError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] ValidationError),

    /// Well-formed JSON whose fields do not fit the payload type
    #[error("Invalid field: {0}")]
    InvalidBody(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Subscription(#[from] SubscriptionError),
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidField(_) | Self::InvalidBody(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Subscription(e) => match e {
                SubscriptionError::InvalidField(_) => StatusCode::BAD_REQUEST,
                SubscriptionError::NotFound(_) => StatusCode::NOT_FOUND,
                SubscriptionError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    pub(crate) fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidField(_)
            | Self::InvalidBody(_)
            | Self::Subscription(SubscriptionError::InvalidField(_)) => "INVALID_FIELD",
            Self::Subscription(SubscriptionError::NotFound(_)) => "SUBSCRIPTION_NOT_FOUND",
            Self::Subscription(SubscriptionError::StoreUnavailable { .. }) => "STORE_UNAVAILABLE",
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }

    fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::InvalidBody(e.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Server-side failures are logged in full, reported generically
        let message = if self.is_server_error() {
            tracing::error!(error = ?self, "Internal API error");
            match self {
                Self::Subscription(SubscriptionError::StoreUnavailable { .. }) => {
                    "Subscription store unavailable".to_string()
                }
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
