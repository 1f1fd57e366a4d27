use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::utils::error::MathApiError;

/// Adapter that turns a domain error into an HTTP response.
pub struct ApiError(pub MathApiError);

impl From<MathApiError> for ApiError {
    fn from(e: MathApiError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MathApiError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            MathApiError::Overflow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("❌ Internal error while handling request: {}", self.0);
        }

        let body = json!({
            "error": self.0.user_friendly_message(),
            "suggestion": self.0.recovery_suggestion(),
        });

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
