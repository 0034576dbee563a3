use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use thoughts_persist::StoreError;

/// API failures, one variant per store-backed operation so each carries its
/// fixed response message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not get thoughts")]
    ListThoughts(#[source] StoreError),

    #[error("Could not save the Happy Thought")]
    SaveThought(#[source] StoreError),

    #[error("Could not find and update this post")]
    LikeThought(#[source] StoreError),

    #[error("Service unavailable")]
    StoreUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Service unavailable" })),
            )
                .into_response(),
            ApiError::ListThoughts(ref source)
            | ApiError::SaveThought(ref source)
            | ApiError::LikeThought(ref source) => {
                tracing::warn!(error = %source, "{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "message": self.to_string(),
                        "error": source.to_string(),
                        "success": false,
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
