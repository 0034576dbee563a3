use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use thoughts_persist::Thought;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Fixed page size for the listing endpoint.
pub const LIST_LIMIT: i64 = 20;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateThoughtRequest {
    pub message: String,
}

/// Wire representation of a stored thought. Store-assigned fields are
/// carried verbatim: `_id`, `createdAt`, `__v`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThoughtResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    pub hearts: i64,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "__v")]
    pub version: i32,
}

impl From<Thought> for ThoughtResponse {
    fn from(thought: Thought) -> Self {
        Self {
            id: thought.id.to_hex(),
            message: thought.message,
            hearts: thought.hearts,
            created_at: thought.created_at,
            version: thought.version,
        }
    }
}

/// List the 20 newest thoughts
#[utoipa::path(
    get,
    path = "/thoughts",
    responses(
        (status = 200, description = "Newest thoughts first, at most 20", body = Vec<ThoughtResponse>),
        (status = 400, description = "Store failure")
    ),
    tag = "thoughts"
)]
pub async fn list_thoughts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ThoughtResponse>>> {
    let thoughts = state
        .store
        .list_recent(LIST_LIMIT)
        .await
        .map_err(ApiError::ListThoughts)?;

    Ok(Json(thoughts.into_iter().map(ThoughtResponse::from).collect()))
}

/// Create a new thought
#[utoipa::path(
    post,
    path = "/thoughts",
    request_body = CreateThoughtRequest,
    responses(
        (status = 200, description = "The persisted thought", body = ThoughtResponse),
        (status = 400, description = "Validation or store failure")
    ),
    tag = "thoughts"
)]
pub async fn create_thought(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThoughtRequest>,
) -> ApiResult<Json<ThoughtResponse>> {
    let thought = state
        .store
        .create(&req.message)
        .await
        .map_err(ApiError::SaveThought)?;

    Ok(Json(thought.into()))
}

/// Like a thought
#[utoipa::path(
    post,
    path = "/thoughts/{thought_id}/like",
    params(
        ("thought_id" = String, Path, description = "Thought ID")
    ),
    responses(
        (status = 200, description = "The thought as it was before the increment, or null when no thought matches", body = ThoughtResponse),
        (status = 400, description = "Malformed ID or store failure")
    ),
    tag = "thoughts"
)]
pub async fn like_thought(
    State(state): State<Arc<AppState>>,
    Path(thought_id): Path<String>,
) -> ApiResult<Json<Option<ThoughtResponse>>> {
    let previous = state
        .store
        .like(&thought_id)
        .await
        .map_err(ApiError::LikeThought)?;

    Ok(Json(previous.map(ThoughtResponse::from)))
}
