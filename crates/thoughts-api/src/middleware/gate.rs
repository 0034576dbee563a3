use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Storage gate: reject every request while the store is unreachable.
///
/// Applied as a router-wide layer, so it runs before route matching and
/// covers `/` and unmatched paths as well. The connection state is queried
/// freshly per request; no retry.
pub async fn require_store(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if state.store.is_connected().await {
        next.run(request).await
    } else {
        ApiError::StoreUnavailable.into_response()
    }
}
