use axum::Json;
use serde_json::{json, Value};

/// Route directory
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API name, project link and available routes")
    ),
    tag = "root"
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Happy Thoughts API",
        "project": "https://haappythoughts.netlify.app/",
        "routes": [
            { "path": "/", "methods": ["GET"] },
            { "path": "/thoughts", "methods": ["GET", "POST"] },
            { "path": "/thoughts/:thoughtId/like", "methods": ["POST"] }
        ]
    }))
}
