use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bson::oid::ObjectId;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use thoughts_api::{app::build_router, config::Config, state::AppState};
use thoughts_persist::{StoreError, Thought, ThoughtStore};

/// In-memory stand-in for the MongoDB store. Keeps insertion order, so
/// "newest first" is just the reverse of it.
struct MemoryStore {
    connected: bool,
    thoughts: Mutex<Vec<Thought>>,
}

impl MemoryStore {
    fn connected() -> Self {
        Self {
            connected: true,
            thoughts: Mutex::new(Vec::new()),
        }
    }

    fn disconnected() -> Self {
        Self {
            connected: false,
            thoughts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ThoughtStore for MemoryStore {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Thought>, StoreError> {
        let thoughts = self.thoughts.lock().await;
        Ok(thoughts.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn create(&self, message: &str) -> Result<Thought, StoreError> {
        let thought = Thought::new(message)?;
        self.thoughts.lock().await.push(thought.clone());
        Ok(thought)
    }

    async fn like(&self, thought_id: &str) -> Result<Option<Thought>, StoreError> {
        let object_id = ObjectId::parse_str(thought_id)
            .map_err(|e| StoreError::InvalidObjectId(e.to_string()))?;

        let mut thoughts = self.thoughts.lock().await;
        match thoughts.iter_mut().find(|t| t.id == object_id) {
            Some(thought) => {
                let before = thought.clone();
                thought.hearts += 1;
                Ok(Some(before))
            }
            None => Ok(None),
        }
    }
}

fn app(store: Arc<dyn ThoughtStore>) -> Router {
    let state = Arc::new(AppState::new(Config::default(), store));
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn root_lists_available_routes() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Happy Thoughts API");
    let paths: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["/", "/thoughts", "/thoughts/:thoughtId/like"]);
}

#[tokio::test]
async fn create_returns_the_persisted_thought() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) =
        send(&app, post_json("/thoughts", json!({ "message": "Hello world!" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello world!");
    assert_eq!(body["hearts"], 0);
    assert_eq!(body["__v"], 0);
    assert!(body["_id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn create_trims_surrounding_whitespace() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) = send(
        &app,
        post_json("/thoughts", json!({ "message": "  a trimmed thought  " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "a trimmed thought");
}

#[tokio::test]
async fn create_rejects_short_message() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) = send(&app, post_json("/thoughts", json!({ "message": "hi" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Could not save the Happy Thought");
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("at least 5"));
}

#[tokio::test]
async fn create_rejects_long_message() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) = send(
        &app,
        post_json("/thoughts", json!({ "message": "a".repeat(141) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Could not save the Happy Thought");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn list_returns_newest_first_capped_at_twenty() {
    let app = app(Arc::new(MemoryStore::connected()));

    for i in 0..25 {
        let (status, _) = send(
            &app,
            post_json("/thoughts", json!({ "message": format!("thought number {i:02}") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get("/thoughts")).await;

    assert_eq!(status, StatusCode::OK);
    let thoughts = body.as_array().unwrap();
    assert_eq!(thoughts.len(), 20);
    assert_eq!(thoughts[0]["message"], "thought number 24");
    assert_eq!(thoughts[19]["message"], "thought number 05");
}

#[tokio::test]
async fn like_returns_pre_update_document_and_increments() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (_, created) =
        send(&app, post_json("/thoughts", json!({ "message": "like me please" }))).await;
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, post_empty(&format!("/thoughts/{id}/like"))).await;
    assert_eq!(status, StatusCode::OK);
    // The response carries the document as it was before the increment.
    assert_eq!(body["hearts"], 0);
    assert_eq!(body["_id"], id.as_str());

    let (_, listed) = send(&app, get("/thoughts")).await;
    assert_eq!(listed[0]["hearts"], 1);

    let (_, body) = send(&app, post_empty(&format!("/thoughts/{id}/like"))).await;
    assert_eq!(body["hearts"], 1);

    let (_, listed) = send(&app, get("/thoughts")).await;
    assert_eq!(listed[0]["hearts"], 2);
}

#[tokio::test]
async fn like_unknown_id_returns_null_not_error() {
    let app = app(Arc::new(MemoryStore::connected()));

    let unknown = ObjectId::new().to_hex();
    let (status, body) = send(&app, post_empty(&format!("/thoughts/{unknown}/like"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn like_malformed_id_returns_error_body() {
    let app = app(Arc::new(MemoryStore::connected()));

    let (status, body) = send(&app, post_empty("/thoughts/not-an-id/like")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Could not find and update this post");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn gate_rejects_every_path_while_disconnected() {
    let app = app(Arc::new(MemoryStore::disconnected()));

    for request in [
        get("/"),
        get("/thoughts"),
        post_json("/thoughts", json!({ "message": "Hello world!" })),
        post_empty("/thoughts/not-an-id/like"),
        get("/no/such/route"),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "error": "Service unavailable" }));
    }
}
