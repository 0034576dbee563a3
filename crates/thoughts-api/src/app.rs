use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::middleware::{gate, logging};
use crate::routes::{root, thoughts};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::index,
        thoughts::list_thoughts,
        thoughts::create_thought,
        thoughts::like_thought,
    ),
    components(schemas(thoughts::CreateThoughtRequest, thoughts::ThoughtResponse)),
    tags(
        (name = "thoughts", description = "Happy thoughts: create, list, like"),
        (name = "root", description = "Route discovery")
    )
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/thoughts", get(thoughts::list_thoughts))
        .route("/thoughts", post(thoughts::create_thought))
        .route("/thoughts/:thought_id/like", post(thoughts::like_thought))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        // Innermost first: the gate runs after CORS and request logging but
        // before any handler, matched or not.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_store,
        ))
        .layer(middleware::from_fn(logging::log_request))
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::permissive()
    }
}
