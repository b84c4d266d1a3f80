//! HTTP gateway (Axum) for the ranked-articles and story endpoints.
//!
//! This module is primarily used by the `nestrank` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{
    ArticleQueryParams, HelloResponse, StoryQueryParams, articles_handler, hello_handler,
    story_data_handler,
};
pub use state::HandlerState;

use crate::catalog::ArticleStore;
use crate::constants::{STATUS_ERROR, STATUS_HEADER, STATUS_HEALTHY, STATUS_READY};

pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: ArticleStore + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/hello", get(hello_handler))
        .route("/api/articles", get(articles_handler))
        .route("/api/story-data", get(story_data_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub catalog: &'static str,
    pub model: &'static str,
    pub model_mode: &'static str,
    pub articles: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static(STATUS_HEALTHY));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok",
            service: "nestrank",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<S>(State(state): State<HandlerState<S>>) -> Response
where
    S: ArticleStore + 'static,
{
    let catalog_status = match state.store.all().await {
        Ok(_) => STATUS_READY,
        Err(_) => STATUS_ERROR,
    };
    let article_count = state.store.count().await;

    // Artifact problems are fatal at startup, so a running process always has
    // a usable model; the mode says whether it is the real artifact or the stub.
    let model_status = STATUS_READY;
    let model_mode = state.ranker.mode().as_str();

    let components = ComponentStatus {
        http: STATUS_READY,
        catalog: catalog_status,
        model: model_status,
        model_mode,
        articles: article_count,
    };

    let is_ready = components.catalog == STATUS_READY && components.model == STATUS_READY;

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { "pending" };

    let mut headers = HeaderMap::new();
    headers.insert(
        STATUS_HEADER,
        HeaderValue::from_str(status_msg).unwrap_or(HeaderValue::from_static(STATUS_ERROR)),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
