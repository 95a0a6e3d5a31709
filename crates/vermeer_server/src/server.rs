//! Axum application assembly and lifecycle.

use crate::{ErrorResponse, FetchPipeline, FetchPostRequest, FetchPostResponse, status_for};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};
use vermeer_error::{ServerError, ServerErrorKind};

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The fetch pipeline, constructed once at startup
    pub pipeline: Arc<FetchPipeline>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(pipeline: Arc<FetchPipeline>) -> Self {
        Self { pipeline }
    }
}

/// Build the axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/fetch-post", post(fetch_post))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn hello() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Hello World"})))
}

/// Fetch a post and re-host its media.
async fn fetch_post(
    State(state): State<AppState>,
    Json(request): Json<FetchPostRequest>,
) -> impl IntoResponse {
    match state.pipeline.run(&request.url).await {
        Ok(fetched) => {
            (StatusCode::OK, Json(FetchPostResponse::from(fetched))).into_response()
        }
        Err(e) => {
            if e.kind().is_client_error() {
                // Caller input problem, not a system failure.
                debug!(kind = %e.kind(), error = %e, "Rejected fetch request");
            } else {
                error!(kind = %e.kind(), error = %e, "Fetch pipeline failed");
            }
            (status_for(e.kind()), Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

/// Start the API server and block until it exits.
pub async fn serve(state: AppState, addr: &str) -> Result<(), ServerError> {
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind(addr.to_string(), e.to_string()))
    })?;

    tracing::info!("Vermeer API server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;

    Ok(())
}
