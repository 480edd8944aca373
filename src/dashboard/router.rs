use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::{handlers, state::AppState};


pub(crate) fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/jobs", get(handlers::jobs))
        .route("/api/stats", get(handlers::stats))
        .route("/livez", get(handlers::livez))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
