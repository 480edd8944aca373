use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;


#[derive(Debug, Error)]
pub(crate) enum DashboardError {
    #[error("failed to render the dashboard: {0}")]
    Render(#[from] askama::Error),
    #[error("failed to embed jobs in the dashboard: {0}")]
    Embed(#[from] serde_json::Error)
}


impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
