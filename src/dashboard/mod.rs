pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod state;

use crate::config::{OutputConfig, ServerConfig};
use router::build_routes;
use state::AppState;


pub(crate) async fn listen(server: &ServerConfig, output: &OutputConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await?;
    tracing::info!("Starting jobs dashboard at http://{}:{}", server.host, server.port);
    tracing::info!("Serving {}", output.json_path.display());
    let app = build_routes(AppState::new(output.json_path.clone()));
    tokio::select! {
        r = axum::serve(listener, app) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
