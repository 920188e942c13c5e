use anyhow::Result;
use state_inspector_core::constants::{DEFAULT_PORT, PORT_ENV};
use state_inspector_core::{InspectorConfig, env_parse_with_default};
use state_inspector_http::{AppState, create_router};
use std::sync::Arc;

pub(crate) async fn run(config: InspectorConfig, port: Option<u16>, host: String) -> Result<()> {
    let port = port.unwrap_or_else(|| env_parse_with_default(PORT_ENV, DEFAULT_PORT));

    match config.workspace_root() {
        Ok(root) => tracing::info!(root = %root.display(), "Serving workspace storage"),
        Err(e) => tracing::warn!("{e}; API calls will fail until it is set"),
    }

    let router = create_router(Arc::new(AppState::new(config)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
