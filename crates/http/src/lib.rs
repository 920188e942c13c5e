//! HTTP API server for state-inspector.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use axum::{
    Json, Router,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use state_inspector_core::InspectorConfig;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds only immutable configuration: every request reads disk state afresh.
pub struct AppState {
    pub config: InspectorConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(viewer::serve_dashboard))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/statistics", get(handlers::statistics::get_statistics))
        .route("/entry", get(handlers::entries::get_entry))
        .route("/workspaces", delete(handlers::workspaces::delete_workspaces))
        .route("/workspaces/empty", get(handlers::workspaces::get_empty_workspaces))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
