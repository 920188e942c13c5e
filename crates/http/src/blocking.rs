//! Helpers for running blocking service calls in async handlers.
//!
//! All database and filesystem work goes through these:
//! 1. Spawn a blocking task
//! 2. Map join errors to 500
//! 3. Map service errors through [`ApiError`]

use axum::Json;
use serde::Serialize;
use state_inspector_service::ServiceError;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and returns its result wrapped in `Json`.
///
/// # Example
/// ```ignore
/// pub async fn get_statistics(
///     State(state): State<Arc<AppState>>,
/// ) -> Result<Json<AggregateStats>, ApiError> {
///     let layout = state.config.layout()?;
///     blocking_json(move || collect_statistics(&layout)).await
/// }
/// ```
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    blocking_result(f).await.map(Json)
}

/// Runs a blocking closure and returns the raw value for further processing.
pub async fn blocking_result<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}
