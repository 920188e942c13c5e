use axum::{Json, extract::State};
use std::sync::Arc;

use state_inspector_core::AggregateStats;
use state_inspector_service::collect_statistics;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_json;

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AggregateStats>, ApiError> {
    let layout = state.config.layout()?;
    blocking_json(move || collect_statistics(&layout)).await
}
