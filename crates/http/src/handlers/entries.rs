use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use state_inspector_core::{EntrySource, EntryView};
use state_inspector_service::lookup_entry;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::EntryQuery;

pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<EntryView>, ApiError> {
    let key = query
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::BadRequest("key parameter is required".to_owned()))?;
    let source = EntrySource::parse(query.source.as_deref());
    let layout = state.config.layout()?;
    tracing::debug!(key = %key, source = %source, "entry lookup");
    blocking_json(move || lookup_entry(&layout, &key, &source)).await
}
