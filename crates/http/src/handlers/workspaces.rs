use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use state_inspector_core::WorkspaceRecord;
use state_inspector_core::constants::MAX_PRUNE_BATCH;
use state_inspector_service::{ServiceError, find_empty_workspaces, prune_workspaces};

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::{blocking_json, blocking_result};
use crate::query_types::DeleteWorkspacesRequest;
use crate::response_types::DeleteWorkspacesResponse;

pub async fn delete_workspaces(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DeleteWorkspacesResponse>, ApiError> {
    let ids = parse_workspace_ids(&body)?;
    let layout = state.config.layout()?;
    let requested = ids.len();
    let report =
        blocking_result(move || Ok::<_, ServiceError>(prune_workspaces(&layout, &ids))).await?;
    tracing::info!(
        requested,
        removed = report.removed_count(),
        failed = report.errors.len(),
        "workspace removal finished"
    );
    Ok(Json(DeleteWorkspacesResponse::from(report)))
}

pub async fn get_empty_workspaces(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkspaceRecord>>, ApiError> {
    let layout = state.config.layout()?;
    blocking_json(move || find_empty_workspaces(&layout)).await
}

fn parse_workspace_ids(body: &[u8]) -> Result<Vec<String>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("request body is required".to_owned()));
    }
    let request: DeleteWorkspacesRequest = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;
    let ids = request.workspace_ids.ok_or_else(|| {
        ApiError::BadRequest("workspaceIds must be an array of strings".to_owned())
    })?;
    if ids.len() > MAX_PRUNE_BATCH {
        return Err(ApiError::BadRequest(format!(
            "too many workspace ids: {} (max {MAX_PRUNE_BATCH})",
            ids.len()
        )));
    }
    Ok(ids)
}
