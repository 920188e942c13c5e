use serde::Serialize;
use state_inspector_core::{PruneFailure, PruneReport};

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkspacesResponse {
    pub success: bool,
    pub removed_workspaces: Vec<String>,
    pub removed_count: usize,
    pub errors: Vec<PruneFailure>,
    pub message: String,
}

impl From<PruneReport> for DeleteWorkspacesResponse {
    fn from(report: PruneReport) -> Self {
        let message = report.summary();
        let removed_count = report.removed_count();
        Self {
            success: true,
            removed_workspaces: report.removed_ids,
            removed_count,
            errors: report.errors,
            message,
        }
    }
}
