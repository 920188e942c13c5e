use serde::Deserialize;

/// Query string for `GET /entry`. Both fields optional so a missing key
/// surfaces as a JSON 400 instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteWorkspacesRequest {
    #[serde(rename = "workspaceIds", default)]
    pub workspace_ids: Option<Vec<String>>,
}
