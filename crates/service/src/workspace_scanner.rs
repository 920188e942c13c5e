//! Per-workspace chat/composer presence.

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use state_inspector_core::constants::{CHAT_DATA_KEY, COMPOSER_DATA_KEY};
use state_inspector_core::{
    StorageLayout, WorkspaceMetadata, WorkspaceRecord, chat_tab_count, composer_count,
};
use state_inspector_storage::{KvDatabase, KvTable, StorageError, StorageRow};

use crate::ServiceError;

/// Scan every workspace directory under `root`, in directory-listing order.
///
/// Directories without a state database are skipped. A workspace whose
/// database cannot be read is logged and left out; the scan carries on.
pub fn scan_workspaces(root: &Path) -> Result<Vec<WorkspaceRecord>, ServiceError> {
    let entries = std::fs::read_dir(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            ServiceError::NotFound(format!("workspace root {} does not exist", root.display()))
        },
        _ => ServiceError::Io(e),
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Failed to read directory entry");
                continue;
            },
        };
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let db_path = StorageLayout::db_in(&dir);
        if !db_path.is_file() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        match scan_workspace(&id, &dir, &db_path) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(workspace_id = %id, error = %e, "Skipping unreadable workspace");
            },
        }
    }

    tracing::debug!(root = %root.display(), workspaces = records.len(), "Workspace scan complete");
    Ok(records)
}

fn scan_workspace(id: &str, dir: &Path, db_path: &Path) -> Result<WorkspaceRecord, StorageError> {
    let mut record = WorkspaceRecord::empty(id, read_folder(id, dir));
    record.last_modified = modified_at(db_path);

    let db = KvDatabase::open_read_only(db_path)?;
    let chat = db.query_one(KvTable::Workspace, CHAT_DATA_KEY)?;
    let composer = db.query_one(KvTable::Workspace, COMPOSER_DATA_KEY)?;
    if let Err(e) = db.close() {
        tracing::warn!(workspace_id = %id, error = %e, "Failed to close workspace database");
    }

    if let Some(raw) = non_empty_value(chat) {
        record.has_chats = true;
        record.chat_count = chat_tab_count(&raw);
        record.chat_size_bytes = raw.len() as u64;
    }
    if let Some(raw) = non_empty_value(composer) {
        record.has_composers = true;
        record.composer_count = composer_count(&raw);
        record.composer_size_bytes = raw.len() as u64;
    }
    Ok(record)
}

fn non_empty_value(row: Option<StorageRow>) -> Option<String> {
    row.and_then(|r| r.value).filter(|v| !v.is_empty())
}

/// Declared project folder from `workspace.json`. Any failure means "no folder".
fn read_folder(id: &str, dir: &Path) -> Option<String> {
    let path = StorageLayout::metadata_in(dir);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(workspace_id = %id, error = %e, "Failed to read workspace metadata");
            return None;
        },
    };
    match serde_json::from_str::<WorkspaceMetadata>(&contents) {
        Ok(meta) => meta.folder,
        Err(e) => {
            tracing::warn!(workspace_id = %id, error = %e, "Malformed workspace metadata");
            None
        },
    }
}

fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok().map(DateTime::<Utc>::from)
}
