//! On-disk layout of the editor's state directories.
//!
//! ```text
//! <root>/<workspaceId>/state.vscdb        per-workspace database
//! <root>/<workspaceId>/workspace.json     optional metadata
//! <root>/../globalStorage/state.vscdb     global database
//! ```

use std::path::{Path, PathBuf};

use crate::constants::{GLOBAL_STORAGE_DIR, STATE_DB_FILE, WORKSPACE_META_FILE};
use crate::entry::EntrySource;
use crate::error::{InspectorError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn global_db(&self) -> PathBuf {
        self.root.join("..").join(GLOBAL_STORAGE_DIR).join(STATE_DB_FILE)
    }

    /// Directory of one workspace.
    ///
    /// # Errors
    /// Returns [`InspectorError::InvalidWorkspaceId`] if `id` is not a single path component.
    pub fn workspace_dir(&self, id: &str) -> Result<PathBuf> {
        validate_workspace_id(id)?;
        Ok(self.root.join(id))
    }

    /// # Errors
    /// Returns [`InspectorError::InvalidWorkspaceId`] if `id` is not a single path component.
    pub fn workspace_db(&self, id: &str) -> Result<PathBuf> {
        self.workspace_dir(id).map(|dir| Self::db_in(&dir))
    }

    /// Database file for an entry lookup source.
    ///
    /// # Errors
    /// Returns [`InspectorError::InvalidWorkspaceId`] for an invalid workspace source.
    pub fn db_for_source(&self, source: &EntrySource) -> Result<PathBuf> {
        match source {
            EntrySource::Global => Ok(self.global_db()),
            EntrySource::Workspace(id) => self.workspace_db(id),
        }
    }

    #[must_use]
    pub fn db_in(workspace_dir: &Path) -> PathBuf {
        workspace_dir.join(STATE_DB_FILE)
    }

    #[must_use]
    pub fn metadata_in(workspace_dir: &Path) -> PathBuf {
        workspace_dir.join(WORKSPACE_META_FILE)
    }
}

/// Workspace ids are directory names: exactly one normal path component.
///
/// # Errors
/// Returns [`InspectorError::InvalidWorkspaceId`] for empty ids, `.`/`..`, or ids with separators.
pub fn validate_workspace_id(id: &str) -> Result<&str> {
    let invalid = id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']);
    if invalid {
        return Err(InspectorError::InvalidWorkspaceId(id.to_owned()));
    }
    Ok(id)
}
