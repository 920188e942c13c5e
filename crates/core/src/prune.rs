use serde::{Deserialize, Serialize};

/// A workspace that could not be removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PruneFailure {
    pub id: String,
    pub message: String,
}

/// Outcome of a batch removal: successes and failures side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PruneReport {
    pub removed_ids: Vec<String>,
    pub errors: Vec<PruneFailure>,
}

impl PruneReport {
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed_ids.len()
    }

    pub fn record_removed(&mut self, id: impl Into<String>) {
        self.removed_ids.push(id.into());
    }

    pub fn record_failure(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.errors.push(PruneFailure { id: id.into(), message: message.into() });
    }

    #[must_use]
    pub fn summary(&self) -> String {
        match (self.removed_count(), self.errors.len()) {
            (removed, 0) => format!("Removed {removed} workspace(s)"),
            (removed, failed) => format!("Removed {removed} workspace(s), {failed} failed"),
        }
    }
}
