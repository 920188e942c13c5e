use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key_category::KeyCategory;
use crate::size_format::format_size;
use crate::workspace::WorkspaceRecord;

/// One row of the largest-entries ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LargestEntry {
    pub key: String,
    pub size_bytes: u64,
    pub size_formatted: String,
    /// Coarse bucket (text before the first `:`).
    #[serde(rename = "type")]
    pub entry_type: String,
    pub category: KeyCategory,
}

/// Statistics over the global key/value table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_entries: u64,
    pub composer_entries: u64,
    pub other_entries: u64,
    pub total_size_bytes: u64,
    pub composer_size_bytes: u64,
    pub other_size_bytes: u64,
    pub total_size_formatted: String,
    pub composer_size_formatted: String,
    pub other_size_formatted: String,
    pub count_by_type: BTreeMap<String, u64>,
    pub size_by_type: BTreeMap<String, u64>,
    pub sample_keys_by_type: BTreeMap<String, Vec<String>>,
    pub largest_entries: Vec<LargestEntry>,
}

impl GlobalStats {
    /// Recompute the formatted size strings from the byte totals.
    #[must_use]
    pub fn with_formatted_sizes(mut self) -> Self {
        self.total_size_formatted = format_size(self.total_size_bytes);
        self.composer_size_formatted = format_size(self.composer_size_bytes);
        self.other_size_formatted = format_size(self.other_size_bytes);
        self
    }
}

impl Default for GlobalStats {
    fn default() -> Self {
        Self {
            total_entries: 0,
            composer_entries: 0,
            other_entries: 0,
            total_size_bytes: 0,
            composer_size_bytes: 0,
            other_size_bytes: 0,
            total_size_formatted: String::new(),
            composer_size_formatted: String::new(),
            other_size_formatted: String::new(),
            count_by_type: BTreeMap::new(),
            size_by_type: BTreeMap::new(),
            sample_keys_by_type: BTreeMap::new(),
            largest_entries: Vec::new(),
        }
        .with_formatted_sizes()
    }
}

/// Cross-workspace totals plus the global breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_workspaces: usize,
    pub workspaces_with_chats: usize,
    pub workspaces_with_composers: usize,
    pub workspaces_with_both: usize,
    pub workspaces_with_chats_only: usize,
    pub workspaces_with_composers_only: usize,
    pub workspaces_with_neither: usize,
    pub total_chats: usize,
    pub total_composers: usize,
    pub total_chat_size_bytes: u64,
    pub total_composer_size_bytes: u64,
    pub average_chats_per_workspace: f64,
    pub average_composers_per_workspace: f64,
    pub workspaces: Vec<WorkspaceRecord>,
    pub global: GlobalStats,
}
