use serde::{Deserialize, Serialize};

use crate::constants::GLOBAL_SOURCE;
use crate::key_category::KeyCategory;

/// Which database an entry lookup targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    Global,
    Workspace(String),
}

impl EntrySource {
    /// `"global"` (or no source at all) selects the global database; anything
    /// else is taken as a workspace id.
    #[must_use]
    pub fn parse(source: Option<&str>) -> Self {
        match source.map(str::trim) {
            None | Some("") => Self::Global,
            Some(s) if s == GLOBAL_SOURCE => Self::Global,
            Some(id) => Self::Workspace(id.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Global => GLOBAL_SOURCE,
            Self::Workspace(id) => id,
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored entry as returned by the single-entry view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub key: String,
    pub raw_value: String,
    /// JSON-decoded `raw_value`, or the raw string when it is not valid JSON.
    pub parsed_value: serde_json::Value,
    pub source: String,
    pub category: KeyCategory,
    pub size_bytes: u64,
    pub size_formatted: String,
}
