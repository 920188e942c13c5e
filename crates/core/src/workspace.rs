use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One workspace directory that holds a state database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    /// Directory name under the workspace root.
    pub id: String,
    /// Project folder declared in `workspace.json`, verbatim.
    pub folder: Option<String>,
    pub display_name: String,
    pub has_chats: bool,
    pub has_composers: bool,
    pub chat_count: usize,
    pub composer_count: usize,
    pub chat_size_bytes: u64,
    pub composer_size_bytes: u64,
    /// Modification time of the workspace database file.
    pub last_modified: Option<DateTime<Utc>>,
}

/// Which kinds of AI history a workspace holds. Every workspace is in exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    Both,
    ChatsOnly,
    ComposersOnly,
    Neither,
}

impl WorkspaceRecord {
    /// Record with no chat or composer data.
    #[must_use]
    pub fn empty(id: impl Into<String>, folder: Option<String>) -> Self {
        let id = id.into();
        let display_name = display_name(folder.as_deref(), &id);
        Self {
            id,
            folder,
            display_name,
            has_chats: false,
            has_composers: false,
            chat_count: 0,
            composer_count: 0,
            chat_size_bytes: 0,
            composer_size_bytes: 0,
            last_modified: None,
        }
    }

    #[must_use]
    pub const fn presence(&self) -> Presence {
        match (self.has_chats, self.has_composers) {
            (true, true) => Presence::Both,
            (true, false) => Presence::ChatsOnly,
            (false, true) => Presence::ComposersOnly,
            (false, false) => Presence::Neither,
        }
    }
}

/// Contents of `workspace.json`. Only `folder` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceMetadata {
    #[serde(default)]
    pub folder: Option<String>,
}

/// Last path segment of the declared folder, or the workspace id.
///
/// `file://` URIs are percent-decoded; plain paths are kept verbatim.
#[must_use]
pub fn display_name(folder: Option<&str>, id: &str) -> String {
    let Some(folder) = folder else {
        return id.to_owned();
    };
    let (path, is_uri) = folder.strip_prefix("file://").map_or((folder, false), |p| (p, true));
    let name = path.trim_end_matches(['/', '\\']).rsplit(['/', '\\']).next().unwrap_or_default();
    if name.is_empty() {
        return id.to_owned();
    }
    if is_uri {
        urlencoding::decode(name).map_or_else(|_| name.to_owned(), Cow::into_owned)
    } else {
        name.to_owned()
    }
}
