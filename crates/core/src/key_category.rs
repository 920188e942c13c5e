//! Key classification for editor state rows.
//!
//! Two independent views of a key: [`KeyCategory`] is the human label shown
//! next to an entry, [`bucket_type`] is the coarse statistical bucket used by
//! the global breakdown.

use serde::{Deserialize, Serialize};

use crate::constants::{CHAT_DATA_KEY, COMPOSER_DATA_KEY, COMPOSER_DATA_PREFIX};

/// Display category of a stored key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum KeyCategory {
    ChatData,
    ComposerMetadata,
    ChatMessage,
    Checkpoint,
    CodeDiff,
    MessageContext,
    ComposerData,
    Unknown,
}

/// Prefix rules, checked after the exact-match keys. Order matters.
const PREFIX_RULES: &[(&str, KeyCategory)] = &[
    ("bubbleId:", KeyCategory::ChatMessage),
    ("checkpointId:", KeyCategory::Checkpoint),
    ("codeBlockDiff:", KeyCategory::CodeDiff),
    ("messageRequestContext:", KeyCategory::MessageContext),
    (COMPOSER_DATA_PREFIX, KeyCategory::ComposerData),
];

impl KeyCategory {
    /// Classify a key. First matching rule wins.
    #[must_use]
    pub fn classify(key: &str) -> Self {
        if key == CHAT_DATA_KEY {
            return Self::ChatData;
        }
        if key == COMPOSER_DATA_KEY {
            return Self::ComposerMetadata;
        }
        PREFIX_RULES
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map_or(Self::Unknown, |&(_, category)| category)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::ChatData => "Chat Data",
            Self::ComposerMetadata => "Composer Metadata",
            Self::ChatMessage => "Chat Message",
            Self::Checkpoint => "Checkpoint",
            Self::CodeDiff => "Code Diff",
            Self::MessageContext => "Message Context",
            Self::ComposerData => "Composer Data",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse bucket of a key: the text before the first `:`, the whole key when
/// there is no `:`, or `"unknown"` when that text is empty.
#[must_use]
pub fn bucket_type(key: &str) -> &str {
    let head = key.split_once(':').map_or(key, |(head, _)| head);
    if head.is_empty() { "unknown" } else { head }
}
