//! Shared constants for state-inspector.
//!
//! Key names, table names and thresholds that the scanner, analyzer and
//! entry lookup must agree on.

/// Environment variable holding the workspace storage root.
pub const WORKSPACE_PATH_ENV: &str = "WORKSPACE_PATH";

/// Environment variable holding the default HTTP port for `serve`.
pub const PORT_ENV: &str = "STATE_INSPECTOR_PORT";

/// Default HTTP port when neither flag nor environment provide one.
pub const DEFAULT_PORT: u16 = 3000;

/// File name of every state database (per-workspace and global).
pub const STATE_DB_FILE: &str = "state.vscdb";

/// Optional per-workspace metadata file.
pub const WORKSPACE_META_FILE: &str = "workspace.json";

/// Sibling directory of the workspace root that holds the global database.
pub const GLOBAL_STORAGE_DIR: &str = "globalStorage";

/// Key/value table inside per-workspace databases.
pub const WORKSPACE_TABLE: &str = "ItemTable";

/// Key/value table inside the global database.
pub const GLOBAL_TABLE: &str = "cursorDiskKV";

/// Exact key of the chat-data row in a workspace database.
pub const CHAT_DATA_KEY: &str = "workbench.panel.aichat.view.aichat.chatdata";

/// Exact key of the composer-data row in a workspace database.
pub const COMPOSER_DATA_KEY: &str = "composer.composerData";

/// Prefix of per-composer rows in the global database.
pub const COMPOSER_DATA_PREFIX: &str = "composerData:";

/// Type buckets smaller than this (in megabytes) are dropped from the global breakdown.
pub const MIN_SIZE_THRESHOLD_MB: f64 = 0.1;

/// Number of entries kept in the largest-entries ranking.
pub const LARGEST_ENTRIES_LIMIT: usize = 10;

/// Number of sample keys kept per type bucket.
pub const SAMPLE_KEYS_PER_TYPE: usize = 3;

/// `source` value that routes an entry lookup to the global database.
pub const GLOBAL_SOURCE: &str = "global";

pub const BYTES_PER_KB: f64 = 1024.0;
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Maximum number of workspace ids accepted in one removal request.
pub const MAX_PRUNE_BATCH: usize = 500;
