//! Single-entry view.

use state_inspector_core::{
    EntrySource, EntryView, KeyCategory, StorageLayout, decode_stored_value, format_size,
};
use state_inspector_storage::{KvDatabase, KvTable};

use crate::ServiceError;

/// Look up `key` in the database selected by `source`.
///
/// Unlike the statistics path there is no fallback here: a missing database,
/// a missing key and a failing query are all returned to the caller.
pub fn lookup_entry(
    layout: &StorageLayout,
    key: &str,
    source: &EntrySource,
) -> Result<EntryView, ServiceError> {
    if key.is_empty() {
        return Err(ServiceError::InvalidInput("key is required".to_owned()));
    }
    let db_path = layout.db_for_source(source)?;
    let db = KvDatabase::open_read_only(&db_path)?;
    let row = db.query_one(KvTable::for_source(source), key)?;
    if let Err(e) = db.close() {
        tracing::warn!(path = %db_path.display(), error = %e, "Failed to close database");
    }

    let row = row.ok_or_else(|| ServiceError::NotFound(format!("key '{key}' not found in {source}")))?;
    let raw_value = row.value.unwrap_or_default();
    let size_bytes = raw_value.len() as u64;
    tracing::debug!(key, source = %source, size_bytes, "Loaded entry");

    Ok(EntryView {
        key: row.key,
        parsed_value: decode_stored_value(&raw_value).into_value(),
        raw_value,
        source: source.to_string(),
        category: KeyCategory::classify(key),
        size_bytes,
        size_formatted: format_size(size_bytes),
    })
}
