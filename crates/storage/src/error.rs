//! Typed error enum for the storage layer.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error covering every expected failure mode of a read.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database file does not exist (checked before opening).
    #[error("database not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Open / prepare / step failure: corrupt file, locked file, missing table.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the file is locked by another process (worth telling the user).
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if matches!(e.code, rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
        )
    }
}
