//! Read-only key/value access to a single state database file.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, params};
use state_inspector_core::EntrySource;
use state_inspector_core::constants::{GLOBAL_TABLE, WORKSPACE_TABLE};

use crate::error::StorageError;

/// One `(key, value)` row. `value` is `None` for SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRow {
    pub key: String,
    pub value: Option<String>,
}

impl StorageRow {
    /// UTF-8 byte length of the value, `None` when the value is absent.
    #[must_use]
    pub fn size_bytes(&self) -> Option<u64> {
        self.value.as_ref().map(|v| v.len() as u64)
    }
}

/// The two key/value tables the editor writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvTable {
    /// `ItemTable` in per-workspace databases.
    Workspace,
    /// `cursorDiskKV` in the global database.
    Global,
}

impl KvTable {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Workspace => WORKSPACE_TABLE,
            Self::Global => GLOBAL_TABLE,
        }
    }

    #[must_use]
    pub fn for_source(source: &EntrySource) -> Self {
        match source {
            EntrySource::Global => Self::Global,
            EntrySource::Workspace(_) => Self::Workspace,
        }
    }
}

/// An open, read-only database handle.
///
/// The connection is closed when the handle is dropped, so early returns and
/// `?` never leak a file handle. [`KvDatabase::close`] closes eagerly and
/// surfaces close errors.
#[derive(Debug)]
pub struct KvDatabase {
    pub(crate) conn: Connection,
    path: PathBuf,
}

/// Decode a column into text. Blobs are decoded as lossy UTF-8 and numbers are
/// rendered in decimal.
fn value_to_string(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        },
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StorageRow> {
    Ok(StorageRow {
        key: value_to_string(row.get_ref(0)?).unwrap_or_default(),
        value: value_to_string(row.get_ref(1)?),
    })
}

impl KvDatabase {
    /// Open `path` read-only.
    ///
    /// # Errors
    /// [`StorageError::NotFound`] if the file does not exist,
    /// [`StorageError::Database`] if SQLite refuses to open it.
    pub fn open_read_only(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Err(StorageError::NotFound { path: path.to_path_buf() });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::trace!(path = %path.display(), "Opened state database");
        Ok(Self { conn, path: path.to_path_buf() })
    }

    /// Every row of `table`, in table order.
    ///
    /// # Errors
    /// [`StorageError::Database`] if the table is missing or the file is unreadable.
    pub fn query_all(&self, table: KvTable) -> Result<Vec<StorageRow>, StorageError> {
        let sql = format!("SELECT key, value FROM \"{}\"", table.as_str());
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(
            path = %self.path.display(),
            table = table.as_str(),
            rows = rows.len(),
            "Scanned key/value table"
        );
        Ok(rows)
    }

    /// The row stored under exactly `key`, if any.
    ///
    /// # Errors
    /// [`StorageError::Database`] if the table is missing or the file is unreadable.
    pub fn query_one(&self, table: KvTable, key: &str) -> Result<Option<StorageRow>, StorageError> {
        let sql = format!("SELECT key, value FROM \"{}\" WHERE key = ?1 LIMIT 1", table.as_str());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(map_row(row)?)),
            None => Ok(None),
        }
    }

    /// Close the handle now.
    ///
    /// # Errors
    /// [`StorageError::Database`] if SQLite reports an error while closing.
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_conn, e)| StorageError::Database(e))
    }
}
