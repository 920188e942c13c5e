//! Storage layer for state-inspector
//!
//! Read-only access to the editor's SQLite key/value tables. Every handle is
//! opened for a single request and released when it goes out of scope.

mod error;
mod reader;

pub use error::StorageError;
pub use reader::{KvDatabase, KvTable, StorageRow};
