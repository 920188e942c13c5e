//! Typed error enum for the service layer.

use state_inspector_core::InspectorError;
use state_inspector_storage::StorageError;
use thiserror::Error;

/// Service-layer error. Only failures with no local fallback end up here;
/// parse errors and per-item failures are recovered inside the services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (missing file, unreadable database).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Workspace root is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Caller provided invalid input (missing key, bad workspace id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested key or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem failure outside the storage layer.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Storage(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl From<InspectorError> for ServiceError {
    fn from(err: InspectorError) -> Self {
        match err {
            InspectorError::Configuration(msg) => Self::NotConfigured(msg),
            InspectorError::InvalidWorkspaceId(_) => Self::InvalidInput(err.to_string()),
        }
    }
}
