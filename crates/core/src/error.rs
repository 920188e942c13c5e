use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while resolving configuration and workspace identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid workspace id: {0:?}")]
    InvalidWorkspaceId(String),
}

pub type Result<T> = StdResult<T, InspectorError>;
