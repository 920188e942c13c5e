//! Process configuration: environment parsing and the workspace root.

use std::path::{Path, PathBuf};

use crate::constants::WORKSPACE_PATH_ENV;
use crate::error::{InspectorError, Result};
use crate::layout::StorageLayout;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Immutable configuration resolved once at startup and shared by every request.
///
/// A missing workspace root is reported per request as a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorConfig {
    workspace_root: Option<PathBuf>,
}

impl InspectorConfig {
    #[must_use]
    pub fn new(workspace_root: Option<PathBuf>) -> Self {
        Self { workspace_root }
    }

    /// Read `WORKSPACE_PATH` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(WORKSPACE_PATH_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let workspace_root = raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self { workspace_root }
    }

    /// Replace the root with an explicit value (CLI flag), if given.
    #[must_use]
    pub fn with_override(self, root: Option<PathBuf>) -> Self {
        match root {
            Some(root) => Self { workspace_root: Some(root) },
            None => self,
        }
    }

    /// Fill an unset root with the platform default editor location, when it exists.
    #[must_use]
    pub fn or_detected(self) -> Self {
        if self.workspace_root.is_some() {
            return self;
        }
        match default_workspace_root().filter(|p| p.is_dir()) {
            Some(root) => {
                tracing::info!(root = %root.display(), "Detected workspace storage root");
                Self { workspace_root: Some(root) }
            },
            None => self,
        }
    }

    /// The configured workspace root.
    ///
    /// # Errors
    /// Returns [`InspectorError::Configuration`] when no root is configured.
    pub fn workspace_root(&self) -> Result<&Path> {
        self.workspace_root.as_deref().ok_or_else(|| {
            InspectorError::Configuration(format!(
                "Workspace path is not configured. Set {WORKSPACE_PATH_ENV} to the editor's workspaceStorage directory"
            ))
        })
    }

    /// Resolve the on-disk layout for one request.
    ///
    /// # Errors
    /// Returns [`InspectorError::Configuration`] when no root is configured.
    pub fn layout(&self) -> Result<StorageLayout> {
        self.workspace_root().map(StorageLayout::new)
    }
}

/// Platform default location of the editor's workspace storage.
#[must_use]
pub fn default_workspace_root() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("Cursor").join("User").join("workspaceStorage"))
}
