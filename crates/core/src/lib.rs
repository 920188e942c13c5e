//! Core types for state-inspector
//!
//! Domain types shared by the storage, service, HTTP and CLI crates: workspace
//! records, global statistics, key classification, size formatting and the
//! on-disk layout of the editor's state directories.

pub mod constants;
mod entry;
mod env_config;
mod error;
mod json_utils;
mod key_category;
mod layout;
mod prune;
mod size_format;
mod stats;
mod workspace;

pub use entry::*;
pub use env_config::*;
pub use error::*;
pub use json_utils::*;
pub use key_category::*;
pub use layout::*;
pub use prune::*;
pub use size_format::*;
pub use stats::*;
pub use workspace::*;
