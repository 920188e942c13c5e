//! Service layer for state-inspector
//!
//! Statistics, single-entry lookup and workspace pruning. Every operation is
//! synchronous and reads disk state from scratch; the HTTP layer runs them on
//! the blocking pool.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]
#![allow(clippy::as_conversions, reason = "usize/u64 conversions of byte counts")]

mod aggregator;
mod entry_lookup;
mod error;
mod global_analyzer;
mod pruner;
mod statistics;
mod workspace_scanner;

pub use aggregator::{aggregate, empty_workspaces};
pub use entry_lookup::lookup_entry;
pub use error::ServiceError;
pub use global_analyzer::{analyze_global, compute_global_stats};
pub use pruner::prune_workspaces;
pub use statistics::{collect_statistics, find_empty_workspaces};
pub use workspace_scanner::scan_workspaces;
