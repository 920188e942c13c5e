//! Statistics view: workspace scan, aggregation and global breakdown.

use state_inspector_core::{AggregateStats, StorageLayout, WorkspaceRecord};

use crate::aggregator::{aggregate, empty_workspaces};
use crate::global_analyzer::analyze_global;
use crate::workspace_scanner::scan_workspaces;
use crate::ServiceError;

pub fn collect_statistics(layout: &StorageLayout) -> Result<AggregateStats, ServiceError> {
    let workspaces = scan_workspaces(layout.root())?;
    let global = analyze_global(&layout.global_db());
    let stats = aggregate(workspaces, global);
    tracing::info!(
        workspaces = stats.total_workspaces,
        global_entries = stats.global.total_entries,
        "Collected statistics"
    );
    Ok(stats)
}

/// Cleanup candidates: workspaces holding neither chats nor composers.
pub fn find_empty_workspaces(layout: &StorageLayout) -> Result<Vec<WorkspaceRecord>, ServiceError> {
    scan_workspaces(layout.root()).map(|records| empty_workspaces(&records))
}
