//! Cross-workspace totals.

use state_inspector_core::{AggregateStats, GlobalStats, Presence, WorkspaceRecord};

#[allow(clippy::cast_precision_loss, reason = "averages are display values")]
fn average(total: usize, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total as f64 / count as f64 }
}

/// Fold workspace records into totals; each workspace lands in exactly one presence bucket.
pub fn aggregate(workspaces: Vec<WorkspaceRecord>, global: GlobalStats) -> AggregateStats {
    let mut stats = AggregateStats {
        total_workspaces: workspaces.len(),
        workspaces_with_chats: 0,
        workspaces_with_composers: 0,
        workspaces_with_both: 0,
        workspaces_with_chats_only: 0,
        workspaces_with_composers_only: 0,
        workspaces_with_neither: 0,
        total_chats: 0,
        total_composers: 0,
        total_chat_size_bytes: 0,
        total_composer_size_bytes: 0,
        average_chats_per_workspace: 0.0,
        average_composers_per_workspace: 0.0,
        workspaces: Vec::new(),
        global,
    };

    for ws in &workspaces {
        match ws.presence() {
            Presence::Both => stats.workspaces_with_both += 1,
            Presence::ChatsOnly => stats.workspaces_with_chats_only += 1,
            Presence::ComposersOnly => stats.workspaces_with_composers_only += 1,
            Presence::Neither => stats.workspaces_with_neither += 1,
        }
        stats.total_chats += ws.chat_count;
        stats.total_composers += ws.composer_count;
        stats.total_chat_size_bytes += ws.chat_size_bytes;
        stats.total_composer_size_bytes += ws.composer_size_bytes;
    }
    stats.workspaces_with_chats = stats.workspaces_with_both + stats.workspaces_with_chats_only;
    stats.workspaces_with_composers =
        stats.workspaces_with_both + stats.workspaces_with_composers_only;
    stats.average_chats_per_workspace = average(stats.total_chats, stats.total_workspaces);
    stats.average_composers_per_workspace = average(stats.total_composers, stats.total_workspaces);
    stats.workspaces = workspaces;
    stats
}

/// Workspaces with neither chats nor composers, in scan order.
pub fn empty_workspaces(workspaces: &[WorkspaceRecord]) -> Vec<WorkspaceRecord> {
    workspaces.iter().filter(|ws| ws.presence() == Presence::Neither).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws(id: &str, chats: usize, composers: usize) -> WorkspaceRecord {
        WorkspaceRecord {
            has_chats: chats > 0,
            has_composers: composers > 0,
            chat_count: chats,
            composer_count: composers,
            chat_size_bytes: chats as u64 * 100,
            composer_size_bytes: composers as u64 * 10,
            ..WorkspaceRecord::empty(id, None)
        }
    }

    #[test]
    fn test_partition_and_sums() {
        let records = vec![ws("a", 2, 1), ws("b", 4, 0), ws("c", 0, 3), ws("d", 0, 0), ws("e", 0, 0)];
        let stats = aggregate(records, GlobalStats::default());

        assert_eq!(stats.total_workspaces, 5);
        assert_eq!(stats.workspaces_with_both, 1);
        assert_eq!(stats.workspaces_with_chats_only, 1);
        assert_eq!(stats.workspaces_with_composers_only, 1);
        assert_eq!(stats.workspaces_with_neither, 2);
        assert_eq!(
            stats.workspaces_with_both
                + stats.workspaces_with_chats_only
                + stats.workspaces_with_composers_only
                + stats.workspaces_with_neither,
            stats.total_workspaces
        );
        assert_eq!(stats.workspaces_with_chats, 2);
        assert_eq!(stats.workspaces_with_composers, 2);
        assert_eq!(stats.total_chats, 6);
        assert_eq!(stats.total_composers, 4);
        assert_eq!(stats.total_chat_size_bytes, 600);
        assert_eq!(stats.total_composer_size_bytes, 40);
        assert!((stats.average_chats_per_workspace - 1.2).abs() < 1e-9);
        assert!((stats.average_composers_per_workspace - 0.8).abs() < 1e-9);
        assert_eq!(stats.workspaces.len(), 5);
        assert_eq!(stats.workspaces[3].id, "d");
    }

    #[test]
    fn test_no_workspaces_averages_zero() {
        let stats = aggregate(Vec::new(), GlobalStats::default());
        assert_eq!(stats.total_workspaces, 0);
        assert!(stats.average_chats_per_workspace.abs() < f64::EPSILON);
        assert!(stats.average_composers_per_workspace.abs() < f64::EPSILON);
    }

    #[test]
    fn test_has_flag_without_count_still_counts_presence() {
        // chat row present but unparseable: flagged, zero tabs
        let record = WorkspaceRecord { has_chats: true, ..WorkspaceRecord::empty("x", None) };
        let stats = aggregate(vec![record], GlobalStats::default());
        assert_eq!(stats.workspaces_with_chats_only, 1);
        assert_eq!(stats.total_chats, 0);
    }

    #[test]
    fn test_empty_workspaces_keeps_order() {
        let records = vec![ws("a", 0, 0), ws("b", 1, 0), ws("c", 0, 0)];
        let ids: Vec<String> = empty_workspaces(&records).into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
