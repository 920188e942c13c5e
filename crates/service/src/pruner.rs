//! Batch removal of workspace directories.

use std::io::ErrorKind;
use std::path::Path;

use state_inspector_core::{PruneReport, StorageLayout};

/// Remove each workspace directory. Failures are collected per id and never
/// stop the rest of the batch. Deletion is permanent.
pub fn prune_workspaces(layout: &StorageLayout, ids: &[String]) -> PruneReport {
    let mut report = PruneReport::default();
    for id in ids {
        let dir = match layout.workspace_dir(id) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!(workspace_id = %id, "Refusing to remove invalid workspace id");
                report.record_failure(id.as_str(), e.to_string());
                continue;
            },
        };
        if !dir.is_dir() {
            report.record_failure(id.as_str(), "directory not found");
            continue;
        }
        match remove_dir_forced(&dir) {
            Ok(()) => {
                tracing::info!(workspace_id = %id, path = %dir.display(), "Removed workspace");
                report.record_removed(id.as_str());
            },
            Err(e) => {
                tracing::warn!(workspace_id = %id, error = %e, "Failed to remove workspace");
                report.record_failure(id.as_str(), format!("failed to remove directory: {e}"));
            },
        }
    }
    report
}

/// `rm -rf`: a tree that vanishes underneath us counts as removed.
fn remove_dir_forced(dir: &Path) -> std::io::Result<()> {
    match std::fs::remove_dir_all(dir) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::Fixture;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_removes_existing_and_reports_missing() {
        let fixture = Fixture::new();
        let a = fixture.add_workspace("a", &[]);
        let b = fixture.add_workspace("b", &[("k", Some("v"))]);
        std::fs::create_dir_all(b.join("nested").join("deeper")).unwrap();
        std::fs::write(b.join("nested").join("deeper").join("f"), "x").unwrap();

        let report = prune_workspaces(&fixture.layout, &ids(&["a", "missing", "b"]));

        assert_eq!(report.removed_ids, vec!["a", "b"]);
        assert_eq!(report.removed_count(), 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].id, "missing");
        assert_eq!(report.errors[0].message, "directory not found");
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn test_missing_id_not_in_removed() {
        let fixture = Fixture::new();
        let report = prune_workspaces(&fixture.layout, &ids(&["ghost"]));
        assert!(report.removed_ids.is_empty());
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_traversal_ids_are_rejected_without_touching_disk() {
        let fixture = Fixture::new();
        let report = prune_workspaces(&fixture.layout, &ids(&["..", "../globalStorage", ""]));
        assert_eq!(report.removed_count(), 0);
        assert_eq!(report.errors.len(), 3);
        assert!(fixture.root().join("..").join("globalStorage").is_dir());
        assert!(fixture.root().is_dir());
    }

    #[test]
    fn test_file_with_workspace_name_is_not_removed() {
        let fixture = Fixture::new();
        std::fs::write(fixture.root().join("plainfile"), "x").unwrap();
        let report = prune_workspaces(&fixture.layout, &ids(&["plainfile"]));
        assert_eq!(report.errors[0].message, "directory not found");
        assert!(fixture.root().join("plainfile").exists());
    }

    #[test]
    fn test_duplicate_ids_remove_once() {
        let fixture = Fixture::new();
        fixture.add_workspace("dup", &[]);
        let report = prune_workspaces(&fixture.layout, &ids(&["dup", "dup"]));
        assert_eq!(report.removed_ids, vec!["dup"]);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_forced_removal_tolerates_vanished_tree() {
        let fixture = Fixture::new();
        assert!(remove_dir_forced(&fixture.root().join("already-gone")).is_ok());
    }
}
