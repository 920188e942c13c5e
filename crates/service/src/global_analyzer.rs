//! Breakdown of the global key/value table.
//!
//! One pass over every row. Composer rows are only counted and summed; all
//! other rows are bucketed by coarse type and ranked by size.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::Path;

use state_inspector_core::constants::{
    COMPOSER_DATA_PREFIX, LARGEST_ENTRIES_LIMIT, MIN_SIZE_THRESHOLD_MB, SAMPLE_KEYS_PER_TYPE,
};
use state_inspector_core::{
    GlobalStats, KeyCategory, LargestEntry, bucket_type, bytes_to_mb, format_size,
};
use state_inspector_storage::{KvDatabase, KvTable, StorageError, StorageRow};

#[derive(Default)]
struct TypeBucket {
    count: u64,
    size_bytes: u64,
    samples: Vec<String>,
}

/// Analyze the global database at `path`.
///
/// Never fails: a missing or unreadable database yields all-zero statistics.
pub fn analyze_global(path: &Path) -> GlobalStats {
    match read_global_rows(path) {
        Ok(rows) => compute_global_stats(&rows),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "Global database not found, reporting empty stats");
            GlobalStats::default()
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Global database unreadable, reporting empty stats");
            GlobalStats::default()
        },
    }
}

fn read_global_rows(path: &Path) -> Result<Vec<StorageRow>, StorageError> {
    let db = KvDatabase::open_read_only(path)?;
    let rows = db.query_all(KvTable::Global)?;
    if let Err(e) = db.close() {
        tracing::warn!(path = %path.display(), error = %e, "Failed to close global database");
    }
    Ok(rows)
}

/// Pure aggregation over already-read rows.
pub fn compute_global_stats(rows: &[StorageRow]) -> GlobalStats {
    let mut stats = GlobalStats::default();
    let mut buckets: BTreeMap<&str, TypeBucket> = BTreeMap::new();
    let mut candidates: Vec<(&str, u64)> = Vec::new();

    for row in rows {
        let Some(value) = row.value.as_deref() else {
            continue;
        };
        let size = value.len() as u64;
        stats.total_entries += 1;
        stats.total_size_bytes += size;

        if row.key.starts_with(COMPOSER_DATA_PREFIX) {
            stats.composer_entries += 1;
            stats.composer_size_bytes += size;
            continue;
        }

        stats.other_entries += 1;
        stats.other_size_bytes += size;
        let bucket = buckets.entry(bucket_type(&row.key)).or_default();
        bucket.count += 1;
        bucket.size_bytes += size;
        if bucket.samples.len() < SAMPLE_KEYS_PER_TYPE {
            bucket.samples.push(row.key.clone());
        }
        candidates.push((&row.key, size));
    }

    for (entry_type, bucket) in buckets {
        if bytes_to_mb(bucket.size_bytes) < MIN_SIZE_THRESHOLD_MB {
            continue;
        }
        stats.count_by_type.insert(entry_type.to_owned(), bucket.count);
        stats.size_by_type.insert(entry_type.to_owned(), bucket.size_bytes);
        stats.sample_keys_by_type.insert(entry_type.to_owned(), bucket.samples);
    }

    // stable: equal sizes keep scan order
    candidates.sort_by_key(|&(_, size)| Reverse(size));
    stats.largest_entries = candidates
        .into_iter()
        .take(LARGEST_ENTRIES_LIMIT)
        .map(|(key, size_bytes)| LargestEntry {
            key: key.to_owned(),
            size_bytes,
            size_formatted: format_size(size_bytes),
            entry_type: bucket_type(key).to_owned(),
            category: KeyCategory::classify(key),
        })
        .collect();

    stats.with_formatted_sizes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::Fixture;

    fn row(key: &str, value: Option<String>) -> StorageRow {
        StorageRow { key: key.to_owned(), value }
    }

    fn filled(c: char, n: usize) -> Option<String> {
        Some(std::iter::repeat_n(c, n).collect())
    }

    #[test]
    fn test_threshold_drops_small_buckets() {
        let rows = vec![
            row("composerData:1", filled('x', 50_000)),
            row("foo:1", filled('y', 200_000)),
            row("foo:2", filled('z', 50_000)),
            row("bar:1", filled('w', 1000)),
        ];
        let stats = compute_global_stats(&rows);

        assert_eq!(stats.composer_entries, 1);
        assert_eq!(stats.other_entries, 3);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.composer_size_bytes, 50_000);
        assert_eq!(stats.other_size_bytes, 251_000);
        assert_eq!(stats.total_size_bytes, 301_000);

        assert_eq!(stats.count_by_type.get("foo"), Some(&2));
        assert_eq!(stats.size_by_type.get("foo"), Some(&250_000));
        assert_eq!(stats.sample_keys_by_type["foo"], vec!["foo:1", "foo:2"]);
        assert!(!stats.count_by_type.contains_key("bar"));
        assert!(!stats.size_by_type.contains_key("bar"));
        assert!(!stats.sample_keys_by_type.contains_key("bar"));
        assert!(!stats.count_by_type.contains_key("composerData"));
    }

    #[test]
    fn test_null_values_are_ignored() {
        let rows = vec![row("foo:1", None), row("composerData:1", None), row("foo:2", filled('a', 10))];
        let stats = compute_global_stats(&rows);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.other_entries, 1);
        assert_eq!(stats.composer_entries, 0);
        assert_eq!(stats.total_size_bytes, 10);
        assert_eq!(stats.largest_entries.len(), 1);
    }

    #[test]
    fn test_size_is_utf8_byte_length() {
        let stats = compute_global_stats(&[row("k", Some("é".repeat(10)))]);
        assert_eq!(stats.total_size_bytes, 20);
    }

    #[test]
    fn test_samples_capped_in_scan_order() {
        let rows: Vec<StorageRow> =
            (0..6).map(|i| row(&format!("big:{i}"), filled('q', 30_000))).collect();
        let stats = compute_global_stats(&rows);
        assert_eq!(stats.sample_keys_by_type["big"], vec!["big:0", "big:1", "big:2"]);
        assert_eq!(stats.count_by_type["big"], 6);
    }

    #[test]
    fn test_largest_entries_sorted_truncated_and_stable() {
        let mut rows: Vec<StorageRow> =
            (0..15).map(|i| row(&format!("bubbleId:{i}"), filled('b', 100 + i))).collect();
        rows.push(row("tie:a", filled('t', 500)));
        rows.push(row("tie:b", filled('t', 500)));
        rows.push(row("composerData:huge", filled('c', 10_000)));
        let stats = compute_global_stats(&rows);

        assert_eq!(stats.largest_entries.len(), 10);
        assert!(stats.largest_entries.windows(2).all(|w| w[0].size_bytes >= w[1].size_bytes));
        assert_eq!(stats.largest_entries[0].key, "tie:a");
        assert_eq!(stats.largest_entries[1].key, "tie:b");
        assert_eq!(stats.largest_entries[2].key, "bubbleId:14");
        assert_eq!(stats.largest_entries[2].entry_type, "bubbleId");
        assert_eq!(stats.largest_entries[2].category, KeyCategory::ChatMessage);
        assert!(stats.largest_entries.iter().all(|e| !e.key.starts_with("composerData:")));
    }

    #[test]
    fn test_invariants_hold_for_mixed_rows() {
        let rows: Vec<StorageRow> = (0..40)
            .map(|i| {
                let key = match i % 4 {
                    0 => format!("composerData:{i}"),
                    1 => format!("checkpointId:{i}"),
                    2 => format!("plain{i}"),
                    _ => format!(":odd{i}"),
                };
                row(&key, if i % 7 == 0 { None } else { filled('m', i * 997) })
            })
            .collect();
        let stats = compute_global_stats(&rows);
        assert_eq!(stats.other_entries + stats.composer_entries, stats.total_entries);
        assert_eq!(stats.other_size_bytes + stats.composer_size_bytes, stats.total_size_bytes);
        assert!(stats.largest_entries.len() <= 10);
        for (entry_type, size) in &stats.size_by_type {
            assert!(bytes_to_mb(*size) >= MIN_SIZE_THRESHOLD_MB, "{entry_type} below threshold");
            assert!(stats.count_by_type.contains_key(entry_type));
            assert!(stats.sample_keys_by_type[entry_type].len() <= 3);
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_global_stats(&[]);
        assert_eq!(stats, GlobalStats::default());
    }

    #[test]
    fn test_missing_database_gives_empty_stats() {
        let fixture = Fixture::new();
        assert_eq!(analyze_global(&fixture.layout.global_db()), GlobalStats::default());
    }

    #[test]
    fn test_corrupt_database_gives_empty_stats() {
        let fixture = Fixture::new();
        std::fs::write(fixture.layout.global_db(), b"garbage garbage garbage garbage garbage!").unwrap();
        assert_eq!(analyze_global(&fixture.layout.global_db()), GlobalStats::default());
    }

    #[test]
    fn test_analyze_reads_global_table_and_is_idempotent() {
        let fixture = Fixture::new();
        let big = "v".repeat(120_000);
        fixture.add_global(&[
            ("bubbleId:1", Some(big.as_str())),
            ("composerData:1", Some("{}")),
            ("nullish", None),
        ]);
        let first = analyze_global(&fixture.layout.global_db());
        assert_eq!(first.total_entries, 2);
        assert_eq!(first.count_by_type.get("bubbleId"), Some(&1));
        assert_eq!(first.largest_entries[0].key, "bubbleId:1");
        assert_eq!(first, analyze_global(&fixture.layout.global_db()));
    }
}
