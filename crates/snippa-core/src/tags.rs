//! Tag allow-list filtering

use crate::record::SnippetRecord;

/// Split a comma-separated field into lowercase trimmed entries, dropping
/// empties.
///
/// The same rule covers the operator's allow-list, a snippet's own tags,
/// and context declarations.
pub fn normalize_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Keep records whose tags intersect the allow-list.
///
/// An empty allow-list disables filtering entirely. Input order is
/// preserved; a record with no tags never matches a non-empty allow-list.
pub fn filter_by_tags(records: Vec<SnippetRecord>, allowed: &[String]) -> Vec<SnippetRecord> {
    if allowed.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            record
                .tag_list()
                .iter()
                .any(|tag| allowed.contains(tag))
        })
        .collect()
}
