//! The sync engine
//!
//! Three operations, each taking the previous [`RegistryState`] and
//! producing a new one: full discovery (wholesale rescan), incremental
//! update (scoped to an explicit changed-file list), and enabled-set
//! replacement. States are never mutated in place; callers persist the
//! returned state in one atomic write.

use snippa_fs::{NormalizedPath, io};

use crate::metadata;
use crate::record::SnippetRecord;
use crate::registry::RegistryState;
use crate::{Error, Result, tags};

/// Reconciles on-disk snippet files against the persisted registry.
pub struct SyncEngine {
    snippets_dir: NormalizedPath,
    extension: String,
}

impl SyncEngine {
    /// Create an engine over `snippets_dir`, discovering files with the
    /// given extension (no dot).
    pub fn new(snippets_dir: NormalizedPath, extension: impl Into<String>) -> Self {
        Self {
            snippets_dir,
            extension: extension.into(),
        }
    }

    /// The directory this engine scans.
    pub fn snippets_dir(&self) -> &NormalizedPath {
        &self.snippets_dir
    }

    /// The snippet file extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn require_snippets_dir(&self) -> Result<()> {
        if self.snippets_dir.is_dir() {
            Ok(())
        } else {
            Err(Error::SnippetsDirMissing {
                path: self.snippets_dir.to_native(),
            })
        }
    }

    /// Rebuild the cache from a full directory scan.
    ///
    /// Every snippet-extension file is parsed; files without a name header
    /// are skipped. The tag filter is applied, the cache replaced
    /// wholesale, and the enabled set reconciled: entries for vanished
    /// files drop out, newly discovered files are appended enabled (the
    /// opt-out policy). Appended order follows discovery order, which is
    /// whatever the filesystem yields.
    pub fn full_discovery(&self, prev: &RegistryState) -> Result<RegistryState> {
        self.require_snippets_dir()?;

        let mut cache = Vec::new();
        for path in io::list_files_with_extension(&self.snippets_dir, &self.extension)? {
            if let Some(record) = self.parse_snippet(&path) {
                cache.push(record);
            }
        }

        let cache = tags::filter_by_tags(cache, &prev.allowed_tags);
        let enabled = reconcile_enabled(&prev.enabled, &cache);

        Ok(RegistryState {
            cache,
            enabled,
            allowed_tags: prev.allowed_tags.clone(),
        })
    }

    /// Apply an explicit changed-file list to the cache.
    ///
    /// Per changed basename: still on disk and parseable → upsert; on disk
    /// but the header no longer yields a name → keep the last-known-good
    /// entry (a full rescan would drop it); gone from disk → remove. Files
    /// outside the list are untouched.
    /// The tag filter then runs over the whole resulting cache and the
    /// enabled set reconciles exactly as in full discovery.
    pub fn incremental_update(
        &self,
        changed_files: &[String],
        prev: &RegistryState,
    ) -> Result<RegistryState> {
        self.require_snippets_dir()?;

        let mut cache = prev.cache.clone();
        for file in changed_files {
            let path = self.snippets_dir.join(file);
            if path.is_file() {
                if let Some(record) = self.parse_snippet(&path) {
                    match cache.iter_mut().find(|entry| entry.file == *file) {
                        Some(slot) => *slot = record,
                        None => cache.push(record),
                    }
                } else {
                    tracing::warn!(
                        file = %file,
                        "Changed snippet no longer has a name header; keeping cached metadata"
                    );
                }
            } else {
                cache.retain(|entry| entry.file != *file);
            }
        }

        let cache = tags::filter_by_tags(cache, &prev.allowed_tags);
        let enabled = reconcile_enabled(&prev.enabled, &cache);

        Ok(RegistryState {
            cache,
            enabled,
            allowed_tags: prev.allowed_tags.clone(),
        })
    }

    /// Replace the enabled set wholesale with `ids`.
    ///
    /// Duplicates collapse to their first occurrence. No validation against
    /// cache membership: enabling an identifier with no cache entry is
    /// legal and simply has no effect at load time until the file appears.
    pub fn set_enabled(&self, ids: &[String], prev: &RegistryState) -> RegistryState {
        let mut enabled: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !enabled.contains(id) {
                enabled.push(id.clone());
            }
        }

        RegistryState {
            cache: prev.cache.clone(),
            enabled,
            allowed_tags: prev.allowed_tags.clone(),
        }
    }

    fn parse_snippet(&self, path: &NormalizedPath) -> Option<SnippetRecord> {
        let file = path.file_name()?.to_string();
        let content = match io::read_text(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %file, error = %e, "Failed to read snippet file");
                return None;
            }
        };
        let record = metadata::parse_header(&content).into_record(file.clone());
        if record.is_none() {
            tracing::debug!(file = %file, "Skipping file without a snippet name header");
        }
        record
    }
}

/// Reconcile the enabled set against a freshly built cache.
///
/// Intersect-then-append: previously enabled identifiers survive in their
/// stored order if the cache still knows them; cache identifiers not yet
/// enabled are appended, so new arrivals are enabled by default.
fn reconcile_enabled(prev_enabled: &[String], cache: &[SnippetRecord]) -> Vec<String> {
    let mut enabled: Vec<String> = prev_enabled
        .iter()
        .filter(|file| cache.iter().any(|record| &record.file == *file))
        .cloned()
        .collect();

    for record in cache {
        if !enabled.contains(&record.file) {
            enabled.push(record.file.clone());
        }
    }
    enabled
}
