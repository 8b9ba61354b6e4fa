//! Persisted registry state

use serde::{Deserialize, Serialize};
use snippa_fs::StateStore;

use crate::record::SnippetRecord;
use crate::{Result, tags};

/// Store key the registry document lives under.
pub const REGISTRY_KEY: &str = "registry";

/// The registry: the metadata cache, the enabled set, and the tag
/// allow-list, persisted together.
///
/// Cache and enabled set must never be observable out of step with each
/// other, so they share one store document and commit in a single atomic
/// write. Only the sync engine produces new states; everything else reads.
///
/// `enabled` is subset-intent over the cache's file identifiers, but may
/// transiently hold identifiers with no cache entry (an operator can enable
/// a file before it exists; it stays inert until the file appears).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Parsed snippet records, keyed uniquely by `file`.
    #[serde(default)]
    pub cache: Vec<SnippetRecord>,
    /// Enabled file identifiers, in stored order.
    #[serde(default)]
    pub enabled: Vec<String>,
    /// Lowercase trimmed tag allow-list; empty means no filtering.
    #[serde(default)]
    pub allowed_tags: Vec<String>,
}

impl RegistryState {
    /// Load the persisted state, or the empty default if none exists yet.
    pub fn load(store: &StateStore) -> Result<Self> {
        Ok(store.get(REGISTRY_KEY, Self::default())?)
    }

    /// Persist this state, replacing the previous document.
    pub fn save(&self, store: &StateStore) -> Result<()> {
        Ok(store.set(REGISTRY_KEY, self)?)
    }

    /// Look up a cached record by file identifier.
    pub fn record(&self, file: &str) -> Option<&SnippetRecord> {
        self.cache.iter().find(|record| record.file == file)
    }

    /// Whether a file identifier is in the enabled set.
    pub fn is_enabled(&self, file: &str) -> bool {
        self.enabled.iter().any(|entry| entry == file)
    }

    /// File identifiers of all cached records, in cache order.
    pub fn file_ids(&self) -> Vec<&str> {
        self.cache.iter().map(|record| record.file.as_str()).collect()
    }

    /// Replace the allow-list with a normalized version of `raw`.
    ///
    /// Takes effect at the next sync pass; already-cached records are not
    /// retroactively re-filtered here.
    pub fn with_allowed_tags(&self, raw: &str) -> Self {
        Self {
            cache: self.cache.clone(),
            enabled: self.enabled.clone(),
            allowed_tags: tags::normalize_list(raw),
        }
    }
}
