//! Sync trigger entry points
//!
//! Manual pull and webhook both reduce to the same pull → diff → reconcile
//! pass; they differ only in how the result is reported. The shared path
//! lives here so the two can never drift apart.

use serde::Serialize;
use snippa_fs::StateStore;

use crate::engine::SyncEngine;
use crate::registry::RegistryState;
use crate::{Error, Result};

/// Store key recording when the webhook last fired.
pub const LAST_WEBHOOK_KEY: &str = "last_webhook";

/// Result of a pull-driven sync.
#[derive(Debug, Clone)]
pub struct GitSyncOutcome {
    /// Human-readable pull status.
    pub pull_message: String,
    /// Snippet basenames that changed in the pull, after extension
    /// filtering.
    pub changed_files: Vec<String>,
    /// The persisted post-sync state.
    pub state: RegistryState,
}

/// Response shape handed back to whatever transport fronts the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Manual "refresh snippet list": full discovery, persisted.
pub fn refresh(engine: &SyncEngine, store: &StateStore) -> Result<RegistryState> {
    let prev = RegistryState::load(store)?;
    let next = engine.full_discovery(&prev)?;
    next.save(store)?;
    Ok(next)
}

/// Pull the snippet repository and apply the resulting diff.
///
/// The pre-pull head is recorded first; the diff old→new is reduced to
/// snippet basenames (paths with the engine's extension) and fed to the
/// incremental update. A failed pull aborts before any registry read or
/// write, leaving persisted state untouched.
pub fn git_sync(engine: &SyncEngine, store: &StateStore) -> Result<GitSyncOutcome> {
    if !engine.snippets_dir().is_dir() {
        return Err(Error::SnippetsDirMissing {
            path: engine.snippets_dir().to_native(),
        });
    }

    let dir = engine.snippets_dir().to_native();
    let pull = snippa_git::pull(&dir)?;
    let paths = snippa_git::changed_paths(&dir, &pull.old_head, &pull.new_head)?;

    let suffix = format!(".{}", engine.extension());
    let changed_files: Vec<String> = paths
        .iter()
        .filter(|path| path.ends_with(&suffix))
        .filter_map(|path| path.rsplit('/').next())
        .map(String::from)
        .collect();

    tracing::debug!(
        pull = %pull.message,
        changed = changed_files.len(),
        "Applying pulled changes to the registry"
    );

    let prev = RegistryState::load(store)?;
    let state = engine.incremental_update(&changed_files, &prev)?;
    state.save(store)?;

    Ok(GitSyncOutcome {
        pull_message: pull.message,
        changed_files,
        state,
    })
}

/// Remote-initiated sync: record the trigger time, run the shared pull
/// path, and shape the result for the transport.
///
/// Sync failures (missing directory, git trouble) become an unsuccessful
/// response rather than an error; only store failures propagate.
pub fn webhook(engine: &SyncEngine, store: &StateStore) -> Result<WebhookResponse> {
    store.set(LAST_WEBHOOK_KEY, &chrono::Utc::now().to_rfc3339())?;

    match git_sync(engine, store) {
        Ok(outcome) => Ok(WebhookResponse {
            success: true,
            changed_files: Some(outcome.changed_files),
            error: None,
        }),
        Err(e @ (Error::SnippetsDirMissing { .. } | Error::Git(_))) => Ok(WebhookResponse {
            success: false,
            changed_files: None,
            error: Some(e.to_string()),
        }),
        Err(e) => Err(e),
    }
}

/// When the webhook last fired, if ever.
pub fn last_webhook(store: &StateStore) -> Result<Option<String>> {
    Ok(store.get(LAST_WEBHOOK_KEY, None)?)
}
