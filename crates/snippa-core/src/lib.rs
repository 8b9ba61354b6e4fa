//! Core snippet sync engine for Snippa
//!
//! Snippets are metadata-bearing code files in a git-backed directory. This
//! crate owns the reconciliation of those files against persisted state: the
//! metadata parser, the tag filter, the registry, the sync engine with its
//! three operations (full discovery, incremental update, enabled-set edits),
//! the per-request loader, and the consolidated sync triggers.

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod record;
pub mod registry;
pub mod tags;
pub mod triggers;

pub use config::{CONFIG_FILENAME, Config};
pub use engine::SyncEngine;
pub use error::{Error, Result};
pub use loader::{ExecutionContext, LoadOutcome, LoadReport, LoadStatus, SnippetRunner, load};
pub use record::{DEFAULT_CONTEXT, SnippetRecord};
pub use registry::{REGISTRY_KEY, RegistryState};
pub use triggers::{
    GitSyncOutcome, LAST_WEBHOOK_KEY, WebhookResponse, git_sync, last_webhook, refresh, webhook,
};
