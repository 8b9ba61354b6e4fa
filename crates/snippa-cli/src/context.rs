//! Shared command context

use std::path::Path;

use snippa_core::{Config, SyncEngine};
use snippa_fs::{NormalizedPath, StateStore};

use crate::error::Result;

/// Everything a command needs, resolved once from the managed root.
pub struct CliContext {
    pub root: NormalizedPath,
    pub config: Config,
    pub engine: SyncEngine,
    pub store: StateStore,
}

impl CliContext {
    /// Load the config at `root` and build the engine and store from it.
    pub fn new(root: &Path) -> Result<Self> {
        let root = NormalizedPath::new(root);
        let config = Config::load(&root)?;
        let engine = SyncEngine::new(config.snippets_path(&root), config.extension.clone());
        let store = StateStore::new(config.state_path(&root));

        Ok(Self {
            root,
            config,
            engine,
            store,
        })
    }
}
