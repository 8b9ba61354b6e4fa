//! Snippa configuration
//!
//! Loaded from `snippa.toml` at the managed root. Every field has a
//! default, and a missing file means "all defaults", so a fresh checkout
//! works with no configuration at all.

use serde::{Deserialize, Serialize};
use snippa_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// The canonical configuration filename.
pub const CONFIG_FILENAME: &str = "snippa.toml";

/// Workspace configuration for Snippa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the snippet checkout, relative to the root unless
    /// absolute.
    pub snippets_dir: String,
    /// Snippet file extension, without the dot.
    pub extension: String,
    /// Directory for persisted state documents.
    pub state_dir: String,
    /// Interpreter command the loader spawns per snippet.
    pub interpreter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snippets_dir: "snippets".to_string(),
            extension: "php".to_string(),
            state_dir: ".snippa".to_string(),
            interpreter: "php".to_string(),
        }
    }
}

impl Config {
    /// Load `snippa.toml` from `root`, or defaults when absent.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = io::read_text(&path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// The snippets directory resolved against `root`.
    pub fn snippets_path(&self, root: &NormalizedPath) -> NormalizedPath {
        resolve(root, &self.snippets_dir)
    }

    /// The state directory resolved against `root`.
    pub fn state_path(&self, root: &NormalizedPath) -> NormalizedPath {
        resolve(root, &self.state_dir)
    }
}

fn resolve(root: &NormalizedPath, value: &str) -> NormalizedPath {
    if std::path::Path::new(value).is_absolute() {
        NormalizedPath::new(value)
    } else {
        root.join(value)
    }
}
