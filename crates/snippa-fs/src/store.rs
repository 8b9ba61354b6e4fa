//! Persisted key-value state store

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// A flat key-value store persisted as one JSON document per key.
///
/// This is the host-agnostic stand-in for an options table: `get` with a
/// default for absent keys, `set` overwrites wholesale. Writes are atomic
/// (temp file + rename under an advisory lock), so a document is either the
/// old value or the new value, never a torn mix. There are no transactions
/// and no versioning; a single writer per store root is assumed.
#[derive(Debug, Clone)]
pub struct StateStore {
    root: NormalizedPath,
}

impl StateStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first `set`.
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// The directory documents are stored in.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Read the document for `key`, or return `default` if none exists.
    ///
    /// A document that exists but fails to parse is an error, not the
    /// default.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let path = self.document_path(key)?;
        if !path.exists() {
            return Ok(default);
        }

        let content = io::read_text(&path)?;
        serde_json::from_str(&content).map_err(|e| Error::StateParse {
            key: key.to_string(),
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Write the document for `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.document_path(key)?;
        let content =
            serde_json::to_string_pretty(value).map_err(|e| Error::StateSerialize {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        io::write_text(&path, &content)?;
        tracing::debug!(key = %key, "Persisted state document");
        Ok(())
    }

    /// Whether a document exists for `key`.
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.document_path(key)?.exists())
    }

    fn document_path(&self, key: &str) -> Result<NormalizedPath> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(Error::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(&format!("{key}.json")))
    }
}
