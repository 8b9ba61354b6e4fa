//! The snippet record type

use serde::{Deserialize, Serialize};

use crate::tags;

/// Context value assumed when a snippet header declares none.
pub const DEFAULT_CONTEXT: &str = "frontend,backend";

/// Parsed metadata for one snippet file.
///
/// `file` (the basename) is the identity: the registry cache is keyed by it,
/// and the enabled set stores it. Everything else comes from the docblock
/// header. `tags`, `priority`, and `context` keep the raw header strings;
/// normalization happens where the value is consumed so the admin surface
/// can show exactly what the author wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    /// Basename of the snippet file, unique within the snippets directory.
    pub file: String,
    /// Display name from the `Snippet:` header line. Never empty: files
    /// without a name are not admitted to the registry.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw comma-separated tag string as written in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Raw priority string; never interpreted numerically here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Raw context declaration, defaulted to [`DEFAULT_CONTEXT`] at parse
    /// time when the header omits it.
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

impl SnippetRecord {
    /// The snippet's declared contexts, normalized.
    pub fn contexts(&self) -> Vec<String> {
        tags::normalize_list(&self.context)
    }

    /// The snippet's own tags, normalized. Empty when no tags are declared.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(tags::normalize_list)
            .unwrap_or_default()
    }
}
