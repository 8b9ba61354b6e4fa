//! Docblock header parsing
//!
//! A snippet declares its metadata in the first block comment of the file:
//!
//! ```text
//! /**
//!  * Snippet: Checkout tweaks
//!  * Description: Adjusts the checkout flow
//!  * Tags: woocommerce, checkout
//!  * Context: frontend
//!  */
//! ```
//!
//! Only the first `/** ... */` block is scanned; `* Key: value` lines inside
//! it become fields, later duplicates overwriting earlier ones. Anything
//! else in the file is ignored, and a malformed or absent header is never an
//! error — a missing name simply keeps the file out of the registry.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::record::{DEFAULT_CONTEXT, SnippetRecord};

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\s*(\w+):\s*(.+)").expect("header line pattern is valid"));

/// Raw key-value fields from a snippet's docblock header.
#[derive(Debug, Clone, Default)]
pub struct HeaderFields {
    fields: HashMap<String, String>,
}

impl HeaderFields {
    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether the header had no recognized fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn take(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// Build a typed record, applying the admission rule and defaults.
    ///
    /// Returns `None` when the `Snippet:` name line is missing or blank —
    /// the caller's signal to skip the file.
    pub fn into_record(mut self, file: String) -> Option<SnippetRecord> {
        let name = self.take("Snippet").filter(|name| !name.is_empty())?;
        Some(SnippetRecord {
            file,
            name,
            description: self.take("Description"),
            tags: self.take("Tags"),
            required: self.take("Required"),
            secrets: self.take("Secrets"),
            version: self.take("Version"),
            author: self.take("Author"),
            priority: self.take("Priority"),
            context: self
                .take("Context")
                .filter(|context| !context.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
        })
    }
}

/// Scan `content` for the first docblock and collect its fields.
pub fn parse_header(content: &str) -> HeaderFields {
    let mut fields = HashMap::new();
    let mut in_block = false;

    for line in content.lines() {
        if !in_block {
            if line.contains("/**") {
                in_block = true;
            }
            continue;
        }
        if line.contains("*/") {
            break;
        }
        if let Some(caps) = HEADER_LINE.captures(line) {
            fields.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
    }

    HeaderFields { fields }
}
