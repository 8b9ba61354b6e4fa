//! Snippet file fixtures with docblock headers.

use std::fs;
use std::path::Path;

/// Render a snippet source file with a docblock header.
///
/// `fields` become `* Key: value` lines inside the block, in order.
pub fn snippet_source(fields: &[(&str, &str)]) -> String {
    let mut out = String::from("<?php\n/**\n");
    for (key, value) in fields {
        out.push_str(&format!(" * {key}: {value}\n"));
    }
    out.push_str(" */\n");
    out
}

/// Write a snippet file whose header carries only a name.
pub fn write_named_snippet(dir: &Path, file: &str, name: &str) {
    write_snippet(dir, file, &[("Snippet", name)]);
}

/// Write a snippet file with an arbitrary header.
pub fn write_snippet(dir: &Path, file: &str, fields: &[(&str, &str)]) {
    fs::write(dir.join(file), snippet_source(fields))
        .unwrap_or_else(|e| panic!("write_snippet: failed to write {file}: {e}"));
}

/// Write a file with no docblock header at all.
pub fn write_headerless_file(dir: &Path, file: &str) {
    fs::write(dir.join(file), "<?php\n// no header here\n")
        .unwrap_or_else(|e| panic!("write_headerless_file: failed to write {file}: {e}"));
}
