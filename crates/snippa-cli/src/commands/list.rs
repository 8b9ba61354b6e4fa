//! List command: show cached snippets and their enabled state

use std::path::Path;

use colored::Colorize;

use snippa_core::RegistryState;

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Print the cached snippet table, or the raw registry as JSON.
pub fn run_list(root: &Path, json: bool) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&state).map_err(|e| CliError::user(e.to_string()))?
        );
        return Ok(());
    }

    if state.cache.is_empty() {
        println!(
            "No snippets cached. Run {} first.",
            "snippa refresh".cyan()
        );
        return Ok(());
    }

    if !state.allowed_tags.is_empty() {
        println!(
            "Tag allow-list: {}",
            state.allowed_tags.join(", ").yellow()
        );
    }

    for record in &state.cache {
        let marker = if state.is_enabled(&record.file) {
            "on ".green().bold()
        } else {
            "off".dimmed()
        };
        let mut line = format!("[{}] {} ({})", marker, record.name.bold(), record.file.cyan());
        if let Some(version) = &record.version {
            line.push_str(&format!(" v{}", version));
        }
        if let Some(tags) = &record.tags {
            line.push_str(&format!("  [{}]", tags.dimmed()));
        }
        println!("{}", line);
        if let Some(description) = &record.description {
            println!("      {}", description.dimmed());
        }
    }

    println!();
    println!(
        "{} snippet(s), {} enabled.",
        state.cache.len(),
        state.enabled.len()
    );
    Ok(())
}
