//! Tag allow-list command

use std::path::Path;

use colored::Colorize;

use snippa_core::RegistryState;

use crate::context::CliContext;
use crate::error::Result;

/// Show the allow-list, or replace it when a value is given.
pub fn run_tags(root: &Path, value: Option<&str>) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    match value {
        None => {
            if state.allowed_tags.is_empty() {
                println!("No tag filtering (all snippets pass).");
            } else {
                println!("Allowed tags: {}", state.allowed_tags.join(", ").yellow());
            }
        }
        Some(raw) => {
            let next = state.with_allowed_tags(raw);
            next.save(&ctx.store)?;
            if next.allowed_tags.is_empty() {
                println!("{} Tag filtering cleared.", "OK".green().bold());
            } else {
                println!(
                    "{} Allowed tags set to: {}",
                    "OK".green().bold(),
                    next.allowed_tags.join(", ").yellow()
                );
            }
            println!(
                "Takes effect on the next {} or {}.",
                "snippa refresh".cyan(),
                "snippa pull".cyan()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippa_fs::{NormalizedPath, StateStore};
    use tempfile::TempDir;

    #[test]
    fn setting_tags_normalizes_and_persists() {
        let root = TempDir::new().unwrap();
        run_tags(root.path(), Some(" Beta , ALPHA ")).unwrap();

        let store = StateStore::new(NormalizedPath::new(root.path().join(".snippa")));
        let state = RegistryState::load(&store).unwrap();
        assert_eq!(state.allowed_tags, vec!["beta", "alpha"]);
    }

    #[test]
    fn setting_empty_string_clears_the_list() {
        let root = TempDir::new().unwrap();
        run_tags(root.path(), Some("a,b")).unwrap();
        run_tags(root.path(), Some("")).unwrap();

        let store = StateStore::new(NormalizedPath::new(root.path().join(".snippa")));
        let state = RegistryState::load(&store).unwrap();
        assert!(state.allowed_tags.is_empty());
    }

    #[test]
    fn showing_tags_never_writes() {
        let root = TempDir::new().unwrap();
        run_tags(root.path(), None).unwrap();

        let store = StateStore::new(NormalizedPath::new(root.path().join(".snippa")));
        assert!(!store.contains("registry").unwrap());
    }
}
