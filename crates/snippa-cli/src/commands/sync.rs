//! Refresh, pull, and webhook command implementations
//!
//! All three are thin adapters over the consolidated trigger functions in
//! snippa-core; they differ only in reporting.

use std::path::Path;

use colored::Colorize;

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Rescan the snippets directory and rebuild the registry.
pub fn run_refresh(root: &Path) -> Result<()> {
    let ctx = CliContext::new(root)?;

    println!("{} Refreshing snippet list...", "=>".blue().bold());
    let state = snippa_core::refresh(&ctx.engine, &ctx.store)?;

    println!(
        "{} {} snippet(s) cached, {} enabled.",
        "OK".green().bold(),
        state.cache.len(),
        state.enabled.len()
    );
    Ok(())
}

/// Pull the snippet repository and apply the diff to the registry.
pub fn run_pull(root: &Path) -> Result<()> {
    let ctx = CliContext::new(root)?;

    println!("{} Pulling snippet repository...", "=>".blue().bold());
    let outcome = snippa_core::git_sync(&ctx.engine, &ctx.store)?;

    println!("{} {}", "OK".green().bold(), outcome.pull_message);
    if outcome.changed_files.is_empty() {
        println!("   No snippet changes.");
    } else {
        println!("   Changed snippets:");
        for file in &outcome.changed_files {
            println!("   {} {}", "-".yellow(), file.cyan());
        }
    }
    println!(
        "   {} snippet(s) cached, {} enabled.",
        outcome.state.cache.len(),
        outcome.state.enabled.len()
    );
    Ok(())
}

/// Run the webhook trigger and print its transport response as JSON.
///
/// The JSON goes to stdout for whatever is driving the endpoint; a failed
/// sync also exits non-zero so scripts can tell.
pub fn run_webhook(root: &Path) -> Result<()> {
    let ctx = CliContext::new(root)?;

    let response = snippa_core::webhook(&ctx.engine, &ctx.store)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).map_err(|e| CliError::user(e.to_string()))?
    );

    if response.success {
        Ok(())
    } else {
        Err(CliError::user("webhook sync failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippa_test_utils::{git, snippets};
    use tempfile::TempDir;

    fn root_with_clone() -> (TempDir, TempDir) {
        let origin = TempDir::new().unwrap();
        git::repo_with_commit(origin.path());
        git::commit_file(
            origin.path(),
            "first.php",
            &snippets::snippet_source(&[("Snippet", "First")]),
            "Add first",
        );

        let root = TempDir::new().unwrap();
        git::clone_to(origin.path(), &root.path().join("snippets"));
        (origin, root)
    }

    #[test]
    fn refresh_populates_the_registry() {
        let (_origin, root) = root_with_clone();
        run_refresh(root.path()).unwrap();

        let ctx = CliContext::new(root.path()).unwrap();
        let state = snippa_core::RegistryState::load(&ctx.store).unwrap();
        assert_eq!(state.file_ids(), vec!["first.php"]);
    }

    #[test]
    fn refresh_fails_without_snippets_dir() {
        let root = TempDir::new().unwrap();
        assert!(run_refresh(root.path()).is_err());
    }

    #[test]
    fn pull_applies_upstream_changes() {
        let (origin, root) = root_with_clone();
        run_refresh(root.path()).unwrap();

        git::commit_file(
            origin.path(),
            "second.php",
            &snippets::snippet_source(&[("Snippet", "Second")]),
            "Add second",
        );

        run_pull(root.path()).unwrap();

        let ctx = CliContext::new(root.path()).unwrap();
        let state = snippa_core::RegistryState::load(&ctx.store).unwrap();
        assert!(state.is_enabled("second.php"));
    }

    #[test]
    fn webhook_records_last_trigger_time() {
        let (_origin, root) = root_with_clone();
        run_webhook(root.path()).unwrap();

        let ctx = CliContext::new(root.path()).unwrap();
        assert!(snippa_core::last_webhook(&ctx.store).unwrap().is_some());
    }

    #[test]
    fn webhook_on_missing_dir_exits_nonzero() {
        let root = TempDir::new().unwrap();
        assert!(run_webhook(root.path()).is_err());
    }
}
