//! Status command: overview of the managed snippet checkout

use std::path::Path;

use colored::Colorize;

use snippa_core::RegistryState;

use crate::context::CliContext;
use crate::error::Result;

/// Print directory, repository, registry, and webhook status.
pub fn run_status(root: &Path) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let snippets_dir = ctx.engine.snippets_dir();

    println!("{} Snippa status", "=>".blue().bold());
    println!("   Root:          {}", ctx.root);
    println!("   Snippets dir:  {}", snippets_dir);

    if !snippets_dir.is_dir() {
        println!(
            "   {} Snippets directory is missing. Run {} to clone it.",
            "!".yellow().bold(),
            "snippa setup <url>".cyan()
        );
        return Ok(());
    }

    let is_repo = snippa_git::is_repository(&snippets_dir.to_native());
    println!(
        "   Git repository: {}",
        if is_repo {
            "yes".green().to_string()
        } else {
            "no".yellow().to_string()
        }
    );

    let state = RegistryState::load(&ctx.store)?;
    println!(
        "   Snippets:      {} cached, {} enabled",
        state.cache.len(),
        state.enabled.len()
    );
    if state.allowed_tags.is_empty() {
        println!("   Tag filter:    none");
    } else {
        println!("   Tag filter:    {}", state.allowed_tags.join(", "));
    }

    match snippa_core::last_webhook(&ctx.store)? {
        Some(when) => println!("   Last webhook:  {}", when),
        None => println!("   Last webhook:  never"),
    }

    Ok(())
}
