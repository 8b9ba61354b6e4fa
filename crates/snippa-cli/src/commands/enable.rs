//! Enable/disable command implementations
//!
//! All three paths funnel through the engine's wholesale `set_enabled`,
//! mirroring how the admin form replaces the enabled set in one submit.

use std::path::Path;

use colored::Colorize;

use snippa_core::RegistryState;

use crate::context::CliContext;
use crate::error::Result;

/// Add files to the enabled set, keeping existing entries in place.
pub fn run_enable(root: &Path, files: &[String]) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    let mut ids = state.enabled.clone();
    ids.extend(files.iter().cloned());

    let next = ctx.engine.set_enabled(&ids, &state);
    next.save(&ctx.store)?;

    println!(
        "{} {} snippet(s) enabled.",
        "OK".green().bold(),
        next.enabled.len()
    );
    Ok(())
}

/// Remove files from the enabled set.
pub fn run_disable(root: &Path, files: &[String]) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    let ids: Vec<String> = state
        .enabled
        .iter()
        .filter(|id| !files.contains(id))
        .cloned()
        .collect();

    let next = ctx.engine.set_enabled(&ids, &state);
    next.save(&ctx.store)?;

    println!(
        "{} {} snippet(s) enabled.",
        "OK".green().bold(),
        next.enabled.len()
    );
    Ok(())
}

/// Replace the enabled set wholesale.
pub fn run_set_enabled(root: &Path, files: &[String]) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    let next = ctx.engine.set_enabled(files, &state);
    next.save(&ctx.store)?;

    println!(
        "{} Enabled set replaced: {} snippet(s) enabled.",
        "OK".green().bold(),
        next.enabled.len()
    );
    Ok(())
}
