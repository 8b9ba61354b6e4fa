//! Setup command: clone the snippet repository and run first discovery

use std::path::Path;

use colored::Colorize;

use crate::context::CliContext;
use crate::error::Result;

/// Clone `url` into the configured snippets directory and discover.
pub fn run_setup(root: &Path, url: &str) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let target = ctx.engine.snippets_dir().to_native();

    println!(
        "{} Cloning {} into {}...",
        "=>".blue().bold(),
        url.cyan(),
        target.display()
    );
    snippa_git::clone_repository(url, &target)?;

    let state = snippa_core::refresh(&ctx.engine, &ctx.store)?;
    println!(
        "{} Repository cloned. {} snippet(s) discovered and enabled.",
        "OK".green().bold(),
        state.cache.len()
    );
    Ok(())
}
