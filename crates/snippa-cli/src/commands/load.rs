//! Load command: execute enabled snippets for one context

use std::path::Path;
use std::process::Command;

use colored::Colorize;

use snippa_core::{ExecutionContext, LoadStatus, RegistryState, SnippetRunner};
use snippa_fs::NormalizedPath;

use crate::context::CliContext;
use crate::error::Result;

/// Runs a snippet by spawning the configured interpreter on its path.
pub struct ProcessRunner {
    interpreter: String,
}

impl ProcessRunner {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl SnippetRunner for ProcessRunner {
    fn run(&mut self, path: &NormalizedPath) -> std::result::Result<(), String> {
        let output = Command::new(&self.interpreter)
            .arg(path.to_native())
            .output()
            .map_err(|e| format!("failed to spawn {}: {}", self.interpreter, e))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            if detail.is_empty() {
                Err(format!("exited with {}", output.status))
            } else {
                Err(format!("exited with {}: {}", output.status, detail))
            }
        }
    }
}

/// Run one load pass and print the per-snippet outcomes.
///
/// Load failures are reported but do not fail the command; one broken
/// snippet must not block the rest.
pub fn run_load(root: &Path, context: ExecutionContext) -> Result<()> {
    let ctx = CliContext::new(root)?;
    let state = RegistryState::load(&ctx.store)?;

    let mut runner = ProcessRunner::new(ctx.config.interpreter.clone());
    let report = snippa_core::load(&state, ctx.engine.snippets_dir(), context, &mut runner);

    for outcome in &report.outcomes {
        match &outcome.status {
            LoadStatus::Loaded => {
                println!("{} {}", "loaded ".green(), outcome.file.cyan());
            }
            LoadStatus::Failed { message } => {
                println!(
                    "{} {}: {}",
                    "failed ".red().bold(),
                    outcome.file.cyan(),
                    message
                );
            }
            LoadStatus::SkippedContext => {
                println!("{} {} (context)", "skipped".dimmed(), outcome.file.dimmed());
            }
            LoadStatus::SkippedMissing => {
                println!("{} {} (missing)", "skipped".dimmed(), outcome.file.dimmed());
            }
        }
    }

    println!();
    println!(
        "{} snippet(s) loaded, {} failed.",
        report.loaded(),
        report.failures().len()
    );
    Ok(())
}
