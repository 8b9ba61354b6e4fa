//! Per-request snippet loading
//!
//! At each top-level execution start the host loads the enabled snippets
//! that match the current context. Failures are isolated per file: one
//! broken snippet must never keep the rest from loading.

use serde::Serialize;
use snippa_fs::NormalizedPath;

use crate::record::DEFAULT_CONTEXT;
use crate::registry::RegistryState;
use crate::tags;

/// Which side of the host a request is executing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Public-facing execution.
    Frontend,
    /// Privileged/administrative execution.
    Backend,
}

impl ExecutionContext {
    /// The keyword snippets use in their `Context:` header line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend)
    }
}

/// Executes one snippet file. The production implementation spawns an
/// interpreter; tests substitute an in-memory fake.
pub trait SnippetRunner {
    /// Execute the snippet at `path`. Any error is reduced to a message
    /// string for the report.
    fn run(&mut self, path: &NormalizedPath) -> std::result::Result<(), String>;
}

/// What happened to one enabled snippet during a load pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Executed successfully.
    Loaded,
    /// Execution failed; the pass continued.
    Failed { message: String },
    /// Declared contexts did not include the current one.
    SkippedContext,
    /// Enabled but absent from disk. Not an error.
    SkippedMissing,
}

/// Per-snippet entry in a [`LoadReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub file: String,
    #[serde(flatten)]
    pub status: LoadStatus,
}

/// Explicit per-item results of one load pass, in enabled-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadReport {
    fn push(&mut self, file: &str, status: LoadStatus) {
        self.outcomes.push(LoadOutcome {
            file: file.to_string(),
            status,
        });
    }

    /// Number of snippets that actually executed.
    pub fn loaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == LoadStatus::Loaded)
            .count()
    }

    /// The failed outcomes, if any.
    pub fn failures(&self) -> Vec<&LoadOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, LoadStatus::Failed { .. }))
            .collect()
    }
}

/// Run one load pass over the enabled set.
///
/// Identifiers are visited in enabled-set stored order and executed at most
/// once each. A snippet with no cache entry falls back to the default
/// context (both sides). Missing files are skipped silently; runner
/// failures are recorded and the pass continues.
pub fn load(
    state: &RegistryState,
    snippets_dir: &NormalizedPath,
    context: ExecutionContext,
    runner: &mut dyn SnippetRunner,
) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen: Vec<&str> = Vec::new();

    for file in &state.enabled {
        if seen.contains(&file.as_str()) {
            continue;
        }
        seen.push(file);

        let path = snippets_dir.join(file);
        if !path.is_file() {
            report.push(file, LoadStatus::SkippedMissing);
            continue;
        }

        let contexts = match state.record(file) {
            Some(record) => record.contexts(),
            None => tags::normalize_list(DEFAULT_CONTEXT),
        };
        if !contexts.iter().any(|c| c == context.keyword()) {
            report.push(file, LoadStatus::SkippedContext);
            continue;
        }

        match runner.run(&path) {
            Ok(()) => report.push(file, LoadStatus::Loaded),
            Err(message) => {
                tracing::warn!(file = %file, error = %message, "Snippet failed to load");
                report.push(file, LoadStatus::Failed { message });
            }
        }
    }

    report
}
