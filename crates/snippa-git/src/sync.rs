//! Pull and changed-path extraction for sync triggers

use std::path::Path;

use git2::{Oid, Repository};

use crate::{Error, Result};

/// Result of a pull: the head movement plus a human-readable status line.
///
/// The sync triggers diff `old_head..new_head` to find which snippets
/// changed; the message is surfaced to the operator verbatim.
#[derive(Debug, Clone)]
pub struct PullOutcome {
    /// Commit id of HEAD before the pull.
    pub old_head: String,
    /// Commit id of HEAD after the pull.
    pub new_head: String,
    /// Status text, e.g. "Already up to date."
    pub message: String,
}

impl PullOutcome {
    /// Whether the pull moved HEAD at all.
    pub fn is_up_to_date(&self) -> bool {
        self.old_head == self.new_head
    }
}

fn open(dir: &Path) -> Result<Repository> {
    Repository::open(dir).map_err(|_| Error::NotARepository {
        path: dir.to_path_buf(),
    })
}

fn parse_oid(id: &str) -> Result<Oid> {
    Oid::from_str(id).map_err(|_| Error::InvalidCommitId { id: id.to_string() })
}

/// Commit id of the current HEAD.
pub fn head_commit(dir: &Path) -> Result<String> {
    let repo = open(dir)?;
    let commit = repo.head()?.peel_to_commit()?;
    Ok(commit.id().to_string())
}

/// Pull the snippets repository: fetch `origin` and fast-forward the current
/// branch.
///
/// Divergent histories are an error rather than a merge; the snippet
/// repository is treated as a mirror of the remote, never a place where
/// local commits accumulate.
pub fn pull(dir: &Path) -> Result<PullOutcome> {
    let repo = open(dir)?;

    let head = repo.head()?;
    if !head.is_branch() {
        return Err(Error::DetachedHead);
    }
    let branch = head.shorthand().unwrap_or("HEAD").to_string();
    let old_head = head.peel_to_commit()?.id();

    let mut remote = repo
        .find_remote("origin")
        .map_err(|_| Error::RemoteNotFound {
            name: "origin".to_string(),
        })?;

    remote
        .fetch(&[&branch], None, None)
        .map_err(|e| Error::PullFailed {
            message: format!("fetch failed: {}", e.message()),
        })?;

    let fetch_head = repo
        .find_reference("FETCH_HEAD")
        .map_err(|e| Error::PullFailed {
            message: format!("could not find FETCH_HEAD: {}", e.message()),
        })?;
    let fetch_commit = fetch_head.peel_to_commit().map_err(|e| Error::PullFailed {
        message: format!("could not resolve FETCH_HEAD: {}", e.message()),
    })?;

    let (analysis, _) =
        repo.merge_analysis(&[&repo.find_annotated_commit(fetch_commit.id())?])?;

    if analysis.is_up_to_date() {
        return Ok(PullOutcome {
            old_head: old_head.to_string(),
            new_head: old_head.to_string(),
            message: "Already up to date.".to_string(),
        });
    }

    if analysis.is_fast_forward() {
        let refname = format!("refs/heads/{}", branch);
        let mut reference = repo.find_reference(&refname)?;
        reference.set_target(
            fetch_commit.id(),
            &format!("pull: fast-forward to {}", fetch_commit.id()),
        )?;
        repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;

        tracing::debug!(branch = %branch, to = %fetch_commit.id(), "Fast-forwarded snippet repository");

        return Ok(PullOutcome {
            old_head: old_head.to_string(),
            new_head: fetch_commit.id().to_string(),
            message: format!("Fast-forwarded {} to {:.7}.", branch, fetch_commit.id()),
        });
    }

    Err(Error::CannotFastForward {
        message: format!(
            "branch {} has diverged from origin; manual intervention required",
            branch
        ),
    })
}

/// Relative paths touched between two commits.
///
/// Deleted files are reported by their old path, so callers see removals as
/// well as additions and edits. Identical ids yield an empty list without
/// touching the repository.
pub fn changed_paths(dir: &Path, old: &str, new: &str) -> Result<Vec<String>> {
    if old == new {
        return Ok(Vec::new());
    }

    let repo = open(dir)?;
    let old_tree = repo.find_commit(parse_oid(old)?)?.tree()?;
    let new_tree = repo.find_commit(parse_oid(new)?)?.tree()?;

    let diff = repo.diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)?;

    let mut paths = Vec::new();
    for delta in diff.deltas() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path());
        if let Some(p) = path {
            paths.push(p.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(paths)
}
