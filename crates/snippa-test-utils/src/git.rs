//! Git repository fixtures driven by the `git` CLI.
//!
//! Sync tests need real history: an origin repository that gains commits and
//! a clone that pulls them. Everything here panics on failure; a broken
//! fixture should fail the test loudly, not propagate.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialise a repository with one commit on `main`.
///
/// Configures a throwaway identity and disables commit signing so the
/// fixture works on CI machines with no git setup.
pub fn repo_with_commit(path: &Path) {
    run_git(path, &["init"]);
    run_git(path, &["config", "user.email", "test@test.com"]);
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Snippets")
        .unwrap_or_else(|e| panic!("repo_with_commit: failed to write README.md: {e}"));

    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);
    // Best-effort: older git versions may not support renaming
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Write `file` with `content` and commit it.
pub fn commit_file(path: &Path, file: &str, content: &str, message: &str) {
    fs::write(path.join(file), content)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {file}: {e}"));
    run_git(path, &["add", file]);
    run_git(path, &["commit", "-m", message]);
}

/// Remove `file` from the index and working tree and commit the removal.
pub fn remove_file(path: &Path, file: &str, message: &str) {
    run_git(path, &["rm", file]);
    run_git(path, &["commit", "-m", message]);
}

/// Clone `source` into `target` with a throwaway identity configured.
pub fn clone_to(source: &Path, target: &Path) {
    let parent = target
        .parent()
        .unwrap_or_else(|| panic!("clone_to: target {} has no parent", target.display()));
    fs::create_dir_all(parent)
        .unwrap_or_else(|e| panic!("clone_to: failed to create {}: {e}", parent.display()));

    let output = Command::new("git")
        .args([
            "clone",
            source.to_str().expect("source path is valid UTF-8"),
            target.to_str().expect("target path is valid UTF-8"),
        ])
        .output()
        .unwrap_or_else(|e| panic!("clone_to: failed to run git clone: {e}"));
    if !output.status.success() {
        panic!(
            "clone_to: git clone failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    run_git(target, &["config", "user.email", "test@test.com"]);
    run_git(target, &["config", "user.name", "Test User"]);
}

/// Commit id of HEAD as a hex string.
pub fn head_of(path: &Path) -> String {
    git_stdout(path, &["rev-parse", "HEAD"])
}
