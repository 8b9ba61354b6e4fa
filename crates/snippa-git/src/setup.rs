//! Initial clone of the snippet repository

use std::fs;
use std::path::Path;

use git2::Repository;

use crate::{Error, Result};

/// Clone the snippet repository into `target`.
///
/// Refuses to clone over an existing non-empty directory.
pub fn clone_repository(url: &str, target: &Path) -> Result<()> {
    if target.exists() {
        let occupied = fs::read_dir(target)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        if occupied {
            return Err(Error::CloneTargetNotEmpty {
                path: target.to_path_buf(),
            });
        }
    }

    Repository::clone(url, target).map_err(|e| Error::CloneFailed {
        message: e.message().to_string(),
    })?;

    tracing::debug!(url = %url, target = %target.display(), "Cloned snippet repository");
    Ok(())
}

/// Whether `dir` is (inside) a working git repository.
pub fn is_repository(dir: &Path) -> bool {
    Repository::open(dir).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_dir_is_not_a_repository() {
        let temp = TempDir::new().unwrap();
        assert!(!is_repository(temp.path()));
    }

    #[test]
    fn initialized_dir_is_a_repository() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        assert!(is_repository(temp.path()));
    }

    #[test]
    fn clone_refuses_non_empty_target() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("occupied.txt"), "x").unwrap();

        let result = clone_repository("https://example.invalid/repo.git", temp.path());
        assert!(matches!(result, Err(Error::CloneTargetNotEmpty { .. })));
    }

    #[test]
    fn clone_from_local_path_works() {
        let source = TempDir::new().unwrap();
        snippa_test_utils::git::repo_with_commit(source.path());

        let target = TempDir::new().unwrap();
        let dest = target.path().join("snippets");
        clone_repository(source.path().to_str().unwrap(), &dest).unwrap();

        assert!(is_repository(&dest));
        assert!(dest.join("README.md").exists());
    }
}
